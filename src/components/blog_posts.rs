//! The post listing shared by the home page and the blog index

use maud::{html, Markup};

use crate::content::PostSummary;
use crate::helpers::{date_iso, format_date, post_url};

use super::RenderContext;

/// Render every post in the context, newest first
pub fn blog_posts(ctx: &RenderContext) -> Markup {
    let mut posts = ctx.posts.to_vec();
    posts.sort_by(PostSummary::newest_first);

    html! {
        div {
            @for post in &posts {
                a class="flex flex-col space-y-1 mb-4" href=(post_url(ctx.config, &post.slug)) {
                    div class="w-full flex flex-col md:flex-row space-x-0 md:space-x-2" {
                        p class="text-neutral-600 dark:text-neutral-400 w-[100px] tabular-nums" {
                            time datetime=(date_iso(&post.published_at)) {
                                (format_date(&post.published_at, &ctx.config.date_format))
                            }
                        }
                        p class="text-neutral-900 dark:text-neutral-100 tracking-tight" {
                            (post.title)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::NaiveDate;

    fn post(slug: &str, title: &str, y: i32, m: u32, d: u32) -> PostSummary {
        PostSummary::new(slug, title, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_newest_first_with_links() {
        let config = SiteConfig::default();
        let posts = vec![
            post("static-typing", "The Power of Static Typing", 2024, 4, 7),
            post("vim", "Embracing Vim", 2024, 4, 9),
        ];
        let html = blog_posts(&RenderContext::new(&config, &posts)).into_string();

        assert_eq!(html.matches("<a ").count(), 2);
        let vim = html.find(r#"href="/blog/vim""#).unwrap();
        let typing = html.find(r#"href="/blog/static-typing""#).unwrap();
        assert!(vim < typing);
        assert!(html.contains(r#"<time datetime="2024-04-09">April 9, 2024</time></p>"#));
        assert!(html.contains(r#"tracking-tight">Embracing Vim</p>"#));
    }

    #[test]
    fn test_root_prefix_applies_to_links() {
        let mut config = SiteConfig::default();
        config.root = "/portfolio/".to_string();
        let posts = vec![post("vim", "Vim", 2024, 4, 9)];
        let html = blog_posts(&RenderContext::new(&config, &posts)).into_string();
        assert!(html.contains(r#"href="/portfolio/blog/vim""#));
    }

    #[test]
    fn test_empty_listing() {
        let config = SiteConfig::default();
        let html = blog_posts(&RenderContext::new(&config, &[])).into_string();
        assert_eq!(html, "<div></div>");
    }

    #[test]
    fn test_titles_are_escaped() {
        let config = SiteConfig::default();
        let posts = vec![post("tags", "Why <div> soup?", 2024, 1, 1)];
        let html = blog_posts(&RenderContext::new(&config, &posts)).into_string();
        assert!(html.contains("Why &lt;div&gt; soup?"));
        assert!(html.contains(r#"<time datetime="2024-01-01">January 1, 2024</time>"#));
    }
}
