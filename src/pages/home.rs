//! Home page: biography and recent posts

use maud::{html, Markup};

use crate::components::{blog_posts, RenderContext};

use super::Page;

pub const NAME: &str = "Spencer Wilson";

pub const BIOGRAPHY: &str = "I'm a Data Scientist and Software Engineer. I graduated in April 2025 \
    from BYU with a Bachelor's of Statistics. I'm passionate about machine learning, big data, \
    and software development. I'm always trying to learn more and try new things. This portfolio \
    is a showcase of a few of the projects I've worked on and things I'm excited about!";

/// Served as-is from the static directory, never prefixed with the site root
const HERO_IMAGE: &str = "/times-wide.png";

const HEADING_CLASS: &str =
    "mb-2 mt-8 text-2xl font-semibold tracking-tighter text-[#4b7d08] dark:text-[#72a336]";

pub struct HomePage;

impl Page for HomePage {
    fn route(&self) -> &'static str {
        "/"
    }

    fn render(&self, ctx: &RenderContext) -> Markup {
        html! {
            section {
                img src=(HERO_IMAGE) class="mb-8";
                h1 class=(HEADING_CLASS) {
                    (NAME)
                }
                p class="mb-4" {
                    (BIOGRAPHY)
                }
                div class="my-8" {
                    (blog_posts(ctx))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::PostSummary;
    use chrono::NaiveDate;

    fn posts() -> Vec<PostSummary> {
        let date = |d| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();
        vec![
            PostSummary::new("vim", "Embracing Vim", date(9)),
            PostSummary::new("tabs", "Spaces vs. Tabs", date(8)),
        ]
    }

    #[test]
    fn test_structure() {
        let config = SiteConfig::default();
        let posts = posts();
        let html = HomePage.render(&RenderContext::new(&config, &posts)).into_string();

        assert_eq!(html.matches("<img ").count(), 1);
        assert!(html.starts_with(r#"<section><img src="/times-wide.png" class="mb-8">"#));

        assert_eq!(html.matches("<h1 ").count(), 1);
        assert!(html.contains(">Spencer Wilson</h1>"));

        let bio = format!(r#"<p class="mb-4">{}</p>"#, BIOGRAPHY);
        assert_eq!(html.matches(bio.as_str()).count(), 1);

        // one listing: each post appears exactly once, inside the my-8 wrapper
        assert_eq!(html.matches(r#"href="/blog/vim""#).count(), 1);
        assert_eq!(html.matches(r#"href="/blog/tabs""#).count(), 1);
        assert!(html.ends_with("</a></div></div></section>"));
    }

    #[test]
    fn test_hero_image_ignores_root() {
        let mut config = SiteConfig::default();
        config.root = "/portfolio/".to_string();
        let html = HomePage.render(&RenderContext::new(&config, &[])).into_string();
        assert!(html.contains(r#"<img src="/times-wide.png" class="mb-8">"#));
    }

    #[test]
    fn test_structure_with_no_posts() {
        let config = SiteConfig::default();
        let html = HomePage.render(&RenderContext::new(&config, &[])).into_string();
        assert_eq!(html.matches("<img ").count(), 1);
        assert_eq!(html.matches("<h1 ").count(), 1);
        assert!(html.ends_with(r#"<div class="my-8"><div></div></div></section>"#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = SiteConfig::default();
        let posts = posts();
        let ctx = RenderContext::new(&config, &posts);
        assert_eq!(
            HomePage.render(&ctx).into_string(),
            HomePage.render(&ctx).into_string()
        );
        assert_eq!(
            HomePage.render_document(&ctx).into_string(),
            HomePage.render_document(&ctx).into_string()
        );
    }

    #[test]
    fn test_no_metadata() {
        assert_eq!(HomePage.metadata(), None);
        assert_eq!(HomePage.route(), "/");
    }
}
