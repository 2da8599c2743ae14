//! Document shell around a page body

use maud::{html, Markup, DOCTYPE};

use crate::config::SiteConfig;
use crate::helpers::{full_url_for, meta_generator, meta_name, open_graph, url_for};
use crate::pages::{BlogIndexPage, HomePage, Metadata, Page};

const NAV_CLASS: &str =
    "flex flex-row items-start relative px-0 pb-0 fade md:overflow-auto scroll-pr-6 md:relative";

const NAV_LINK_CLASS: &str = "transition-all hover:text-neutral-800 dark:hover:text-neutral-200 \
                              flex align-middle relative py-1 px-2 m-1";

/// Wrap a page body in a full HTML document
///
/// The document title is `"<page title> | <site title>"` when the page
/// exposes metadata, otherwise the site title alone. The description falls
/// back to the site description.
pub fn layout(
    config: &SiteConfig,
    metadata: Option<&Metadata>,
    route: &str,
    body: Markup,
) -> Markup {
    let title = match metadata {
        Some(meta) if !meta.title.is_empty() => format!("{} | {}", meta.title, config.title),
        _ => config.title.clone(),
    };
    let description = metadata
        .map(|m| m.description.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or(&config.description);
    let og_title = metadata.map(|m| m.title.as_str()).unwrap_or(&config.title);

    html! {
        (DOCTYPE)
        html lang=(config.language) class="text-black bg-white dark:text-white dark:bg-black" {
            head {
                meta charset="utf-8";
                (meta_name("viewport", "width=device-width, initial-scale=1"))
                title { (title) }
                (meta_name("description", description))
                (open_graph(og_title, description, &full_url_for(config, route), &config.title))
                (meta_generator())
            }
            body class="antialiased max-w-xl mx-4 mt-8 lg:mx-auto" {
                main class="flex-auto min-w-0 mt-6 flex flex-col px-2 md:px-0" {
                    (navbar(config))
                    (body)
                    (footer(config))
                }
            }
        }
    }
}

/// Site navigation: home and blog
pub fn navbar(config: &SiteConfig) -> Markup {
    let items = [(HomePage.route(), "home"), (BlogIndexPage.route(), "blog")];

    html! {
        aside class="-ml-[8px] mb-16 tracking-tight" {
            nav id="nav" class=(NAV_CLASS) {
                div class="flex flex-row space-x-0 pr-10" {
                    @for (path, label) in items {
                        a href=(url_for(config, path)) class=(NAV_LINK_CLASS) { (label) }
                    }
                }
            }
        }
    }
}

fn footer(config: &SiteConfig) -> Markup {
    html! {
        footer class="mb-16" {
            p class="mt-8 text-neutral-600 dark:text-neutral-300" {
                "© " (config.author)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_metadata() {
        let config = SiteConfig::default();
        let meta = Metadata::new("Blog", "Read my blog.");
        let html = layout(&config, Some(&meta), "/blog", html! { "body" }).into_string();

        assert!(html.contains("<title>Blog | Spencer Wilson</title>"));
        assert!(html.contains(r#"<meta name="description" content="Read my blog.">"#));
        assert!(html.contains(r#"<meta property="og:title" content="Blog">"#));
        assert!(html.contains(r#"content="http://localhost:3000/blog""#));
    }

    #[test]
    fn test_title_without_metadata() {
        let config = SiteConfig::default();
        let html = layout(&config, None, "/", html! { "body" }).into_string();
        assert!(html.contains("<title>Spencer Wilson</title>"));
        assert!(html.contains(r#"<meta name="description" content="This is my portfolio.">"#));
    }

    #[test]
    fn test_document_shape() {
        let config = SiteConfig::default();
        let html = layout(&config, None, "/", html! { "hello" }).into_string();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\""));
        assert!(html.ends_with("</footer></main></body></html>"));
        assert!(html.contains(r#"<a href="/blog" "#));
        assert!(html.contains("hello"));
        assert!(html.contains("© Spencer Wilson"));
    }
}
