//! HTML helper functions

use maud::{html, Markup};

/// Generate a `<meta name=.. content=..>` element
pub fn meta_name(name: &str, content: &str) -> Markup {
    html! {
        meta name=(name) content=(content);
    }
}

/// Generate Open Graph meta elements
pub fn open_graph(title: &str, description: &str, url: &str, site_name: &str) -> Markup {
    html! {
        meta property="og:type" content="website";
        meta property="og:title" content=(title);
        meta property="og:url" content=(url);
        meta property="og:site_name" content=(site_name);
        @if !description.is_empty() {
            meta property="og:description" content=(description);
        }
    }
}

/// Generate meta generator element
pub fn meta_generator() -> Markup {
    meta_name(
        "generator",
        &format!("portfolio-rs {}", env!("CARGO_PKG_VERSION")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_name_is_escaped() {
        assert_eq!(
            meta_name("description", r#"Say "hi" & <bye>"#).into_string(),
            r#"<meta name="description" content="Say &quot;hi&quot; &amp; &lt;bye&gt;">"#
        );
    }

    #[test]
    fn test_open_graph_skips_empty_description() {
        let tags = open_graph("Blog", "", "http://x/blog", "Site").into_string();
        assert_eq!(tags.matches("<meta ").count(), 4);
        assert!(!tags.contains("og:description"));

        let tags = open_graph("Blog", "Read my blog.", "http://x/blog", "Site").into_string();
        assert_eq!(tags.matches("<meta ").count(), 5);
        assert!(tags.contains(r#"<meta property="og:description" content="Read my blog.">"#));
    }

    #[test]
    fn test_meta_generator() {
        assert!(meta_generator()
            .into_string()
            .starts_with(r#"<meta name="generator" content="portfolio-rs "#));
    }
}
