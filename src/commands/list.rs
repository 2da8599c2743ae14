//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::PostSummary;
use crate::pages::all_pages;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_listing(site, content_type, &mut stdout)
}

fn write_listing(site: &Site, content_type: &str, out: &mut impl Write) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let mut posts = site.posts()?;
            posts.sort_by(PostSummary::newest_first);
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                )?;
            }
        }
        "page" | "pages" | "route" | "routes" => {
            let pages = all_pages();
            writeln!(out, "Pages ({}):", pages.len())?;
            for page in pages {
                let title = page
                    .metadata()
                    .map(|m| m.title)
                    .unwrap_or_else(|| site.config.title.clone());
                writeln!(out, "  {} - {}", page.route(), title)?;
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, page", content_type);
        }
    }

    Ok(())
}
