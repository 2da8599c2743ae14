//! Generator module - writes rendered pages and static assets to disk

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::components::RenderContext;
use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::pages::{all_pages, Page};
use crate::Site;

/// Static export of the site
pub struct Generator<'a> {
    site: &'a Site,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Write every page and copy static assets. Returns the written page files.
    pub fn generate(&self, posts: &[PostSummary]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_static_assets()?;

        let ctx = RenderContext::new(&self.site.config, posts);
        let mut written = Vec::new();

        for page in all_pages() {
            let dest = output_path(&self.site.public_dir, page.route());
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, page.render_document(&ctx).into_string())?;
            tracing::debug!("Generated {} -> {:?}", page.route(), dest);
            written.push(dest);
        }

        Ok(written)
    }

    /// Copy the static directory (images, stylesheets) into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            tracing::debug!("No static directory at {:?}", static_dir);
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}

/// Render the full document for a route, if a page serves it
pub fn render_route(config: &SiteConfig, posts: &[PostSummary], route: &str) -> Option<String> {
    let route = normalize_route(route);
    let ctx = RenderContext::new(config, posts);
    all_pages()
        .into_iter()
        .find(|page| page.route() == route)
        .map(|page| page.render_document(&ctx).into_string())
}

/// `/blog/`, `/blog/index.html` and `/blog` all name the same route
pub fn normalize_route(route: &str) -> String {
    let route = match route.strip_suffix("index.html") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
        _ => route,
    };
    let route = route.strip_suffix('/').unwrap_or(route);
    if route.is_empty() {
        "/".to_string()
    } else if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{}", route)
    }
}

/// File a route is written to: `/` -> `index.html`, `/blog` -> `blog/index.html`
fn output_path(public_dir: &Path, route: &str) -> PathBuf {
    let route = route.trim_matches('/');
    if route.is_empty() {
        public_dir.join("index.html")
    } else {
        public_dir.join(route).join("index.html")
    }
}
