//! Shared components used by the pages

mod blog_posts;
mod layout;

pub use blog_posts::blog_posts;
pub use layout::{layout, navbar};

use crate::config::SiteConfig;
use crate::content::PostSummary;

/// Everything a page or component may read while rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub posts: &'a [PostSummary],
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, posts: &'a [PostSummary]) -> Self {
        Self { config, posts }
    }
}
