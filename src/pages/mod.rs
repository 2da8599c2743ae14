//! Pages of the site
//!
//! Each page is a unit struct implementing [`Page`]. Pages hold no state:
//! rendering the same page with the same context always yields the same markup.

mod blog;
mod home;

pub use blog::{BlogIndexPage, BLOG_DESCRIPTION, BLOG_TITLE};
pub use home::{HomePage, BIOGRAPHY, NAME};

use maud::Markup;
use serde::{Deserialize, Serialize};

use crate::components::{layout, RenderContext};

/// Document-head descriptor exposed by a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A renderable page
pub trait Page {
    /// Route the page is served under, relative to the site root
    fn route(&self) -> &'static str;

    /// Head metadata; `None` uses the site defaults
    fn metadata(&self) -> Option<Metadata> {
        None
    }

    /// The page body
    fn render(&self, ctx: &RenderContext) -> Markup;

    /// The page body wrapped in the document shell
    fn render_document(&self, ctx: &RenderContext) -> Markup {
        let metadata = self.metadata();
        layout(ctx.config, metadata.as_ref(), self.route(), self.render(ctx))
    }
}

/// Every page the site serves
pub fn all_pages() -> Vec<Box<dyn Page + Send + Sync>> {
    vec![Box::new(HomePage), Box::new(BlogIndexPage)]
}
