//! Content module - post summaries and where they come from

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::{FrontMatterIndex, PostSource, StaticPosts};
pub use post::PostSummary;
