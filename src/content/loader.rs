//! Post sources
//!
//! The post listing never reads files itself. It asks a [`PostSource`] for
//! summaries, so the pages stay independent of where posts live.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, PostSummary};
use crate::error::{Result, SiteError};
use crate::helpers::parse_published;

/// Supplies post summaries to the post listing
pub trait PostSource {
    fn summaries(&self) -> Result<Vec<PostSummary>>;
}

/// A fixed, in-memory list of posts
#[derive(Debug, Clone, Default)]
pub struct StaticPosts(pub Vec<PostSummary>);

impl PostSource for StaticPosts {
    fn summaries(&self) -> Result<Vec<PostSummary>> {
        Ok(self.0.clone())
    }
}

/// Reads summaries from the front-matter of `.md`/`.mdx` files in a directory
#[derive(Debug, Clone)]
pub struct FrontMatterIndex {
    posts_dir: PathBuf,
}

impl FrontMatterIndex {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Load a single summary from a file
    fn load_summary(&self, path: &Path) -> Result<PostSummary> {
        let content = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        let title = fm
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(SiteError::MissingField("title"))?;
        let published_at = fm
            .published_at
            .as_deref()
            .ok_or(SiteError::MissingField("publishedAt"))
            .and_then(parse_published)?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        Ok(PostSummary {
            slug,
            title,
            published_at,
            summary: fm.summary,
            source: Some(path.to_path_buf()),
        })
    }
}

impl PostSource for FrontMatterIndex {
    fn summaries(&self) -> Result<Vec<PostSummary>> {
        if !self.posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        // Slugs come from file stems, so only the top level is scanned
        for entry in WalkDir::new(&self.posts_dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }
            match self.load_summary(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} post summaries from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }
}

/// Check if a file is a post file
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}
