//! Post summary model

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// What the post listing knows about a post: everything except its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// URL-friendly name, taken from the file stem
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub published_at: NaiveDate,

    /// Optional one-line summary
    pub summary: Option<String>,

    /// Source file, when loaded from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl PostSummary {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, published_at: NaiveDate) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            published_at,
            summary: None,
            source: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Listing order: newest first, then by slug so equal dates stay stable
    pub fn newest_first(a: &PostSummary, b: &PostSummary) -> Ordering {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.slug.cmp(&b.slug))
    }
}
