//! Error types shared by the library

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or post summaries
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid front-matter: {0}")]
    FrontMatter(String),

    #[error("Missing front-matter field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
