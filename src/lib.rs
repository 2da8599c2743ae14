//! portfolio-rs: home and blog index pages of a personal portfolio
//!
//! Pages are `maud` markup built from static content plus the post summaries
//! supplied by a [`content::PostSource`]. The crate can write the rendered
//! pages to disk or serve them directly.

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{FrontMatterIndex, PostSource, PostSummary};

/// Config file name at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// The portfolio site
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post files
    pub posts_dir: PathBuf,
    /// Static assets copied verbatim (images, css)
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            static_dir,
            public_dir,
        }
    }

    /// Source of post summaries for the post listing
    pub fn post_source(&self) -> FrontMatterIndex {
        FrontMatterIndex::new(&self.posts_dir)
    }

    /// Load the current post summaries
    pub fn posts(&self) -> Result<Vec<PostSummary>> {
        Ok(self.post_source().summaries()?)
    }

    /// Render all pages into the public directory
    pub fn render(&self) -> Result<()> {
        commands::render::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
