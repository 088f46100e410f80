//! folio: content core for a portfolio site
//!
//! This crate loads a site's blog posts and services catalogue and answers
//! blog listing queries: category and search filtering, date ordering,
//! pagination, and popular categories.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod prefs;
pub mod query;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::Post;
pub use error::{LoadError, QueryError};

/// Preference key of the blog listing
pub const BLOG_PAGE: &str = "blog";

/// A portfolio site rooted at a directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory (markdown posts live in `_posts` below it)
    pub source_dir: PathBuf,
    /// YAML data file listing posts
    pub posts_file: PathBuf,
}

impl Folio {
    /// Open a site from a directory, using defaults when it has no `_config.yml`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let posts_file = base_dir.join(&config.posts_file);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            posts_file,
        })
    }

    /// Load the site's post collection
    pub fn load_posts(&self) -> std::result::Result<Vec<Post>, LoadError> {
        content::loader::ContentLoader::new(self).load_posts()
    }

    /// Remove saved preferences
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
