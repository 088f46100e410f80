//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::content::{default_services, Service};
use crate::query::CategoryMatch;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub author: String,

    // Content
    pub source_dir: String,
    pub posts_file: String,
    pub default_category: String,
    pub default_read_time: String,

    // Blog listing
    pub per_page: usize,
    pub category_match: CategoryMatch,
    pub date_format: String,

    // Services showcase
    pub services: Vec<Service>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            subtitle: String::new(),
            author: "John Doe".to_string(),

            source_dir: "source".to_string(),
            posts_file: "data/posts.yml".to_string(),
            default_category: "uncategorized".to_string(),
            default_read_time: crate::content::DEFAULT_READ_TIME.to_string(),

            per_page: 6,
            category_match: CategoryMatch::Any,
            date_format: "DD MMM YYYY".to_string(),

            services: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// One-line site banner: title, then subtitle and author when set
    pub fn header(&self) -> String {
        let mut header = self.title.clone();
        if !self.subtitle.is_empty() {
            header.push_str(": ");
            header.push_str(&self.subtitle);
        }
        if !self.author.is_empty() {
            header.push_str(&format!(" (by {})", self.author));
        }
        header
    }

    /// Posts per blog page; a zero in the config falls back to one
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.per_page).unwrap_or(NonZeroUsize::MIN)
    }

    /// The services to showcase: configured ones, or the built-in catalogue
    pub fn services(&self) -> Vec<Service> {
        if self.services.is_empty() {
            default_services()
        } else {
            self.services.clone()
        }
    }
}
