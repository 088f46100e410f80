//! Error types for loading content and querying posts

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while querying an already-loaded post collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A post's date could not be interpreted as a calendar date
    #[error("Post '{slug}' has an invalid date: {date:?}")]
    Data { slug: String, date: String },
}

/// Errors raised by the content loader
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("Post in {path:?} is missing required field '{field}'")]
    MissingField { path: PathBuf, field: &'static str },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
