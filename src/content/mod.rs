//! Content module - posts, services, and content parsing

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownSummarizer;
pub use post::{default_services, Post, Service, DEFAULT_READ_TIME};
