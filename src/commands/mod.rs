//! CLI command implementations

pub mod blog;
pub mod categories;
pub mod clean;
pub mod init;
pub mod new;
pub mod services;
