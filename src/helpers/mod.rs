//! Date and pagination helpers shared by the loader and the CLI

mod date;
mod pagination;

pub use date::*;
pub use pagination::*;
