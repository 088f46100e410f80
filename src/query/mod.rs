//! Blog query engine
//!
//! Pure functions over an in-memory post collection: category and search
//! filtering, date ordering, pagination, and category popularity. Nothing
//! here performs I/O or keeps state between calls.

mod engine;
mod state;

pub use engine::{
    filter_and_sort, listing, paginate, popular_categories, CategoryCount, Listing, Page,
};
pub use state::{CategoryMatch, QueryState, SortOrder};
