//! Filter, search, sort and page selections for a blog listing

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Date ordering of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order '{}' (expected newest or oldest)", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        })
    }
}

/// How a multi-category selection is combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// A post matches when it lists at least one selected category
    #[default]
    Any,
    /// A post matches only when it lists every selected category
    All,
}

impl FromStr for CategoryMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(CategoryMatch::Any),
            "all" => Ok(CategoryMatch::All),
            other => Err(format!("unknown category match '{}' (expected any or all)", other)),
        }
    }
}

/// The caller-owned state of a blog listing.
///
/// Changing the category selection, the search text or the sort order sends
/// the reader back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    selected_categories: BTreeSet<String>,
    search_query: String,
    sort_order: SortOrder,
    current_page: usize,
    category_match: CategoryMatch,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            selected_categories: BTreeSet::new(),
            search_query: String::new(),
            sort_order: SortOrder::Newest,
            current_page: 1,
            category_match: CategoryMatch::Any,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_categories(categories);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.set_sort(order);
        self
    }

    pub fn with_category_match(mut self, mode: CategoryMatch) -> Self {
        self.category_match = mode;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn category_match(&self) -> CategoryMatch {
        self.category_match
    }

    /// Replace the category selection
    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self.current_page = 1;
    }

    /// Select `category` if it is not selected, deselect it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self.current_page = 1;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = QueryState::new();
        assert!(state.selected_categories().is_empty());
        assert_eq!(state.search_query(), "");
        assert_eq!(state.sort_order(), SortOrder::Newest);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.category_match(), CategoryMatch::Any);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = QueryState::new().with_page(3);
        state.set_search("rust");
        assert_eq!(state.current_page(), 1);

        state.set_page(2);
        state.set_sort(SortOrder::Oldest);
        assert_eq!(state.current_page(), 1);

        state.set_page(4);
        state.toggle_category("Web");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_toggle_category() {
        let mut state = QueryState::new().with_categories(["Web"]);
        state.toggle_category("React");
        assert_eq!(
            state.selected_categories().iter().collect::<Vec<_>>(),
            vec!["React", "Web"]
        );
        state.toggle_category("Web");
        assert_eq!(
            state.selected_categories().iter().collect::<Vec<_>>(),
            vec!["React"]
        );
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Oldest".parse::<SortOrder>(), Ok(SortOrder::Oldest));
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!("all".parse::<CategoryMatch>(), Ok(CategoryMatch::All));
        assert_eq!(SortOrder::Newest.to_string(), "newest");
    }
}
