//! Filtering, ordering, pagination and category counts

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use super::state::{CategoryMatch, QueryState, SortOrder};
use crate::content::Post;
use crate::error::QueryError;

/// Number of posts listing a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// One page of an ordered sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most the page size
    pub items: &'a [T],
    /// Requested 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A page of filtered, sorted posts with its totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<'a> {
    pub posts: Vec<&'a Post>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl Listing<'_> {
    /// Nothing to show on this page
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Filter posts by category and search text, then order them by date.
///
/// The input is left untouched. Sorting is stable, so posts sharing a date
/// keep their collection order. A retained post whose date cannot be parsed
/// fails the whole call.
pub fn filter_and_sort<'a>(
    posts: &'a [Post],
    query: &QueryState,
) -> Result<Vec<&'a Post>, QueryError> {
    let search = query.search_query().to_lowercase();

    let mut dated = posts
        .iter()
        .filter(|post| {
            matches_categories(post, query.selected_categories(), query.category_match())
        })
        .filter(|post| matches_search(post, &search))
        .map(|post| post.published_at().map(|date| (date, post)))
        .collect::<Result<Vec<_>, _>>()?;

    match query.sort_order() {
        SortOrder::Newest => dated.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::Oldest => dated.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    Ok(dated.into_iter().map(|(_, post)| post).collect())
}

fn matches_categories(post: &Post, selected: &BTreeSet<String>, mode: CategoryMatch) -> bool {
    if selected.is_empty() {
        return true;
    }
    match mode {
        CategoryMatch::Any => post.categories.iter().any(|c| selected.contains(c)),
        CategoryMatch::All => selected.iter().all(|c| post.has_category(c)),
    }
}

/// `search` must already be lower-cased
fn matches_search(post: &Post, search: &str) -> bool {
    search.is_empty()
        || post.title.to_lowercase().contains(search)
        || post.excerpt.to_lowercase().contains(search)
}

/// Cut page `current_page` (1-based) out of `items`.
///
/// Pages past the end, and page 0, come back empty rather than as errors.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> Page<'_, T> {
    let size = page_size.get();
    let total_pages = items.len().div_ceil(size);

    let slice = if current_page == 0 || current_page > total_pages {
        &items[..0]
    } else {
        let start = (current_page - 1) * size;
        let end = (start + size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice,
        number: current_page,
        total_pages,
        total_items: items.len(),
    }
}

/// Count how many posts list each category, most used first.
///
/// Every category a post lists counts, not only the primary one. Categories
/// with equal counts stay in the order they were first seen.
pub fn popular_categories(posts: &[Post]) -> Vec<CategoryCount> {
    let counts = posts
        .iter()
        .flat_map(|post| post.categories.iter())
        .fold(IndexMap::<&str, usize>::new(), |mut acc, category| {
            *acc.entry(category.as_str()).or_insert(0) += 1;
            acc
        });

    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Filter, sort and cut out the page requested by `query`
pub fn listing<'a>(
    posts: &'a [Post],
    query: &QueryState,
    page_size: NonZeroUsize,
) -> Result<Listing<'a>, QueryError> {
    let matches = filter_and_sort(posts, query)?;
    let page = paginate(&matches, page_size, query.current_page());

    tracing::debug!(
        "Listing page {} of {}: {} of {} posts match",
        page.number,
        page.total_pages,
        page.items.len(),
        matches.len()
    );

    Ok(Listing {
        posts: page.items.to_vec(),
        page: page.number,
        total_pages: page.total_pages,
        total_matches: matches.len(),
    })
}
