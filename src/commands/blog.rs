//! Query and print the blog listing

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::num::NonZeroUsize;

use crate::config::SiteConfig;
use crate::helpers::{format_date, page_numbers};
use crate::prefs::{PreferenceStore, ViewMode, ViewPreferences};
use crate::query::{self, CategoryMatch, Listing, QueryState, SortOrder};
use crate::{Folio, BLOG_PAGE};

/// Shown when no post matches the current filters
pub const NO_MATCHES: &str = "No posts match your criteria.";

/// Command-line selections for a blog listing; unset values fall back to
/// saved preferences
#[derive(Debug, Clone, Default)]
pub struct BlogOptions {
    pub categories: Vec<String>,
    /// Drop a saved category selection when no category is given
    pub clear_categories: bool,
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
    pub page: usize,
    pub per_page: Option<usize>,
    pub match_all: bool,
    pub view: Option<ViewMode>,
    pub json: bool,
    pub remember: bool,
}

impl BlogOptions {
    /// Build the query for these options on top of saved preferences
    pub fn to_query(&self, saved: &ViewPreferences, config: &SiteConfig) -> QueryState {
        let mut query = saved.to_query();
        if !self.categories.is_empty() {
            query.set_categories(self.categories.iter().cloned());
        } else if self.clear_categories {
            query.set_categories(Vec::<String>::new());
        }
        if let Some(search) = &self.search {
            query.set_search(search.clone());
        }
        if let Some(sort) = self.sort {
            query.set_sort(sort);
        }
        let mode = if self.match_all {
            CategoryMatch::All
        } else {
            config.category_match
        };
        query
            .with_category_match(mode)
            .with_page(self.page.max(1))
    }
}

/// Run the blog command
pub fn run(folio: &Folio, options: &BlogOptions) -> Result<()> {
    let mut store = PreferenceStore::load(&folio.base_dir);
    let saved = store.get(BLOG_PAGE);

    let query = options.to_query(&saved, &folio.config);
    let view = options.view.unwrap_or(saved.view_mode);
    let page_size = options
        .per_page
        .and_then(NonZeroUsize::new)
        .unwrap_or_else(|| folio.config.page_size());

    let posts = folio.load_posts().context("Failed to load posts")?;
    let listing = query::listing(&posts, &query, page_size).context("Failed to query posts")?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("{}", folio.config.header());
        print!("{}", render_listing(&listing, view, &folio.config));
    }

    if options.remember {
        store.set(BLOG_PAGE, ViewPreferences::from_query(&query, view));
        store.save(&folio.base_dir)?;
        tracing::info!("Saved blog preferences");
    }

    Ok(())
}

/// Render a listing as terminal text
pub fn render_listing(listing: &Listing<'_>, view: ViewMode, config: &SiteConfig) -> String {
    let mut out = String::new();

    if listing.is_empty() {
        let _ = writeln!(out, "{}", NO_MATCHES);
        return out;
    }

    for post in &listing.posts {
        let date = post
            .published_at()
            .map(|d| format_date(&d, &config.date_format))
            .unwrap_or_else(|_| post.date.clone());
        let category = post
            .primary_category()
            .unwrap_or(config.default_category.as_str());
        let read_time = post
            .read_time
            .as_deref()
            .unwrap_or(config.default_read_time.as_str());

        match view {
            ViewMode::List => {
                let _ = writeln!(
                    out,
                    "{}  [{}]  {} ({})",
                    date, category, post.title, read_time
                );
            }
            ViewMode::Grid => {
                let _ = writeln!(out, "{}", post.title);
                let _ = writeln!(out, "  [{}] {} · {}", category, date, read_time);
                if !post.excerpt.is_empty() {
                    let _ = writeln!(out, "  {}", post.excerpt);
                }
                let _ = writeln!(out, "  /blog/{}", post.slug);
                out.push('\n');
            }
        }
    }

    let pages = page_numbers(listing.page, listing.total_pages, 2);
    if !pages.is_empty() {
        let line: Vec<String> = pages.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Pages: {}", line.join(" "));
    }

    out
}
