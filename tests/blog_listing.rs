//! End-to-end: load a site from disk and query its blog

use std::fs;

use folio::query::{self, popular_categories, CategoryMatch, QueryState, SortOrder};
use folio::{Folio, QueryError};

fn write_site(posts_yaml: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("_config.yml"), "title: Test\nper_page: 6\n").unwrap();
    fs::write(dir.path().join("data/posts.yml"), posts_yaml).unwrap();
    dir
}

fn thirteen_posts() -> String {
    let mut yaml = String::new();
    for i in 1..=13 {
        let categories = if i % 2 == 0 { "[Web, React]" } else { "[Mobile]" };
        yaml.push_str(&format!(
            "- slug: post-{i}\n  title: Post number {i}\n  excerpt: Excerpt {i}\n  categories: {categories}\n  date: \"2024-01-{i:02}\"\n"
        ));
    }
    yaml
}

#[test]
fn pages_through_a_loaded_site() {
    let dir = write_site(&thirteen_posts());
    let site = Folio::new(dir.path()).unwrap();
    let posts = site.load_posts().unwrap();
    let size = site.config.page_size();

    let last = query::listing(&posts, &QueryState::new().with_page(3), size).unwrap();
    assert_eq!(last.total_pages, 3);
    assert_eq!(last.posts.len(), 1);
    assert_eq!(last.posts[0].slug, "post-1");

    let past_end = query::listing(&posts, &QueryState::new().with_page(4), size).unwrap();
    assert!(past_end.is_empty());
    assert_eq!(past_end.total_pages, 3);
}

#[test]
fn filters_sorts_and_counts() {
    let dir = write_site(&thirteen_posts());
    let site = Folio::new(dir.path()).unwrap();
    let posts = site.load_posts().unwrap();

    let query = QueryState::new()
        .with_categories(["React", "Nothing"])
        .with_sort(SortOrder::Oldest);
    let listing = query::listing(&posts, &query, site.config.page_size()).unwrap();
    assert_eq!(listing.total_matches, 6);
    assert_eq!(listing.posts[0].slug, "post-2");

    let strict = query.clone().with_category_match(CategoryMatch::All);
    assert!(query::filter_and_sort(&posts, &strict).unwrap().is_empty());

    let counts = popular_categories(&posts);
    let summary: Vec<(&str, usize)> = counts.iter().map(|c| (c.name.as_str(), c.count)).collect();
    assert_eq!(summary, vec![("Mobile", 7), ("Web", 6), ("React", 6)]);
}

#[test]
fn malformed_date_surfaces_as_data_error() {
    let dir = write_site(
        "- slug: ok\n  title: Fine\n  categories: [Web]\n  date: \"2024-01-01\"\n\
         - slug: bad\n  title: Broken\n  categories: [Web]\n  date: \"yesterday\"\n",
    );
    let site = Folio::new(dir.path()).unwrap();
    let posts = site.load_posts().unwrap();

    let err = query::filter_and_sort(&posts, &QueryState::new()).unwrap_err();
    assert_eq!(
        err,
        QueryError::Data {
            slug: "bad".to_string(),
            date: "yesterday".to_string(),
        }
    );

    // The broken post is out of the way once the search excludes it
    let query = QueryState::new().with_search("fine");
    assert_eq!(query::filter_and_sort(&posts, &query).unwrap().len(), 1);
}
