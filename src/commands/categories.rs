//! List popular categories

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::prefs::PreferenceStore;
use crate::query::{popular_categories, CategoryCount};
use crate::{Folio, BLOG_PAGE};

/// Print categories by number of posts, marking the saved selection
pub fn run(folio: &Folio, limit: Option<usize>) -> Result<()> {
    let posts = folio.load_posts().context("Failed to load posts")?;
    let selected = PreferenceStore::load(&folio.base_dir)
        .get(BLOG_PAGE)
        .selected_categories;

    let mut counts = popular_categories(&posts);
    if let Some(limit) = limit {
        counts.truncate(limit);
    }

    print!("{}", render_categories(&counts, &selected));
    Ok(())
}

/// Render category counts, one per line
pub fn render_categories(counts: &[CategoryCount], selected: &BTreeSet<String>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Categories ({}):", counts.len());
    for category in counts {
        let marker = if selected.contains(&category.name) { '*' } else { ' ' };
        let _ = writeln!(out, " {} {} ({})", marker, category.name, category.count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_selected() {
        let counts = vec![
            CategoryCount { name: "Web".to_string(), count: 3 },
            CategoryCount { name: "Mobile".to_string(), count: 1 },
        ];
        let selected: BTreeSet<String> = ["Mobile".to_string()].into_iter().collect();
        assert_eq!(
            render_categories(&counts, &selected),
            "Categories (2):\n   Web (3)\n * Mobile (1)\n"
        );
    }
}
