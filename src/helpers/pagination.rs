//! Page number window for paginated listings

use std::fmt;

/// One entry in a page-number navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page the reader can jump to
    Number(usize),
    /// The page being displayed
    Current(usize),
    /// A gap of skipped page numbers
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Number(n) => write!(f, "{}", n),
            PageItem::Current(n) => write!(f, "[{}]", n),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// Build the page numbers shown around `current`.
///
/// The first and last pages are always present, with an ellipsis standing in
/// for any gap wider than one page. Nothing is shown for a single page.
pub fn page_numbers(current: usize, total: usize, mid_size: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let center = current.clamp(1, total);
    let start = center.saturating_sub(mid_size).max(1);
    let end = (center + mid_size).min(total);

    let mut items = Vec::new();

    if start > 1 {
        items.push(PageItem::Number(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for page in start..=end {
        if page == current {
            items.push(PageItem::Current(page));
        } else {
            items.push(PageItem::Number(page));
        }
    }

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Number(total));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    #[test]
    fn test_single_page_has_no_numbers() {
        assert!(page_numbers(1, 1, 2).is_empty());
        assert!(page_numbers(1, 0, 2).is_empty());
    }

    #[test]
    fn test_small_range_lists_every_page() {
        assert_eq!(page_numbers(1, 3, 2), vec![Current(1), Number(2), Number(3)]);
    }

    #[test]
    fn test_window_with_ellipses() {
        assert_eq!(
            page_numbers(5, 10, 1),
            vec![Number(1), Ellipsis, Number(4), Current(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_adjacent_edges_skip_ellipsis() {
        assert_eq!(
            page_numbers(3, 5, 1),
            vec![Number(1), Number(2), Current(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_out_of_range_page_has_no_current_marker() {
        let items = page_numbers(9, 3, 2);
        assert_eq!(items, vec![Number(1), Number(2), Number(3)]);
    }

    #[test]
    fn test_display() {
        let line: Vec<String> = page_numbers(2, 3, 2).iter().map(|i| i.to_string()).collect();
        assert_eq!(line.join(" "), "1 [2] 3");
    }
}
