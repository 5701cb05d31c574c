use serde::Serialize;

/// Page size used by the lover list page and the JSON API.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// How many page numbers stay visible at each end of the pager.
const EDGE_PAGES: usize = 2;
/// How many page numbers stay visible on both sides of the current page.
const SURROUNDING_PAGES: usize = 2;

/// One page of items plus the pager window rendered under the list.
///
/// `pages` holds the visible page numbers with `None` marking an elided gap,
/// e.g. `1 2 … 6 7 8 … 19 20`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            page,
            total_pages,
            pages: page_window(total_pages, page),
        }
    }
}

/// Builds the visible pager window for `current_page` out of `total_pages`.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut window = Vec::new();
    let mut previous = 0;

    for page in 1..=total_pages {
        let near_left_edge = page <= EDGE_PAGES;
        let near_right_edge = page > total_pages.saturating_sub(EDGE_PAGES);
        let near_current = page.abs_diff(current_page) <= SURROUNDING_PAGES;

        if near_left_edge || near_right_edge || near_current {
            if previous != 0 && page - previous > 1 {
                window.push(None);
            }
            window.push(Some(page));
            previous = page;
        }
    }

    window
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(window: &[Option<usize>]) -> Vec<i64> {
        window
            .iter()
            .map(|p| p.map(|n| n as i64).unwrap_or(-1))
            .collect()
    }

    #[test]
    fn no_pages_yields_an_empty_window() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
    }

    #[test]
    fn small_page_counts_are_shown_in_full() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 2, 5);
        assert_eq!(numbers(&paginated.pages), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn middle_pages_elide_both_ends() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        assert_eq!(
            numbers(&paginated.pages),
            vec![1, 2, -1, 8, 9, 10, 11, 12, -1, 19, 20]
        );
    }

    #[test]
    fn zero_page_is_clamped_to_one() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 3);
        assert_eq!(paginated.page, 1);
        assert_eq!(numbers(&paginated.pages), vec![1, 2, 3]);
    }

    #[test]
    fn edges_merge_with_the_current_window_without_gaps() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 3, 7);
        assert_eq!(numbers(&paginated.pages), vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
