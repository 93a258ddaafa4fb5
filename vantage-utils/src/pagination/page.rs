//! Pure pagination math and page-window shaping helpers.

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices for a page slice.
pub fn page_bounds(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Page numbers to render as pager buttons.
///
/// The window slides with the current page and anchors to either end of the
/// range once the page gets close to it. A `page` of `0` means there is no
/// current page and yields an empty window, as does a page past the end.
pub fn page_numbers(page: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if page == 0 || total_pages < page {
        return Vec::new();
    }

    if total_pages == 1 {
        return vec![1];
    }

    if total_pages < window.saturating_add(1) {
        return (1..=total_pages).collect();
    }

    if page == 1 {
        return pages_for_start(window);
    }

    if page == total_pages {
        return pages_for_end(total_pages, window);
    }

    let shift = window / 2;
    if shift < 1 {
        return vec![page];
    }

    if page < shift + 2 {
        return pages_for_start(window);
    }

    if total_pages - page < shift + 2 {
        return pages_for_end(total_pages, window);
    }

    pages_for_middle(page, total_pages, window)
}

fn pages_for_start(window: usize) -> Vec<usize> {
    (1..=window).collect()
}

fn pages_for_end(total_pages: usize, window: usize) -> Vec<usize> {
    (total_pages.saturating_sub(window) + 1..=total_pages).collect()
}

// A symmetric window of `window / 2` pages on each side would hold
// `window + 1` pages when `window` is even. Even windows drop one page before
// the current one instead, so the window never grows past `window`.
fn pages_for_middle(page: usize, total_pages: usize, window: usize) -> Vec<usize> {
    let before = window.saturating_sub(1) / 2;
    let after = window / 2;
    let first = page.saturating_sub(before).max(1);
    let last = page.saturating_add(after).min(total_pages);
    (first..=last).collect()
}
