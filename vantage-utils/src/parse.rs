use crate::entity::SortOrder;
use crate::pagination::SIZE_PER_PAGE_LIST;

/// Parse a sort direction (`asc`/`desc`, also `ascending`/`descending`).
pub fn parse_sort_order(raw: &str) -> Option<SortOrder> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Some(SortOrder::Asc),
        "desc" | "descending" => Some(SortOrder::Desc),
        _ => None,
    }
}

/// Parse a page size offered by the size picker.
pub fn parse_page_size(raw: &str) -> Option<usize> {
    let size = raw.trim().parse::<usize>().ok()?;
    SIZE_PER_PAGE_LIST.contains(&size).then_some(size)
}

/// Split a comma-separated list of field paths, dropping blanks.
pub fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
