//! Stable facade for pagination helpers used by table views.

/// Number of page buttons a pager shows by default.
pub const DEFAULT_PAGER_SIZE: usize = 5;

mod filter;
mod options;
mod page;
mod sort;

pub use filter::{
    MatchRank, entity_filter, filter_and_sort, filtered_and_paginated_entities, fuzzy_match,
    paginate, rank_match,
};
pub use options::{
    NO_RECORDS_MESSAGE, PLEASE_WAIT_MESSAGE, PaginationOptions, SIZE_PER_PAGE_LIST, SizePerPage,
    TableChange, apply_table_change, custom_pagination_options, pagination_options,
    size_per_page_list, table_notice,
};
pub use page::{clamp_page, page_bounds, page_numbers, parse_one_based_page, total_pages};
pub use sort::{compare_values, sort_entities};
