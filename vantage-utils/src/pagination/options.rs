//! Pager descriptors and table state transitions.

use serde::Serialize;

use crate::entity::{QueryParams, SortOrder};

/// Page sizes offered by table size pickers.
pub const SIZE_PER_PAGE_LIST: [usize; 3] = [3, 5, 10];

/// One entry of a page-size picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SizePerPage {
    pub text: String,
    pub value: usize,
}

impl SizePerPage {
    pub fn new(value: usize) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

pub fn size_per_page_list() -> Vec<SizePerPage> {
    SIZE_PER_PAGE_LIST.into_iter().map(SizePerPage::new).collect()
}

/// Everything a pager needs to render itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    pub custom: bool,
    pub total_size: usize,
    pub size_per_page_list: Vec<SizePerPage>,
    pub size_per_page: usize,
    pub page: usize,
}

/// Pager descriptor for a table using the standard size picker.
pub fn pagination_options(total_size: Option<usize>, params: &QueryParams) -> PaginationOptions {
    custom_pagination_options(
        total_size,
        size_per_page_list(),
        params.page_size,
        params.page_number,
    )
}

/// Pager descriptor with a caller-supplied size picker.
pub fn custom_pagination_options(
    total_size: Option<usize>,
    size_per_page_list: Vec<SizePerPage>,
    page_size: usize,
    page_number: usize,
) -> PaginationOptions {
    PaginationOptions {
        custom: true,
        total_size: total_size.unwrap_or(0),
        size_per_page_list,
        size_per_page: page_size,
        page: page_number,
    }
}

/// A change reported by a table control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableChange {
    Sort {
        field: Option<String>,
        order: SortOrder,
    },
    Pagination {
        page: usize,
        size_per_page: usize,
    },
    Other,
}

/// Fold a table change into new query params.
///
/// A zero page from the control is read as the first page.
pub fn apply_table_change(params: &QueryParams, change: TableChange) -> QueryParams {
    match change {
        TableChange::Sort { field, order } => QueryParams {
            sort_field: field,
            sort_order: order,
            ..params.clone()
        },
        TableChange::Pagination {
            page,
            size_per_page,
        } => QueryParams {
            page_number: page.max(1),
            page_size: size_per_page,
            ..params.clone()
        },
        TableChange::Other => params.clone(),
    }
}

pub const PLEASE_WAIT_MESSAGE: &str = "Please wait...";
pub const NO_RECORDS_MESSAGE: &str = "No records found";

/// Placeholder text for a table that is loading or empty.
pub fn table_notice<E>(entities: Option<&[E]>) -> Option<&'static str> {
    match entities {
        None => Some(PLEASE_WAIT_MESSAGE),
        Some([]) => Some(NO_RECORDS_MESSAGE),
        Some(_) => None,
    }
}
