/// Entity records and table query state.
pub mod entity;
/// Shared pagination, search and sort helpers.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Plain-text table and pager rendering.
pub mod render;

pub use entity::{Entity, QueryParams, Record, SortOrder};
