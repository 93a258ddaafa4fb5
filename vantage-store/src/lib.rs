//! Catalog loading and per-table view state shared by the console commands.

pub mod catalog;
pub mod views;

pub use catalog::Catalog;
pub use views::{PageJump, PageSnapshot, Store, TableView};
