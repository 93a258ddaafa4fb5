use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use vantage_utils::{
    Entity, QueryParams,
    pagination::{
        TableChange, apply_table_change, filter_and_sort, filtered_and_paginated_entities,
        total_pages,
    },
};

use crate::catalog::Catalog;

/// Per-table paging, sorting and search state.
#[derive(Clone, Debug, Default)]
pub struct TableView {
    pub params: QueryParams,
    pub search: String,
    /// Searched and sorted rows from the last refresh.
    pub filtered: Option<Vec<Entity>>,
}

/// One rendered page of a table.
#[derive(Clone, Debug)]
pub struct PageSnapshot {
    pub table: String,
    pub rows: Vec<Entity>,
    /// Row count after searching.
    pub total: usize,
    pub params: QueryParams,
    pub search: String,
}

/// Outcome of [`Store::jump_to_page`].
#[derive(Clone, Debug)]
pub enum PageJump {
    Moved(PageSnapshot),
    /// The page was past the end; nothing changed.
    OutOfRange { total_pages: usize },
}

/// Catalog plus the mutable view state of every table.
#[derive(Debug)]
pub struct Store {
    catalog: Catalog,
    search_keys: Vec<String>,
    default_params: QueryParams,
    views: RwLock<HashMap<String, TableView>>,
}

impl Store {
    pub fn new(catalog: Catalog, search_keys: Vec<String>, default_params: QueryParams) -> Self {
        Self {
            catalog,
            search_keys,
            default_params,
            views: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    fn fresh_view(&self) -> TableView {
        TableView {
            params: self.default_params.clone(),
            ..TableView::default()
        }
    }

    /// Current view of `table`, or `None` for unknown tables.
    pub async fn view(&self, table: &str) -> Option<TableView> {
        if !self.catalog.contains(table) {
            return None;
        }

        let views = self.views.read().await;
        Some(views.get(table).cloned().unwrap_or_else(|| self.fresh_view()))
    }

    /// Apply a paging or sorting change and return the refreshed page.
    pub async fn apply_change(&self, table: &str, change: TableChange) -> Option<PageSnapshot> {
        self.update(table, |view| {
            view.params = apply_table_change(&view.params, change);
        })
        .await
    }

    pub async fn set_search(&self, table: &str, search: &str) -> Option<PageSnapshot> {
        self.update(table, |view| {
            view.search = search.trim().to_owned();
            view.params.page_number = 1;
        })
        .await
    }

    pub async fn set_page_size(&self, table: &str, page_size: usize) -> Option<PageSnapshot> {
        self.update(table, |view| {
            view.params.page_size = page_size.max(1);
            view.params.page_number = 1;
        })
        .await
    }

    pub async fn reset(&self, table: &str) -> Option<PageSnapshot> {
        let fresh = self.fresh_view();
        self.update(table, move |view| *view = fresh).await
    }

    /// Re-run the search for `table` without changing its state.
    pub async fn refresh(&self, table: &str) -> Option<PageSnapshot> {
        self.update(table, |_| {}).await
    }

    /// Move `table` to a one-based `page`, checking the bound against the
    /// freshly searched rows under the same lock.
    pub async fn jump_to_page(&self, table: &str, page: usize) -> Option<PageJump> {
        let rows = self.catalog.table(table)?;

        let mut views = self.views.write().await;
        let view = views
            .entry(table.to_owned())
            .or_insert_with(|| self.fresh_view());
        self.refilter(view, &rows);

        let total = view.filtered.as_ref().map_or(0, Vec::len);
        let last_page = total_pages(total, view.params.page_size).max(1);
        if page > last_page {
            debug!(table, page, last_page, "page jump out of range");
            return Some(PageJump::OutOfRange {
                total_pages: last_page,
            });
        }

        view.params = apply_table_change(
            &view.params,
            TableChange::Pagination {
                page,
                size_per_page: view.params.page_size,
            },
        );
        Some(PageJump::Moved(Self::snapshot(table, view)))
    }

    async fn update<F>(&self, table: &str, change: F) -> Option<PageSnapshot>
    where
        F: FnOnce(&mut TableView),
    {
        let rows = self.catalog.table(table)?;

        let mut views = self.views.write().await;
        let view = views
            .entry(table.to_owned())
            .or_insert_with(|| self.fresh_view());
        change(view);
        self.refilter(view, &rows);

        Some(Self::snapshot(table, view))
    }

    fn refilter(&self, view: &mut TableView, rows: &[Entity]) {
        view.filtered = Some(filter_and_sort(
            rows,
            &view.search,
            self.search_keys.as_slice(),
            &view.params,
        ));
    }

    fn snapshot(table: &str, view: &TableView) -> PageSnapshot {
        let page = filtered_and_paginated_entities(view.filtered.as_deref(), &view.params);
        let total = view.filtered.as_ref().map_or(0, Vec::len);

        debug!(
            table,
            search = %view.search,
            page = view.params.page_number,
            total,
            "table view refreshed"
        );

        PageSnapshot {
            table: table.to_owned(),
            rows: page,
            total,
            params: view.params.clone(),
            search: view.search.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_utils::SortOrder;

    fn store() -> Store {
        let catalog = Catalog::from_json(
            r#"{"cameras": [
                {"id": 1, "name": "Gate North"},
                {"id": 2, "name": "Loading Dock"},
                {"id": 3, "name": "Gate South"},
                {"id": 4, "name": "Lobby"},
                {"id": 5, "name": "Parking"}
            ]}"#,
        )
        .expect("catalog");
        Store::new(catalog, vec!["name".to_owned()], QueryParams::with_page_size(2))
    }

    fn ids(page: &PageSnapshot) -> Vec<i64> {
        page.rows
            .iter()
            .filter_map(|row| row.get("id").and_then(|id| id.as_i64()))
            .collect()
    }

    #[tokio::test]
    async fn unknown_tables_have_no_view() {
        let store = store();
        assert!(store.view("alerts").await.is_none());
        assert!(store.refresh("alerts").await.is_none());
    }

    #[tokio::test]
    async fn refresh_pages_the_full_table() {
        let store = store();
        let page = store.refresh("cameras").await.expect("page");
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec![1, 2]);

        let view = store.view("cameras").await.expect("view");
        assert_eq!(view.filtered.map(|rows| rows.len()), Some(5));
    }

    #[tokio::test]
    async fn search_filters_and_resets_to_first_page() {
        let store = store();
        store
            .apply_change(
                "cameras",
                TableChange::Pagination {
                    page: 3,
                    size_per_page: 2,
                },
            )
            .await;

        let page = store.set_search("cameras", "  gate ").await.expect("page");
        assert_eq!(page.search, "gate");
        assert_eq!(page.params.page_number, 1);
        assert_eq!(page.total, 2);
        assert_eq!(ids(&page), vec![1, 3]);

        let filtered = store
            .view("cameras")
            .await
            .and_then(|view| view.filtered)
            .expect("filtered rows");
        let names: Vec<&str> = filtered
            .iter()
            .filter_map(|row| row.get("name").and_then(|name| name.as_str()))
            .collect();
        assert_eq!(names, vec!["Gate North", "Gate South"]);
    }

    #[tokio::test]
    async fn sort_change_reorders_rows() {
        let store = store();
        let page = store
            .apply_change(
                "cameras",
                TableChange::Sort {
                    field: Some("id".to_owned()),
                    order: SortOrder::Desc,
                },
            )
            .await
            .expect("page");
        assert_eq!(ids(&page), vec![5, 4]);

        let page = store.set_page_size("cameras", 3).await.expect("page");
        assert_eq!(ids(&page), vec![5, 4, 3]);

        let page = store.reset("cameras").await.expect("page");
        assert_eq!(page.params, QueryParams::with_page_size(2));
        assert_eq!(ids(&page), vec![1, 2]);
    }

    #[tokio::test]
    async fn page_jumps_are_checked_against_the_search() {
        let store = store();
        store.set_search("cameras", "gate").await;

        match store.jump_to_page("cameras", 2).await.expect("jump") {
            PageJump::OutOfRange { total_pages } => assert_eq!(total_pages, 1),
            PageJump::Moved(page) => panic!("moved to page {}", page.params.page_number),
        }
        let view = store.view("cameras").await.expect("view");
        assert_eq!(view.params.page_number, 1);

        store.set_search("cameras", "").await;
        match store.jump_to_page("cameras", 3).await.expect("jump") {
            PageJump::Moved(page) => {
                assert_eq!(page.params.page_number, 3);
                assert_eq!(page.params.page_size, 2);
                assert_eq!(ids(&page), vec![5]);
            }
            PageJump::OutOfRange { total_pages } => panic!("only {total_pages} pages"),
        }
        assert!(store.jump_to_page("alerts", 1).await.is_none());
    }
}
