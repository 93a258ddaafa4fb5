//! Commands that page, search and sort catalog tables.

pub mod list;
pub mod page;
pub mod reset;
pub mod search;
pub mod size;
pub mod sort;

use std::collections::BTreeSet;

use vantage_core::Context;
use vantage_store::PageSnapshot;
use vantage_utils::{
    Entity,
    pagination::{page_numbers, pagination_options, total_pages},
    render::{FOOTER_SEPARATOR, page_footer, pager_line, render_table},
};

/// Reply for a table name missing from the catalog.
pub(crate) fn unknown_table(ctx: &Context, name: &str) -> String {
    let names: Vec<&str> = ctx
        .store
        .catalog()
        .summary()
        .into_iter()
        .map(|(table, _)| table)
        .collect();

    format!("Unknown table: `{name}`. Available tables: {}.", names.join(", "))
}

/// Resolve the table argument, or the reply to send instead.
pub(crate) fn table_arg<'a>(
    ctx: &Context,
    arg1: Option<&'a str>,
    usage: &str,
) -> Result<&'a str, String> {
    match arg1 {
        None => Err(format!("Usage: `{usage}`")),
        Some(name) if !ctx.store.catalog().contains(name) => Err(unknown_table(ctx, name)),
        Some(name) => Ok(name),
    }
}

/// Render a page of rows with its pager and footer.
pub(crate) fn render_page(ctx: &Context, page: &PageSnapshot) -> String {
    let options = pagination_options(Some(page.total), &page.params);
    let total = total_pages(options.total_size, options.size_per_page);

    let columns = columns(&page.rows);
    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
    let mut out = render_table(&page.table, &columns, Some(page.rows.as_slice()));

    if total > 1 {
        let pages = page_numbers(options.page, total, ctx.settings.pager_size);
        let pager = pager_line(&pages, options.page, total);
        if !pager.is_empty() {
            out.push_str(&pager);
            out.push('\n');
        }
    }

    let mut notes = vec![format!("{} rows", options.total_size)];
    if !page.search.is_empty() {
        notes.push(format!("search: {}", page.search));
    }
    if let Some(field) = &page.params.sort_field {
        notes.push(format!("sort: {field} {}", page.params.sort_order.as_str()));
    }
    notes.push(format!("{} per page", options.size_per_page));

    out.push_str(&page_footer(
        options.page,
        total,
        Some(&notes.join(FOOTER_SEPARATOR)),
    ));
    out
}

/// Union of top-level field names on the page, `id` first.
fn columns(rows: &[Entity]) -> Vec<String> {
    let names: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.fields().keys().map(String::as_str))
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(names.len());
    if names.contains("id") {
        columns.push("id".to_owned());
    }
    columns.extend(
        names
            .into_iter()
            .filter(|name| *name != "id")
            .map(ToOwned::to_owned),
    );
    columns
}
