use anyhow::Context as _;
use vantage_core::Context;
use vantage_utils::{SortOrder, pagination::TableChange, parse::parse_sort_order};

use super::{render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "sort",
    desc: "Sort a table by a field path.",
    category: "table",
    usage: "sort <table> <field> [asc|desc]",
};

pub async fn run(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    let mut args = arg_tail.unwrap_or_default().split_whitespace();
    let Some(field) = args.next() else {
        return Ok(format!("Usage: `{}`", META.usage));
    };
    let order = match args.next() {
        Some(raw) => match parse_sort_order(raw) {
            Some(order) => order,
            None => return Ok(format!("Unknown sort order: `{raw}`. Use `asc` or `desc`.")),
        },
        None => SortOrder::Asc,
    };

    let snapshot = ctx
        .store
        .apply_change(
            table,
            TableChange::Sort {
                field: Some(field.to_owned()),
                order,
            },
        )
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    Ok(render_page(ctx, &snapshot))
}
