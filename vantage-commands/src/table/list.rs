use anyhow::Context as _;
use vantage_core::Context;

use super::{page, render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "list",
    desc: "Show the current page of a table.",
    category: "table",
    usage: "list <table> [page]",
};

/// Show the current page, or jump first when a page is given.
pub async fn run(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    if arg_tail.is_some() {
        return page::jump(ctx, table, arg_tail, META.usage).await;
    }

    let snapshot = ctx
        .store
        .refresh(table)
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    Ok(render_page(ctx, &snapshot))
}
