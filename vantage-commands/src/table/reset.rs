use anyhow::Context as _;
use vantage_core::Context;

use super::{render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "reset",
    desc: "Clear the search, sort and paging of a table.",
    category: "table",
    usage: "reset <table>",
};

pub async fn run(ctx: &Context, arg1: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    let snapshot = ctx
        .store
        .reset(table)
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    Ok(render_page(ctx, &snapshot))
}
