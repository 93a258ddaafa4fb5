use anyhow::Context as _;
use vantage_core::Context;
use vantage_utils::{pagination::size_per_page_list, parse::parse_page_size};

use super::{render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "size",
    desc: "Change how many rows a table shows per page.",
    category: "table",
    usage: "size <table> <n>",
};

pub async fn run(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    let Some(page_size) = arg_tail.and_then(parse_page_size) else {
        let sizes: Vec<String> = size_per_page_list()
            .into_iter()
            .map(|size| size.text)
            .collect();
        return Ok(format!(
            "Usage: `{}` where n is one of {}.",
            META.usage,
            sizes.join(", ")
        ));
    };

    let snapshot = ctx
        .store
        .set_page_size(table, page_size)
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    Ok(render_page(ctx, &snapshot))
}
