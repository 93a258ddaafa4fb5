use anyhow::Context as _;
use vantage_core::Context;
use vantage_store::PageJump;
use vantage_utils::pagination::parse_one_based_page;

use super::{render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "page",
    desc: "Jump to a page of a table.",
    category: "table",
    usage: "page <table> <n>",
};

pub async fn run(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    if arg_tail.is_none() {
        return Ok(format!("Usage: `{}`", META.usage));
    }

    jump(ctx, table, arg_tail, META.usage).await
}

/// Move `table` to the page in `raw`, keeping its page size.
pub(crate) async fn jump(
    ctx: &Context,
    table: &str,
    raw: Option<&str>,
    usage: &str,
) -> anyhow::Result<String> {
    let Some(requested_page) = parse_one_based_page(raw) else {
        return Ok(format!("Usage: `{usage}` (page starts at 1)"));
    };

    let jump = ctx
        .store
        .jump_to_page(table, requested_page)
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    let snapshot = match jump {
        PageJump::Moved(snapshot) => snapshot,
        PageJump::OutOfRange { total_pages } => {
            return Ok(format!(
                "Page {requested_page} does not exist. Available pages: 1-{total_pages}."
            ));
        }
    };

    Ok(render_page(ctx, &snapshot))
}
