use anyhow::Context as _;
use vantage_core::Context;

use super::{render_page, table_arg};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "search",
    desc: "Fuzzy-search a table; no text clears the search.",
    category: "table",
    usage: "search <table> [text]",
};

pub async fn run(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> anyhow::Result<String> {
    let table = match table_arg(ctx, arg1, META.usage) {
        Ok(table) => table,
        Err(reply) => return Ok(reply),
    };

    let snapshot = ctx
        .store
        .set_search(table, arg_tail.unwrap_or_default())
        .await
        .with_context(|| format!("table `{table}` left the catalog"))?;

    Ok(render_page(ctx, &snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::context;

    #[tokio::test]
    async fn search_narrows_rows_and_shows_in_footer() {
        let ctx = context();
        let out = run(&ctx, Some("cameras"), Some("gate")).await.expect("search");
        assert!(out.contains("1  | Gate North"));
        assert!(out.contains("3  | Gate South"));
        assert!(!out.contains("Lobby"));
        assert!(out.ends_with("2 rows • search: gate • sort: id asc • 3 per page"));
    }

    #[tokio::test]
    async fn empty_search_clears() {
        let ctx = context();
        run(&ctx, Some("cameras"), Some("lobby")).await.expect("search");
        let out = run(&ctx, Some("cameras"), None).await.expect("clear");
        assert!(out.ends_with("Page 1/3 • 7 rows • sort: id asc • 3 per page"));
    }

    #[tokio::test]
    async fn no_matches_show_notice() {
        let out = run(&context(), Some("cameras"), Some("xyzzy")).await.expect("search");
        assert!(out.starts_with("cameras\nNo records found\n"));
    }
}
