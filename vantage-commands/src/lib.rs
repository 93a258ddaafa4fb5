pub mod table;
pub mod utility;

use tracing::{debug, warn};
use vantage_core::Context;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    utility::tables::META,
    table::list::META,
    table::page::META,
    table::search::META,
    table::sort::META,
    table::size::META,
    table::reset::META,
    // Add new commands here
];

/// Run one console line and return the text to print.
///
/// Blank lines produce `None`.
pub async fn handle_line(ctx: Context, line: &str) -> anyhow::Result<Option<String>> {
    let content = line.trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail): (Option<String>, Option<String>) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args
                .next()
                .filter(|arg| !arg.is_empty())
                .map(ToOwned::to_owned);
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty())
                .map(ToOwned::to_owned);

            (first, tail)
        }
        None => (None, None),
    };

    let arg1 = arg1.as_deref();
    let arg_tail = arg_tail.as_deref();
    debug!(command = %cmd, ?arg1, ?arg_tail, "dispatching command");

    let out = match cmd.as_str() {
        "help" => utility::help::run(arg1),
        "usage" => utility::usage::run(arg1),
        "tables" => utility::tables::run(&ctx),

        "list" => table::list::run(&ctx, arg1, arg_tail).await?,
        "page" => table::page::run(&ctx, arg1, arg_tail).await?,
        "search" => table::search::run(&ctx, arg1, arg_tail).await?,
        "sort" => table::sort::run(&ctx, arg1, arg_tail).await?,
        "size" => table::size::run(&ctx, arg1, arg_tail).await?,
        "reset" => table::reset::run(&ctx, arg1).await?,
        // Add new commands here
        _ => {
            warn!(command = %cmd, "unknown command");
            format!("Unknown command: `{cmd}`. Type `help` for the command list.")
        }
    };

    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use vantage_core::Settings;
    use vantage_store::{Catalog, Store};
    use vantage_utils::QueryParams;

    pub(crate) fn context() -> Context {
        let catalog = Catalog::from_json(
            &json!({
                "cameras": [
                    {"id": 1, "name": "Gate North", "zone": "perimeter"},
                    {"id": 2, "name": "Loading Dock", "zone": "warehouse"},
                    {"id": 3, "name": "Gate South", "zone": "perimeter"},
                    {"id": 4, "name": "Lobby", "zone": "office"},
                    {"id": 5, "name": "Parking", "zone": "perimeter"},
                    {"id": 6, "name": "Server Room", "zone": "office"},
                    {"id": 7, "name": "Roof", "zone": "perimeter"}
                ],
                "zones": []
            })
            .to_string(),
        )
        .expect("catalog");

        let store = Store::new(catalog, vec!["name".to_owned()], QueryParams::with_page_size(3));
        Context::new(Arc::new(store), Settings::default())
    }

    #[tokio::test]
    async fn blank_lines_are_ignored() {
        assert_eq!(handle_line(context(), "   ").await.expect("line"), None);
    }

    #[tokio::test]
    async fn unknown_commands_point_at_help() {
        let out = handle_line(context(), "FROB cameras")
            .await
            .expect("line")
            .expect("output");
        assert_eq!(out, "Unknown command: `frob`. Type `help` for the command list.");
    }

    #[tokio::test]
    async fn command_names_are_case_insensitive() {
        let out = handle_line(context(), "TABLES")
            .await
            .expect("line")
            .expect("output");
        assert!(out.contains("cameras"));
    }

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
