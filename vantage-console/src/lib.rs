//! Line-oriented console over a JSON catalog.

pub mod config;

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};
use vantage_commands::handle_line;
use vantage_core::{Context, Settings};
use vantage_store::{Catalog, Store};
use vantage_utils::QueryParams;

use crate::config::Config;

/// Load the catalog and assemble the shared context.
pub async fn build_context(config: &Config) -> anyhow::Result<Context> {
    let catalog = Catalog::load(&config.catalog).await?;
    let store = Store::new(
        catalog,
        config.search_keys.clone(),
        QueryParams::with_page_size(config.page_size),
    );

    Ok(Context::new(
        Arc::new(store),
        Settings {
            pager_size: config.pager_size,
        },
    ))
}

/// Answer command lines from `input` until it ends or `quit` is read.
///
/// Command failures are reported on `output` and the loop continues.
pub async fn run<R, W>(ctx: Context, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let reply = match handle_line(ctx.clone(), &line).await {
            Ok(Some(reply)) => reply,
            Ok(None) => continue,
            Err(source) => {
                error!(?source, line = %line, "command failed");
                format!("error: {source:#}")
            }
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    info!("console input closed");
    Ok(())
}
