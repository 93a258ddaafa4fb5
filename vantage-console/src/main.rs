use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vantage_console::{build_context, config::Config, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let ctx = build_context(&config).await?;
    info!(
        catalog = %config.catalog.display(),
        page_size = config.page_size,
        "Vantage console ready, type `help` for commands."
    );

    run(ctx, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
