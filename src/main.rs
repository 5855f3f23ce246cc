use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hnsift::app::AppContext;
use hnsift::cli::{commands, Cli, Commands};
use hnsift::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so the TUI owns stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(page_size) = cli.page_size {
        config.search.page_size = page_size;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Search {
            query,
            pages,
            sort,
            reverse,
        } => {
            commands::search(&ctx, query.as_deref(), pages, sort, reverse).await?;
        }
        Commands::Tui { query } => {
            hnsift::tui::run(Arc::new(ctx), query).await?;
        }
    }

    Ok(())
}
