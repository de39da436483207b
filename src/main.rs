use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sirh_api::config;
use sirh_api::store::Repository;

#[derive(Parser)]
#[command(name = "sirh-api", version, about = "Mock HR backend API")]
struct Args {
    /// Listening port (overrides SIRH_PORT / PORT)
    #[arg(long)]
    port: Option<u16>,

    /// JSON data file (overrides SIRH_DATA_FILE)
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SIRH_PORT, SIRH_DATA_FILE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = config::config();
    tracing::info!("starting sirh-api in {:?} mode", config.environment);

    let data_file = args
        .data_file
        .unwrap_or_else(|| config.store.data_file.clone());
    let repo = Repository::open(&data_file)
        .with_context(|| format!("failed to load data file {}", data_file.display()))?;
    tracing::info!(
        data_file = %data_file.display(),
        collections = repo.collection_names().len(),
        "document loaded"
    );

    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", config.server.bind, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("sirh-api listening on http://{}", bind_addr);

    axum::serve(listener, sirh_api::app(repo)).await?;
    Ok(())
}
