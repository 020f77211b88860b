//! telepules-autocomplete
//!
//! Entry point: serves the autocomplete API or creates the index.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use telepules_autocomplete::{
    config::{self, Settings},
    engine::{OpenSearchClient, SearchBackend},
    web::{create_router, AppState},
    Autocompleter,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "telepules-autocomplete", version)]
#[command(about = "Case-insensitive prefix autocomplete backed by OpenSearch", long_about = None)]
struct Cli {
    /// Path to a settings.yml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Create the index with the autocomplete analyzer and exit
    CreateIndex,
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    info!("Starting telepules-autocomplete v{}", telepules_autocomplete::VERSION);

    let settings = config::load(cli.config.as_deref())?;
    let backend: Arc<dyn SearchBackend> =
        Arc::new(OpenSearchClient::with_settings(&settings.opensearch)?);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings, backend).await,
        Commands::CreateIndex => create_index(&settings, backend).await,
    }
}

async fn serve(settings: Settings, backend: Arc<dyn SearchBackend>) -> Result<()> {
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    let state = AppState::new(settings, backend)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_index(settings: &Settings, backend: Arc<dyn SearchBackend>) -> Result<()> {
    info!("Creating index {} with autocomplete settings", settings.opensearch.index);

    let outcome = Autocompleter::from_settings(backend, settings)
        .create_index()
        .await?;

    info!("Index {}: {}", settings.opensearch.index, outcome.as_str());
    Ok(())
}
