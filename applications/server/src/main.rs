/// Crate Digger - album catalogue REST server
use axum::{extract::Request, ServiceExt};
use clap::{Parser, Subcommand};
use digger_server::{
    api, config::ServerConfig, seed::SeedData, services::AlbumService, state::AppState,
};
use digger_storage::SqliteAlbumRepository;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "digger-server")]
#[command(about = "Crate Digger album catalogue server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Flush the catalogue, reload the seed data and rebuild the search index
    Reload {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "digger_server=info,digger_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Reload { config } => {
            reload(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

/// Open the store and build the album service on top of it
async fn album_service(config: &ServerConfig) -> anyhow::Result<Arc<AlbumService>> {
    let pool = digger_storage::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    let repository = Arc::new(SqliteAlbumRepository::new(pool));
    tracing::info!("Album store connected");

    let seed = SeedData::load(config.reload.seed_dir.as_deref()).await?;

    Ok(Arc::new(AlbumService::new(
        repository,
        seed,
        config.reload.workers,
    )))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Crate Digger server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let albums = album_service(&config).await?;
    albums.ensure_index().await?;

    let app = api::app(AppState::new(albums), &config.server)?;

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

async fn reload(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let albums = album_service(&config).await?;

    let report = albums.reload().await?;

    println!("Inserted {} albums", report.inserted);
    for failure in &report.failed {
        println!("  record {} failed: {}", failure.index, failure.message);
    }

    Ok(())
}
