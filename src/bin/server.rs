//! Anime Catalog Server Binary
//!
//! Starts the HTTP server for the catalog.

use std::sync::Arc;

use anime_catalog::network::Server;
use anime_catalog::{CatalogService, Config, JsonFileStore, WriteStrategy};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Anime Catalog Server
#[derive(Parser, Debug)]
#[command(name = "anime-catalog-server")]
#[command(about = "CRUD HTTP API over a JSON anime catalog")]
#[command(version)]
struct Args {
    /// JSON file holding the collection
    #[arg(short, long, default_value = "./data/anime.json")]
    data_file: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Run mutating requests one at a time
    #[arg(short, long)]
    serialize_writes: bool,

    /// Create an empty collection file if none exists
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,anime_catalog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Anime Catalog Server v{}", anime_catalog::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    let write_strategy = if args.serialize_writes {
        WriteStrategy::Serialized
    } else {
        WriteStrategy::Unguarded
    };

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .listen_addr(&args.listen)
        .write_strategy(write_strategy)
        .build();

    tracing::info!("Write strategy: {:?}", config.write_strategy);

    let store = JsonFileStore::new(&config.data_file);

    if args.init {
        match store.create_if_missing().await {
            Ok(true) => tracing::info!("Created empty collection at {}", store.path().display()),
            Ok(false) => tracing::debug!("Collection file already exists"),
            Err(e) => {
                tracing::error!("Failed to create collection file: {}", e);
                std::process::exit(1);
            }
        }
    }

    let service = Arc::new(CatalogService::with_strategy(store, config.write_strategy));
    let server = Arc::new(Server::new(config, service));

    // Set up Ctrl+C handler
    let signal_server = Arc::clone(&server);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, initiating shutdown...");
            signal_server.shutdown();
        }
    });

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
