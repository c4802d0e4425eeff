//! Tonematch Web Server Binary
//!
//! This binary starts the Tonematch web server that provides the REST API
//! for the web frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 8000, no catalogs loaded)
//! tonematch-web
//!
//! # Specify port and catalogs
//! tonematch-web --port 8080 --catalog products.json --outfits outfits.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonematch::catalog::{OutfitCatalog, ProductCatalog};
use tonematch::classifier::UnconfiguredClassifier;
use tonematch::config::Config;
use tonematch::web::{self, AppState};

/// Tonematch Web Server - REST API for the web frontend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Product catalog JSON file. Overrides the configured path.
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Outfit catalog JSON file. Overrides the configured path.
    #[arg(long, value_name = "FILE")]
    outfits: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let config = Config::load().unwrap_or_default();

    // CLI arguments take precedence over configured paths
    let products_path = args.catalog.or_else(|| config.catalogs.products.clone());
    let outfits_path = args.outfits.or_else(|| config.catalogs.outfits.clone());

    let products = match products_path {
        Some(path) => {
            let catalog = ProductCatalog::load(&path)?;
            info!("Loaded {} products from {}", catalog.len(), path.display());
            Some(catalog)
        }
        None => {
            warn!("No product catalog configured; /data/ will be unavailable");
            None
        }
    };

    let outfits = match outfits_path {
        Some(path) => {
            let catalog = OutfitCatalog::load(&path)?;
            info!("Loaded {} outfits from {}", catalog.len(), path.display());
            Some(catalog)
        }
        None => {
            warn!("No outfit catalog configured; /api/random-outfits will report errors");
            None
        }
    };

    if config.classifier.endpoint.is_none() {
        warn!("No classifier endpoint configured; classification requests will fail");
    }

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let state = AppState::new(config, products, outfits, Arc::new(UnconfiguredClassifier));

    // Start the server
    web::run_server(state, addr).await
}
