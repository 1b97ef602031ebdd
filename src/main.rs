//! Groupie tracker: artist browsing and filtering service.
//!
//! Single-binary Tokio application that:
//! 1. Loads configuration from config.toml, .env and the environment
//! 2. Caches the upstream artist collections with a refresh-on-expiry TTL
//! 3. Serves search, details and filter queries over HTTP

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use chrono::SecondsFormat;
use clap::Parser;
use tracing::{error, info};

use catalog::ArtistCache;
use groupie_client::GroupieClient;
use groupie_tracker::{build_router, config, AppState};

/// Groupie tracker service
#[derive(Parser)]
#[command(name = "groupie-tracker", about = "Browse and filter artists from the groupie tracker API")]
struct Cli {
    /// Port to listen on.
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Address to bind.
    #[arg(long)]
    host: Option<String>,

    /// Path to a TOML config file (defaults to ./config.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fetch the upstream collections once, print their sizes, then exit.
    #[arg(long)]
    check_upstream: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "groupie_tracker=info,catalog=info,groupie_client=info,tower_http=info".into()
            }),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!("Groupie tracker starting up...");

    let mut cfg = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    if let Some(host) = cli.host {
        cfg.server.host = host;
    }
    if let Err(e) = config::validate_config(&cfg) {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("Upstream: {} (timeout {}s)", cfg.upstream.base_url, cfg.upstream.timeout_secs);
    info!("Cache TTL: {}s", cfg.cache.ttl_secs);

    let client = match GroupieClient::new(&cfg.upstream) {
        Ok(c) => c,
        Err(e) => {
            error!("Upstream client initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    let cache = Arc::new(ArtistCache::new(
        Arc::new(client),
        Duration::from_secs(cfg.cache.ttl_secs),
    ));

    // ── Check-upstream mode ──────────────────────────────────────────
    if cli.check_upstream {
        info!("Running upstream check...");
        match cache.refresh_now().await {
            Ok(snapshot) => {
                info!(
                    "Upstream OK: {} artists, {} location sets, {} date sets, {} relation sets",
                    snapshot.artists.len(),
                    snapshot.locations.len(),
                    snapshot.dates.len(),
                    snapshot.relations.len()
                );
                if let Some(at) = snapshot.refreshed_at {
                    info!("Refreshed at {}", at.to_rfc3339_opts(SecondsFormat::Secs, true));
                }
                return;
            }
            Err(e) => {
                error!("Upstream check failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Warm the cache; a failure here is retried by the first request.
    if let Err(e) = cache.get().await {
        error!("Initial artist fetch failed: {}", e);
    }

    let addr: SocketAddr = match format!("{}:{}", cfg.server.host, cfg.server.port).parse() {
        Ok(a) => a,
        Err(e) => {
            error!("Invalid listen address {}:{}: {}", cfg.server.host, cfg.server.port, e);
            std::process::exit(1);
        }
    };

    let app = build_router(AppState::new(cache));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Listening on http://{}. Press Ctrl+C to stop.", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await;

    if let Err(e) = served {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Groupie tracker shut down.");
}
