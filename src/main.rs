use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod builder;
mod cli;
mod config;
mod detector;
mod errors;
mod origin;

use builder::OriginDataBuilder;
use detector::TapbuyRequestDetector;

/// Shared application state passed to handlers.
pub struct AppState {
    pub detector: TapbuyRequestDetector,
    pub builder: OriginDataBuilder,
    pub config: config::Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tapbuy_adyen=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Serve { port }) => run_server(cfg, port).await,
        Some(cli::Commands::Normalize { origin }) => match origin::normalize_origin(&origin) {
            Some(normalized) => {
                println!("{normalized}");
                Ok(())
            }
            None => Err(anyhow::anyhow!("origin {:?} did not normalize", origin)),
        },
        Some(cli::Commands::Extract) => {
            use std::io::Read;
            let mut raw = Vec::new();
            std::io::stdin()
                .read_to_end(&mut raw)
                .context("failed to read request body from stdin")?;
            match origin::extract_origin(&raw) {
                Some(extracted) => {
                    println!("{extracted}");
                    Ok(())
                }
                None => Err(anyhow::anyhow!("no usable origin in request body")),
            }
        }
        None => run_server(cfg, None).await,
    };

    if let Err(ref e) = result {
        eprintln!("Error: {:?}", e);
    }
    result
}

async fn run_server(cfg: config::Config, port_override: Option<u16>) -> anyhow::Result<()> {
    let port = port_override.unwrap_or(cfg.port);

    let detector = TapbuyRequestDetector::from_config(&cfg)?;
    let builder = OriginDataBuilder::new(cfg.default_origin.clone());

    let state = Arc::new(AppState {
        detector,
        builder,
        config: cfg,
    });

    let app = axum::Router::new()
        // Health endpoint (no auth)
        .route("/healthz", axum::routing::get(|| async { "ok" }))
        // Origin-data hook — nested under /api/v1
        .nest("/api/v1", api::api_router(state.clone()))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Tapbuy Adyen origin gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
