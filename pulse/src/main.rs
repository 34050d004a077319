use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::api::{create_router, AppState};
use pulse::config::Config;
use pulse::services::{SimulatedSource, SystemClock};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Real-time brand mention monitoring with sentiment, topics and spike alerts")]
struct Args {
    /// Start with the simulated feed paused
    #[arg(long)]
    no_simulator: bool,

    /// Number of back-dated mentions to seed at startup (overrides SEED_MENTIONS)
    #[arg(long)]
    seed: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if args.no_simulator {
        config.simulator.enabled = false;
    }
    if let Some(seed) = args.seed {
        config.simulator.seed_count = seed;
    }

    tracing::info!(
        max_store = config.pipeline.max_store,
        keywords = ?config.pipeline.keywords,
        "Initializing ingestion pipeline..."
    );
    let clock = Arc::new(SystemClock);
    let source = SimulatedSource::new(clock.clone());
    let state = AppState::new(config.clone(), clock, Box::new(source));

    if config.simulator.seed_count > 0 {
        state.feed.seed(config.simulator.seed_count);
    }

    let cancel_token = CancellationToken::new();

    tracing::info!(
        "Starting simulated feed... (interval={}ms, running={})",
        config.simulator.interval_ms,
        state.feed.is_running()
    );
    let feed = state.feed.clone();
    let token = cancel_token.child_token();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Simulated feed shutting down...");
                    break;
                }
                _ = tokio::time::sleep(feed.interval()) => {
                    if let Some(mention) = feed.run_once() {
                        tracing::debug!(id = %mention.id, "Simulated mention ingested");
                    }
                }
            }
        }
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Pulse starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  Event stream: http://{}/api/v1/events", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
