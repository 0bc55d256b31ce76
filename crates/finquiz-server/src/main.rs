//! finquiz: HTTP server for the financial literacy quiz chatbot.
//!
//! Serves a small chat page plus a JSON API that generates questions,
//! grades answers, answers free-form questions, and resets the session.

mod backends;
mod error;
mod logging;
mod routes;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use crate::logging::Logging;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "finquiz", version, about = "Financial literacy quiz chatbot server")]
struct Args {
    /// Config file path override.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding `server.port`.
    #[arg(short, long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is unset (e.g. `finquiz=debug`).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets may come from a local .env; its absence is fine.
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    let logging = Logging::init(args.log_level.as_deref());
    tracing::info!("finquiz v{} starting", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = &dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = match &args.config {
        Some(path) => finquiz_config::load_config_from(path),
        None => finquiz_config::load_config(),
    }
    .context("failed to load configuration")?;
    logging.apply_config_level(&config.logging.level);
    tracing::debug!(
        schema_version = finquiz_config::CONFIG_SCHEMA_VERSION,
        config = %finquiz_config::config_to_json(&config),
        "effective configuration"
    );

    let secrets = finquiz_config::Secrets::from_env().context("missing required secret")?;
    let backends = backends::build(&config, &secrets)?;
    let state = AppState::new(backends, config.model.name.clone());
    let app = routes::app(state, config.server.cors_permissive);

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("finquiz listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
