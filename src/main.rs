// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::error::Error;

use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coursework_server::{
    api::router,
    auth::TokenIssuer,
    config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER},
    seed::seed_demo_account,
    state::AppState,
    storage::Database,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    if config.uses_default_secret() {
        warn!("JWT_SECRET is not set, signing tokens with the development secret");
    }

    let db = Database::connect(&config.database_url).await?;
    db.init_schema().await?;
    info!(database_url = %config.database_url, "database ready");

    if config.seed_demo_user {
        seed_demo_account(&db).await?;
    }

    let state = AppState::new(db, TokenIssuer::from_config(&config));
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Coursework server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
