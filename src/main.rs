// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::env;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use edocs_bridge::{
    api::router,
    config::{env_file, Config, DEFAULT_HOST, HOST_ENV},
    logging::{self, LogFormat},
    state::AppState,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // The env file is never exported, so RUST_LOG and LOG_FORMAT have to be
    // set in the real environment.
    logging::init(LogFormat::from_env());

    let env_path = env_file::env_file_path();
    let file_vars = env_file::load_env_file(&env_path);
    info!(
        path = %env_path.display(),
        variables = file_vars.len(),
        "Environment file processed"
    );

    let config = Config::from_env_with(&file_vars);
    info!(
        environment = %config.app.environment,
        port = config.app.port,
        mode = config.app.mode(),
        processing_delay_ms = config.processing.delay_ms,
        "Configuration loaded"
    );
    debug!(config = ?config, "Resolved configuration");

    if config.app.use_mock {
        if config.app.is_production() {
            warn!("Mock mode is enabled in production");
        }
    } else if let Err(e) = config.credentials.validate_live() {
        warn!(error = %e, "Live mode without usable MeridianLink credentials; readiness will fail");
    }

    let host = env::var(HOST_ENV)
        .ok()
        .or_else(|| file_vars.get(HOST_ENV).cloned())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = config.app.port;

    let app = router(AppState::new(config));

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!(addr = %listener.local_addr()?, "eDocs bridge listening (docs at /docs)");

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
                return;
            }
            info!("Shutdown signal received");
            shutdown.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}
