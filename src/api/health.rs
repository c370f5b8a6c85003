// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::config::{Config, ConfigError};
use crate::state::AppState;

/// Health check response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall health status ("ok" or "degraded").
    pub status: String,
    /// Individual health checks and their results.
    pub checks: HealthChecks,
}

/// Individual health check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Run mode ("mock" or "live").
    pub mode: String,
    /// MeridianLink credential status: "mock", "ok", "missing" or "invalid".
    pub credentials: String,
}

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Check whether live MeridianLink calls could be made with this config.
///
/// Mock mode never needs credentials.
fn check_credentials(config: &Config) -> &'static str {
    if config.app.use_mock {
        return "mock";
    }

    match config.credentials.validate_live() {
        Ok(()) => "ok",
        Err(e) => {
            debug!(error = %e, "MeridianLink credentials not usable");
            match e {
                ConfigError::MissingCredential(_) => "missing",
                ConfigError::InvalidUrl { .. } => "invalid",
            }
        }
    }
}

/// Health check endpoint handler.
///
/// Returns 200 if all checks pass, 503 if any check fails.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ReadyResponse),
        (status = 503, description = "Service is unhealthy", body = ReadyResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let credentials = check_credentials(&state.config);
    let all_ok = matches!(credentials, "mock" | "ok");

    let response = ReadyResponse {
        status: if all_ok { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            mode: state.config.app.mode().to_string(),
            credentials: credentials.to_string(),
        },
    };

    let status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
/// Does not check dependencies - use readiness for that.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe handler.
///
/// Returns 200 only if the service could serve documents right now.
/// Use for Kubernetes readiness probes.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service is not ready", body = ReadyResponse)
    )
)]
pub async fn readiness(state: State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    health(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn state_with(pairs: &[(&str, &str)]) -> AppState {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppState::new(Config::load(&env))
    }

    #[tokio::test]
    async fn mock_mode_is_healthy_without_credentials() {
        let (status, Json(body)) = health(State(state_with(&[("USE_MOCK", "true")]))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.checks.mode, "mock");
        assert_eq!(body.checks.credentials, "mock");
    }

    #[tokio::test]
    async fn live_mode_without_credentials_is_degraded() {
        let (status, Json(body)) = health(State(AppState::default())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.checks.mode, "live");
        assert_eq!(body.checks.credentials, "missing");
    }

    #[tokio::test]
    async fn live_mode_with_bad_url_is_invalid() {
        let state = state_with(&[
            ("ML_CLIENT_ID", "id"),
            ("ML_CLIENT_SECRET", "secret"),
            ("ML_AUTH_DOMAIN", "webservices"),
        ]);
        let (status, Json(body)) = readiness(State(state)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.checks.credentials, "invalid");
    }

    #[tokio::test]
    async fn live_mode_with_credentials_is_ready() {
        let state = state_with(&[("ML_CLIENT_ID", "id"), ("ML_CLIENT_SECRET", "secret")]);
        let (status, Json(body)) = readiness(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.checks.credentials, "ok");
    }

    #[tokio::test]
    async fn liveness_always_ok() {
        let Json(body) = liveness().await;
        assert_eq!(body.status, "ok");
    }
}
