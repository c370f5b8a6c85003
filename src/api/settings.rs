// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only view of the running configuration.
//!
//! Secrets are reported as present/absent only; their values never leave the
//! process.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::state::AppState;

/// Non-secret view of the loaded configuration.
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    /// Deployment environment name (`NODE_ENV`).
    pub environment: String,
    /// Port the server was configured with.
    pub port: u16,
    /// Run mode ("mock" or "live").
    pub mode: String,
    /// Delay between processing steps, in milliseconds.
    pub processing_delay_ms: u64,
    pub endpoints: EndpointSettings,
    pub credentials: CredentialPresence,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointSettings {
    pub oauth_url: String,
    pub auth_domain: String,
    pub edocs_domain: String,
}

/// Which credentials are set. Values are never included.
#[derive(Debug, Serialize, ToSchema)]
pub struct CredentialPresence {
    pub client_id: bool,
    pub client_secret: bool,
    pub username: bool,
    pub password: bool,
    pub api_key: bool,
}

impl From<&Config> for SettingsResponse {
    fn from(config: &Config) -> Self {
        let creds = &config.credentials;
        Self {
            environment: config.app.environment.clone(),
            port: config.app.port,
            mode: config.app.mode().to_string(),
            processing_delay_ms: config.processing.delay_ms,
            endpoints: EndpointSettings {
                oauth_url: creds.oauth_url.clone(),
                auth_domain: creds.auth_domain.clone(),
                edocs_domain: creds.edocs_domain.clone(),
            },
            credentials: CredentialPresence {
                client_id: !creds.client_id.is_empty(),
                client_secret: !creds.client_secret.is_empty(),
                username: !creds.username.is_empty(),
                password: !creds.password.is_empty(),
                api_key: !creds.api_key.is_empty(),
            },
        }
    }
}

/// Return the running configuration with secrets masked.
#[utoipa::path(
    get,
    path = "/v1/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Current configuration", body = SettingsResponse)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse::from(state.config.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn settings_report_presence_not_values() {
        let mut env = HashMap::new();
        env.insert("ML_CLIENT_SECRET".to_string(), "very-secret".to_string());
        env.insert("PROCESSING_DELAY_MS".to_string(), "10".to_string());
        let state = AppState::new(Config::load(&env));

        let Json(body) = get_settings(State(state)).await;

        assert_eq!(body.environment, "development");
        assert_eq!(body.port, 3000);
        assert_eq!(body.mode, "live");
        assert_eq!(body.processing_delay_ms, 10);
        assert!(body.credentials.client_secret);
        assert!(!body.credentials.client_id);
        assert!(!body.credentials.api_key);

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("very-secret"));
    }
}
