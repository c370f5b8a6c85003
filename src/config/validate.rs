// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Consumer-side checks on a loaded [`Config`](super::Config).
//!
//! Loading itself is fail-open. Components that are about to talk to
//! MeridianLink call [`CredentialSettings::validate_live`] first and refuse
//! to proceed on error.

use url::Url;

use super::{
    CredentialSettings, AUTH_DOMAIN_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV, EDOCS_DOMAIN_ENV,
    OAUTH_URL_ENV,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MeridianLink credential missing: {0}")]
    MissingCredential(&'static str),

    #[error("MeridianLink URL in {name} is invalid: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}

impl CredentialSettings {
    /// Check that the OAuth credentials and endpoints are usable for live
    /// API calls.
    ///
    /// Reports the first problem found, checking the client id, then the
    /// client secret, then each endpoint URL.
    pub fn validate_live(&self) -> Result<(), ConfigError> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential(CLIENT_ID_ENV));
        }
        if self.client_secret.expose().trim().is_empty() {
            return Err(ConfigError::MissingCredential(CLIENT_SECRET_ENV));
        }

        check_url(OAUTH_URL_ENV, &self.oauth_url)?;
        check_url(AUTH_DOMAIN_ENV, &self.auth_domain)?;
        check_url(EDOCS_DOMAIN_ENV, &self.edocs_domain)?;

        Ok(())
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            name,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            name,
            reason: "missing host".to_string(),
        });
    }

    Ok(())
}
