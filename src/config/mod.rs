// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`Config`] record assembled from them. Configuration is loaded once at
//! startup and shared read-only (`Arc<Config>`) with everything else.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PORT` | Server bind port | `3000` |
//! | `NODE_ENV` | Deployment environment name | `development` |
//! | `USE_MOCK` | Serve mock documents instead of calling MeridianLink (`true` only) | `false` |
//! | `ML_CLIENT_ID` | MeridianLink OAuth client id | empty |
//! | `ML_CLIENT_SECRET` | MeridianLink OAuth client secret | empty |
//! | `ML_OAUTH_URL` | OAuth token endpoint | [`DEFAULT_OAUTH_URL`] |
//! | `ML_AUTH_DOMAIN` | Web services domain | [`DEFAULT_AUTH_DOMAIN`] |
//! | `ML_EDOCS_DOMAIN` | eDocs domain | [`DEFAULT_EDOCS_DOMAIN`] |
//! | `ML_USERNAME` | Legacy username | empty |
//! | `ML_PASSWORD` | Legacy password | empty |
//! | `ML_API_KEY` | Legacy API key | empty |
//! | `PROCESSING_DELAY_MS` | Delay applied between processing steps | `2000` |
//!
//! ## Coercion
//!
//! Loading never fails. Missing, empty or malformed values fall back to the
//! defaults above:
//!
//! - integers take an optional sign and the leading run of decimal digits
//!   after any leading whitespace (`8080abc` is 8080, `80.5` is 80); no
//!   digits, or a value outside the field type, means the default
//! - `USE_MOCK` is true only for the exact string `true`
//! - strings are passed through untouched unless empty
//!
//! Strict checks (e.g. "credentials must be present before a live call")
//! belong to the consumer, see [`CredentialSettings::validate_live`].

pub mod env_file;
pub mod secret;
pub mod validate;

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

pub use secret::Secret;
pub use validate::ConfigError;

pub const PORT_ENV: &str = "PORT";
pub const NODE_ENV_ENV: &str = "NODE_ENV";
pub const USE_MOCK_ENV: &str = "USE_MOCK";
pub const CLIENT_ID_ENV: &str = "ML_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "ML_CLIENT_SECRET";
pub const OAUTH_URL_ENV: &str = "ML_OAUTH_URL";
pub const AUTH_DOMAIN_ENV: &str = "ML_AUTH_DOMAIN";
pub const EDOCS_DOMAIN_ENV: &str = "ML_EDOCS_DOMAIN";
pub const USERNAME_ENV: &str = "ML_USERNAME";
pub const PASSWORD_ENV: &str = "ML_PASSWORD";
pub const API_KEY_ENV: &str = "ML_API_KEY";
pub const PROCESSING_DELAY_MS_ENV: &str = "PROCESSING_DELAY_MS";

/// Environment variable name for the server bind address.
///
/// Read by the binary only; not part of [`Config`].
pub const HOST_ENV: &str = "HOST";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_OAUTH_URL: &str = "https://secure.mortgage.meridianlink.com/oauth/token";
pub const DEFAULT_AUTH_DOMAIN: &str = "https://webservices.mortgage.meridianlink.com";
pub const DEFAULT_EDOCS_DOMAIN: &str = "https://edocs.mortgage.meridianlink.com";
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

const PRODUCTION_ENVIRONMENT: &str = "production";

/// Fully resolved service configuration.
///
/// Every field is populated after loading; there is no "unset" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app: AppSettings,
    pub credentials: CredentialSettings,
    pub processing: ProcessingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub port: u16,
    pub environment: String,
    pub use_mock: bool,
}

/// MeridianLink credentials and service endpoints.
///
/// The OAuth pair is what live calls use; username/password/API key are the
/// legacy credentials kept for fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSettings {
    pub client_id: String,
    pub client_secret: Secret,
    pub oauth_url: String,
    pub auth_domain: String,
    pub edocs_domain: String,
    pub username: String,
    pub password: Secret,
    pub api_key: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSettings {
    pub delay_ms: u64,
}

impl Config {
    /// Build a configuration from an explicit environment mapping.
    pub fn load(env: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| env.get(name).cloned())
    }

    /// Build a configuration from the process environment.
    ///
    /// Variables that are not valid UTF-8 are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from the process environment, falling back to
    /// `file` (usually parsed from `.env`) for variables the environment
    /// does not set.
    pub fn from_env_with(file: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok().or_else(|| file.get(name).cloned()))
    }

    /// Build a configuration from any name -> value lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app: AppSettings {
                port: parse_or(lookup(PORT_ENV), DEFAULT_PORT),
                environment: string_or(lookup(NODE_ENV_ENV), DEFAULT_ENVIRONMENT),
                use_mock: lookup(USE_MOCK_ENV).as_deref() == Some("true"),
            },
            credentials: CredentialSettings {
                client_id: string_or(lookup(CLIENT_ID_ENV), ""),
                client_secret: string_or(lookup(CLIENT_SECRET_ENV), "").into(),
                oauth_url: string_or(lookup(OAUTH_URL_ENV), DEFAULT_OAUTH_URL),
                auth_domain: string_or(lookup(AUTH_DOMAIN_ENV), DEFAULT_AUTH_DOMAIN),
                edocs_domain: string_or(lookup(EDOCS_DOMAIN_ENV), DEFAULT_EDOCS_DOMAIN),
                username: string_or(lookup(USERNAME_ENV), ""),
                password: string_or(lookup(PASSWORD_ENV), "").into(),
                api_key: string_or(lookup(API_KEY_ENV), "").into(),
            },
            processing: ProcessingSettings {
                delay_ms: parse_or(lookup(PROCESSING_DELAY_MS_ENV), DEFAULT_PROCESSING_DELAY_MS),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppSettings {
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION_ENVIRONMENT
    }

    /// Human-readable run mode, as reported by the health endpoint.
    pub fn mode(&self) -> &'static str {
        if self.use_mock {
            "mock"
        } else {
            "live"
        }
    }
}

impl ProcessingSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn string_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .as_deref()
        .and_then(leading_integer)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(default)
}

/// Sign plus leading decimal digits, ignoring whatever follows.
fn leading_integer(raw: &str) -> Option<&str> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }
    Some(&raw[..sign_len + digits_len])
}
