// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `.env` file support.
//!
//! The binary reads the file into a mapping and hands it to
//! [`Config::from_env_with`](super::Config::from_env_with); the process
//! environment is never modified. Variables already present in the process
//! environment win over the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Environment variable overriding the `.env` file location.
pub const DOTENV_PATH_ENV: &str = "DOTENV_PATH";

pub const DEFAULT_DOTENV_PATH: &str = ".env";

/// Location of the `.env` file to load at startup.
pub fn env_file_path() -> PathBuf {
    std::env::var(DOTENV_PATH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DOTENV_PATH))
}

/// Parse `path` into a mapping without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    dotenvy::from_path_iter(path)?.collect()
}

/// Read `path` for startup, treating a missing file as empty.
///
/// A malformed or unreadable file is logged and also treated as empty.
pub fn load_env_file(path: &Path) -> HashMap<String, String> {
    match read_env_file(path) {
        Ok(vars) => {
            debug!(path = %path.display(), count = vars.len(), "Loaded environment file");
            vars
        }
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "No environment file found");
            HashMap::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load environment file");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    fn write_env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn read_env_file_feeds_the_loader() {
        let file = write_env_file(
            "# local overrides\nPORT=5050\nUSE_MOCK=true\nML_CLIENT_ID=\"quoted id\"\n",
        );

        let env = read_env_file(file.path()).unwrap();
        let config = Config::load(&env);

        assert_eq!(config.app.port, 5050);
        assert!(config.app.use_mock);
        assert_eq!(config.credentials.client_id, "quoted id");
        assert_eq!(config.processing.delay_ms, 2000);
    }

    #[test]
    fn read_env_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_env_file(&dir.path().join("absent.env")).unwrap_err();
        assert!(err.not_found());
    }

    #[test]
    fn load_env_file_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_file(&dir.path().join("absent.env")).is_empty());
    }

    #[test]
    fn load_env_file_returns_values_without_exporting_them() {
        let file = write_env_file("EDOCS_BRIDGE_ENV_FILE_TEST_VAR=from-file\n");

        let vars = load_env_file(file.path());
        assert_eq!(
            vars.get("EDOCS_BRIDGE_ENV_FILE_TEST_VAR").map(String::as_str),
            Some("from-file")
        );
        assert!(std::env::var("EDOCS_BRIDGE_ENV_FILE_TEST_VAR").is_err());
    }
}
