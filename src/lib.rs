// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! eDocs Bridge - MeridianLink Document Service
//!
//! This crate provides the configuration core and HTTP service shell for the
//! MeridianLink eDocs bridge.
//!
//! ## Modules
//!
//! - `config` - Environment-driven configuration (fail-open defaults, secrets)
//! - `api` - HTTP API handlers (Axum)
//! - `logging` - `tracing` subscriber setup

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
