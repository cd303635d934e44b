// ABOUTME: Constants module grouping provider identifiers and environment variable names
// ABOUTME: Re-exports the OAuth endpoint constants used by the strategy defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

/// `BodyMedia` OAuth endpoints and session defaults
pub mod oauth;

/// Environment variable names read by the configuration layer
pub mod env_config;

/// Service names used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const BODYMEDIA_AUTH: &str = "bodymedia-auth";
}

pub use oauth::*;
