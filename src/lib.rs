// ABOUTME: Library entry point for the BodyMedia OAuth 1.0a authentication strategy
// ABOUTME: Handshake driver, OAuth client, profile normalization and ambient config/logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `BodyMedia` Auth
//!
//! OAuth 1.0a authentication against `BodyMedia`'s API for host web frameworks.
//!
//! ## Architecture
//!
//! - **Strategy**: the `Strategy` trait hosts dispatch to, and the generic
//!   `OAuthStrategy` handshake driver behind it
//! - **Providers**: `BodyMedia` hooks (`api_key` injection, profile fetch)
//! - **`OAuth1`**: capability trait over an OAuth 1.0a client plus the
//!   reqwest-backed, `HMAC-SHA1` signing implementation
//! - **Config**: strategy options with fixed `BodyMedia` defaults
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodymedia_auth::config::StrategyOptions;
//! use bodymedia_auth::errors::AuthError;
//! use bodymedia_auth::models::Profile;
//! use bodymedia_auth::providers::BodyMediaStrategy;
//! use bodymedia_auth::strategy::{AuthAction, Strategy};
//! use std::collections::HashMap;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let strategy = BodyMediaStrategy::new(
//!     StrategyOptions::from_env(),
//!     |_token: &str, _secret: &str, profile: Profile| -> Result<Option<String>, AuthError> {
//!         Ok(Some(profile.id))
//!     },
//! )?;
//!
//! let mut session: HashMap<String, serde_json::Value> = HashMap::new();
//! let action: AuthAction<String> = strategy.begin(&mut session).await?;
//! if let AuthAction::Redirect(url) = action {
//!     println!("Send the user to {url}");
//! }
//! # Ok(())
//! # }
//! ```

// Re-export core modules so `crate::constants` resolves everywhere
pub use bodymedia_core::constants;

/// Strategy configuration
pub mod config;

/// Strategy error types and the host-facing `AppError`
pub mod errors;

/// Shared HTTP client for OAuth and profile calls
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Normalized profile model
pub mod models;

/// OAuth 1.0a client
pub mod oauth1;

/// Provider implementations
pub mod providers;

/// Strategy contracts and the generic OAuth 1.0a handshake
pub mod strategy;

pub use config::StrategyOptions;
pub use errors::AuthError;
pub use models::Profile;
pub use providers::{BodyMedia, BodyMediaStrategy};
pub use strategy::{AuthAction, CallbackParams, SessionStore, Strategy, StrategyRegistry};
