// ABOUTME: Strategy-level error type for the OAuth handshake and profile fetch
// ABOUTME: Wraps client failures with context and converts into the host-facing AppError
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication Errors
//!
//! `AuthError` is what strategies return to the host framework:
//!
//! - `InternalOAuth` wraps an [`OAuthError`] with a short description of the
//!   step that failed. The original error stays reachable through `source()`.
//! - `ProfileParse` passes the JSON parser's error through unmodified.
//!
//! Host applications that want a stable code and HTTP status convert into
//! [`AppError`] with `From`.

use crate::oauth1::OAuthError;
use thiserror::Error;

pub use bodymedia_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};

/// Errors raised while authenticating through an OAuth strategy
#[derive(Debug, Error)]
pub enum AuthError {
    /// An OAuth client call failed; `source` is the original error
    #[error("{message}")]
    InternalOAuth {
        /// Which step failed
        message: &'static str,
        /// Underlying client error
        #[source]
        source: OAuthError,
    },

    /// The profile response was not the expected JSON document
    #[error(transparent)]
    ProfileParse(serde_json::Error),

    /// The callback arrived without matching request-token state in the session
    #[error("Failed to find request token in session")]
    MissingRequestToken,

    /// Session state could not be stored or read back
    #[error("Invalid OAuth session state: {0}")]
    Session(#[source] serde_json::Error),

    /// The application's verify callback reported an error
    #[error("Verification failed: {0}")]
    Verify(String),
}

impl AuthError {
    /// Wrap a client error with the step that failed
    #[must_use]
    pub const fn internal_oauth(message: &'static str, source: OAuthError) -> Self {
        Self::InternalOAuth { message, source }
    }

    /// HTTP status the provider answered with, when a client call was rejected
    #[must_use]
    pub const fn provider_status(&self) -> Option<u16> {
        match self {
            Self::InternalOAuth { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Wrap an application-level verification failure
    #[must_use]
    pub fn verify(message: impl Into<String>) -> Self {
        Self::Verify(message.into())
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        let code = match &error {
            AuthError::InternalOAuth { source, .. } => match source {
                OAuthError::Configuration(_) | OAuthError::InvalidUrl(_) => ErrorCode::ConfigInvalid,
                OAuthError::Http { status: 401, .. } => ErrorCode::ExternalAuthFailed,
                OAuthError::Transport(_)
                | OAuthError::Http { .. }
                | OAuthError::InvalidResponse(_) => ErrorCode::ExternalServiceError,
            },
            AuthError::ProfileParse(_) => ErrorCode::InvalidFormat,
            AuthError::MissingRequestToken => ErrorCode::AuthInvalid,
            AuthError::Verify(_) => ErrorCode::AuthDenied,
            AuthError::Session(_) => ErrorCode::SerializationError,
        };
        let details = error
            .provider_status()
            .map_or(serde_json::Value::Null, |status| {
                serde_json::json!({ "provider_status": status })
            });
        let message = error.to_string();
        Self::new(code, message)
            .with_details(details)
            .with_source(error)
    }
}
