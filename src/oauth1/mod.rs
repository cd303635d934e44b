// ABOUTME: OAuth 1.0a client capability interface and shared token types
// ABOUTME: Strategies depend on the OAuthClient trait, not on a concrete HTTP client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # OAuth 1.0a Client
//!
//! The three-legged handshake is driven through the [`OAuthClient`] trait:
//!
//! 1. [`OAuthClient::request_token`] obtains temporary credentials.
//! 2. [`OAuthClient::authorization_url`] builds the URL the user is sent to.
//! 3. [`OAuthClient::access_token`] exchanges the verifier for token credentials.
//!
//! [`OAuthClient::get`] issues signed `GET` requests with the token credentials.
//! [`OAuth1Client`] is the reqwest-backed implementation.

/// Reqwest-backed OAuth 1.0a client
pub mod client;
/// `HMAC-SHA1` request signing
pub mod signer;

pub use client::{OAuth1Client, OAuth1Config};
pub use signer::{OAuthSigner, SigningContext};

use async_trait::async_trait;
use std::collections::BTreeMap;

/// Extra request parameters, ordered for deterministic URLs and signatures
pub type TokenParams = BTreeMap<String, String>;

/// Token credentials returned by the request-token and access-token endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCredentials {
    /// `oauth_token`
    pub token: String,
    /// `oauth_token_secret`
    pub token_secret: String,
    /// Every other parameter the provider returned
    pub params: TokenParams,
}

impl TokenCredentials {
    /// Whether the provider confirmed the `oauth_callback` (request tokens only)
    #[must_use]
    pub fn callback_confirmed(&self) -> bool {
        self.params
            .get("oauth_callback_confirmed")
            .is_some_and(|v| v == "true")
    }
}

/// OAuth 1.0a client errors
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Missing or unusable client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Endpoint or resource URL failed to parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection, TLS or timeout failure
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the provider
    #[error("Provider returned HTTP {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Token response missing required fields
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl OAuthError {
    /// HTTP status returned by the provider, if the request got that far
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Capability interface over an OAuth 1.0a client
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// Obtain temporary credentials, sending `params` with the request
    async fn request_token(&self, params: &TokenParams) -> Result<TokenCredentials, OAuthError>;

    /// Build the user authorization URL for a request token, appending `params`
    fn authorization_url(&self, token: &str, params: &TokenParams) -> Result<String, OAuthError>;

    /// Exchange an authorized request token for token credentials
    async fn access_token(
        &self,
        token: &str,
        token_secret: &str,
        verifier: &str,
    ) -> Result<TokenCredentials, OAuthError>;

    /// Signed `GET` with token credentials, returning the body on a 2xx response
    async fn get(&self, url: &str, token: &str, token_secret: &str) -> Result<String, OAuthError>;
}
