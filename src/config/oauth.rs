// ABOUTME: BodyMedia strategy options with fixed endpoint defaults and environment loading
// ABOUTME: Mirrors the options object hosts pass when constructing the strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{env_config, oauth};
use crate::oauth1::OAuth1Config;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::env;
use tracing::{info, warn};

/// Options accepted when constructing the `BodyMedia` strategy
///
/// Endpoint URLs, the session key and the profile URL fall back to the fixed
/// `BodyMedia` values when omitted. The serialized names match the keys host
/// applications already use (`consumerKey`, `callbackURL`, ...).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOptions {
    /// Identifies the application to `BodyMedia`; also sent as `api_key`
    #[serde(rename = "consumerKey")]
    pub consumer_key: String,
    /// Establishes ownership of the consumer key
    #[serde(rename = "consumerSecret")]
    pub consumer_secret: String,
    /// URL `BodyMedia` redirects to after the user authorizes
    #[serde(rename = "callbackURL", default)]
    pub callback_url: Option<String>,
    /// Temporary credential request endpoint
    #[serde(rename = "requestTokenURL", default = "default_request_token_url")]
    pub request_token_url: String,
    /// Token credential request endpoint
    #[serde(rename = "accessTokenURL", default = "default_access_token_url")]
    pub access_token_url: String,
    /// Resource owner authorization endpoint
    #[serde(rename = "userAuthorizationURL", default = "default_user_authorization_url")]
    pub user_authorization_url: String,
    /// Session key holding the request token between redirect and callback
    #[serde(rename = "sessionKey", default = "default_session_key")]
    pub session_key: String,
    /// User info endpoint queried after the handshake
    #[serde(rename = "profileURL", default = "default_profile_url")]
    pub profile_url: String,
}

fn default_request_token_url() -> String {
    oauth::BODYMEDIA_REQUEST_TOKEN_URL.to_owned()
}

fn default_access_token_url() -> String {
    oauth::BODYMEDIA_ACCESS_TOKEN_URL.to_owned()
}

fn default_user_authorization_url() -> String {
    oauth::BODYMEDIA_USER_AUTHORIZATION_URL.to_owned()
}

fn default_session_key() -> String {
    oauth::BODYMEDIA_SESSION_KEY.to_owned()
}

fn default_profile_url() -> String {
    oauth::BODYMEDIA_USER_INFO_URL.to_owned()
}

impl std::fmt::Debug for StrategyOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyOptions")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .field("request_token_url", &self.request_token_url)
            .field("access_token_url", &self.access_token_url)
            .field("user_authorization_url", &self.user_authorization_url)
            .field("session_key", &self.session_key)
            .field("profile_url", &self.profile_url)
            .finish()
    }
}

impl StrategyOptions {
    /// Options with the given credentials and every other value defaulted
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            callback_url: None,
            request_token_url: default_request_token_url(),
            access_token_url: default_access_token_url(),
            user_authorization_url: default_user_authorization_url(),
            session_key: default_session_key(),
            profile_url: default_profile_url(),
        }
    }

    /// Load options from environment variables
    ///
    /// Missing credentials load as empty strings; strategy construction
    /// rejects them. The callback URL defaults to
    /// `{BASE_URL}/auth/bodymedia/callback`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var(env_config::BASE_URL).unwrap_or_else(|_| oauth::DEFAULT_BASE_URL.to_owned());
        let callback_url = env::var(env_config::CALLBACK_URL)
            .unwrap_or_else(|_| format!("{base_url}{}", oauth::BODYMEDIA_CALLBACK_PATH));

        Self {
            consumer_key: env::var(env_config::CONSUMER_KEY).unwrap_or_default(),
            consumer_secret: env::var(env_config::CONSUMER_SECRET).unwrap_or_default(),
            callback_url: Some(callback_url),
            request_token_url: env_or(env_config::REQUEST_TOKEN_URL, default_request_token_url),
            access_token_url: env_or(env_config::ACCESS_TOKEN_URL, default_access_token_url),
            user_authorization_url: env_or(
                env_config::USER_AUTHORIZATION_URL,
                default_user_authorization_url,
            ),
            session_key: env_or(env_config::SESSION_KEY, default_session_key),
            profile_url: env_or(env_config::USER_INFO_URL, default_profile_url),
        }
    }

    /// Set the callback URL
    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Override the request token endpoint
    #[must_use]
    pub fn with_request_token_url(mut self, url: impl Into<String>) -> Self {
        self.request_token_url = url.into();
        self
    }

    /// Override the access token endpoint
    #[must_use]
    pub fn with_access_token_url(mut self, url: impl Into<String>) -> Self {
        self.access_token_url = url.into();
        self
    }

    /// Override the user authorization endpoint
    #[must_use]
    pub fn with_user_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.user_authorization_url = url.into();
        self
    }

    /// Override the session key
    #[must_use]
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = session_key.into();
        self
    }

    /// Override the user info endpoint
    #[must_use]
    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = url.into();
        self
    }

    /// First 8 hex chars of the SHA256 of the consumer secret, for diagnostics
    #[must_use]
    pub fn secret_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.consumer_secret.as_bytes());
        format!("{digest:x}").chars().take(8).collect()
    }

    /// Log credential diagnostics without exposing the secret
    ///
    /// Returns `false` when the consumer key or secret is empty.
    pub fn validate_and_log(&self) -> bool {
        if self.consumer_key.trim().is_empty() {
            warn!("BodyMedia strategy: consumer_key is missing or empty");
            return false;
        }
        if self.consumer_secret.is_empty() {
            warn!("BodyMedia strategy: consumer_secret is missing or empty");
            return false;
        }
        info!(
            "BodyMedia strategy: consumer_key={}, secret_length={}, secret_fingerprint={}",
            self.consumer_key,
            self.consumer_secret.len(),
            self.secret_fingerprint()
        );
        true
    }
}

impl From<&StrategyOptions> for OAuth1Config {
    fn from(options: &StrategyOptions) -> Self {
        Self {
            consumer_key: options.consumer_key.clone(),
            consumer_secret: options.consumer_secret.clone(),
            request_token_url: options.request_token_url.clone(),
            access_token_url: options.access_token_url.clone(),
            user_authorization_url: options.user_authorization_url.clone(),
            callback_url: options.callback_url.clone(),
        }
    }
}

fn env_or(name: &str, default: fn() -> String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(default)
}
