// ABOUTME: BodyMedia OAuth 1.0a strategy: api_key injection and user profile normalization
// ABOUTME: Plugs BodyMedia specifics into the generic OAuth strategy driver
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! `BodyMedia` provider implementation.
//!
//! `BodyMedia`'s API sits behind a Mashery gateway that demands an `api_key`
//! query parameter on every call, duplicating the OAuth consumer key. This
//! module adds it to the request-token call and the authorization redirect,
//! and reads the user info endpoint once the handshake completes.
//!
//! ```rust,no_run
//! use bodymedia_auth::config::StrategyOptions;
//! use bodymedia_auth::errors::AuthError;
//! use bodymedia_auth::models::Profile;
//! use bodymedia_auth::providers::bodymedia::BodyMediaStrategy;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = StrategyOptions::new("123-456-789", "shhh-its-a-secret")
//!     .with_callback_url("https://www.example.net/auth/bodymedia/callback");
//!
//! let strategy = BodyMediaStrategy::new(
//!     options,
//!     |_token: &str, _secret: &str, profile: Profile| -> Result<Option<String>, AuthError> {
//!         Ok(Some(profile.id))
//!     },
//! )?;
//! # let _ = strategy;
//! # Ok(())
//! # }
//! ```

use crate::config::StrategyOptions;
use crate::constants::oauth::{
    API_KEY_PARAM, BODYMEDIA_PROFILE_PROVIDER, BODYMEDIA_STRATEGY_NAME,
};
use crate::errors::AuthError;
use crate::models::Profile;
use crate::oauth1::{OAuth1Client, OAuth1Config, OAuthClient, OAuthError, TokenParams};
use crate::strategy::{OAuthStrategy, ProviderHooks};
use async_trait::async_trait;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// `BodyMedia` strategy with verify callback `V`
pub type BodyMediaStrategy<V> = OAuthStrategy<BodyMedia, V>;

/// `BodyMedia` provider hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMedia;

impl<V> OAuthStrategy<BodyMedia, V> {
    /// Create the strategy with the reqwest-backed OAuth client
    ///
    /// # Errors
    ///
    /// Propagates the client's `OAuthError::Configuration` when the consumer
    /// key or secret is empty, or an endpoint URL is unusable
    pub fn new(options: StrategyOptions, verify: V) -> Result<Self, OAuthError> {
        let client = OAuth1Client::new(OAuth1Config::from(&options))?;
        Ok(Self::with_client(BodyMedia, options, Arc::new(client), verify))
    }
}

impl BodyMedia {
    fn api_key_params(options: &StrategyOptions) -> TokenParams {
        let mut params = TokenParams::new();
        params.insert(API_KEY_PARAM.to_owned(), options.consumer_key.clone());
        params
    }

    /// Profile endpoint with `api_key` appended to any existing query
    fn profile_url(base: &str, api_key: Option<&str>) -> Result<String, OAuthError> {
        let mut url = Url::parse(base.trim())?;
        if let Some(api_key) = api_key {
            url.query_pairs_mut().append_pair(API_KEY_PARAM, api_key);
        }
        Ok(url.to_string())
    }

    /// Build the normalized profile from the user info response body
    ///
    /// # Errors
    ///
    /// Returns the JSON parser's error when the body is not JSON or lacks
    /// `user.encodedId`
    pub fn parse_profile(body: &str) -> Result<Profile, serde_json::Error> {
        let json: Value = serde_json::from_str(body)?;
        let info = UserInfoResponse::deserialize(&json)?;

        Ok(Profile {
            provider: BODYMEDIA_PROFILE_PROVIDER.to_owned(),
            id: info.user.encoded_id,
            display_name: info.user.display_name,
            raw: body.to_owned(),
            json,
        })
    }
}

#[async_trait]
impl ProviderHooks for BodyMedia {
    fn name(&self) -> &'static str {
        BODYMEDIA_STRATEGY_NAME
    }

    fn request_token_params(&self, options: &StrategyOptions) -> TokenParams {
        Self::api_key_params(options)
    }

    fn user_authorization_params(&self, options: &StrategyOptions) -> TokenParams {
        Self::api_key_params(options)
    }

    async fn user_profile(
        &self,
        client: &dyn OAuthClient,
        options: &StrategyOptions,
        token: &str,
        token_secret: &str,
        params: &TokenParams,
    ) -> Result<Profile, AuthError> {
        const FETCH_FAILED: &str = "failed to fetch user profile";

        let api_key = params.get(API_KEY_PARAM).map(String::as_str);
        if api_key.is_none() {
            warn!("Fetching BodyMedia profile without an api_key parameter");
        }

        let url = Self::profile_url(&options.profile_url, api_key)
            .map_err(|e| AuthError::internal_oauth(FETCH_FAILED, e))?;
        let body = client
            .get(&url, token, token_secret)
            .await
            .map_err(|e| AuthError::internal_oauth(FETCH_FAILED, e))?;

        let profile = Self::parse_profile(&body).map_err(AuthError::ProfileParse)?;
        debug!(user.id = %profile.id, "Fetched BodyMedia user profile");
        Ok(profile)
    }
}

// BodyMedia API response structures

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    user: UserInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfo {
    #[serde(deserialize_with = "deserialize_encoded_id")]
    encoded_id: String,
    #[serde(default, deserialize_with = "deserialize_display_name")]
    display_name: String,
}

/// Strings pass through; numbers and booleans are rendered as text
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn deserialize_encoded_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
        .ok_or_else(|| de::Error::custom("encodedId must be a string or a number"))
}

/// `null` or a non-scalar display name becomes empty
fn deserialize_display_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}
