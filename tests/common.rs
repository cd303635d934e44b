// ABOUTME: Shared test utilities for BodyMedia strategy integration tests
// ABOUTME: Builds strategy options and OAuth clients pointed at a wiremock server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `bodymedia_auth`

use bodymedia_auth::{
    config::StrategyOptions,
    errors::AuthError,
    models::Profile,
    oauth1::{OAuth1Client, OAuth1Config},
};
use serde_json::Value;
use std::collections::HashMap;

pub const CONSUMER_KEY: &str = "123-456-789";
pub const CONSUMER_SECRET: &str = "shhh-its-a-secret";
pub const CALLBACK_URL: &str = "https://www.example.net/auth/bodymedia/callback";

pub const USER_INFO_BODY: &str =
    r#"{"user":{"encodedId":"abc123","displayName":"Jane Doe","timeZone":"America/New_York"}}"#;

/// Strategy options with every endpoint on the mock server
pub fn mock_options(base_uri: &str) -> StrategyOptions {
    StrategyOptions::new(CONSUMER_KEY, CONSUMER_SECRET)
        .with_callback_url(CALLBACK_URL)
        .with_request_token_url(format!("{base_uri}/oauth/request_token"))
        .with_access_token_url(format!("{base_uri}/oauth/access_token"))
        .with_user_authorization_url(format!("{base_uri}/oauth/authorize"))
        .with_profile_url(format!("{base_uri}/v2/user/info"))
}

/// OAuth client for the mock server
pub fn mock_client(base_uri: &str) -> OAuth1Client {
    OAuth1Client::new(OAuth1Config::from(&mock_options(base_uri))).unwrap()
}

/// Verify callback resolving the user to the profile ID
pub fn verify_profile_id(
    _token: &str,
    _token_secret: &str,
    profile: Profile,
) -> Result<Option<String>, AuthError> {
    Ok(Some(profile.id))
}

/// Verify callback refusing every user
pub fn verify_reject(
    _token: &str,
    _token_secret: &str,
    _profile: Profile,
) -> Result<Option<String>, AuthError> {
    Ok(None)
}

/// Empty host session
pub fn new_session() -> HashMap<String, Value> {
    HashMap::new()
}

/// URL on a local port nothing listens on
pub fn unreachable_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}{path}")
}
