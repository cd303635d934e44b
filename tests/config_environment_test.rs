// ABOUTME: Tests for loading BodyMedia strategy options from environment variables
// ABOUTME: Serialized because they mutate process-wide environment state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodymedia_auth::config::StrategyOptions;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BODYMEDIA_CONSUMER_KEY",
    "BODYMEDIA_CONSUMER_SECRET",
    "BODYMEDIA_CALLBACK_URL",
    "BODYMEDIA_REQUEST_TOKEN_URL",
    "BODYMEDIA_ACCESS_TOKEN_URL",
    "BODYMEDIA_USER_AUTHORIZATION_URL",
    "BODYMEDIA_SESSION_KEY",
    "BODYMEDIA_USER_INFO_URL",
    "BASE_URL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    env::set_var("BODYMEDIA_CONSUMER_KEY", "env-key");
    env::set_var("BODYMEDIA_CONSUMER_SECRET", "env-secret");

    let options = StrategyOptions::from_env();
    assert_eq!(options.consumer_key, "env-key");
    assert_eq!(options.consumer_secret, "env-secret");
    assert_eq!(
        options.callback_url.as_deref(),
        Some("http://localhost:8081/auth/bodymedia/callback")
    );
    assert_eq!(
        options.request_token_url,
        "https://api.bodymedia.com/oauth/request_token"
    );
    assert_eq!(options.session_key, "oauth:bodymedia");
    assert_eq!(options.profile_url, "http://api.bodymedia.com/v2/user/info");
    assert!(options.validate_and_log());

    clear_env();
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("BODYMEDIA_CONSUMER_KEY", "env-key");
    env::set_var("BODYMEDIA_CONSUMER_SECRET", "env-secret");
    env::set_var("BASE_URL", "https://fit.example.org");
    env::set_var("BODYMEDIA_ACCESS_TOKEN_URL", "https://proxy.example.org/at");
    env::set_var("BODYMEDIA_SESSION_KEY", "oauth:bm");
    env::set_var("BODYMEDIA_USER_INFO_URL", "  ");

    let options = StrategyOptions::from_env();
    assert_eq!(
        options.callback_url.as_deref(),
        Some("https://fit.example.org/auth/bodymedia/callback")
    );
    assert_eq!(options.access_token_url, "https://proxy.example.org/at");
    assert_eq!(options.session_key, "oauth:bm");
    assert_eq!(options.profile_url, "http://api.bodymedia.com/v2/user/info");

    env::set_var("BODYMEDIA_CALLBACK_URL", "https://cb.example.org/done");
    assert_eq!(
        StrategyOptions::from_env().callback_url.as_deref(),
        Some("https://cb.example.org/done")
    );

    clear_env();
}

#[test]
#[serial]
fn test_from_env_missing_credentials() {
    clear_env();

    let options = StrategyOptions::from_env();
    assert!(options.consumer_key.is_empty());
    assert!(!options.validate_and_log());
}
