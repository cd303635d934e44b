// ABOUTME: BodyMedia OAuth 1.0a endpoint URLs, session key, and provider identifiers
// ABOUTME: Defaults applied when the host omits endpoint configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Name the strategy registers under for framework dispatch
pub const BODYMEDIA_STRATEGY_NAME: &str = "bodymedia";

/// Provider identifier written into normalized profiles (`fitbit`, not the strategy name)
pub const BODYMEDIA_PROFILE_PROVIDER: &str = "fitbit";

/// OAuth 1.0a request token endpoint
pub const BODYMEDIA_REQUEST_TOKEN_URL: &str = "https://api.bodymedia.com/oauth/request_token";

/// OAuth 1.0a access token endpoint
pub const BODYMEDIA_ACCESS_TOKEN_URL: &str = "https://api.bodymedia.com/oauth/access_token";

/// OAuth 1.0a user authorization endpoint
pub const BODYMEDIA_USER_AUTHORIZATION_URL: &str = "https://api.bodymedia.com/oauth/authorize";

/// Session key holding the request token secret between redirect and callback
pub const BODYMEDIA_SESSION_KEY: &str = "oauth:bodymedia";

/// User info endpoint queried after the handshake
pub const BODYMEDIA_USER_INFO_URL: &str = "http://api.bodymedia.com/v2/user/info";

/// Query parameter the Mashery gateway requires on every call
pub const API_KEY_PARAM: &str = "api_key";

/// Callback path appended to `BASE_URL` when no callback URL is configured
pub const BODYMEDIA_CALLBACK_PATH: &str = "/auth/bodymedia/callback";

/// Base URL used when `BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
