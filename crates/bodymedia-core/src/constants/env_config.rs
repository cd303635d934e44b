// ABOUTME: Environment variable names for BodyMedia strategy configuration
// ABOUTME: Single source of truth shared by config loading and its tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// OAuth consumer key issued by `BodyMedia`
pub const CONSUMER_KEY: &str = "BODYMEDIA_CONSUMER_KEY";
/// OAuth consumer secret issued by `BodyMedia`
pub const CONSUMER_SECRET: &str = "BODYMEDIA_CONSUMER_SECRET";
/// Absolute callback URL registered with `BodyMedia`
pub const CALLBACK_URL: &str = "BODYMEDIA_CALLBACK_URL";
/// Override for the request token endpoint
pub const REQUEST_TOKEN_URL: &str = "BODYMEDIA_REQUEST_TOKEN_URL";
/// Override for the access token endpoint
pub const ACCESS_TOKEN_URL: &str = "BODYMEDIA_ACCESS_TOKEN_URL";
/// Override for the user authorization endpoint
pub const USER_AUTHORIZATION_URL: &str = "BODYMEDIA_USER_AUTHORIZATION_URL";
/// Override for the session key
pub const SESSION_KEY: &str = "BODYMEDIA_SESSION_KEY";
/// Override for the user info endpoint
pub const USER_INFO_URL: &str = "BODYMEDIA_USER_INFO_URL";
/// Public base URL of the host application
pub const BASE_URL: &str = "BASE_URL";
