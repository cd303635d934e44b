// ABOUTME: Normalized user profile handed from OAuth strategies to the verify callback
// ABOUTME: Keeps the raw provider response alongside the extracted identity fields
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// Provider-agnostic user profile
///
/// Built once per authentication attempt and moved into the verify callback;
/// strategies never retain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Provider identifier
    pub provider: String,
    /// Provider-specific user ID
    pub id: String,
    /// Name suitable for display
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Response body exactly as received
    #[serde(rename = "_raw")]
    pub raw: String,
    /// Parsed response body
    #[serde(rename = "_json")]
    pub json: serde_json::Value,
}
