// ABOUTME: Session storage seam for request-token state between redirect and callback
// ABOUTME: Hosts back it with their own session layer; HashMap works out of the box
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-user session storage owned by the host framework
pub trait SessionStore: Send {
    /// Read a value
    fn get(&self, key: &str) -> Option<&Value>;

    /// Store a value, replacing any previous one
    fn insert(&mut self, key: &str, value: Value);

    /// Remove and return a value
    fn remove(&mut self, key: &str) -> Option<Value>;
}

impl SessionStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Self::get(self, key)
    }

    fn insert(&mut self, key: &str, value: Value) {
        Self::insert(self, key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        Self::remove(self, key)
    }
}

/// Request token stored under the strategy's session key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTokenState {
    /// Temporary credential identifier
    pub oauth_token: String,
    /// Temporary credential secret, needed to sign the access-token request
    pub oauth_token_secret: String,
}
