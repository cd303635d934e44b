// ABOUTME: Shared HTTP client with connection pooling for OAuth and profile calls
// ABOUTME: Singleton configured once at host startup, defaults used otherwise
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Timeouts requested by the host before the first client was built
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure timeouts for the shared HTTP client
///
/// Call once at startup, before the first strategy is constructed. Later calls
/// are ignored. Returns `false` when the timeouts had already been set or the
/// client was already built with the defaults.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) -> bool {
    if SHARED_CLIENT.get().is_some() {
        return false;
    }
    CLIENT_TIMEOUTS
        .set((timeout_secs, connect_timeout_secs))
        .is_ok()
}

/// Get the shared HTTP client used for token exchanges and profile fetches
///
/// Falls back to 30s request / 10s connect timeouts when
/// [`initialize_shared_client`] was never called.
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
