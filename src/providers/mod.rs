// ABOUTME: OAuth provider implementations plugged into the generic strategy driver
// ABOUTME: Currently BodyMedia, behind the Mashery API gateway
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// `BodyMedia` OAuth 1.0a provider
pub mod bodymedia;

pub use bodymedia::{BodyMedia, BodyMediaStrategy};
