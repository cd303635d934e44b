// ABOUTME: Configuration module for the BodyMedia strategy
// ABOUTME: Environment-only configuration with builder overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Strategy options and environment loading
pub mod oauth;

pub use oauth::StrategyOptions;
