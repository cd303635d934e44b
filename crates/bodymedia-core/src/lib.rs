// ABOUTME: Core types and constants for the BodyMedia OAuth 1.0a strategy
// ABOUTME: Foundation crate with the unified error type and provider endpoint constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `BodyMedia` Core
//!
//! Shared types that change rarely: the host-facing `AppError`/`ErrorCode`
//! pair and the fixed `BodyMedia` endpoint constants.

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Provider constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
