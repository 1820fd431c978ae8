// ABOUTME: Structured error types shared across the Savora workspace
// ABOUTME: ProviderError for external API failures, StoreError for local persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

//! # Error Types
//!
//! Two error domains exist in this client:
//!
//! - [`ProviderError`] — failures talking to the external recipe API
//!   (feature-gated on `provider-errors` so the core crate does not pull in
//!   `reqwest` for consumers that only need the models)
//! - [`StoreError`] — failures reading or writing the local favorites file
//!
//! Application code collapses both into the single user-visible "request
//! failed" state; these types exist so logs and tests can tell the causes
//! apart.

use thiserror::Error;

/// Errors from the external recipe API.
#[cfg(feature = "provider-errors")]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (connect, timeout, non-success status).
    #[error("recipe API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response arrived but could not be decoded into the expected shape.
    #[error("recipe API returned a malformed response: {0}")]
    Malformed(String),

    /// A request URL could not be built from the configured base.
    #[error("invalid recipe API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors from the local favorites store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the favorites file failed.
    #[error("favorites file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the favorites blob failed.
    #[error("favorites serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// No usable location for the favorites file could be determined.
    #[error("no data directory available for the favorites file")]
    NoDataDir,
}
