// ABOUTME: Logging initialization with env-filter support
// ABOUTME: Pretty console output; -v raises the filter to debug
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured directive applies,
/// upgraded to `debug` when `verbose` is requested.
///
/// # Errors
///
/// Returns an error when the filter directive is unparsable or a subscriber
/// is already installed.
pub fn init(directive: &str, verbose: bool) -> Result<()> {
    let directive = if verbose { "debug" } else { directive };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .with_context(|| format!("invalid log filter directive {directive:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
