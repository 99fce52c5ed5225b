// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by uigen are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `UIGEN_CONFIG` — Path to the UI config file.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::UIGEN_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `UIGEN_TERMINAL_WIDTH` — Layout width override for print mode.
pub fn terminal_width() -> Option<u16> {
    std::env::var(names::UIGEN_TERMINAL_WIDTH)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|w| *w > 0)
}

/// `UIGEN_POLL_INTERVAL_MS` — Transcript polling interval.
pub fn poll_interval_ms() -> Option<u64> {
    var_u64(names::UIGEN_POLL_INTERVAL_MS)
}

/// `NO_COLOR` — Disable ANSI styling when set to any non-empty value.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
