// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! UI configuration loaded from TOML/JSON files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default empty-state headline
pub const DEFAULT_EMPTY_TITLE: &str = "Start a conversation to generate React components";
/// Default empty-state subtitle
pub const DEFAULT_EMPTY_SUBTITLE: &str = "I can help you create buttons, forms, cards, and more";
/// Default input placeholder
pub const DEFAULT_PLACEHOLDER: &str = "Describe the React component you want to create...";
/// Default transcript polling interval
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
/// Default spinner frame interval
pub const DEFAULT_SPINNER_INTERVAL_MS: u64 = 100;

/// Lower bound for the polling interval
pub const MIN_POLL_INTERVAL_MS: u64 = 50;
/// Lower bound for the spinner interval
pub const MIN_SPINNER_INTERVAL_MS: u64 = 16;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Text and timing for the chat surface
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Headline shown before the first message
    pub empty_title: String,

    /// Secondary line shown before the first message
    pub empty_subtitle: String,

    /// Input placeholder
    pub placeholder: String,

    /// Transcript polling interval (ms)
    pub poll_interval_ms: u64,

    /// Spinner frame interval (ms)
    pub spinner_interval_ms: u64,

    /// Label above user messages
    pub user_label: String,

    /// Label above assistant messages
    pub assistant_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            empty_title: DEFAULT_EMPTY_TITLE.to_string(),
            empty_subtitle: DEFAULT_EMPTY_SUBTITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            spinner_interval_ms: DEFAULT_SPINNER_INTERVAL_MS,
            user_label: "You".to_string(),
            assistant_label: "Assistant".to_string(),
        }
    }
}

impl UiConfig {
    /// Load a config from a TOML or JSON file (JSON by `.json` extension)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: UiConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config: file (if any), then environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(ms) = crate::env::poll_interval_ms() {
            config.poll_interval_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "poll_interval_ms must be at least {} (got {})",
                MIN_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }
        if self.spinner_interval_ms < MIN_SPINNER_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "spinner_interval_ms must be at least {} (got {})",
                MIN_SPINNER_INTERVAL_MS, self.spinner_interval_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
