// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission status of the chat.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current request is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    /// Nothing in flight
    #[default]
    #[serde(alias = "ready")]
    #[value(alias = "ready")]
    Idle,
    /// Prompt sent, no response tokens yet
    Submitted,
    /// Response is arriving and the message list is growing
    Streaming,
}

impl ChatStatus {
    /// Input is locked and a loading affordance is shown.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitted | Self::Streaming)
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self, Self::Streaming)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitted => "submitted",
            Self::Streaming => "streaming",
        }
    }
}

impl fmt::Display for ChatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
