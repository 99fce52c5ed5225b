// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transcript files: chat snapshots written by the chat backend.
//!
//! Two layouts are accepted, chosen by extension:
//!
//! - `.json`: `{ "status": "streaming", "messages": [...] }` or a bare
//!   array of messages
//! - `.jsonl`: one message per line; a line without `role` but with
//!   `status` sets the status

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::message::Message;
use super::status::ChatStatus;

/// Errors that can occur when reading a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Failed to read transcript file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse transcript JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse transcript line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A chat snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub status: ChatStatus,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Parse the `.json` layout.
    pub fn parse_json(content: &str) -> Result<Self, TranscriptError> {
        let value: Value = serde_json::from_str(content)?;
        if value.is_array() {
            let messages: Vec<Message> = serde_json::from_value(value)?;
            return Ok(Self {
                status: ChatStatus::Idle,
                messages,
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse the `.jsonl` layout. Line numbers in errors are 1-based.
    pub fn parse_jsonl(content: &str) -> Result<Self, TranscriptError> {
        let mut transcript = Self::default();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let wrap = |source| TranscriptError::Line {
                line: idx + 1,
                source,
            };
            let value: Value = serde_json::from_str(line).map_err(wrap)?;
            if value.get("role").is_none() {
                if let Some(status) = value.get("status") {
                    transcript.status =
                        serde_json::from_value(status.clone()).map_err(wrap)?;
                    continue;
                }
            }
            transcript
                .messages
                .push(serde_json::from_value(value).map_err(wrap)?);
        }
        Ok(transcript)
    }

    /// Parse content using the layout implied by `path`'s extension.
    pub fn parse_for_path(path: &Path, content: &str) -> Result<Self, TranscriptError> {
        if path.extension().is_some_and(|e| e == "jsonl") {
            Self::parse_jsonl(content)
        } else {
            Self::parse_json(content)
        }
    }

    /// Load a transcript file
    pub fn load(path: &Path) -> Result<Self, TranscriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_for_path(path, &content)
    }
}

/// Content fingerprint used to detect rewrites between polls. Hashing the
/// bytes catches same-length rewrites that a coarse mtime would miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fingerprint {
    len: usize,
    digest: [u8; 32],
}

impl Fingerprint {
    fn of(content: &str) -> Self {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(content.as_bytes()));
        Self {
            len: content.len(),
            digest,
        }
    }
}

/// A transcript file watched by polling.
#[derive(Debug)]
pub struct TranscriptSource {
    path: PathBuf,
    last_seen: Option<Fingerprint>,
}

impl TranscriptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_seen: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, TranscriptError> {
        std::fs::read_to_string(&self.path).map_err(|source| TranscriptError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Load unconditionally and remember the file's fingerprint.
    pub fn load(&mut self) -> Result<Transcript, TranscriptError> {
        let content = self.read()?;
        let transcript = Transcript::parse_for_path(&self.path, &content)?;
        self.last_seen = Some(Fingerprint::of(&content));
        Ok(transcript)
    }

    /// Load only if the content changed since the last successful load.
    ///
    /// A file that changed but fails to parse is reported every poll until
    /// it parses again.
    pub fn poll(&mut self) -> Result<Option<Transcript>, TranscriptError> {
        let content = self.read()?;
        let fingerprint = Fingerprint::of(&content);
        if self.last_seen == Some(fingerprint) {
            return Ok(None);
        }
        let transcript = Transcript::parse_for_path(&self.path, &content)?;
        self.last_seen = Some(fingerprint);
        Ok(Some(transcript))
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
