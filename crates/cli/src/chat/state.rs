// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory chat state driven by the upstream collaborator.

use super::message::Message;
use super::status::ChatStatus;
use super::transcript::Transcript;

/// Messages plus submission status.
///
/// `revision` increases on every change to the message collection so the
/// view can react (auto-scroll) without diffing messages.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    status: ChatStatus,
    revision: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transcript(transcript: Transcript) -> Self {
        let mut state = Self::new();
        state.apply(transcript);
        state
    }

    /// Replace the whole state with an upstream snapshot.
    pub fn apply(&mut self, transcript: Transcript) {
        self.messages = transcript.messages;
        self.status = transcript.status;
        self.revision += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ChatStatus) {
        self.status = status;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Append a message from the upstream stream.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Submit user input.
    ///
    /// Blank input and input while a request is in flight are ignored.
    /// Returns the appended message.
    pub fn submit(&mut self, input: &str) -> Option<&Message> {
        let text = input.trim();
        if text.is_empty() || self.is_loading() {
            return None;
        }
        self.push(Message::user(text));
        self.status = ChatStatus::Submitted;
        self.messages.last()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
