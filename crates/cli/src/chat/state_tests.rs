// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::chat::message::Role;

fn snapshot(status: ChatStatus, count: usize) -> Transcript {
    Transcript {
        status,
        messages: (0..count)
            .map(|i| Message::assistant(format!("reply {i}")))
            .collect(),
    }
}

#[test]
fn new_state_is_empty_and_idle() {
    let state = ChatState::new();
    assert!(state.is_empty());
    assert_eq!(state.status(), ChatStatus::Idle);
    assert_eq!(state.revision(), 0);
}

#[test]
fn apply_replaces_messages_and_status() {
    let mut state = ChatState::new();
    state.apply(snapshot(ChatStatus::Streaming, 3));
    assert_eq!(state.messages().len(), 3);
    assert_eq!(state.status(), ChatStatus::Streaming);

    state.apply(snapshot(ChatStatus::Idle, 1));
    assert_eq!(state.messages().len(), 1);
    assert!(!state.is_loading());
}

#[test]
fn every_update_bumps_revision() {
    let mut state = ChatState::new();
    state.apply(snapshot(ChatStatus::Idle, 1));
    let first = state.revision();
    state.apply(snapshot(ChatStatus::Idle, 1));
    assert!(state.revision() > first);
    let second = state.revision();
    state.push(Message::assistant("more"));
    assert!(state.revision() > second);
}

#[test]
fn set_status_does_not_bump_revision() {
    let mut state = ChatState::new();
    state.set_status(ChatStatus::Streaming);
    assert_eq!(state.revision(), 0);
}

#[test]
fn submit_appends_user_message_and_marks_submitted() {
    let mut state = ChatState::new();
    let msg = state.submit("  make a button  ").unwrap();
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "make a button");
    assert_eq!(state.status(), ChatStatus::Submitted);
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn submit_ignores_blank_input() {
    let mut state = ChatState::new();
    assert!(state.submit("   ").is_none());
    assert!(state.is_empty());
    assert_eq!(state.status(), ChatStatus::Idle);
}

#[test]
fn submit_ignored_while_loading() {
    let mut state = ChatState::from_transcript(snapshot(ChatStatus::Streaming, 1));
    assert!(state.submit("another").is_none());
    assert_eq!(state.messages().len(), 1);
}
