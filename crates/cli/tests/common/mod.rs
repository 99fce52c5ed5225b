// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Write content to a temp file with the given suffix (".json", ".jsonl", ".toml").
pub fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Transcript with every tool status the surface knows how to phrase.
pub const TOOL_TRANSCRIPT: &str = r#"{
  "status": "idle",
  "messages": [
    { "id": "u1", "role": "user", "content": "Build a pricing card" },
    {
      "id": "a1",
      "role": "assistant",
      "content": "Here is your card.",
      "toolInvocations": [
        { "toolCallId": "t1", "toolName": "str_replace_editor", "args": { "command": "create", "path": "/App.jsx" }, "state": "result", "result": "ok" },
        { "toolCallId": "t2", "toolName": "str_replace_editor", "args": { "command": "view", "path": "/styles.css" }, "state": "result", "result": "ok" },
        { "toolCallId": "t3", "toolName": "str_replace_editor", "args": { "command": "undo_edit", "path": "/App.jsx" }, "state": "result", "result": "ok" },
        { "toolCallId": "t4", "toolName": "file_manager", "args": { "command": "rename", "path": "/old.jsx" }, "state": "result", "result": "ok" },
        { "toolCallId": "t5", "toolName": "file_manager", "args": { "command": "delete", "path": "/x.js" }, "state": "call" },
        { "toolCallId": "t6", "toolName": "web_search", "args": { "query": "cards" }, "state": "result", "result": [] }
      ]
    }
  ]
}"#;
