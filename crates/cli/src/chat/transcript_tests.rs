// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write;
use tempfile::TempDir;

const FULL: &str = r#"{
  "status": "streaming",
  "messages": [
    { "id": "1", "role": "user", "content": "Make a card" },
    {
      "id": "2",
      "role": "assistant",
      "content": "Creating it now",
      "toolInvocations": [
        {
          "toolCallId": "t1",
          "toolName": "str_replace_editor",
          "args": { "command": "create", "path": "/Card.jsx" },
          "state": "call"
        }
      ]
    }
  ]
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn parses_full_json_layout() {
    let transcript = Transcript::parse_json(FULL).unwrap();
    assert_eq!(transcript.status, ChatStatus::Streaming);
    assert_eq!(transcript.messages.len(), 2);
    assert_eq!(transcript.messages[1].tool_invocations[0].path(), Some("/Card.jsx"));
}

#[test]
fn parses_bare_message_array_as_idle() {
    let transcript =
        Transcript::parse_json(r#"[{ "role": "user", "content": "hi" }]"#).unwrap();
    assert_eq!(transcript.status, ChatStatus::Idle);
    assert_eq!(transcript.messages.len(), 1);
}

#[test]
fn empty_object_is_empty_idle_chat() {
    let transcript = Transcript::parse_json("{}").unwrap();
    assert_eq!(transcript, Transcript::default());
}

#[test]
fn invalid_json_is_an_error() {
    let err = Transcript::parse_json("{ not json").unwrap_err();
    assert!(matches!(err, TranscriptError::Json(_)));
}

#[test]
fn parses_jsonl_with_status_lines() {
    let content = r#"
{"role":"user","content":"Make a form"}

{"status":"submitted"}
{"role":"assistant","content":"On it"}
"#;
    let transcript = Transcript::parse_jsonl(content).unwrap();
    assert_eq!(transcript.status, ChatStatus::Submitted);
    assert_eq!(transcript.messages.len(), 2);
}

#[test]
fn jsonl_error_reports_line_number() {
    let content = "{\"role\":\"user\",\"content\":\"ok\"}\n{\"role\":\"robot\"}\n";
    match Transcript::parse_jsonl(content).unwrap_err() {
        TranscriptError::Line { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_picks_layout_from_extension() {
    let dir = TempDir::new().unwrap();
    let jsonl = write_file(&dir, "chat.jsonl", "{\"status\":\"streaming\"}\n");
    assert_eq!(Transcript::load(&jsonl).unwrap().status, ChatStatus::Streaming);

    let json = write_file(&dir, "chat.json", FULL);
    assert_eq!(Transcript::load(&json).unwrap().messages.len(), 2);
}

#[test]
fn load_missing_file_names_path() {
    let err = Transcript::load(Path::new("/nonexistent/chat.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/chat.json"));
}

#[test]
fn poll_reports_only_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "chat.json", "[]");
    let mut source = TranscriptSource::new(&path);

    assert!(source.poll().unwrap().is_some());
    assert!(source.poll().unwrap().is_none());

    write_file(&dir, "chat.json", FULL);
    let updated = source.poll().unwrap().expect("change should be detected");
    assert_eq!(updated.messages.len(), 2);
    assert!(source.poll().unwrap().is_none());
}

#[test]
fn poll_keeps_reporting_parse_failures() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "chat.json", "[]");
    let mut source = TranscriptSource::new(&path);
    source.load().unwrap();

    write_file(&dir, "chat.json", "[ broken");
    assert!(source.poll().is_err());
    assert!(source.poll().is_err());
}

#[test]
fn poll_detects_same_length_rewrite() {
    let dir = TempDir::new().unwrap();
    let before = r#"{"status":"submitted","messages":[]}"#;
    let after = r#"{"status":"streaming","messages":[]}"#;
    assert_eq!(before.len(), after.len());

    let path = write_file(&dir, "chat.json", before);
    let mut source = TranscriptSource::new(&path);
    assert_eq!(source.load().unwrap().status, ChatStatus::Submitted);

    write_file(&dir, "chat.json", after);
    let updated = source.poll().unwrap().expect("rewrite should be detected");
    assert_eq!(updated.status, ChatStatus::Streaming);
    assert!(source.poll().unwrap().is_none());
}
