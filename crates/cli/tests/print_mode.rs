// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Print mode renders one frame of the transcript to stdout.

mod common;

use assert_cmd::Command;
use common::{write_temp, TOOL_TRANSCRIPT};
use predicates::prelude::*;

fn uigen() -> Command {
    let mut cmd = Command::cargo_bin("uigen").unwrap();
    cmd.env("UIGEN_TERMINAL_WIDTH", "60")
        .env_remove("UIGEN_CONFIG")
        .env_remove("UIGEN_POLL_INTERVAL_MS")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_empty_chat_shows_empty_state() {
    uigen()
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Start a conversation to generate React components",
        ))
        .stdout(predicate::str::contains(
            "I can help you create buttons, forms, cards, and more",
        ))
        .stdout(predicate::str::contains(
            "Describe the React component you want to create...",
        ));
}

#[test]
fn test_tool_statuses_are_phrased() {
    let transcript = write_temp(".json", TOOL_TRANSCRIPT);
    uigen()
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("● Creating /App.jsx"))
        .stdout(predicate::str::contains("● Reading /styles.css"))
        .stdout(predicate::str::contains("● Undoing changes to /App.jsx"))
        .stdout(predicate::str::contains("● Renaming /old.jsx"))
        .stdout(predicate::str::contains("Deleting /x.js"))
        .stdout(predicate::str::contains("● web_search"))
        .stdout(predicate::str::contains("undefined").not());
}

#[test]
fn test_pending_tool_uses_spinner_not_dot() {
    let transcript = write_temp(".json", TOOL_TRANSCRIPT);
    let output = uigen().arg("-p").arg(transcript.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("Deleting /x.js"))
        .expect("pending tool line");
    assert!(!line.contains('●'), "pending tool drawn as done: {line}");
}

#[test]
fn test_plain_output_has_no_escapes() {
    let transcript = write_temp(".json", TOOL_TRANSCRIPT);
    uigen()
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_status_flag_shows_loading_line() {
    let transcript = write_temp(
        ".jsonl",
        "{\"id\":\"u1\",\"role\":\"user\",\"content\":\"Make a navbar\"}\n",
    );
    uigen()
        .args(["-p", "--status", "submitted"])
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Make a navbar"))
        .stdout(predicate::str::contains("…"))
        .stdout(predicate::str::contains("submitted · esc to quit"));
}

#[test]
fn test_idle_chat_has_no_loading_line() {
    let transcript = write_temp(".json", TOOL_TRANSCRIPT);
    uigen()
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("…").not())
        .stdout(predicate::str::contains("enter to send"));
}

#[test]
fn test_jsonl_status_line_sets_streaming() {
    let transcript = write_temp(
        ".jsonl",
        concat!(
            "{\"id\":\"u1\",\"role\":\"user\",\"content\":\"Make a modal\"}\n",
            "\n",
            "{\"status\":\"streaming\"}\n",
        ),
    );
    uigen()
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("streaming · esc to quit"));
}

#[test]
fn test_config_overrides_empty_state_text() {
    let config = write_temp(
        ".toml",
        "empty_title = \"Nothing here yet\"\nempty_subtitle = \"Ask for a component\"\n",
    );
    uigen()
        .arg("-p")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing here yet"))
        .stdout(predicate::str::contains("Ask for a component"));
}

#[test]
fn test_config_from_environment() {
    let config = write_temp(".json", r#"{ "user_label": "Me" }"#);
    let transcript = write_temp(".json", r#"[{"id":"1","role":"user","content":"hi"}]"#);
    uigen()
        .env("UIGEN_CONFIG", config.path())
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?m)^Me$").unwrap());
}

#[test]
fn test_width_bounds_every_line() {
    let transcript = write_temp(".json", TOOL_TRANSCRIPT);
    let output = uigen()
        .args(["-p", "--width", "40"])
        .arg(transcript.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let separator = "─".repeat(40);
    assert!(stdout.lines().any(|l| l == separator), "{stdout}");
}

#[test]
fn test_control_characters_never_reach_the_terminal() {
    let transcript = write_temp(
        ".json",
        r#"[{"id":"a1","role":"assistant","content":"ok","toolInvocations":[
            {"toolCallId":"t1","toolName":"str_replace_editor","args":{"command":"create","path":"/a\n/b"},"state":"result"},
            {"toolCallId":"t2","toolName":"x\u001b[2Jy","state":"result"}
        ]}]"#,
    );
    uigen()
        .arg("-p")
        .arg(transcript.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("● Creating /a /b"))
        .stdout(predicate::str::contains("\x1b").not());
}
