// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use serde_json::json;

#[test]
fn deserializes_wire_invocation() {
    let raw = json!({
        "toolCallId": "call_1",
        "toolName": "str_replace_editor",
        "args": { "command": "create", "path": "/App.jsx" },
        "state": "result",
        "result": "Success"
    });
    let inv: ToolInvocation = serde_json::from_value(raw).unwrap();
    assert_eq!(inv.tool_call_id, "call_1");
    assert_eq!(inv.tool_name, "str_replace_editor");
    assert_eq!(inv.command(), Some("create"));
    assert_eq!(inv.path(), Some("/App.jsx"));
    assert!(inv.is_complete());
    assert_eq!(inv.result, Some(json!("Success")));
}

#[test]
fn pending_states_are_not_complete() {
    for state in ["call", "partial-call"] {
        let inv: ToolInvocation = serde_json::from_value(json!({
            "toolName": "file_manager",
            "state": state
        }))
        .unwrap();
        assert!(!inv.is_complete(), "{state} should be pending");
        assert!(inv.args.is_none());
    }
}

#[test]
fn unknown_state_is_rejected() {
    let result: Result<ToolInvocation, _> = serde_json::from_value(json!({
        "toolName": "file_manager",
        "state": "done"
    }));
    assert!(result.is_err());
}

#[test]
fn arg_str_ignores_non_string_values() {
    let inv = ToolInvocation::call("str_replace_editor", json!({ "command": 3, "path": null }));
    assert_eq!(inv.command(), None);
    assert_eq!(inv.path(), None);
}

#[test]
fn arg_str_on_non_object_args() {
    let inv = ToolInvocation::call("str_replace_editor", json!("create /App.jsx"));
    assert_eq!(inv.command(), None);
}

#[test]
fn with_result_completes_call() {
    let inv = ToolInvocation::call("file_manager", json!({ "command": "delete" }))
        .with_result(json!({ "ok": true }));
    assert_eq!(inv.state, InvocationState::Result);
    assert!(inv.is_complete());
}

#[test]
fn message_defaults_missing_fields() {
    let msg: Message = serde_json::from_value(json!({ "role": "assistant" })).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert!(msg.content.is_empty());
    assert!(msg.tool_invocations.is_empty());
}

#[test]
fn message_reads_camel_case_invocations() {
    let msg: Message = serde_json::from_value(json!({
        "id": "m1",
        "role": "assistant",
        "content": "Done",
        "toolInvocations": [
            { "toolCallId": "t1", "toolName": "file_manager", "state": "call" }
        ]
    }))
    .unwrap();
    assert_eq!(msg.tool_invocations.len(), 1);
    assert_eq!(msg.tool_invocations[0].tool_name, "file_manager");
}

#[test]
fn user_constructor_assigns_unique_ids() {
    let a = Message::user("hi");
    let b = Message::user("hi");
    assert_eq!(a.role, Role::User);
    assert_ne!(a.id, b.id);
}
