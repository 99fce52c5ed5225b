// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chat messages and the tool invocations embedded in them.
//!
//! Field names follow the camelCase wire format written by the chat backend
//! (`toolInvocations`, `toolCallId`, `toolName`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
    System,
}

/// A single chat message
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_invocations: Vec<ToolInvocation>,
}

impl Message {
    /// Create a user message with a fresh id
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            tool_invocations: Vec::new(),
        }
    }

    /// Create an assistant message with a fresh id
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            tool_invocations: Vec::new(),
        }
    }

    /// Attach a tool invocation (builder style)
    pub fn with_tool(mut self, invocation: ToolInvocation) -> Self {
        self.tool_invocations.push(invocation);
        self
    }
}

/// Lifecycle of a tool invocation as reported by the streaming protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationState {
    /// Arguments are still streaming in
    PartialCall,
    /// Call issued, waiting for the result
    Call,
    /// Result received
    Result,
}

impl InvocationState {
    /// Only `result` counts as complete.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Result)
    }
}

/// One tool call made by the assistant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    #[serde(default)]
    pub tool_call_id: String,
    pub tool_name: String,
    /// Usually an object with string values; kept as raw JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    pub state: InvocationState,
    /// Opaque result payload, only present once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToolInvocation {
    /// A pending call
    pub fn call(tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_call_id: uuid::Uuid::new_v4().to_string(),
            tool_name: tool_name.into(),
            args: Some(args),
            state: InvocationState::Call,
            result: None,
        }
    }

    /// Mark the call complete with a result payload
    pub fn with_result(mut self, result: Value) -> Self {
        self.state = InvocationState::Result;
        self.result = Some(result);
        self
    }

    /// String argument by key. Missing keys, non-object args and
    /// non-string values all yield `None`.
    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.as_ref()?.get(key)?.as_str()
    }

    pub fn command(&self) -> Option<&str> {
        self.arg_str("command")
    }

    pub fn path(&self) -> Option<&str> {
        self.arg_str("path")
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
