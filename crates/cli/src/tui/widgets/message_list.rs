// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message list layout.
//!
//! Turns chat messages into display lines: a role label, the wrapped
//! content, one status line per tool call, then a blank separator line.

use std::borrow::Cow;

use crate::chat::{ChatStatus, Message, Role};
use crate::tui::colors::{styled_loading, styled_role_label};

use super::tool_status::tool_status_line;

/// Indent for message bodies and tool lines
const INDENT: &str = "  ";

/// Narrowest wrap width, so tiny terminals still make progress
const MIN_WRAP_WIDTH: usize = 8;

/// Rendering parameters for the list
#[derive(Clone, Debug)]
pub struct ListStyle<'a> {
    pub width: usize,
    pub styled: bool,
    pub spinner_frame: &'a str,
    pub loading_verb: &'a str,
    pub user_label: &'a str,
    pub assistant_label: &'a str,
}

impl ListStyle<'_> {
    fn label(&self, role: Role) -> &str {
        match role {
            Role::User => self.user_label,
            Role::Assistant => self.assistant_label,
            Role::System => "System",
        }
    }
}

/// Replace control characters so one string is exactly one terminal row.
///
/// Whitespace controls (newline, tab, carriage return) become a space,
/// anything else (ESC included) becomes U+FFFD.
pub fn sanitize_line(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                c if !c.is_control() => c,
                c if c.is_whitespace() => ' ',
                _ => char::REPLACEMENT_CHARACTER,
            })
            .collect(),
    )
}

/// Sanitize each line of multi-line text, keeping the line breaks.
fn sanitize_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\n') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.split('\n')
            .map(sanitize_line)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Whether the list shows a trailing loading line.
///
/// Streaming always does; a submitted prompt does until the first
/// assistant message shows up after it.
pub fn shows_loading(messages: &[Message], status: ChatStatus) -> bool {
    if status.is_streaming() {
        return true;
    }
    status.is_loading() && messages.last().is_none_or(|m| m.role == Role::User)
}

/// Lines for a single message, including the trailing blank line.
pub fn message_lines(message: &Message, style: &ListStyle<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let label = style.label(message.role);
    lines.push(if style.styled {
        styled_role_label(label, message.role)
    } else {
        label.to_string()
    });

    if !message.content.is_empty() {
        let wrap_width = style
            .width
            .saturating_sub(INDENT.len())
            .max(MIN_WRAP_WIDTH);
        let content = sanitize_text(&message.content);
        for line in textwrap::wrap(&content, wrap_width) {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{INDENT}{line}"));
            }
        }
    }

    for invocation in &message.tool_invocations {
        lines.push(format!(
            "{INDENT}{}",
            tool_status_line(invocation, style.spinner_frame, style.styled)
        ));
    }

    lines.push(String::new());
    lines
}

/// Lines for the whole list, plus the loading line when active.
pub fn list_lines(messages: &[Message], status: ChatStatus, style: &ListStyle<'_>) -> Vec<String> {
    let mut lines: Vec<String> = messages
        .iter()
        .flat_map(|m| message_lines(m, style))
        .collect();

    if shows_loading(messages, status) {
        lines.push(if style.styled {
            styled_loading(style.spinner_frame, style.loading_verb)
        } else {
            format!("{} {}…", style.spinner_frame, style.loading_verb)
        });
    }
    lines
}

#[cfg(test)]
#[path = "message_list_tests.rs"]
mod tests;
