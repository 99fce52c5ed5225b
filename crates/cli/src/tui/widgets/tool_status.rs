// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call status line.
//!
//! Maps a tool invocation to a human-readable message ("Creating /App.jsx")
//! and a two-state indicator: an animated spinner while the call is pending,
//! a solid dot once its result has arrived. Unrecognized tools and commands
//! fall back to generic text; nothing here can fail.

use crate::chat::{InvocationState, ToolInvocation};
use crate::tools::{EditorCommand, FileCommand, ToolName};
use crate::tui::colors::styled_tool_status;
use crate::tui::spinner::DONE_GLYPH;

use super::message_list::sanitize_line;

/// Status message for a tool call.
///
/// A missing `path` becomes the empty string. Tool names other than
/// `str_replace_editor` and `file_manager` are returned verbatim.
pub fn format_status(tool_name: &str, command: Option<&str>, path: Option<&str>) -> String {
    let path = path.unwrap_or("");
    match ToolName::parse(tool_name) {
        Some(tool @ ToolName::StrReplaceEditor) => match command.and_then(EditorCommand::parse) {
            Some(cmd) => format!("{} {}", cmd.verb(), path),
            None => format!("{} {}", tool.fallback_verb(), path),
        },
        Some(tool @ ToolName::FileManager) => match command.and_then(FileCommand::parse) {
            Some(cmd) => format!("{} {}", cmd.verb(), path),
            None => format!("{} {}", tool.fallback_verb(), path),
        },
        None => tool_name.to_string(),
    }
}

/// Status message for an invocation, reading `command` and `path` from its args.
pub fn invocation_message(invocation: &ToolInvocation) -> String {
    format_status(
        &invocation.tool_name,
        invocation.command(),
        invocation.path(),
    )
}

/// Visual state of a tool call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Indeterminate progress, call still pending
    Spinner,
    /// Static completion dot
    Done,
}

impl StatusIndicator {
    pub fn for_state(state: InvocationState) -> Self {
        if state.is_complete() {
            Self::Done
        } else {
            Self::Spinner
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Glyph for this indicator; `spinner_frame` is only used while pending.
    pub fn glyph<'a>(&self, spinner_frame: &'a str) -> &'a str {
        match self {
            Self::Spinner => spinner_frame,
            Self::Done => DONE_GLYPH,
        }
    }
}

/// Render-ready view of one tool call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolStatusView {
    pub message: String,
    pub indicator: StatusIndicator,
}

impl ToolStatusView {
    pub fn new(invocation: &ToolInvocation) -> Self {
        Self {
            message: invocation_message(invocation),
            indicator: StatusIndicator::for_state(invocation.state),
        }
    }

    /// One display line: `"{glyph} {message}"`, colored when `styled`.
    pub fn render(&self, spinner_frame: &str, styled: bool) -> String {
        let glyph = self.indicator.glyph(spinner_frame);
        if styled {
            styled_tool_status(glyph, self.indicator.is_complete(), &self.message)
        } else {
            format!("{} {}", glyph, self.message)
        }
    }
}

/// Render an invocation straight to one terminal row. Control characters
/// in the message are replaced; [`format_status`] itself stays verbatim.
pub fn tool_status_line(invocation: &ToolInvocation, spinner_frame: &str, styled: bool) -> String {
    let view = ToolStatusView {
        message: sanitize_line(&invocation_message(invocation)).into_owned(),
        indicator: StatusIndicator::for_state(invocation.state),
    };
    view.render(spinner_frame, styled)
}

#[cfg(test)]
#[path = "tool_status_tests.rs"]
mod tests;
