// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool name enum for type-safe tool identification.

use std::fmt;

/// Tools whose invocations get a descriptive status line.
///
/// Any other tool name is shown as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// Text editor: create, edit, view and undo edits on a file
    StrReplaceEditor,
    /// File manager: rename and delete files
    FileManager,
}

impl ToolName {
    /// Get the wire representation of the tool name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrReplaceEditor => "str_replace_editor",
            Self::FileManager => "file_manager",
        }
    }

    /// Try to parse a tool name from its wire string (case-sensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "str_replace_editor" => Some(Self::StrReplaceEditor),
            "file_manager" => Some(Self::FileManager),
            _ => None,
        }
    }

    /// Verb shown when the command is missing or unrecognized.
    pub const fn fallback_verb(&self) -> &'static str {
        match self {
            Self::StrReplaceEditor => "Editing",
            Self::FileManager => "Managing",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tool_name_tests.rs"]
mod tests;
