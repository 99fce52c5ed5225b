// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands accepted by the known tools, with their display verbs.

/// `str_replace_editor` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
    UndoEdit,
}

impl EditorCommand {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::StrReplace => "str_replace",
            Self::Insert => "insert",
            Self::View => "view",
            Self::UndoEdit => "undo_edit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "str_replace" => Some(Self::StrReplace),
            "insert" => Some(Self::Insert),
            "view" => Some(Self::View),
            "undo_edit" => Some(Self::UndoEdit),
            _ => None,
        }
    }

    /// Display verb placed before the path.
    ///
    /// `insert` shares the "Editing" wording with `str_replace`.
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create => "Creating",
            Self::StrReplace | Self::Insert => "Editing",
            Self::View => "Reading",
            Self::UndoEdit => "Undoing changes to",
        }
    }
}

/// `file_manager` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileCommand {
    Rename,
    Delete,
}

impl FileCommand {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Delete => "delete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rename" => Some(Self::Rename),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Rename => "Renaming",
            Self::Delete => "Deleting",
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
