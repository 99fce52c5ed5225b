// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed identification of the assistant's file tools.
//!
//! Tool invocations arrive as raw strings. Known tools and their commands
//! parse into enums here; anything else stays a string and is displayed
//! verbatim.
//!
//! # Example
//!
//! ```
//! use uigen::tools::{EditorCommand, ToolName};
//!
//! assert_eq!(ToolName::parse("str_replace_editor"), Some(ToolName::StrReplaceEditor));
//! assert_eq!(EditorCommand::parse("view").map(|c| c.verb()), Some("Reading"));
//! ```

pub mod command;
pub mod tool_name;

pub use command::{EditorCommand, FileCommand};
pub use tool_name::ToolName;
