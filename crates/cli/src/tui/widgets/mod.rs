// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI widget components.
//!
//! Widgets produce plain strings (optionally ANSI-styled); the iocraft
//! component in app.rs only arranges the lines.

pub mod input;
pub mod message_list;
pub mod scrollable;
pub mod tool_status;

pub use input::InputState;
pub use message_list::{list_lines, ListStyle};
pub use scrollable::Viewport;
pub use tool_status::{format_status, invocation_message, StatusIndicator, ToolStatusView};
