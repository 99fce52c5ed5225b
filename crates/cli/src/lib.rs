// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal chat surface for an AI component generator.
//!
//! Renders a conversation supplied as a transcript file: messages, an input
//! box, a loading affordance, and a one-line status for each file tool the
//! assistant runs ("Creating /App.jsx", "Reading /styles.css", ...).
//!
//! The core is [`tui::widgets::tool_status::format_status`]:
//!
//! ```
//! use uigen::tui::widgets::format_status;
//!
//! assert_eq!(
//!     format_status("str_replace_editor", Some("create"), Some("/App.jsx")),
//!     "Creating /App.jsx"
//! );
//! assert_eq!(format_status("web_search", None, None), "web_search");
//! ```

pub mod chat;
#[doc(hidden)]
pub mod cli;
pub mod config;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod output;
pub mod tools;
pub mod tui;
