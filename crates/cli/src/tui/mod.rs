// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal user interface for uigen.
//!
//! Widgets and the screen renderer produce plain lines; the iocraft
//! component in app.rs owns the event loop and draws those lines.

mod app;
pub mod colors;
pub mod render;
pub mod spinner;
pub mod widgets;

pub use app::{ExitReason, TuiApp, TuiAppState, TuiConfig};
pub use render::{render_screen, RenderState};
