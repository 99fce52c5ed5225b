// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Screen composition: empty state or message list, then the input area.
//!
//! Shared by print mode (whole list) and the interactive app (list windowed
//! through a [`Viewport`]).

use unicode_width::UnicodeWidthStr;

use crate::chat::{ChatState, ChatStatus, Message};
use crate::config::UiConfig;
use crate::tui::colors::{
    strip_ansi, styled_empty_icon, styled_empty_title, styled_gray, styled_separator,
};
use crate::tui::spinner::{frame_at, LOADING_VERBS};
use crate::tui::widgets::message_list::sanitize_line;
use crate::tui::widgets::{list_lines, InputState, ListStyle, Viewport};

/// Separator character (box drawing horizontal)
pub const SEPARATOR_CHAR: char = '─';

/// Rows used below the list: separator, input, separator, status bar
pub const CHROME_HEIGHT: usize = 4;

/// Empty-state icon
const EMPTY_ICON: &str = "◆";

/// Input shown by print mode
static EMPTY_INPUT: InputState = InputState {
    buffer: String::new(),
    cursor_pos: 0,
    history: Vec::new(),
    history_index: None,
};

/// Everything needed to draw one frame, borrowed from the owning state
#[derive(Clone, Copy, Debug)]
pub struct RenderState<'a> {
    pub messages: &'a [Message],
    pub status: ChatStatus,
    pub input: &'a InputState,
    pub width: usize,
    pub styled: bool,
    pub spinner_tick: u64,
    pub loading_verb: &'static str,
    pub config: &'a UiConfig,
    /// Transient problem to surface in the status bar
    pub notice: Option<&'a str>,
}

impl<'a> RenderState<'a> {
    /// Static view of a chat with an empty input and the first spinner
    /// frame, as drawn by print mode.
    pub fn from_chat(chat: &'a ChatState, config: &'a UiConfig, width: usize, styled: bool) -> Self {
        Self {
            messages: chat.messages(),
            status: chat.status(),
            input: &EMPTY_INPUT,
            width,
            styled,
            spinner_tick: 0,
            loading_verb: LOADING_VERBS[0],
            config,
            notice: None,
        }
    }

    pub fn list_style(&self) -> ListStyle<'a> {
        ListStyle {
            width: self.width,
            styled: self.styled,
            spinner_frame: frame_at(self.spinner_tick),
            loading_verb: self.loading_verb,
            user_label: &self.config.user_label,
            assistant_label: &self.config.assistant_label,
        }
    }
}

/// Generate a full-width separator line.
pub fn make_separator(width: usize) -> String {
    SEPARATOR_CHAR.to_string().repeat(width)
}

/// Left-pad `text` so it sits centered in `width` columns (ANSI-aware).
pub fn center(text: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(text).as_str());
    let pad = width.saturating_sub(visible) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Lines shown before the first message.
pub fn empty_state_lines(config: &UiConfig, width: usize, styled: bool) -> Vec<String> {
    let (icon, title, subtitle) = if styled {
        (
            styled_empty_icon(EMPTY_ICON),
            styled_empty_title(&config.empty_title),
            styled_gray(&config.empty_subtitle),
        )
    } else {
        (
            EMPTY_ICON.to_string(),
            config.empty_title.clone(),
            config.empty_subtitle.clone(),
        )
    };
    vec![
        String::new(),
        center(&icon, width),
        String::new(),
        center(&title, width),
        center(&subtitle, width),
        String::new(),
    ]
}

/// Body lines: empty state or the full message list.
pub fn body_lines(state: &RenderState<'_>) -> Vec<String> {
    if state.messages.is_empty() {
        empty_state_lines(state.config, state.width, state.styled)
    } else {
        list_lines(state.messages, state.status, &state.list_style())
    }
}

/// Status bar text under the input.
pub fn status_bar(state: &RenderState<'_>) -> String {
    let text = if let Some(notice) = state.notice {
        format!("  ! {}", sanitize_line(notice))
    } else if state.status.is_loading() {
        format!("  {} · esc to quit", state.status)
    } else {
        "  enter to send · esc to quit".to_string()
    };
    if state.styled {
        styled_gray(&text)
    } else {
        text
    }
}

/// Separator, input line, separator, status bar.
pub fn chrome_lines(state: &RenderState<'_>) -> Vec<String> {
    let separator = if state.styled {
        styled_separator(&make_separator(state.width))
    } else {
        make_separator(state.width)
    };
    vec![
        separator.clone(),
        state.input.render(&state.config.placeholder, state.styled),
        separator,
        status_bar(state),
    ]
}

/// Compose a frame. With a viewport only its visible window of the body is
/// drawn; without one the whole body is.
pub fn render_screen(state: &RenderState<'_>, viewport: Option<&Viewport>) -> Vec<String> {
    let body = body_lines(state);
    let mut lines: Vec<String> = match viewport {
        Some(vp) => body
            .get(vp.visible_range())
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        None => body,
    };
    lines.extend(chrome_lines(state));
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
