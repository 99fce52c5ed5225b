// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI color definitions and styled text helpers.
//!
//! Palette follows the web chat surface: blue accents and spinner,
//! emerald completion dot, neutral grays for secondary text.

use crate::chat::Role;

/// Blue for the spinner and assistant accents: RGB(37, 99, 235)
pub const ACCENT_BLUE: (u8, u8, u8) = (37, 99, 235);

/// Emerald for the completed tool dot: RGB(16, 185, 129)
pub const DONE_GREEN: (u8, u8, u8) = (16, 185, 129);

/// Gray for tool messages, subtitles, hints: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Dark gray for separator lines: RGB(136, 136, 136)
pub const SEPARATOR_GRAY: (u8, u8, u8) = (136, 136, 136);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Inverse/reverse video
    pub const INVERSE: &str = "\x1b[7m";

    /// Reset + dim combined
    pub const RESET_DIM: &str = "\x1b[0;2m";
}

fn fg((r, g, b): (u8, u8, u8)) -> String {
    escape::fg(r, g, b)
}

/// Tool status line body: colored glyph, gray message.
///
/// Example output:
/// `[blue]✶[reset] [gray]Creating /App.jsx[reset]`
pub fn styled_tool_status(glyph: &str, complete: bool, message: &str) -> String {
    let glyph_color = if complete { DONE_GREEN } else { ACCENT_BLUE };
    format!(
        "{glyph_fg}{glyph}{reset} {gray}{message}{reset}",
        glyph_fg = fg(glyph_color),
        reset = escape::RESET,
        gray = fg(TEXT_GRAY),
    )
}

/// Role label above a message: bold for the user, blue for the assistant.
pub fn styled_role_label(label: &str, role: Role) -> String {
    match role {
        Role::User => format!("{}{}{}", escape::BOLD, label, escape::RESET),
        Role::Assistant => format!(
            "{}{}{}{}",
            escape::BOLD,
            fg(ACCENT_BLUE),
            label,
            escape::RESET
        ),
        Role::System => format!("{}{}{}", escape::DIM, label, escape::RESET),
    }
}

/// Loading affordance: blue spinner frame, dim verb.
pub fn styled_loading(frame: &str, verb: &str) -> String {
    format!(
        "{blue}{frame}{reset} {dim}{verb}…{reset}",
        blue = fg(ACCENT_BLUE),
        reset = escape::RESET,
        dim = escape::DIM,
    )
}

/// Empty-state icon in the accent color.
pub fn styled_empty_icon(icon: &str) -> String {
    format!("{}{}{}", fg(ACCENT_BLUE), icon, escape::RESET)
}

/// Empty-state headline (bold).
pub fn styled_empty_title(text: &str) -> String {
    format!("{}{}{}", escape::BOLD, text, escape::RESET)
}

/// Gray secondary text (empty-state subtitle, status bar).
pub fn styled_gray(text: &str) -> String {
    format!("{}{}{}", fg(TEXT_GRAY), text, escape::RESET)
}

/// Format a styled separator line (dim + dark gray).
///
/// Example output:
/// `[dim][dark gray]────────...[reset]`
pub fn styled_separator(line: &str) -> String {
    format!(
        "{dim}{fg_gray}{line}{reset}",
        dim = escape::DIM,
        fg_gray = fg(SEPARATOR_GRAY),
        reset = escape::RESET,
    )
}

/// Format the placeholder prompt.
///
/// The first character gets inverse video (the cursor), the rest is dim.
///
/// Example output:
/// `[reset]❯ [inverse]D[reset+dim]escribe the React component...[reset]`
pub fn styled_placeholder(text: &str) -> String {
    let Some(first_char) = text.chars().next() else {
        return format!("{}❯ {} {}", escape::RESET, escape::INVERSE, escape::RESET);
    };
    let rest = &text[first_char.len_utf8()..];

    format!(
        "{reset}❯\u{00A0}{inv}{first}{reset_dim}{rest}{reset}",
        reset = escape::RESET,
        inv = escape::INVERSE,
        first = first_char,
        reset_dim = escape::RESET_DIM,
        rest = rest,
    )
}

/// Format the input line with an inverse-video cursor at `cursor` (char index).
pub fn styled_input(buffer: &str, cursor: usize) -> String {
    let split = buffer
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len());
    let (before, after) = buffer.split_at(split);
    let mut after_chars = after.chars();
    let under = after_chars.next().unwrap_or(' ');
    format!(
        "{reset}❯ {before}{inv}{under}{reset}{rest}",
        reset = escape::RESET,
        inv = escape::INVERSE,
        rest = after_chars.as_str(),
    )
}

/// Strip ANSI escape sequences (CSI only), for width math and tests.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
