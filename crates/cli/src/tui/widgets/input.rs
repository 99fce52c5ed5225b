// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt input box state.
//!
//! The cursor is a char index, so multi-byte input edits cleanly.

use crate::tui::colors::{styled_input, styled_placeholder};

/// Input editing state
#[derive(Clone, Debug, Default)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (chars)
    pub cursor_pos: usize,
    /// Submitted prompts, oldest first
    pub history: Vec<String>,
    /// Current history navigation index
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Clear input buffer and cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_pos = 0;
    }

    /// Take the buffer for submission and record it in history
    pub fn submit(&mut self) -> String {
        let input = std::mem::take(&mut self.buffer);
        self.cursor_pos = 0;
        if !input.trim().is_empty() {
            self.history.push(input.clone());
        }
        self.history_index = None;
        input
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.buffer.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos -= 1;
        let at = self.byte_index(self.cursor_pos);
        self.buffer.remove(at);
        true
    }

    /// Delete the character at the cursor position
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor_pos);
        self.buffer.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Navigate history: negative is older, positive is newer.
    ///
    /// Moving past the newest entry clears the input.
    pub fn navigate_history(&mut self, direction: i32) -> bool {
        if self.history.is_empty() {
            return false;
        }

        let new_index = match self.history_index {
            None if direction < 0 => self.history.len() - 1,
            None => return false,
            Some(i) if direction < 0 => i.saturating_sub(1),
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(_) => {
                self.history_index = None;
                self.clear();
                return true;
            }
        };

        self.history_index = Some(new_index);
        self.buffer = self.history[new_index].clone();
        self.move_to_end();
        true
    }

    /// Delete word before cursor (Ctrl+W behavior)
    pub fn delete_word_before_cursor(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let cursor_byte = self.byte_index(self.cursor_pos);
        let before = &self.buffer[..cursor_byte];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .rfind(char::is_whitespace)
            .map(|i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);

        self.buffer.replace_range(word_start..cursor_byte, "");
        self.cursor_pos = self.buffer[..word_start].chars().count();
    }

    /// Clear line before cursor (Ctrl+U behavior)
    pub fn clear_before_cursor(&mut self) {
        let at = self.byte_index(self.cursor_pos);
        self.buffer.replace_range(..at, "");
        self.cursor_pos = 0;
    }

    /// Clear line after cursor (Ctrl+K behavior)
    pub fn clear_after_cursor(&mut self) {
        let at = self.byte_index(self.cursor_pos);
        self.buffer.truncate(at);
    }

    /// Input line: placeholder when empty, otherwise buffer with cursor.
    pub fn render(&self, placeholder: &str, styled: bool) -> String {
        match (self.buffer.is_empty(), styled) {
            (true, true) => styled_placeholder(placeholder),
            (true, false) => format!("❯ {}", placeholder),
            (false, true) => styled_input(&self.buffer, self.cursor_pos),
            (false, false) => format!("❯ {}", self.buffer),
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
