// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line viewport for the message list.
//!
//! Follows the bottom of the list: every message update jumps to the
//! maximum offset. Scrolling up detaches until the next update or until
//! the user scrolls back down to the end.

use std::ops::Range;

#[cfg(test)]
#[path = "scrollable_tests.rs"]
mod tests;

/// Scroll offset over a list of rendered lines.
#[derive(Clone, Debug)]
pub struct Viewport {
    /// First visible line
    pub offset: usize,
    /// Number of lines visible at once
    pub height: usize,
    /// Total number of lines
    pub total: usize,
    /// Whether the viewport tracks the bottom of the list
    pub follow: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height,
            total: 0,
            follow: true,
        }
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.height)
    }

    /// The message collection changed: re-attach and jump to the bottom.
    pub fn on_update(&mut self, total: usize) {
        self.total = total;
        self.scroll_to_bottom();
    }

    /// Line count changed without a message update (spinner, resize, wrap).
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.clamp();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.follow = true;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = self.offset >= self.max_offset();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
        self.follow = self.offset >= self.max_offset();
    }

    /// Page size used by PageUp/PageDown.
    pub fn page(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }

    /// Range of visible line indices.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.total);
        self.offset.min(end)..end
    }

    fn clamp(&mut self) {
        if self.follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}
