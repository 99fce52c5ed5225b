// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner animation for pending tool calls and the loading affordance.

/// Glyph shown for a completed tool call
pub const DONE_GLYPH: &str = "●";

/// Spinner animation frames (platform-aware)
pub fn spinner_frames() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["·", "✢", "✳", "✶", "✻", "✽"]
    } else {
        &["·", "✢", "*", "✶", "✻", "✽"]
    }
}

/// Full animation cycle (forward + reverse for breathing effect)
pub fn spinner_cycle() -> Vec<&'static str> {
    let frames = spinner_frames();
    let mut cycle: Vec<&str> = frames.to_vec();
    // Reverse skips both endpoints so no frame repeats at the turn
    cycle.extend(frames.iter().rev().skip(1).take(frames.len() - 2));
    cycle
}

/// Frame to draw at animation tick `tick`.
pub fn frame_at(tick: u64) -> &'static str {
    let cycle = spinner_cycle();
    cycle[(tick % cycle.len() as u64) as usize]
}

/// Verbs for the loading line while a response is in flight
pub const LOADING_VERBS: &[&str] = &[
    "Thinking",
    "Generating",
    "Composing",
    "Drafting",
    "Styling",
    "Assembling",
];

/// Get a random loading verb
pub fn random_verb() -> &'static str {
    let idx = fastrand::usize(..LOADING_VERBS.len());
    LOADING_VERBS[idx]
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
