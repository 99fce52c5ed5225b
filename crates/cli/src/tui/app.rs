// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI application state and main iocraft component.

use iocraft::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::chat::{ChatState, ChatStatus, TranscriptSource};
use crate::config::UiConfig;
use crate::output::print_debug;

use super::render::{body_lines, render_screen, RenderState, CHROME_HEIGHT};
use super::spinner::random_verb;
use super::widgets::{InputState, Viewport};

/// Terminal size used when detection fails
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Configuration for the interactive surface
#[derive(Clone, Debug)]
pub struct TuiConfig {
    pub ui: UiConfig,
    /// Emit ANSI styling
    pub styled: bool,
    pub width: u16,
    pub height: u16,
    /// Status forced from the command line, re-applied after every reload
    pub status_override: Option<ChatStatus>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            styled: false,
            width: DEFAULT_TERMINAL_SIZE.0,
            height: DEFAULT_TERMINAL_SIZE.1,
            status_override: None,
        }
    }
}

impl TuiConfig {
    /// Config sized to the current terminal.
    pub fn detect(ui: UiConfig, styled: bool, status_override: Option<ChatStatus>) -> Self {
        let (width, height) = crossterm::terminal::size().unwrap_or(DEFAULT_TERMINAL_SIZE);
        Self {
            ui,
            styled,
            width,
            height,
            status_override,
        }
    }
}

/// Reason for app exit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitReason {
    UserQuit,    // Esc, or Ctrl+D on empty input
    Interrupted, // Ctrl+C
}

struct TuiAppStateInner {
    chat: ChatState,
    input: InputState,
    viewport: Viewport,
    /// Chat revision the viewport last scrolled for
    seen_revision: u64,
    source: Option<TranscriptSource>,
    config: TuiConfig,
    /// Animation tick, advanced by the timer future
    tick: u64,
    loading_verb: &'static str,
    notice: Option<String>,
    exit_reason: Option<ExitReason>,
}

/// Shared app state (cheap to clone)
#[derive(Clone)]
pub struct TuiAppState {
    inner: Arc<Mutex<TuiAppStateInner>>,
}

impl TuiAppState {
    pub fn new(mut chat: ChatState, source: Option<TranscriptSource>, config: TuiConfig) -> Self {
        if let Some(status) = config.status_override {
            chat.set_status(status);
        }
        let mut inner = TuiAppStateInner {
            chat,
            input: InputState::default(),
            viewport: Viewport::default(),
            seen_revision: 0,
            source,
            config,
            tick: 0,
            loading_verb: random_verb(),
            notice: None,
            exit_reason: None,
        };
        Self::sync_viewport(&mut inner);
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    fn render_state_inner(inner: &TuiAppStateInner) -> RenderState<'_> {
        RenderState {
            messages: inner.chat.messages(),
            status: inner.chat.status(),
            input: &inner.input,
            width: inner.config.width as usize,
            styled: inner.config.styled,
            spinner_tick: inner.tick,
            loading_verb: inner.loading_verb,
            config: &inner.config.ui,
            notice: inner.notice.as_deref(),
        }
    }

    /// Lines for the current frame, list windowed through the viewport
    pub fn render_lines(&self) -> Vec<String> {
        let inner = self.inner.lock();
        render_screen(&Self::render_state_inner(&inner), Some(&inner.viewport))
    }

    pub fn viewport(&self) -> Viewport {
        self.inner.lock().viewport.clone()
    }

    pub fn input_buffer(&self) -> String {
        self.inner.lock().input.buffer.clone()
    }

    pub fn status(&self) -> ChatStatus {
        self.inner.lock().chat.status()
    }

    pub fn width(&self) -> u16 {
        self.inner.lock().config.width
    }

    pub fn spinner_tick(&self) -> u64 {
        self.inner.lock().tick
    }

    pub fn notice(&self) -> Option<String> {
        self.inner.lock().notice.clone()
    }

    pub fn message_count(&self) -> usize {
        self.inner.lock().chat.messages().len()
    }

    pub fn should_exit(&self) -> bool {
        self.inner.lock().exit_reason.is_some()
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.inner.lock().exit_reason.clone()
    }

    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.inner.lock().config.ui.spinner_interval_ms)
    }

    pub fn set_terminal_size(&self, width: u16, height: u16) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.config.width = width;
        inner.config.height = height;
        Self::sync_viewport(inner);
    }

    /// Re-fit the viewport to the current body, scrolling to the bottom
    /// when the message collection changed since the last sync.
    fn sync_viewport(inner: &mut TuiAppStateInner) {
        let total = body_lines(&Self::render_state_inner(inner)).len();
        let height = (inner.config.height as usize)
            .saturating_sub(CHROME_HEIGHT)
            .max(1);
        inner.viewport.set_height(height);
        if inner.chat.revision() != inner.seen_revision {
            inner.seen_revision = inner.chat.revision();
            inner.viewport.on_update(total);
        } else {
            inner.viewport.set_total(total);
        }
    }

    /// Advance the animation and poll the transcript when due.
    pub fn tick(&self) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.tick = inner.tick.wrapping_add(1);
        let ui = &inner.config.ui;
        let poll_every = (ui.poll_interval_ms / ui.spinner_interval_ms).max(1);
        if inner.tick % poll_every == 0 {
            Self::poll_transcript_inner(inner);
        }
        Self::sync_viewport(inner);
    }

    /// Reload the transcript if it changed.
    pub fn poll_transcript(&self) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        Self::poll_transcript_inner(inner);
        Self::sync_viewport(inner);
    }

    fn poll_transcript_inner(inner: &mut TuiAppStateInner) {
        let Some(source) = inner.source.as_mut() else {
            return;
        };
        match source.poll() {
            Ok(Some(transcript)) => {
                let was_loading = inner.chat.is_loading();
                print_debug(format_args!(
                    "reloaded {} ({} messages, {})",
                    source.path().display(),
                    transcript.messages.len(),
                    transcript.status
                ));
                inner.chat.apply(transcript);
                if let Some(status) = inner.config.status_override {
                    inner.chat.set_status(status);
                }
                if !was_loading && inner.chat.is_loading() {
                    inner.loading_verb = random_verb();
                }
                inner.notice = None;
            }
            Ok(None) => {}
            Err(e) => {
                let message = e.to_string();
                if inner.notice.as_deref() != Some(message.as_str()) {
                    print_debug(&message);
                }
                inner.notice = Some(message);
            }
        }
    }

    /// Handle key event
    pub fn handle_key_event(&self, key: KeyEvent) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            // Raw ETX or 'c' with CONTROL, depending on terminal encoding
            KeyCode::Char('\x03') => inner.exit_reason = Some(ExitReason::Interrupted),
            KeyCode::Char('c') if ctrl => inner.exit_reason = Some(ExitReason::Interrupted),
            KeyCode::Char('d') if ctrl => {
                if inner.input.is_empty() {
                    inner.exit_reason = Some(ExitReason::UserQuit);
                } else {
                    inner.input.delete();
                }
            }
            KeyCode::Esc => inner.exit_reason = Some(ExitReason::UserQuit),
            KeyCode::Enter => Self::submit_inner(inner),
            KeyCode::Char('a') if ctrl => inner.input.move_to_start(),
            KeyCode::Char('e') if ctrl => inner.input.move_to_end(),
            KeyCode::Char('u') if ctrl => inner.input.clear_before_cursor(),
            KeyCode::Char('k') if ctrl => inner.input.clear_after_cursor(),
            KeyCode::Char('w') if ctrl => inner.input.delete_word_before_cursor(),
            KeyCode::Char(c) if !ctrl => inner.input.insert_char(c),
            KeyCode::Backspace => {
                inner.input.backspace();
            }
            KeyCode::Delete => {
                inner.input.delete();
            }
            KeyCode::Left => {
                inner.input.move_left();
            }
            KeyCode::Right => {
                inner.input.move_right();
            }
            KeyCode::Home => inner.input.move_to_start(),
            KeyCode::End if inner.input.is_empty() => inner.viewport.scroll_to_bottom(),
            KeyCode::End => inner.input.move_to_end(),
            KeyCode::Up if shift => inner.viewport.scroll_up(1),
            KeyCode::Down if shift => inner.viewport.scroll_down(1),
            KeyCode::Up => {
                inner.input.navigate_history(-1);
            }
            KeyCode::Down => {
                inner.input.navigate_history(1);
            }
            KeyCode::PageUp => inner.viewport.scroll_up(inner.viewport.page()),
            KeyCode::PageDown => inner.viewport.scroll_down(inner.viewport.page()),
            _ => {}
        }

        Self::sync_viewport(inner);
    }

    /// Submit the input buffer. Ignored while a request is in flight; the
    /// buffer is kept so nothing typed is lost.
    fn submit_inner(inner: &mut TuiAppStateInner) {
        if inner.chat.is_loading() || inner.input.buffer.trim().is_empty() {
            return;
        }
        let text = inner.input.submit();
        if inner.chat.submit(&text).is_some() {
            inner.loading_verb = random_verb();
        }
    }
}

/// Props for the main App component
#[derive(Default, Props)]
pub struct AppProps {
    pub state: Option<TuiAppState>,
}

/// Main TUI App component using iocraft
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    // Get state from props with fallback error display
    let Some(state) = props.state.clone() else {
        return element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Error: TuiAppState must be provided via props")
            }
        };
    };

    let mut should_exit = hooks.use_state(|| false);
    // Render counter to force re-renders when state changes
    let mut render_counter = hooks.use_state(|| 0u64);
    // Timer counter for spinner animation and transcript polling
    let mut timer_counter = hooks.use_state(|| 0u64);

    // Handle terminal events (keyboard input and resize)
    hooks.use_terminal_events({
        let state = state.clone();
        move |event| match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.handle_key_event(key);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
                if state.should_exit() {
                    should_exit.set(true);
                }
            }
            TerminalEvent::Resize(width, height) => {
                state.set_terminal_size(width, height);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            _ => {}
        }
    });

    // Periodic timer drives the spinner and transcript polling
    hooks.use_future({
        let state = state.clone();
        async move {
            let interval = state.spinner_interval();
            loop {
                tokio::time::sleep(interval).await;
                state.tick();
                let current = *timer_counter.read();
                timer_counter.set(current.wrapping_add(1));
            }
        }
    });

    let lines = state.render_lines();

    if *should_exit.read() || state.should_exit() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    // NoWrap keeps ANSI sequences intact; widgets already wrap content
    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            #(lines.into_iter().map(|line| {
                element! {
                    Text(content: line, wrap: TextWrap::NoWrap)
                }
            }).collect::<Vec<_>>())
        }
    }
}

/// Main TUI application
pub struct TuiApp {
    state: TuiAppState,
}

impl TuiApp {
    pub fn new(state: TuiAppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TuiAppState {
        &self.state
    }

    /// Run the main event loop using iocraft fullscreen
    pub fn run(&mut self) -> std::io::Result<ExitReason> {
        let state = self.state.clone();

        // Check if we're already in a tokio runtime
        if tokio::runtime::Handle::try_current().is_ok() {
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    // ignore_ctrl_c() prevents iocraft from exiting on Ctrl+C - we handle it ourselves
                    element!(App(state: Some(state.clone())))
                        .fullscreen()
                        .ignore_ctrl_c()
                        .await
                })
            })?;
        } else {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                element!(App(state: Some(state.clone())))
                    .fullscreen()
                    .ignore_ctrl_c()
                    .await
            })?;
        }

        Ok(self.state.exit_reason().unwrap_or(ExitReason::UserQuit))
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
