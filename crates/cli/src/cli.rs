// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::chat::ChatStatus;
use crate::env;

/// Width used when neither flag, environment nor terminal supply one
pub const FALLBACK_WIDTH: u16 = 80;

/// Terminal chat surface for AI component generation
#[derive(Parser, Debug, Clone)]
#[command(name = "uigen", version, about = "Terminal chat surface for AI component generation")]
pub struct Cli {
    /// Transcript file (.json or .jsonl) holding the chat state
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: Option<PathBuf>,

    /// Print mode - render one frame to stdout and exit
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Override the transcript's submission status
    #[arg(long, value_enum)]
    pub status: Option<ChatStatus>,

    /// UI config file (TOML, or JSON by extension) [env: UIGEN_CONFIG]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Layout width in columns [env: UIGEN_TERMINAL_WIDTH]
    #[arg(long, value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Disable ANSI styling (also via NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Poll the transcript for changes in interactive mode (default)
    #[arg(long, overrides_with = "no_watch")]
    pub watch: bool,

    /// Render the transcript once without watching it
    #[arg(long, overrides_with = "watch")]
    pub no_watch: bool,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Interactive mode needs a terminal on stdout and no `--print`.
    pub fn should_use_tui(&self) -> bool {
        !self.print && std::io::stdout().is_terminal()
    }

    pub fn should_watch(&self) -> bool {
        !self.no_watch
    }

    /// Config path: flag, then `UIGEN_CONFIG`.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(env::config_path)
    }

    /// Whether to emit ANSI styling on a stream with the given TTY-ness.
    pub fn styled(&self, is_tty: bool) -> bool {
        is_tty && !self.no_color && !env::no_color()
    }

    /// Layout width: flag, environment, terminal, then the fallback.
    pub fn layout_width(&self) -> u16 {
        self.width
            .or_else(env::terminal_width)
            .or_else(|| {
                crossterm::terminal::size()
                    .ok()
                    .map(|(w, _)| w)
                    .filter(|w| *w > 0)
            })
            .unwrap_or(FALLBACK_WIDTH)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
