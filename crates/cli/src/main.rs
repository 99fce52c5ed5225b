// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! uigen binary entry point.

use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;

use uigen::chat::{ChatState, TranscriptSource};
use uigen::cli::Cli;
use uigen::config::UiConfig;
use uigen::output::{print_debug, print_error, print_warning, set_verbose, write_frame};
use uigen::tui::{render_screen, ExitReason, RenderState, TuiApp, TuiAppState, TuiConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config_path = cli.config_path();
    let config = match UiConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let mut source = cli.transcript.clone().map(TranscriptSource::new);
    let mut chat = match source.as_mut() {
        Some(source) => match source.load() {
            Ok(transcript) => {
                print_debug(format_args!(
                    "loaded {} ({} messages, {})",
                    source.path().display(),
                    transcript.messages.len(),
                    transcript.status
                ));
                ChatState::from_transcript(transcript)
            }
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        },
        None => ChatState::new(),
    };
    if let Some(status) = cli.status {
        chat.set_status(status);
    }

    if cli.should_use_tui() {
        let source = if cli.should_watch() { source } else { None };
        run_tui_mode(&cli, chat, source, config)
    } else {
        run_print_mode(&cli, &chat, config)
    }
}

/// Render one frame of the whole conversation to stdout.
fn run_print_mode(
    cli: &Cli,
    chat: &ChatState,
    config: UiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let styled = cli.styled(stdout.is_terminal());
    let state = RenderState::from_chat(chat, &config, cli.layout_width() as usize, styled);
    let lines = render_screen(&state, None);
    write_frame(&mut stdout.lock(), &lines)?;
    Ok(())
}

/// Run in TUI mode.
fn run_tui_mode(
    cli: &Cli,
    chat: ChatState,
    source: Option<TranscriptSource>,
    config: UiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Ignore SIGINT so Ctrl+C is captured as a key event rather than killing the process.
    #[cfg(unix)]
    {
        use std::sync::atomic::AtomicBool;
        let flag = Arc::new(AtomicBool::new(false));
        if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        {
            print_warning(format_args!("Failed to ignore SIGINT: {}", e));
        }
        // Leak the flag so it stays registered for the lifetime of the process
        std::mem::forget(flag);
    }

    let tui_config = TuiConfig::detect(config, cli.styled(true), cli.status);
    let mut app = TuiApp::new(TuiAppState::new(chat, source, tui_config));
    let exit_reason = app.run()?;

    match exit_reason {
        ExitReason::Interrupted => std::process::exit(130),
        ExitReason::UserQuit => Ok(()),
    }
}
