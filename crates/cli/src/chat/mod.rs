// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chat state supplied by the upstream collaborator.
//!
//! Messages, their tool invocations and the submission status are owned
//! here; rendering lives in [`crate::tui`].

pub mod message;
pub mod state;
pub mod status;
pub mod transcript;

pub use message::{InvocationState, Message, Role, ToolInvocation};
pub use state::ChatState;
pub use status::ChatStatus;
pub use transcript::{Transcript, TranscriptError, TranscriptSource};
