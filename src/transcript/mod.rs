//! Interview transcript buffering and upload
//!
//! This module provides the `TranscriptSession` abstraction that manages:
//! - Conversation turn collection (speaker, text, timestamp)
//! - Session timing (start time, finalized end time)
//! - Relaying the accumulated transcript to the web API
//! - Optional periodic auto-save of the buffer

mod autosave;
mod file;
mod info;
mod session;

pub use autosave::{AutoSaver, DEFAULT_AUTOSAVE_INTERVAL};
pub use file::{read_transcript_file, TranscriptLine};
pub use info::SessionInfo;
pub use session::TranscriptSession;
