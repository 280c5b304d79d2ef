pub mod api;
pub mod config;
pub mod transcript;

pub use api::{
    ApiClient, SaveError, SaveResponse, TranscriptEntry, TranscriptPayload, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use config::Config;
pub use transcript::{
    read_transcript_file, AutoSaver, SessionInfo, TranscriptLine, TranscriptSession,
    DEFAULT_AUTOSAVE_INTERVAL,
};
