pub mod client;
pub mod error;
pub mod messages;

pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::SaveError;
pub use messages::{SaveResponse, TranscriptEntry, TranscriptPayload};
