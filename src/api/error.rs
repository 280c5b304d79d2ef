use thiserror::Error;

/// Why a transcript save did not go through.
///
/// Every failure path of a save is mapped to one of these kinds; the
/// message buffer is left intact in all cases so the caller can retry.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The buffer had no messages; nothing was sent.
    #[error("transcript is empty, nothing to save")]
    EmptyTranscript,

    /// The API answered 200 but did not accept the transcript.
    #[error("API rejected the transcript: {body}")]
    Rejected { body: String },

    /// The API answered with a non-200 status.
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("timed out while saving transcript")]
    Timeout,

    /// The endpoint could not be reached.
    #[error("could not connect to {url} (is the API running?)")]
    Connect { url: String },

    /// Any other transport or serialization failure.
    #[error("transport error: {0}")]
    Transport(String),
}
