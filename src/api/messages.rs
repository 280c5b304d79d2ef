use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One conversation turn in the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke (e.g. "agent" or "candidate"; not validated)
    pub speaker: String,

    /// The message text, trimmed
    pub text: String,

    /// When the turn happened (RFC3339 on the wire)
    pub timestamp: DateTime<Utc>,
}

/// Payload POSTed to the transcript endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptPayload {
    pub invitation_id: String,
    pub room_id: String,

    /// Accumulated turns, in insertion order
    pub transcript: Vec<TranscriptEntry>,

    pub started_at: DateTime<Utc>,

    /// Session end, or the send time while the session is still open
    pub ended_at: DateTime<Utc>,

    pub candidate_email: String,
    pub candidate_name: String,

    /// Optional company UUID, omitted when not supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    /// Optional job posting UUID, omitted when not supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Response from the transcript endpoint
///
/// A missing `success` field counts as a rejection, so it defaults to
/// false rather than failing deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
