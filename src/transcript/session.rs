use super::info::SessionInfo;
use crate::api::{ApiClient, SaveError, TranscriptEntry, TranscriptPayload};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Accumulates conversation turns for one interview and relays them to
/// the transcript API.
///
/// The buffer is append-only; insertion order is the canonical
/// transcript order. A session is owned by a single caller — wrap it in
/// an `Arc<Mutex<_>>` to share it with an [`AutoSaver`](super::AutoSaver).
pub struct TranscriptSession {
    info: SessionInfo,

    client: ApiClient,

    /// When the session started
    started_at: DateTime<Utc>,

    /// Stamped by the first final save; never overwritten
    ended_at: Option<DateTime<Utc>>,

    /// Accumulated conversation turns
    messages: Vec<TranscriptEntry>,
}

impl TranscriptSession {
    /// Create a session; the start time is recorded as now
    pub fn new(info: SessionInfo, client: ApiClient) -> Self {
        info!("Transcript session started for room: {}", info.room_id);

        Self {
            info,
            client,
            started_at: Utc::now(),
            ended_at: None,
            messages: Vec::new(),
        }
    }

    /// Append one conversation turn.
    ///
    /// Empty or whitespace-only text is dropped with a warning rather
    /// than treated as an error. The timestamp defaults to now when the
    /// caller has none.
    pub fn add_message(&mut self, speaker: &str, text: &str, timestamp: Option<DateTime<Utc>>) {
        let text = text.trim();
        if text.is_empty() {
            warn!("Skipping empty message from {}", speaker);
            return;
        }

        debug!("Added message from {}: {} chars", speaker, text.len());

        self.messages.push(TranscriptEntry {
            speaker: speaker.to_string(),
            text: text.to_string(),
            timestamp: timestamp.unwrap_or_else(Utc::now),
        });
    }

    /// Send the accumulated transcript to the API.
    ///
    /// A final save (`auto_save == false`) stamps the session end time
    /// the first time it runs; auto-saves send whatever has accumulated
    /// so far without closing the session. Each call re-sends the full
    /// buffer — the receiving side upserts. On failure the buffer is
    /// left intact for a caller-driven retry.
    pub async fn save(&mut self, auto_save: bool) -> Result<(), SaveError> {
        if self.messages.is_empty() {
            warn!("No messages to save for room {}", self.info.room_id);
            return Err(SaveError::EmptyTranscript);
        }

        if !auto_save && self.ended_at.is_none() {
            self.ended_at = Some(Utc::now());
        }

        let payload = self.build_payload();
        self.client.post_transcript(&payload).await
    }

    /// Snapshot the current buffer state as a wire payload
    fn build_payload(&self) -> TranscriptPayload {
        TranscriptPayload {
            invitation_id: self.info.invitation_id.clone(),
            room_id: self.info.room_id.clone(),
            transcript: self.messages.clone(),
            started_at: self.started_at,
            ended_at: self.ended_at.unwrap_or_else(Utc::now),
            candidate_email: self.info.candidate_email.clone(),
            candidate_name: self.info.candidate_name.clone(),
            company_id: self.info.company_id.clone(),
            job_id: self.info.job_id.clone(),
        }
    }

    /// Number of retained messages
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// The retained messages, in insertion order
    pub fn messages(&self) -> &[TranscriptEntry] {
        &self.messages
    }

    /// Whole seconds between start and the finalized end time.
    ///
    /// `None` until a final save has stamped the end time.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.ended_at
            .map(|end| end.signed_duration_since(self.started_at).num_seconds())
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }
}
