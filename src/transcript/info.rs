use serde::{Deserialize, Serialize};

/// Identity and reporting metadata for one interview session.
///
/// Set once when the interview starts and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// UUID of the interview invitation
    pub invitation_id: String,

    /// Room/session ID for the interview
    pub room_id: String,

    /// Email of the candidate
    pub candidate_email: String,

    /// Display name of the candidate
    pub candidate_name: String,

    /// Optional company UUID
    pub company_id: Option<String>,

    /// Optional job posting UUID
    pub job_id: Option<String>,
}

impl SessionInfo {
    /// Build the required identity block; company and job IDs start absent
    pub fn new(
        invitation_id: impl Into<String>,
        room_id: impl Into<String>,
        candidate_email: impl Into<String>,
        candidate_name: impl Into<String>,
    ) -> Self {
        Self {
            invitation_id: invitation_id.into(),
            room_id: room_id.into(),
            candidate_email: candidate_email.into(),
            candidate_name: candidate_name.into(),
            company_id: None,
            job_id: None,
        }
    }
}
