use super::error::SaveError;
use super::messages::{SaveResponse, TranscriptPayload};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info};

/// Path of the transcript endpoint, relative to the base URL
const TRANSCRIPT_PATH: &str = "/api/interview-transcript";

/// Base URL used when none is configured (local frontend dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the transcript API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// Trailing slashes are stripped; the timeout applies to each request
    /// as a whole.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL this client posts to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST one transcript payload and interpret the response.
    ///
    /// Exactly one request is made; no retries on any failure path.
    pub async fn post_transcript(&self, payload: &TranscriptPayload) -> Result<(), SaveError> {
        let url = format!("{}{}", self.base_url, TRANSCRIPT_PATH);

        info!(
            "Saving transcript to {} (messages={}, room={})",
            url,
            payload.transcript.len(),
            payload.room_id
        );

        let response = match self.http.post(&url).json(payload).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                error!("Timed out while saving transcript to {}", url);
                return Err(SaveError::Timeout);
            }
            Err(e) if e.is_connect() => {
                error!(
                    "Could not connect to {}: {} (make sure the API is running)",
                    self.base_url, e
                );
                return Err(SaveError::Connect {
                    url: self.base_url.clone(),
                });
            }
            Err(e) => {
                error!("Failed to send transcript: {}", e);
                return Err(SaveError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            error!("Failed to save transcript: HTTP {} ({})", status, body);
            return Err(SaveError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Anything that does not parse as a success response counts as a
        // rejection; the raw body is kept for logging and inspection.
        let parsed: SaveResponse = serde_json::from_str(&body).unwrap_or_default();
        if parsed.success {
            info!("Transcript saved successfully");
            Ok(())
        } else {
            error!("API returned success=false: {}", body);
            Err(SaveError::Rejected { body })
        }
    }
}
