use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// One line of a JSON-lines transcript file
#[derive(Debug, Deserialize)]
pub struct TranscriptLine {
    pub speaker: String,
    pub text: String,

    /// Absent lines get the capture time when added to a session
    pub timestamp: Option<DateTime<Utc>>,
}

/// Read conversation turns from a JSON-lines file (one object per line).
///
/// Blank lines are skipped; a malformed line is an error, with its line
/// number in the message.
pub fn read_transcript_file(path: impl AsRef<Path>) -> Result<Vec<TranscriptLine>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

    let mut lines = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parsed: TranscriptLine = serde_json::from_str(line).with_context(|| {
            format!("Invalid transcript line {} in {}", idx + 1, path.display())
        })?;
        lines.push(parsed);
    }

    Ok(lines)
}
