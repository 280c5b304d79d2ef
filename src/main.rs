use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use transcript_relay::{read_transcript_file, ApiClient, Config, SessionInfo, TranscriptSession};

/// Upload an interview transcript to the frontend API
#[derive(Parser, Debug)]
#[command(name = "transcript-relay", version)]
struct Args {
    /// JSON-lines transcript file, one {"speaker", "text", "timestamp"?} object per line
    #[arg(long)]
    transcript: PathBuf,

    /// UUID of the interview invitation
    #[arg(long)]
    invitation_id: String,

    /// Room/session ID for the interview
    #[arg(long)]
    room_id: String,

    /// Email of the candidate
    #[arg(long)]
    candidate_email: String,

    /// Display name of the candidate
    #[arg(long)]
    candidate_name: String,

    /// Optional company UUID
    #[arg(long)]
    company_id: Option<String>,

    /// Optional job posting UUID
    #[arg(long)]
    job_id: Option<String>,

    /// Config file to load
    #[arg(long, default_value = "config/transcript-relay")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Transcript API: {}", cfg.api.base_url);

    let client = ApiClient::new(&cfg.api.base_url, Duration::from_secs(cfg.api.timeout_secs))?;

    let mut info = SessionInfo::new(
        &args.invitation_id,
        &args.room_id,
        &args.candidate_email,
        &args.candidate_name,
    );
    info.company_id = args.company_id;
    info.job_id = args.job_id;

    let mut session = TranscriptSession::new(info, client);

    let lines = read_transcript_file(&args.transcript)?;
    for line in &lines {
        session.add_message(&line.speaker, &line.text, line.timestamp);
    }

    info!(
        "Loaded {} messages from {}",
        session.message_count(),
        args.transcript.display()
    );

    session
        .save(false)
        .await
        .context("Failed to save transcript")?;

    info!(
        "Transcript saved for room {} ({} messages, {}s)",
        args.room_id,
        session.message_count(),
        session.duration_seconds().unwrap_or(0)
    );

    Ok(())
}
