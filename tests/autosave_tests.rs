// AutoSaver: periodic uploads of a shared session buffer.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use transcript_relay::{ApiClient, AutoSaver, SessionInfo, TranscriptSession};

fn shared_session(base_url: &str) -> Arc<Mutex<TranscriptSession>> {
    let client = ApiClient::new(base_url, Duration::from_secs(2)).unwrap();
    Arc::new(Mutex::new(TranscriptSession::new(
        SessionInfo::new("i1", "r1", "a@b.com", "A"),
        client,
    )))
}

#[tokio::test]
async fn uploads_periodically_without_finalizing() {
    let (base, received) = common::spawn_stub(StatusCode::OK, json!({"success": true})).await;

    let session = shared_session(&base);
    session.lock().await.add_message("agent", "Hello", None);

    let saver = AutoSaver::start(Arc::clone(&session), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(230)).await;
    saver.stop();

    let count = received.lock().await.len();
    assert!(count >= 2, "expected repeated auto-saves, got {}", count);

    // Auto-saves never stamp the end time
    assert_eq!(session.lock().await.duration_seconds(), None);
}

#[tokio::test]
async fn skips_while_buffer_is_empty() {
    let (base, received) = common::spawn_stub(StatusCode::OK, json!({"success": true})).await;

    let session = shared_session(&base);

    let saver = AutoSaver::start(Arc::clone(&session), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(180)).await;
    saver.stop();

    assert!(received.lock().await.is_empty());
}

#[tokio::test]
async fn stop_halts_uploads() {
    let (base, received) = common::spawn_stub(StatusCode::OK, json!({"success": true})).await;

    let session = shared_session(&base);
    session.lock().await.add_message("agent", "Hello", None);

    let saver = AutoSaver::start(Arc::clone(&session), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(120)).await;
    saver.stop();

    // Let any in-flight save drain before sampling the count
    tokio::time::sleep(Duration::from_millis(60)).await;
    let count_at_stop = received.lock().await.len();

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(received.lock().await.len(), count_at_stop);
}
