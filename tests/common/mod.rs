// Shared in-process stub of the transcript endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use transcript_relay::TranscriptPayload;

#[derive(Clone)]
struct StubState {
    received: Arc<Mutex<Vec<TranscriptPayload>>>,
    status: StatusCode,
    body: Arc<serde_json::Value>,
}

/// Spawn a stub endpoint that records every payload it receives and
/// answers with the given status and body. Returns the base URL to point
/// a client at, plus the recorded payloads.
pub async fn spawn_stub(
    status: StatusCode,
    body: serde_json::Value,
) -> (String, Arc<Mutex<Vec<TranscriptPayload>>>) {
    let received: Arc<Mutex<Vec<TranscriptPayload>>> = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        received: Arc::clone(&received),
        status,
        body: Arc::new(body),
    };

    let app = Router::new()
        .route("/api/interview-transcript", post(save_transcript))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

async fn save_transcript(
    State(state): State<StubState>,
    Json(payload): Json<TranscriptPayload>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.received.lock().await.push(payload);
    (state.status, Json((*state.body).clone()))
}
