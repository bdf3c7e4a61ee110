//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    AdapterOutcome, GenerationPort, PipelineConfig, SessionStore, SynthesisPort,
    TranscriptionPort, TurnOrchestrator,
};
use async_trait::async_trait;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use domain::{SessionId, Turn};
use infrastructure::InMemorySessionStore;
use presentation_http::{
    REQUEST_ID_HEADER, RequestIdLayer, handlers::agent_chat::ChatResponse, routes::create_router,
    state::AppState,
};
use serde_json::Value;

const FALLBACK: &str = "I'm having trouble connecting right now.";

/// Transcriber that always hears the same thing
struct FixedTranscriber(AdapterOutcome<String>);

#[async_trait]
impl TranscriptionPort for FixedTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>) -> AdapterOutcome<String> {
        self.0.clone()
    }
}

/// Generator that always answers the same thing
struct FixedGenerator(AdapterOutcome<String>);

#[async_trait]
impl GenerationPort for FixedGenerator {
    async fn generate(&self, _dialog: &str) -> AdapterOutcome<String> {
        self.0.clone()
    }
}

/// Synthesizer that hands out numbered URLs
#[derive(Default)]
struct NumberedSynthesizer {
    calls: AtomicUsize,
}

#[async_trait]
impl SynthesisPort for NumberedSynthesizer {
    async fn synthesize(&self, _text: &str, _voice_id: Option<String>) -> AdapterOutcome<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        AdapterOutcome::Success(format!("https://tts.test/{n}.mp3"))
    }
}

struct Harness {
    server: TestServer,
    sessions: Arc<InMemorySessionStore>,
}

fn harness(transcription: AdapterOutcome<String>, reply: AdapterOutcome<String>) -> Harness {
    harness_with_limit(transcription, reply, 1024 * 1024)
}

fn harness_with_limit(
    transcription: AdapterOutcome<String>,
    reply: AdapterOutcome<String>,
    max_body_bytes: usize,
) -> Harness {
    let sessions = Arc::new(InMemorySessionStore::new());
    let orchestrator = TurnOrchestrator::new(
        Arc::new(FixedTranscriber(transcription)),
        Arc::new(FixedGenerator(reply)),
        Arc::new(NumberedSynthesizer::default()),
        Arc::clone(&sessions) as Arc<dyn SessionStore>,
        PipelineConfig::default(),
    );
    let router = create_router(AppState::new(Arc::new(orchestrator)), max_body_bytes)
        .layer(RequestIdLayer::new());

    Harness {
        server: TestServer::new(router).expect("Failed to create test server"),
        sessions,
    }
}

fn success(text: &str) -> AdapterOutcome<String> {
    AdapterOutcome::Success(text.to_string())
}

fn audio_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes)
            .file_name("query.webm")
            .mime_type("audio/webm"),
    )
}

#[tokio::test]
async fn health_check_returns_ok() {
    let h = harness(success("hi"), success("hello"));

    let response = h.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn successful_turn_returns_reply_and_history() {
    let h = harness(success("what time is it"), success("It is noon."));

    let response = h
        .server
        .post("/agent/chat/kitchen")
        .multipart(audio_form(vec![1, 2, 3, 4]))
        .await;

    response.assert_status_ok();
    let body: ChatResponse = response.json();
    assert_eq!(body.transcription, "what time is it");
    assert_eq!(body.llm_response, "It is noon.");
    assert_eq!(body.audio_files, vec!["https://tts.test/1.mp3"]);
    assert_eq!(
        body.chat_history,
        vec![Turn::user("what time is it"), Turn::assistant("It is noon.")]
    );
    assert!(body.error.is_none());
}

#[tokio::test]
async fn response_uses_wire_field_names() {
    let h = harness(success("hi"), success("hello"));

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(audio_form(vec![9; 8]))
        .await;

    let body: Value = response.json();
    assert!(body["audioFiles"].is_array());
    assert_eq!(body["chat_history"][0]["role"], "user");
    assert_eq!(body["chat_history"][1]["role"], "assistant");
    assert_eq!(body["chat_history"][1]["content"], "hello");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn empty_upload_reports_input_stage() {
    let h = harness(success("unused"), success("unused"));

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(audio_form(Vec::new()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"]["stage"], "input");
    assert_eq!(body["error"]["message"], "No audio bytes received");
    assert_eq!(body["llm_response"], FALLBACK);
    assert_eq!(body["transcription"], "");
    assert_eq!(h.sessions.session_count().await, 0);
}

#[tokio::test]
async fn missing_file_field_reports_input_stage() {
    let h = harness(success("unused"), success("unused"));

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(MultipartForm::new().add_text("note", "no audio here"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"]["stage"], "input");
    assert_eq!(body["llm_response"], FALLBACK);
}

#[tokio::test]
async fn non_multipart_body_reports_input_stage() {
    let h = harness(success("unused"), success("unused"));

    let response = h.server.post("/agent/chat/s1").text("raw").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"]["stage"], "input");
}

#[tokio::test]
async fn blank_transcription_reports_stt_stage() {
    let h = harness(success("   "), success("unused"));

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(audio_form(vec![1; 4]))
        .await;

    let body: Value = response.json();
    assert_eq!(body["error"]["stage"], "stt");
    assert_eq!(body["error"]["message"], "Empty transcription");
    assert_eq!(h.sessions.session_count().await, 0);
}

#[tokio::test]
async fn llm_failure_records_fallback_turn() {
    let h = harness(success("hello"), AdapterOutcome::Failed);

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(audio_form(vec![1; 4]))
        .await;

    let body: ChatResponse = response.json();
    assert_eq!(body.error.map(|e| e.message), Some("Empty LLM output".to_string()));
    assert_eq!(body.transcription, "hello");
    assert_eq!(
        body.chat_history,
        vec![Turn::user("hello"), Turn::assistant(FALLBACK)]
    );
}

#[tokio::test]
async fn history_accumulates_per_session() {
    let h = harness(success("again"), success("sure"));

    for _ in 0..2 {
        h.server
            .post("/agent/chat/a")
            .multipart(audio_form(vec![1; 4]))
            .await
            .assert_status_ok();
    }
    h.server
        .post("/agent/chat/b")
        .multipart(audio_form(vec![1; 4]))
        .await
        .assert_status_ok();

    let a = SessionId::parse("a").expect("valid id");
    let b = SessionId::parse("b").expect("valid id");
    assert_eq!(h.sessions.snapshot(&a).await.len(), 4);
    assert_eq!(h.sessions.snapshot(&b).await.len(), 2);
}

#[tokio::test]
async fn blank_session_id_is_bad_request() {
    let h = harness(success("hi"), success("hello"));

    let response = h
        .server
        .post("/agent/chat/%20")
        .multipart(audio_form(vec![1; 4]))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let h = harness_with_limit(success("hi"), success("hello"), 1024);

    let response = h
        .server
        .post("/agent/chat/s1")
        .multipart(audio_form(vec![0; 4096]))
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(h.sessions.session_count().await, 0);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let h = harness(success("hi"), success("hello"));

    let response = h
        .server
        .get("/health")
        .add_header(REQUEST_ID_HEADER, "client-abc-1")
        .await;

    assert_eq!(response.header(REQUEST_ID_HEADER), "client-abc-1");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let h = harness(success("hi"), success("hello"));

    let response = h.server.get("/health").await;

    let id = response.header(REQUEST_ID_HEADER);
    assert!(!id.is_empty());
}

/// Generator that dies mid-turn
struct PanickingGenerator;

#[async_trait]
impl GenerationPort for PanickingGenerator {
    async fn generate(&self, _dialog: &str) -> AdapterOutcome<String> {
        panic!("generator bug");
    }
}

#[tokio::test]
async fn crashed_turn_is_internal_error() {
    let orchestrator = TurnOrchestrator::new(
        Arc::new(FixedTranscriber(success("hello"))),
        Arc::new(PanickingGenerator),
        Arc::new(NumberedSynthesizer::default()),
        Arc::new(InMemorySessionStore::new()),
        PipelineConfig::default(),
    );
    let server = TestServer::new(create_router(
        AppState::new(Arc::new(orchestrator)),
        1024 * 1024,
    ))
    .expect("Failed to create test server");

    let response = server
        .post("/agent/chat/s1")
        .multipart(audio_form(vec![1; 4]))
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "internal_error");
}
