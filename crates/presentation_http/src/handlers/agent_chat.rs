//! Voice turn handler

use application::{StageError, TurnResult};
use axum::{
    Json,
    extract::{
        Multipart, Path, State,
        multipart::{MultipartError, MultipartRejection},
    },
};
use domain::{SessionId, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Multipart field carrying the recording
pub const AUDIO_FIELD: &str = "file";

/// Turn response body
///
/// Returned for every orchestrator outcome; failures are described by
/// `error` rather than by the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// What the user said
    pub transcription: String,
    /// Reply text, or the fallback text
    pub llm_response: String,
    /// Reply audio URLs in playback order
    #[serde(rename = "audioFiles")]
    pub audio_files: Vec<String>,
    /// Session dialog after the turn
    pub chat_history: Vec<Turn>,
    /// Failed stage, if any
    pub error: Option<StageError>,
}

impl From<TurnResult> for ChatResponse {
    fn from(result: TurnResult) -> Self {
        Self {
            transcription: result.transcription,
            llm_response: result.llm_response,
            audio_files: result.audio_files,
            chat_history: result.chat_history,
            error: result.error,
        }
    }
}

/// Run one conversation turn for an uploaded recording
#[instrument(skip(state, multipart))]
pub async fn agent_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session = SessionId::parse(&session_id)?;

    let result = match read_audio(multipart).await {
        Ok(audio) => state.orchestrator.run_turn(session, audio).await?,
        Err(reason) => state.orchestrator.reject_input(&session, reason).await,
    };

    Ok(Json(result.into()))
}

/// Pull the bytes of the audio field out of the form
async fn read_audio(multipart: Result<Multipart, MultipartRejection>) -> Result<Vec<u8>, String> {
    let mut multipart = multipart.map_err(|e| e.body_text())?;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() == Some(AUDIO_FIELD) {
            let bytes = field.bytes().await.map_err(upload_error)?;
            debug!(audio_size = bytes.len(), "Audio upload received");
            return Ok(bytes.to_vec());
        }
    }

    Err(format!("Missing '{AUDIO_FIELD}' field in upload"))
}

fn upload_error(e: MultipartError) -> String {
    format!("Failed to read upload: {}", e.body_text())
}
