//! Turn orchestrator - One voice conversation turn, end to end
//!
//! A cycle runs these stages in order, and each one can end it early:
//!
//! 1. Input: reject an empty or unreadable upload (`input`)
//! 2. Transcription: blank or failed speech-to-text (`stt`)
//! 3. Append the user turn
//! 4. Generation over the rendered dialog; a blank or failed reply (`llm`)
//!    records the fallback text as the assistant turn
//! 5. Append the assistant turn
//! 6. Chunked synthesis; if no chunk produced audio, the fallback text is
//!    synthesized instead without reporting an error
//!
//! Every path returns a complete [`TurnResult`]. Adapter failures arrive as
//! [`AdapterOutcome::Failed`] and are never raised past this service.

use std::{fmt, sync::Arc, time::Instant};

use domain::{SessionId, Turn};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{Instrument, error, info, instrument, warn};

use super::{
    chunking::chunk_text,
    dialog_prompt::render_dialog,
    session_gate::{SessionGate, SessionPermit},
};
use crate::{
    error::ApplicationError,
    ports::{AdapterOutcome, GenerationPort, SessionStore, SynthesisPort, TranscriptionPort},
};

/// Message reported when the upload carried no audio
pub const NO_AUDIO_MESSAGE: &str = "No audio bytes received";
/// Message reported when speech-to-text produced nothing usable
pub const EMPTY_TRANSCRIPTION_MESSAGE: &str = "Empty transcription";
/// Message reported when the language model produced nothing usable
pub const EMPTY_REPLY_MESSAGE: &str = "Empty LLM output";

/// Configuration for the turn pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Reply used whenever a stage fails
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,

    /// Largest chunk (in characters) sent to a single synthesis call
    #[serde(default = "default_chunk_size_chars")]
    pub chunk_size_chars: usize,

    /// Voice for synthesis; the synthesis adapter's default when unset
    #[serde(default)]
    pub voice_id: Option<String>,

    /// Synthesize all chunks at once instead of one after another
    #[serde(default)]
    pub concurrent_chunk_synthesis: bool,

    /// Run at most one cycle per session at a time
    #[serde(default = "default_serialize_sessions")]
    pub serialize_sessions: bool,
}

fn default_fallback_text() -> String {
    "I'm having trouble connecting right now.".to_string()
}

const fn default_chunk_size_chars() -> usize {
    3000
}

const fn default_serialize_sessions() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fallback_text: default_fallback_text(),
            chunk_size_chars: default_chunk_size_chars(),
            voice_id: None,
            concurrent_chunk_synthesis: false,
            serialize_sessions: default_serialize_sessions(),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fallback_text.trim().is_empty() {
            return Err("Fallback text must not be empty".to_string());
        }
        if self.chunk_size_chars == 0 {
            return Err("Chunk size must be greater than 0".to_string());
        }
        if self
            .voice_id
            .as_deref()
            .is_some_and(|voice| voice.trim().is_empty())
        {
            return Err("Voice id must not be blank when set".to_string());
        }
        Ok(())
    }
}

/// Pipeline stage that ended a cycle early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Upload missing, empty or unreadable
    Input,
    /// Speech-to-text failed or heard nothing
    Stt,
    /// Language model failed or answered with nothing
    Llm,
}

impl Stage {
    /// Lowercase wire name of the stage
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Stt => "stt",
            Self::Llm => "llm",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of a failed stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageError {
    pub stage: Stage,
    pub message: String,
}

impl StageError {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

/// Outcome of one orchestration cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// What the user said (empty when input or transcription failed)
    pub transcription: String,
    /// Reply text, or the fallback text on failure
    pub llm_response: String,
    /// Audio URLs in playback order
    pub audio_files: Vec<String>,
    /// Session dialog after the cycle
    pub chat_history: Vec<Turn>,
    /// Set when input, transcription or generation failed
    pub error: Option<StageError>,
}

impl TurnResult {
    /// Whether the cycle completed without a stage error
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Service that runs one conversation turn per call
pub struct TurnOrchestrator {
    transcriber: Arc<dyn TranscriptionPort>,
    generator: Arc<dyn GenerationPort>,
    synthesizer: Arc<dyn SynthesisPort>,
    sessions: Arc<dyn SessionStore>,
    gate: SessionGate,
    config: PipelineConfig,
}

impl fmt::Debug for TurnOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnOrchestrator")
            .field("config", &self.config)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl TurnOrchestrator {
    /// Create an orchestrator over the given ports
    pub fn new(
        transcriber: Arc<dyn TranscriptionPort>,
        generator: Arc<dyn GenerationPort>,
        synthesizer: Arc<dyn SynthesisPort>,
        sessions: Arc<dyn SessionStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            transcriber,
            generator,
            synthesizer,
            sessions,
            gate: SessionGate::new(),
            config,
        }
    }

    /// Run a full cycle on its own task
    ///
    /// Once started, the cycle runs to completion even if the caller stops
    /// waiting, so a session never keeps a user turn without its reply.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Internal`] only if the cycle task panicked.
    pub async fn run_turn(
        self: &Arc<Self>,
        session: SessionId,
        audio: Vec<u8>,
    ) -> Result<TurnResult, ApplicationError> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(
            async move { orchestrator.handle_turn(&session, audio).await }.in_current_span(),
        )
        .await
        .map_err(|e| ApplicationError::Internal(format!("Turn task failed: {e}")))
    }

    /// Run a full cycle for an uploaded recording
    ///
    /// Dropping this future part-way can leave the user turn recorded without
    /// a reply. Callers that may stop waiting should use [`Self::run_turn`].
    #[instrument(skip(self, audio), fields(session = %session, audio_size = audio.len()))]
    pub async fn handle_turn(&self, session: &SessionId, audio: Vec<u8>) -> TurnResult {
        let _permit = self.permit(session).await;
        let started = Instant::now();

        if audio.is_empty() {
            error!(stage = %Stage::Input, "{NO_AUDIO_MESSAGE}");
            return self
                .early_failure(session, StageError::new(Stage::Input, NO_AUDIO_MESSAGE))
                .await;
        }

        let Some(transcription) = self.transcriber.transcribe(audio).await.non_blank() else {
            error!(stage = %Stage::Stt, "{EMPTY_TRANSCRIPTION_MESSAGE}");
            return self
                .early_failure(
                    session,
                    StageError::new(Stage::Stt, EMPTY_TRANSCRIPTION_MESSAGE),
                )
                .await;
        };

        self.sessions
            .append(session, Turn::user(transcription.clone()))
            .await;
        let dialog = render_dialog(&self.sessions.get_or_create(session).await);

        let Some(reply) = self.generator.generate(&dialog).await.non_blank() else {
            error!(stage = %Stage::Llm, "{EMPTY_REPLY_MESSAGE}");
            let fallback = self.config.fallback_text.clone();
            self.sessions
                .append(session, Turn::assistant(fallback.clone()))
                .await;
            return TurnResult {
                transcription,
                llm_response: fallback,
                audio_files: self.fallback_audio().await,
                chat_history: self.sessions.snapshot(session).await,
                error: Some(StageError::new(Stage::Llm, EMPTY_REPLY_MESSAGE)),
            };
        };

        self.sessions
            .append(session, Turn::assistant(reply.clone()))
            .await;

        let chunks = chunk_text(&reply, self.config.chunk_size_chars);
        let mut audio_files = self.synthesize_chunks(&chunks).await;
        if audio_files.is_empty() {
            warn!(chunks = chunks.len(), "No chunk produced audio, using fallback speech");
            audio_files = self.fallback_audio().await;
        }

        let chat_history = self.sessions.snapshot(session).await;
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            chunks = chunks.len(),
            audio_files = audio_files.len(),
            turns = chat_history.len(),
            elapsed_ms,
            "Turn completed"
        );

        TurnResult {
            transcription,
            llm_response: reply,
            audio_files,
            chat_history,
            error: None,
        }
    }

    /// Report an upload that could not be read
    ///
    /// Produces the same `input` failure as an empty recording, with the
    /// transport's description as the message.
    #[instrument(skip(self, message), fields(session = %session))]
    pub async fn reject_input(&self, session: &SessionId, message: impl Into<String>) -> TurnResult {
        let message = message.into();
        let _permit = self.permit(session).await;
        error!(stage = %Stage::Input, %message, "Input rejected");
        self.early_failure(session, StageError::new(Stage::Input, message))
            .await
    }

    async fn permit(&self, session: &SessionId) -> Option<SessionPermit<'_>> {
        if self.config.serialize_sessions {
            Some(self.gate.acquire(session).await)
        } else {
            None
        }
    }

    /// Failure before any turn was recorded; the session is left untouched
    async fn early_failure(&self, session: &SessionId, error: StageError) -> TurnResult {
        TurnResult {
            transcription: String::new(),
            llm_response: self.config.fallback_text.clone(),
            audio_files: self.fallback_audio().await,
            chat_history: self.sessions.snapshot(session).await,
            error: Some(error),
        }
    }

    async fn synthesize_chunks(&self, chunks: &[&str]) -> Vec<String> {
        let outcomes = if self.config.concurrent_chunk_synthesis {
            join_all(
                chunks
                    .iter()
                    .map(|chunk| self.synthesizer.synthesize(chunk, self.config.voice_id.clone())),
            )
            .await
        } else {
            let mut outcomes = Vec::with_capacity(chunks.len());
            for chunk in chunks {
                outcomes.push(
                    self.synthesizer
                        .synthesize(chunk, self.config.voice_id.clone())
                        .await,
                );
            }
            outcomes
        };

        outcomes
            .into_iter()
            .enumerate()
            .filter_map(|(index, outcome)| {
                let url = outcome.non_blank();
                if url.is_none() {
                    warn!(chunk = index, "Chunk synthesis failed, skipping");
                }
                url
            })
            .collect()
    }

    /// Speech for the fallback text, empty if that fails too
    async fn fallback_audio(&self) -> Vec<String> {
        match self
            .synthesizer
            .synthesize(&self.config.fallback_text, self.config.voice_id.clone())
            .await
        {
            AdapterOutcome::Success(url) if !url.trim().is_empty() => vec![url],
            _ => {
                warn!("Fallback synthesis failed, returning no audio");
                Vec::new()
            },
        }
    }
}
