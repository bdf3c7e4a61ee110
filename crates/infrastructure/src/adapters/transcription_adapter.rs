//! Transcription adapter - Implements TranscriptionPort using ai_speech

use std::sync::Arc;

use ai_speech::{AssemblyAiTranscriber, AudioData, SpeechConfig, SpeechToText};
use application::error::ApplicationError;
use application::ports::{AdapterOutcome, TranscriptionPort};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

/// Adapter for speech-to-text providers
pub struct SpeechToTextAdapter {
    provider: Arc<dyn SpeechToText>,
}

impl std::fmt::Debug for SpeechToTextAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechToTextAdapter")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}

impl SpeechToTextAdapter {
    /// Wrap an existing provider
    pub fn new(provider: Arc<dyn SpeechToText>) -> Self {
        Self { provider }
    }

    /// Create an adapter backed by AssemblyAI
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn assemblyai(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = AssemblyAiTranscriber::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(provider)))
    }
}

#[async_trait]
impl TranscriptionPort for SpeechToTextAdapter {
    #[instrument(skip(self, audio), fields(provider = self.provider.provider_name(), audio_size = audio.len()))]
    async fn transcribe(&self, audio: Vec<u8>) -> AdapterOutcome<String> {
        match self.provider.transcribe(AudioData::new(audio)).await {
            Ok(transcription) => {
                debug!(
                    text_len = transcription.text.len(),
                    language = ?transcription.language,
                    confidence = ?transcription.confidence,
                    "Transcription complete"
                );
                AdapterOutcome::Success(transcription.text)
            },
            Err(e) => {
                error!(error = %e, "STT error");
                AdapterOutcome::Failed
            },
        }
    }
}
