//! Synthesis adapter - Implements SynthesisPort using ai_speech

use std::sync::Arc;

use ai_speech::{MurfSynthesizer, SpeechConfig, TextToSpeech};
use application::error::ApplicationError;
use application::ports::{AdapterOutcome, SynthesisPort};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

/// Adapter for text-to-speech providers
pub struct TextToSpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for TextToSpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextToSpeechAdapter")
            .field("provider", &self.provider.provider_name())
            .field("default_voice", &self.provider.default_voice())
            .finish()
    }
}

impl TextToSpeechAdapter {
    /// Wrap an existing provider
    pub fn new(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }

    /// Create an adapter backed by Murf
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn murf(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider =
            MurfSynthesizer::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(provider)))
    }
}

#[async_trait]
impl SynthesisPort for TextToSpeechAdapter {
    #[instrument(skip(self, text), fields(provider = self.provider.provider_name(), text_chars = text.chars().count(), voice = ?voice_id))]
    async fn synthesize(&self, text: &str, voice_id: Option<String>) -> AdapterOutcome<String> {
        match self.provider.synthesize(text, voice_id.as_deref()).await {
            Ok(speech) => {
                debug!(duration_ms = ?speech.duration_ms, "TTS synthesis complete");
                AdapterOutcome::Success(speech.audio_url)
            },
            Err(e) => {
                error!(error = %e, "TTS error");
                AdapterOutcome::Failed
            },
        }
    }
}
