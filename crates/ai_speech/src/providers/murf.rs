//! Murf Text-to-Speech Provider
//!
//! Implements `TextToSpeech` using the Murf `speech/generate` endpoint. Murf
//! renders the audio server-side and answers with a URL to the hosted file,
//! so no audio bytes pass through this client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{SynthesizedSpeech, seconds_to_ms};

/// Murf synthesizer implementing TTS
#[derive(Clone)]
pub struct MurfSynthesizer {
    client: Client,
    config: SpeechConfig,
}

impl std::fmt::Debug for MurfSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MurfSynthesizer")
            .field("base_url", &self.config.murf_base_url)
            .field("default_voice", &self.config.default_voice)
            .field("output_format", &self.config.output_format)
            .finish_non_exhaustive()
    }
}

impl MurfSynthesizer {
    /// Create a new Murf synthesizer
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate_tts().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.murf_api_key.as_deref().unwrap_or_default()
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1/speech/generate",
            self.config.murf_base_url.trim_end_matches('/')
        )
    }

    fn status_error(status: StatusCode, body: &str, voice: &str) -> SpeechError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return SpeechError::RateLimited;
        }
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return SpeechError::Configuration(format!("Murf rejected credentials: {body}"));
        }

        let message = serde_json::from_str::<ApiError>(body)
            .ok()
            .and_then(|e| e.error_message)
            .unwrap_or_else(|| body.to_string());

        if status == StatusCode::BAD_REQUEST && message.to_lowercase().contains("voice") {
            return SpeechError::VoiceNotFound(voice.to_string());
        }

        SpeechError::SynthesisFailed(format!("HTTP {status}: {message}"))
    }
}

/// Murf generate request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    format: &'a str,
    sample_rate: u32,
}

/// Murf generate response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    audio_file: Option<String>,
    #[serde(default)]
    audio_length_in_seconds: Option<f64>,
}

/// Murf error payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiError {
    #[serde(default)]
    error_message: Option<String>,
}

#[async_trait]
impl TextToSpeech for MurfSynthesizer {
    #[instrument(skip(self, text), fields(text_chars = text.chars().count(), voice = ?voice))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedSpeech, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        let chars = text.chars().count();
        if chars > self.config.max_text_chars {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {chars} characters exceeds {} limit",
                self.config.max_text_chars
            )));
        }

        let voice = voice.unwrap_or(&self.config.default_voice);
        let request = GenerateRequest {
            text,
            voice_id: voice,
            format: self.config.output_format.murf_code(),
            sample_rate: self.config.sample_rate,
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("api-key", self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body, voice));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let audio_url = generated
            .audio_file
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                SpeechError::InvalidResponse("Response did not include an audio file".to_string())
            })?;

        debug!(voice, "Speech synthesis complete");

        Ok(SynthesizedSpeech {
            audio_url,
            duration_ms: generated.audio_length_in_seconds.map(seconds_to_ms),
        })
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }

    fn provider_name(&self) -> &'static str {
        "murf"
    }
}
