//! AssemblyAI Speech-to-Text Provider
//!
//! Implements `SpeechToText` against the AssemblyAI REST API. A transcription
//! takes three steps:
//!
//! 1. Upload the raw audio bytes (`POST /v2/upload`)
//! 2. Submit a transcript job for the uploaded file (`POST /v2/transcript`)
//! 3. Poll the job (`GET /v2/transcript/{id}`) until it completes or errors

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription, seconds_to_ms};

/// AssemblyAI transcriber implementing STT
#[derive(Clone)]
pub struct AssemblyAiTranscriber {
    client: Client,
    config: SpeechConfig,
}

impl std::fmt::Debug for AssemblyAiTranscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyAiTranscriber")
            .field("base_url", &self.config.assemblyai_base_url)
            .field("language_code", &self.config.language_code)
            .finish_non_exhaustive()
    }
}

impl AssemblyAiTranscriber {
    /// Create a new AssemblyAI transcriber
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the API key is missing or the
    /// HTTP client cannot be built.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate_stt().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.assemblyai_api_key.as_deref().unwrap_or_default()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.config.assemblyai_base_url.trim_end_matches('/')
        )
    }

    async fn upload(&self, audio: AudioData) -> Result<String, SpeechError> {
        let response = self
            .client
            .post(self.url("/v2/upload"))
            .header("authorization", self.api_key())
            .header("content-type", "application/octet-stream")
            .body(audio.into_bytes())
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        let upload: UploadResponse = Self::parse(response).await?;
        debug!("Audio uploaded");
        Ok(upload.upload_url)
    }

    async fn submit(&self, audio_url: &str) -> Result<TranscriptResponse, SpeechError> {
        let request = TranscriptRequest {
            audio_url,
            language_code: self.config.language_code.as_deref(),
        };

        let response = self
            .client
            .post(self.url("/v2/transcript"))
            .header("authorization", self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        Self::parse(response).await
    }

    async fn poll(&self, id: &str) -> Result<TranscriptResponse, SpeechError> {
        let response = self
            .client
            .get(self.url(&format!("/v2/transcript/{id}")))
            .header("authorization", self.api_key())
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        Self::parse(response).await
    }

    async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, SpeechError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))
    }

    fn status_error(status: StatusCode, body: String) -> SpeechError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => SpeechError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SpeechError::Configuration(format!("AssemblyAI rejected credentials: {body}"))
            },
            _ => SpeechError::TranscriptionFailed(format!("HTTP {status}: {body}")),
        }
    }

    fn into_transcription(job: TranscriptResponse) -> Transcription {
        let mut transcription = Transcription::new(job.text.unwrap_or_default());

        if let Some(lang) = job.language_code {
            transcription = transcription.with_language(lang);
        }
        if let Some(confidence) = job.confidence {
            #[allow(clippy::cast_possible_truncation)]
            let confidence = confidence as f32;
            transcription = transcription.with_confidence(confidence);
        }
        if let Some(seconds) = job.audio_duration {
            transcription = transcription.with_duration(seconds_to_ms(seconds));
        }

        transcription
    }
}

/// Upload endpoint response
#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

/// Transcript job submission body
#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

/// Transcript job as returned by submit and poll
#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: JobStatus,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    language_code: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    audio_duration: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[async_trait]
impl SpeechToText for AssemblyAiTranscriber {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let upload_url = self.upload(audio).await?;
        let mut job = self.submit(&upload_url).await?;
        debug!(job_id = %job.id, "Transcript job submitted");

        let interval = Duration::from_millis(self.config.poll_interval_ms);
        let mut attempts = 0u32;

        loop {
            match job.status {
                JobStatus::Completed => {
                    let transcription = Self::into_transcription(job);
                    debug!(
                        text_len = transcription.text.len(),
                        attempts, "Transcription complete"
                    );
                    return Ok(transcription);
                },
                JobStatus::Error => {
                    return Err(SpeechError::TranscriptionFailed(
                        job.error
                            .unwrap_or_else(|| "transcript job failed".to_string()),
                    ));
                },
                JobStatus::Queued | JobStatus::Processing => {},
            }

            if attempts >= self.config.max_poll_attempts {
                return Err(SpeechError::Timeout(
                    self.config
                        .poll_interval_ms
                        .saturating_mul(u64::from(attempts)),
                ));
            }

            tokio::time::sleep(interval).await;
            attempts += 1;
            job = self.poll(&job.id).await?;
        }
    }

    fn provider_name(&self) -> &'static str {
        "assemblyai"
    }
}
