//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech provider clients must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, SynthesizedSpeech, Transcription};

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert audio data to text transcriptions.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SpeechToText, AudioData};
///
/// async fn transcribe_upload(
///     stt: &impl SpeechToText,
///     bytes: Vec<u8>,
/// ) -> Result<String, SpeechError> {
///     let transcription = stt.transcribe(AudioData::new(bytes)).await?;
///     Ok(transcription.text)
/// }
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// A successful transcription may still carry blank text when the
    /// provider detected no speech.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Name of the backing provider
    fn provider_name(&self) -> &'static str;
}

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait render text into a hosted audio file and
/// return a reference to it.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice` - Optional voice ID to use (uses default if None)
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedSpeech, SpeechError>;

    /// Voice used when the caller does not pick one
    fn default_voice(&self) -> &str;

    /// Name of the backing provider
    fn provider_name(&self) -> &'static str;
}
