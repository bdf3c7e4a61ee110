//! Transcription port - Interface for speech-to-text

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::AdapterOutcome;

/// Port for turning recorded audio into text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe raw audio bytes
    ///
    /// `Success` may carry blank text when no speech was detected; judging
    /// blankness is left to the caller.
    async fn transcribe(&self, audio: Vec<u8>) -> AdapterOutcome<String>;
}
