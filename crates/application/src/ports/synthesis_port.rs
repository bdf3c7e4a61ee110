//! Synthesis port - Interface for text-to-speech

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::AdapterOutcome;

/// Port for rendering text into a playable audio file
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SynthesisPort: Send + Sync {
    /// Synthesize `text` and return a URL to the audio
    ///
    /// `voice_id` of `None` selects the adapter's default voice.
    async fn synthesize(&self, text: &str, voice_id: Option<String>) -> AdapterOutcome<String>;
}
