//! Infrastructure adapters
//!
//! Adapters connect application ports to the provider clients. Every provider
//! error is logged here and collapsed into `AdapterOutcome::Failed`.

mod generation_adapter;
mod synthesis_adapter;
mod transcription_adapter;

pub use generation_adapter::InferenceGenerationAdapter;
pub use synthesis_adapter::TextToSpeechAdapter;
pub use transcription_adapter::SpeechToTextAdapter;
