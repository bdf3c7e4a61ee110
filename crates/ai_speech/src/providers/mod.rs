//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `SpeechToText` and `TextToSpeech` traits.

pub mod assemblyai;
pub mod murf;

pub use assemblyai::AssemblyAiTranscriber;
pub use murf::MurfSynthesizer;
