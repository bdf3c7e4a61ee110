//! AI Speech - Speech-to-Text and Text-to-Speech clients
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS) into a hosted audio file
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - AssemblyAI (STT): upload, submit, poll
//! - Murf (TTS): returns a URL to the generated audio file
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{AssemblyAiTranscriber, MurfSynthesizer, SpeechToText, TextToSpeech, AudioData};
//!
//! let stt = AssemblyAiTranscriber::new(config.clone())?;
//! let transcription = stt.transcribe(AudioData::new(bytes)).await?;
//!
//! let tts = MurfSynthesizer::new(config)?;
//! let speech = tts.synthesize("Hello, world!", None).await?;
//! println!("Audio at {}", speech.audio_url);
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::{AssemblyAiTranscriber, MurfSynthesizer};
pub use types::{AudioData, AudioFormat, SynthesizedSpeech, Transcription};
