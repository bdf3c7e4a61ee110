//! AI Core - Inference engine abstraction
//!
//! Provides the `InferenceEngine` port for text generation and a Google Gemini
//! implementation that talks to the `generateContent` REST endpoint.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
