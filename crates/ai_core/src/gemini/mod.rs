//! Google Gemini inference engine implementation
//!
//! Connects to the Generative Language REST API (`generateContent`).

mod client;

pub use client::GeminiInferenceEngine;
