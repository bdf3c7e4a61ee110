//! Configuration for speech processing

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the speech providers
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// AssemblyAI API key (speech-to-text)
    #[serde(default)]
    pub assemblyai_api_key: Option<String>,

    /// AssemblyAI API base URL
    #[serde(default = "default_assemblyai_base_url")]
    pub assemblyai_base_url: String,

    /// Language hint for transcription (e.g. "en", "de"); auto-detect when unset
    #[serde(default)]
    pub language_code: Option<String>,

    /// Delay between transcript status polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum number of status polls before giving up
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    /// Murf API key (text-to-speech)
    #[serde(default)]
    pub murf_api_key: Option<String>,

    /// Murf API base URL
    #[serde(default = "default_murf_base_url")]
    pub murf_base_url: String,

    /// Default voice for TTS
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Output audio format for TTS
    #[serde(default = "default_output_format")]
    pub output_format: AudioFormat,

    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Longest text (in characters) accepted per synthesis call
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_assemblyai_base_url() -> String {
    "https://api.assemblyai.com".to_string()
}

fn default_murf_base_url() -> String {
    "https://api.murf.ai".to_string()
}

fn default_voice() -> String {
    "en-US-natalie".to_string()
}

const fn default_output_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_sample_rate() -> u32 {
    44_100
}

const fn default_max_text_chars() -> usize {
    3000
}

const fn default_poll_interval_ms() -> u64 {
    1000
}

const fn default_max_poll_attempts() -> u32 {
    120
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            assemblyai_api_key: None,
            assemblyai_base_url: default_assemblyai_base_url(),
            language_code: None,
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            murf_api_key: None,
            murf_base_url: default_murf_base_url(),
            default_voice: default_voice(),
            output_format: default_output_format(),
            sample_rate: default_sample_rate(),
            max_text_chars: default_max_text_chars(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field(
                "assemblyai_api_key",
                &self.assemblyai_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("assemblyai_base_url", &self.assemblyai_base_url)
            .field("language_code", &self.language_code)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("max_poll_attempts", &self.max_poll_attempts)
            .field("murf_api_key", &self.murf_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("murf_base_url", &self.murf_base_url)
            .field("default_voice", &self.default_voice)
            .field("output_format", &self.output_format)
            .field("sample_rate", &self.sample_rate)
            .field("max_text_chars", &self.max_text_chars)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            assemblyai_api_key: Some("stt-key".to_string()),
            murf_api_key: Some("tts-key".to_string()),
            poll_interval_ms: 1,
            ..Default::default()
        }
    }

    /// Validate the settings used by the transcriber
    pub fn validate_stt(&self) -> Result<(), String> {
        if self.assemblyai_api_key.as_deref().is_none_or(str::is_empty) {
            return Err("AssemblyAI API key is required for transcription".to_string());
        }
        if self.max_poll_attempts == 0 {
            return Err("Max poll attempts must be greater than 0".to_string());
        }
        self.validate_timeout()
    }

    /// Validate the settings used by the synthesizer
    pub fn validate_tts(&self) -> Result<(), String> {
        if self.murf_api_key.as_deref().is_none_or(str::is_empty) {
            return Err("Murf API key is required for synthesis".to_string());
        }
        if self.default_voice.trim().is_empty() {
            return Err("Default voice must not be empty".to_string());
        }
        if self.max_text_chars == 0 {
            return Err("Max text length must be greater than 0".to_string());
        }
        self.validate_timeout()
    }

    fn validate_timeout(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
