//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod generation_port;
mod outcome;
mod session_store;
mod synthesis_port;
mod transcription_port;

pub use generation_port::GenerationPort;
#[cfg(test)]
pub use generation_port::MockGenerationPort;
pub use outcome::AdapterOutcome;
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::SessionStore;
#[cfg(test)]
pub use synthesis_port::MockSynthesisPort;
pub use synthesis_port::SynthesisPort;
#[cfg(test)]
pub use transcription_port::MockTranscriptionPort;
pub use transcription_port::TranscriptionPort;
