//! Application services - Use case implementations

mod chunking;
mod dialog_prompt;
mod session_gate;
mod turn_orchestrator;

pub use chunking::chunk_text;
pub use dialog_prompt::{ASSISTANT_CUE, render_dialog};
pub use session_gate::{SessionGate, SessionPermit};
pub use turn_orchestrator::{
    EMPTY_REPLY_MESSAGE, EMPTY_TRANSCRIPTION_MESSAGE, NO_AUDIO_MESSAGE, PipelineConfig, Stage,
    StageError, TurnOrchestrator, TurnResult,
};
