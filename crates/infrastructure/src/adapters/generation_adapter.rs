//! Generation adapter - Implements GenerationPort using ai_core

use std::sync::Arc;

use ai_core::{GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceRequest};
use application::error::ApplicationError;
use application::ports::{AdapterOutcome, GenerationPort};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

/// Adapter for text generation engines
pub struct InferenceGenerationAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for InferenceGenerationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceGenerationAdapter")
            .field("model", &self.engine.default_model())
            .finish()
    }
}

impl InferenceGenerationAdapter {
    /// Wrap an existing engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Create an adapter backed by Gemini
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to initialize.
    pub fn gemini(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(engine)))
    }
}

#[async_trait]
impl GenerationPort for InferenceGenerationAdapter {
    #[instrument(skip(self, dialog), fields(model = self.engine.default_model(), dialog_chars = dialog.chars().count()))]
    async fn generate(&self, dialog: &str) -> AdapterOutcome<String> {
        match self.engine.generate(InferenceRequest::new(dialog)).await {
            Ok(response) => {
                debug!(
                    model = %response.model,
                    tokens = ?response.usage,
                    finish_reason = ?response.finish_reason,
                    "LLM response generated"
                );
                AdapterOutcome::Success(response.content)
            },
            Err(e) => {
                error!(error = %e, "LLM error");
                AdapterOutcome::Failed
            },
        }
    }
}
