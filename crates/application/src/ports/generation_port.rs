//! Generation port - Interface for language model replies

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::AdapterOutcome;

/// Port for generating a reply from a rendered dialog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Complete the dialog, which ends with an `AI:` cue
    async fn generate(&self, dialog: &str) -> AdapterOutcome<String>;
}
