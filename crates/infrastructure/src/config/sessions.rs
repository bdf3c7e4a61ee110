//! Session store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session retention settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStoreConfig {
    /// Evict sessions idle for longer than this many seconds; keep forever when unset
    #[serde(default)]
    pub idle_ttl_secs: Option<u64>,

    /// How often the eviction sweep runs, in seconds
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

const fn default_cleanup_interval() -> u64 {
    300
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: None,
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

impl SessionStoreConfig {
    /// Idle TTL, if eviction is enabled
    pub fn idle_ttl(&self) -> Option<Duration> {
        self.idle_ttl_secs.map(Duration::from_secs)
    }

    /// Interval between eviction sweeps
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.idle_ttl_secs == Some(0) {
            return Err("Session idle TTL must be greater than 0 when set".to_string());
        }
        if self.cleanup_interval_secs == 0 {
            return Err("Session cleanup interval must be greater than 0".to_string());
        }
        Ok(())
    }
}
