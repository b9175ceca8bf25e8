//! Notification display settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// How long a notice stays visible
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Label of the dismiss action
    #[serde(default = "default_action_label")]
    pub action_label: String,
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_ms == 0 || self.duration_ms > 60_000 {
            return Err(ValidationError::InvalidNotificationDuration);
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            action_label: default_action_label(),
        }
    }
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_action_label() -> String {
    "Close".to_string()
}
