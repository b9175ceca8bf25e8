//! Notification adapters.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::config::NotificationConfig;
use crate::ports::Notifier;

/// Emits confirmation notices as log events, with the display settings a
/// snackbar-style UI would use.
#[derive(Debug, Clone)]
pub struct TracingNotifier {
    duration: Duration,
    action_label: String,
}

impl TracingNotifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            duration: config.duration(),
            action_label: config.action_label.clone(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(
            duration_ms = self.duration.as_millis() as u64,
            action = %self.action_label,
            "{}",
            message
        );
    }
}

/// Keeps every notice in memory, oldest first.
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
