use chrono::{DateTime, Local};
use serde::Serialize;

/// One activity log record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub action: String,
    pub details: String,
}

impl LogEntry {
    pub fn new(action: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            action: action.into(),
            details: details.into(),
        }
    }

    /// Single-line form: `[HH:MM:SS] Action: details`
    pub fn format_line(&self) -> String {
        format!("[{}] {}: {}", self.timestamp.format("%H:%M:%S"), self.action, self.details)
    }
}
