// Inbound events and outbound signals exchanged with the renderer

use crate::models::{LogEntry, Slot, StageDefinition};
use serde::Serialize;

/// Semantic input forwarded by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DragStart(String),
    DragEnd,
    DropAttempt(String, Slot),
    RequestValidate,
    RequestReset,
    RequestHint,
    /// One firing of the session clock
    Tick,
}

/// Message category, used by the renderer for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Success,
    Error,
    Info,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Success => "success",
            MessageCategory::Error => "error",
            MessageCategory::Info => "info",
        }
    }
}

/// State change the renderer should reflect
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    ComponentListChanged(Vec<StageDefinition>),
    SlotFilled(Slot, StageDefinition),
    MoveCountChanged(u32),
    ValidationReady(bool),
    ScoreChanged(u32),
    Message(String, MessageCategory),
    MessageHidden,
    ClockTick(String),
    LogAppended(LogEntry),
}
