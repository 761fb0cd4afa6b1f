// Errors and validation for commands typed at the game prompt

use crate::game::catalog::{resolve_stage, CATALOG};
use crate::models::{Slot, StageDefinition};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid step: '{0}'. Step must be a number from 1 to 7.")]
    InvalidSlot(String),
    #[error("Unknown component '{token}'. Components: {known}")]
    UnknownStage { token: String, known: String },
    #[error("Ambiguous component '{token}'. Did you mean one of: {candidates}?")]
    AmbiguousStage { token: String, candidates: String },
    #[error("Nothing is being dragged. Use 'grab <component>' first.")]
    NothingHeld,
}

/// Validate that a step is a slot number (1-7)
pub fn validate_slot(slot_str: &str) -> Result<Slot, CommandError> {
    slot_str
        .trim()
        .trim_start_matches('#')
        .parse::<u8>()
        .ok()
        .and_then(Slot::new)
        .ok_or_else(|| CommandError::InvalidSlot(slot_str.to_string()))
}

/// Resolve a typed component name (exact id or unique prefix)
pub fn validate_stage(token: &str) -> Result<&'static StageDefinition, CommandError> {
    resolve_stage(token).map_err(|candidates| {
        if candidates.is_empty() {
            let known: Vec<&str> = CATALOG.iter().map(|s| s.id).collect();
            CommandError::UnknownStage {
                token: token.to_string(),
                known: known.join(", "),
            }
        } else {
            CommandError::AmbiguousStage {
                token: token.to_string(),
                candidates: candidates.join(", "),
            }
        }
    })
}
