// Typed rejection reasons for game actions

use crate::models::Slot;
use thiserror::Error;

/// Why a drop was refused. All variants are recoverable and are reported to
/// the player as messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Component {0} is already placed")]
    AlreadyPlaced(String),
    #[error("Position {0} is already occupied")]
    SlotOccupied(Slot),
    #[error("Unknown component '{0}'")]
    UnknownStage(String),
}

impl PlacementError {
    /// Text shown to the player
    pub fn user_message(&self) -> String {
        match self {
            PlacementError::AlreadyPlaced(_) => "This component is already placed!".to_string(),
            PlacementError::SlotOccupied(_) => "This position is already occupied!".to_string(),
            PlacementError::UnknownStage(id) => format!("There is no component called '{}'.", id),
        }
    }
}

/// Why a validation request was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Only {placed} of 7 components placed")]
    Incomplete { placed: usize },
    #[error("Answer already validated")]
    AlreadyCompleted,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::Incomplete { placed } => format!(
                "Place all 7 components before checking your answer ({}/7 placed).",
                placed
            ),
            ValidationError::AlreadyCompleted => {
                "This game has already been scored. Reset to play again.".to_string()
            }
        }
    }
}
