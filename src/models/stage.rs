use serde::Serialize;
use std::fmt;

/// Number of stages in the pipeline, and therefore number of slots.
pub const STAGE_COUNT: usize = 7;

/// Stage definition model
/// One immutable pipeline concept with its ground-truth position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub correct_position: Slot,
    pub color: &'static str,
}

/// A placement target, numbered 1 through 7.
///
/// Only valid positions can be constructed, so any `Slot` value can be used
/// to index the pipeline without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slot(u8);

impl Slot {
    /// Create a slot from a 1-based position
    pub const fn new(position: u8) -> Option<Self> {
        if position >= 1 && position <= STAGE_COUNT as u8 {
            Some(Slot(position))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index for array storage
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All slots in pipeline order
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=STAGE_COUNT as u8).map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert!(Slot::new(0).is_none());
        assert!(Slot::new(8).is_none());
        assert_eq!(Slot::new(1).map(Slot::get), Some(1));
        assert_eq!(Slot::new(7).map(Slot::index), Some(6));
    }

    #[test]
    fn test_slot_all_in_order() {
        let positions: Vec<u8> = Slot::all().map(Slot::get).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
