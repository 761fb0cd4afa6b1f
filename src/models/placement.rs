use crate::error::PlacementError;
use crate::models::{Slot, StageDefinition, STAGE_COUNT};
use std::collections::HashMap;

/// Confirmed stage-to-slot assignments for one game.
///
/// Both directions are kept in step: every insert writes the stage entry and
/// the slot entry together, and the only removal is `clear`. Callers can never
/// observe one direction without the other.
#[derive(Debug, Clone, Default)]
pub struct Placements {
    by_stage: HashMap<&'static str, Slot>,
    by_slot: [Option<&'static str>; STAGE_COUNT],
}

impl Placements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a stage into a slot.
    ///
    /// Rejects a stage that is already placed before checking the slot, so a
    /// drop that violates both rules reports the stage.
    pub fn insert(&mut self, stage: &StageDefinition, slot: Slot) -> Result<(), PlacementError> {
        if self.by_stage.contains_key(stage.id) {
            return Err(PlacementError::AlreadyPlaced(stage.id.to_string()));
        }
        if self.by_slot[slot.index()].is_some() {
            return Err(PlacementError::SlotOccupied(slot));
        }
        self.by_stage.insert(stage.id, slot);
        self.by_slot[slot.index()] = Some(stage.id);
        Ok(())
    }

    pub fn slot_of(&self, stage_id: &str) -> Option<Slot> {
        self.by_stage.get(stage_id).copied()
    }

    pub fn stage_at(&self, slot: Slot) -> Option<&'static str> {
        self.by_slot[slot.index()]
    }

    pub fn contains_stage(&self, stage_id: &str) -> bool {
        self.by_stage.contains_key(stage_id)
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.by_slot[slot.index()].is_some()
    }

    /// Number of entries counting both directions (0, 2, ..., 14)
    pub fn size(&self) -> usize {
        self.by_stage.len() + self.by_slot.iter().filter(|s| s.is_some()).count()
    }

    /// Number of confirmed placements
    pub fn len(&self) -> usize {
        self.by_stage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_stage.is_empty()
    }

    /// True once every stage and every slot is assigned
    pub fn is_full(&self) -> bool {
        self.size() == STAGE_COUNT * 2
    }

    pub fn clear(&mut self) {
        self.by_stage.clear();
        self.by_slot = [None; STAGE_COUNT];
    }

    /// Placements in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &'static str)> + '_ {
        Slot::all().filter_map(move |slot| self.stage_at(slot).map(|id| (slot, id)))
    }
}
