// The fixed set of pipeline stages and their correct order

use crate::models::{Slot, StageDefinition};

const fn pos(n: u8) -> Slot {
    match Slot::new(n) {
        Some(slot) => slot,
        None => panic!("catalog position out of range"),
    }
}

pub static CATALOG: [StageDefinition; 7] = [
    StageDefinition {
        id: "ingestion",
        title: "Ingestion Layer",
        description: "Data collection from IoT devices and sensors",
        correct_position: pos(1),
        color: "#667eea",
    },
    StageDefinition {
        id: "storage",
        title: "Storage Layer",
        description: "Raw data storage in data lake",
        correct_position: pos(2),
        color: "#764ba2",
    },
    StageDefinition {
        id: "bronze",
        title: "Bronze Layer",
        description: "Raw data preservation and initial processing",
        correct_position: pos(3),
        color: "#cd7f32",
    },
    StageDefinition {
        id: "silver",
        title: "Silver Layer",
        description: "Cleaned and validated data",
        correct_position: pos(4),
        color: "#c0c0c0",
    },
    StageDefinition {
        id: "gold",
        title: "Gold Layer",
        description: "Business-ready aggregated data",
        correct_position: pos(5),
        color: "#ffd700",
    },
    StageDefinition {
        id: "query",
        title: "Query Platform",
        description: "Data access and querying tools",
        correct_position: pos(6),
        color: "#3498db",
    },
    StageDefinition {
        id: "visualization",
        title: "Visualization",
        description: "Data presentation and reporting",
        correct_position: pos(7),
        color: "#e74c3c",
    },
];

pub const HINT: &str = "Hint: Think about the data flow! Data starts with collection (ingestion), \
then moves through storage and processing layers (bronze -> silver -> gold), and finally reaches \
users through querying and visualization.";

/// Look up a stage by its exact id
pub fn find_stage(id: &str) -> Option<&'static StageDefinition> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Resolve a typed token to a stage.
///
/// Exact ids (case-insensitive) win; otherwise a unique prefix is accepted.
/// On failure returns the candidate ids (empty when nothing matched).
pub fn resolve_stage(token: &str) -> Result<&'static StageDefinition, Vec<&'static str>> {
    let ids: Vec<&'static str> = CATALOG.iter().map(|s| s.id).collect();
    let id = crate::utils::resolve_prefix(token, &ids)?;
    find_stage(id).ok_or_else(Vec::new)
}
