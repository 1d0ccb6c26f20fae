//! In-memory snapshots handed to the scheduling engine.
//!
//! The store builds these in one read; the engine only ever sees plain
//! values and never reaches back into storage.

use serde::{Deserialize, Serialize};

use super::{Garden, PlantTimingProfile, PlantingRecord};

/// A planting joined with its plant's name and timing profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledPlanting {
    pub record: PlantingRecord,
    pub plant_name: String,
    /// `None` when the plant has no timing data
    pub timing: Option<PlantTimingProfile>,
}

/// A garden and every planting on its grid, ordered by row then column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenSnapshot {
    pub garden: Garden,
    pub plantings: Vec<ScheduledPlanting>,
}
