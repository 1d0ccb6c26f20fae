//! Plant catalog entries and their growth timing.

use serde::{Deserialize, Serialize};

/// Days each growth stage takes for a plant species.
///
/// All durations are optional; a missing value means "unknown", never zero
/// days.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantTimingProfile {
    /// Harvest duration counted from the transplant (or planting) date
    pub days_to_harvest_from_transplant: Option<u32>,

    /// Harvest duration counted from a direct sowing
    pub days_to_harvest_direct: Option<u32>,

    /// The plant is never started in a container
    #[serde(default)]
    pub is_direct_sow: bool,

    /// Days from sowing to germination (container starts only)
    pub days_to_germination: Option<u32>,

    /// Days from germination until seedlings can be transplanted
    pub days_from_germination_to_transplant_ready: Option<u32>,
}

impl PlantTimingProfile {
    /// Harvest duration, preferring the transplant-based figure.
    pub fn harvest_duration(&self) -> Option<u32> {
        self.days_to_harvest_from_transplant
            .or(self.days_to_harvest_direct)
    }

    /// Days from a container sowing until transplant readiness.
    ///
    /// Returns `None` for direct-sown plants and when the known durations add
    /// up to zero.
    pub fn days_to_transplant_ready(&self) -> Option<u32> {
        if self.is_direct_sow {
            return None;
        }
        let total = self
            .days_to_germination
            .unwrap_or(0)
            .saturating_add(self.days_from_germination_to_transplant_ready.unwrap_or(0));
        (total > 0).then_some(total)
    }
}

/// A plant species in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// Common name, unique within the catalog
    pub name: String,

    /// Botanical name
    pub latin_name: Option<String>,

    /// Growth timing; `None` when the catalog has no timing data at all
    pub timing: Option<PlantTimingProfile>,
}

/// A plant together with the plants listed as growing well beside it.
///
/// The relation is one-directional: Tomato listing Basil says nothing about
/// what Basil lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantCompanions {
    pub plant: Plant,
    /// Companions in name order
    pub companions: Vec<Plant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_duration_prefers_transplant() {
        let profile = PlantTimingProfile {
            days_to_harvest_from_transplant: Some(70),
            days_to_harvest_direct: Some(90),
            ..Default::default()
        };
        assert_eq!(profile.harvest_duration(), Some(70));

        let direct_only = PlantTimingProfile {
            days_to_harvest_direct: Some(55),
            ..Default::default()
        };
        assert_eq!(direct_only.harvest_duration(), Some(55));
        assert_eq!(PlantTimingProfile::default().harvest_duration(), None);
    }

    #[test]
    fn test_transplant_ready_sums_known_durations() {
        let profile = PlantTimingProfile {
            days_to_germination: Some(7),
            days_from_germination_to_transplant_ready: None,
            ..Default::default()
        };
        assert_eq!(profile.days_to_transplant_ready(), Some(7));
    }

    #[test]
    fn test_transplant_ready_zero_is_unknown() {
        let profile = PlantTimingProfile {
            days_to_germination: Some(0),
            days_from_germination_to_transplant_ready: Some(0),
            ..Default::default()
        };
        assert_eq!(profile.days_to_transplant_ready(), None);
    }

    #[test]
    fn test_transplant_ready_direct_sow() {
        let profile = PlantTimingProfile {
            is_direct_sow: true,
            days_to_germination: Some(10),
            days_from_germination_to_transplant_ready: Some(20),
            ..Default::default()
        };
        assert_eq!(profile.days_to_transplant_ready(), None);
    }
}
