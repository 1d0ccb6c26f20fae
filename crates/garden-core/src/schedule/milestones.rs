//! Applicability gates for the four milestone kinds.
//!
//! Each gate looks at the record independently. A closed record (one with an
//! actual harvest date) raises nothing.

use crate::models::{Milestone, PlantTimingProfile, PlantingRecord, StartMethod};

use super::derive::derive_expected_transplant_date;

/// Seeds planned for a container start that has not happened yet.
pub fn seed_start_milestone(record: &PlantingRecord) -> Option<Milestone> {
    if record.start_method != Some(StartMethod::Container) || record.seed_started_date.is_some() {
        return None;
    }
    record
        .planned_seed_start_date
        .map(|planned| Milestone::SeedStart { planned })
}

/// Container seedlings waiting to be transplanted.
pub fn transplant_milestone(
    record: &PlantingRecord,
    profile: &PlantTimingProfile,
) -> Option<Milestone> {
    let seed_started = record.seed_started_date?;
    derive_expected_transplant_date(record, profile).map(|expected| Milestone::Transplant {
        expected,
        seed_started,
    })
}

/// A planned planting (any start method) not yet in the ground.
pub fn planting_milestone(record: &PlantingRecord) -> Option<Milestone> {
    if record.planted_date.is_some() {
        return None;
    }
    record
        .planned_planting_date
        .map(|planned| Milestone::Planting { planned })
}

/// A planted crop with a stored expected harvest date.
pub fn harvest_milestone(record: &PlantingRecord) -> Option<Milestone> {
    if record.is_closed() {
        return None;
    }
    let planted = record.planted_date?;
    record
        .expected_harvest_date
        .map(|expected| Milestone::Harvest { expected, planted })
}

/// Every milestone pending for a record, in gate order.
pub fn pending_milestones(record: &PlantingRecord, profile: &PlantTimingProfile) -> Vec<Milestone> {
    if record.is_closed() {
        return Vec::new();
    }
    [
        seed_start_milestone(record),
        transplant_milestone(record, profile),
        planting_milestone(record),
        harvest_milestone(record),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{MilestoneKind, Position};

    fn profile() -> PlantTimingProfile {
        PlantTimingProfile {
            days_to_harvest_from_transplant: Some(60),
            days_to_harvest_direct: None,
            is_direct_sow: false,
            days_to_germination: Some(7),
            days_from_germination_to_transplant_ready: Some(35),
        }
    }

    fn record() -> PlantingRecord {
        PlantingRecord::new(1, 1, Position::new(0, 0))
    }

    fn kinds(milestones: &[Milestone]) -> Vec<MilestoneKind> {
        milestones.iter().map(Milestone::kind).collect()
    }

    #[test]
    fn test_empty_record_has_no_milestones() {
        assert!(pending_milestones(&record(), &profile()).is_empty());
    }

    #[test]
    fn test_seed_start_gate() {
        let mut r = record();
        r.planned_seed_start_date = Some(date(2025, 3, 1));
        // No start method chosen yet
        assert!(seed_start_milestone(&r).is_none());

        r.start_method = Some(StartMethod::Container);
        assert_eq!(
            seed_start_milestone(&r),
            Some(Milestone::SeedStart {
                planned: date(2025, 3, 1)
            })
        );

        r.seed_started_date = Some(date(2025, 3, 2));
        assert!(seed_start_milestone(&r).is_none());
    }

    #[test]
    fn test_seed_start_gate_ignores_direct_sowing() {
        let mut r = record();
        r.start_method = Some(StartMethod::DirectInGround);
        r.planned_seed_start_date = Some(date(2025, 3, 1));
        assert!(seed_start_milestone(&r).is_none());
    }

    #[test]
    fn test_transplant_gate() {
        let mut r = record();
        r.start_method = Some(StartMethod::Container);
        r.seed_started_date = Some(date(2025, 3, 1));
        assert_eq!(
            transplant_milestone(&r, &profile()),
            Some(Milestone::Transplant {
                expected: date(2025, 4, 12),
                seed_started: date(2025, 3, 1),
            })
        );

        r.planted_date = Some(date(2025, 4, 14));
        assert!(transplant_milestone(&r, &profile()).is_none());
    }

    #[test]
    fn test_planting_gate_applies_to_any_start_method() {
        for method in [None, Some(StartMethod::Container), Some(StartMethod::DirectInGround)] {
            let mut r = record();
            r.start_method = method;
            r.planned_planting_date = Some(date(2025, 5, 20));
            assert_eq!(
                planting_milestone(&r),
                Some(Milestone::Planting {
                    planned: date(2025, 5, 20)
                })
            );
        }
    }

    #[test]
    fn test_harvest_gate_uses_stored_date_only() {
        let mut r = record();
        r.planted_date = Some(date(2025, 5, 1));
        assert!(harvest_milestone(&r).is_none());

        r.expected_harvest_date = Some(date(2025, 6, 30));
        assert_eq!(
            harvest_milestone(&r),
            Some(Milestone::Harvest {
                expected: date(2025, 6, 30),
                planted: date(2025, 5, 1),
            })
        );
    }

    #[test]
    fn test_inconsistent_record_raises_several_milestones() {
        let mut r = record();
        r.start_method = Some(StartMethod::Container);
        r.planned_seed_start_date = Some(date(2025, 3, 1));
        r.planned_planting_date = Some(date(2025, 5, 1));

        assert_eq!(
            kinds(&pending_milestones(&r, &profile())),
            vec![MilestoneKind::SeedStart, MilestoneKind::Planting]
        );

        r.seed_started_date = Some(date(2025, 3, 3));
        assert_eq!(
            kinds(&pending_milestones(&r, &profile())),
            vec![MilestoneKind::Transplant, MilestoneKind::Planting]
        );
    }

    #[test]
    fn test_closed_record_is_silent() {
        let mut r = record();
        r.start_method = Some(StartMethod::Container);
        r.planned_seed_start_date = Some(date(2025, 3, 1));
        r.planned_planting_date = Some(date(2025, 5, 1));
        r.expected_harvest_date = Some(date(2025, 7, 1));
        r.actual_harvest_date = Some(date(2025, 7, 3));
        assert!(pending_milestones(&r, &profile()).is_empty());

        r.planted_date = Some(date(2025, 5, 2));
        assert!(harvest_milestone(&r).is_none());
        assert!(pending_milestones(&r, &profile()).is_empty());
    }
}
