//! Expected-date derivation for planting records.

use jiff::{civil::Date, Span};

use crate::models::{PlantTimingProfile, PlantingRecord, StartMethod};

/// Adds whole days to a date, `None` on overflow.
pub(crate) fn add_days(date: Date, days: u32) -> Option<Date> {
    let span = Span::new().try_days(i64::from(days)).ok()?;
    date.checked_add(span).ok()
}

/// Forecast date a container-started planting will be ready to transplant.
///
/// Only applies while the seedling is still in its container: the record must
/// be a container start with a seed-start date and no planted date. A profile
/// whose germination and transplant-ready durations add up to zero yields
/// `None` rather than the seed-start date itself.
pub fn derive_expected_transplant_date(
    record: &PlantingRecord,
    profile: &PlantTimingProfile,
) -> Option<Date> {
    if record.start_method != Some(StartMethod::Container) || record.planted_date.is_some() {
        return None;
    }
    let seed_started = record.seed_started_date?;
    let days = profile.days_to_transplant_ready()?;
    add_days(seed_started, days)
}

/// Expected harvest date for a planted record that has none stored yet.
///
/// Returns `None` when the record already carries an expected harvest date,
/// so a stored value is never recomputed. The caller persists the result.
pub fn derive_expected_harvest_date(
    record: &PlantingRecord,
    profile: &PlantTimingProfile,
) -> Option<Date> {
    if record.expected_harvest_date.is_some() {
        return None;
    }
    let planted = record.planted_date?;
    let days = profile.harvest_duration()?;
    add_days(planted, days)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Position;

    fn container_record(seed_started: Date) -> PlantingRecord {
        let mut record = PlantingRecord::new(1, 1, Position::new(0, 0));
        record.start_method = Some(StartMethod::Container);
        record.seed_started_date = Some(seed_started);
        record
    }

    fn tomato() -> PlantTimingProfile {
        PlantTimingProfile {
            days_to_harvest_from_transplant: Some(70),
            days_to_harvest_direct: None,
            is_direct_sow: false,
            days_to_germination: Some(7),
            days_from_germination_to_transplant_ready: Some(35),
        }
    }

    #[test]
    fn test_transplant_date_from_seed_start() {
        let record = container_record(date(2025, 3, 1));
        assert_eq!(
            derive_expected_transplant_date(&record, &tomato()),
            Some(date(2025, 4, 12))
        );
    }

    #[test]
    fn test_transplant_date_zero_duration_is_none() {
        let record = container_record(date(2025, 3, 1));
        let profile = PlantTimingProfile {
            days_to_germination: Some(0),
            days_from_germination_to_transplant_ready: Some(0),
            ..tomato()
        };
        assert_eq!(derive_expected_transplant_date(&record, &profile), None);

        let unknown = PlantTimingProfile {
            days_to_germination: None,
            days_from_germination_to_transplant_ready: None,
            ..tomato()
        };
        assert_eq!(derive_expected_transplant_date(&record, &unknown), None);
    }

    #[test]
    fn test_transplant_date_requires_container_and_not_planted() {
        let mut record = container_record(date(2025, 3, 1));
        record.planted_date = Some(date(2025, 4, 15));
        assert_eq!(derive_expected_transplant_date(&record, &tomato()), None);

        let mut direct = container_record(date(2025, 3, 1));
        direct.start_method = Some(StartMethod::DirectInGround);
        assert_eq!(derive_expected_transplant_date(&direct, &tomato()), None);

        let mut undecided = container_record(date(2025, 3, 1));
        undecided.start_method = None;
        assert_eq!(derive_expected_transplant_date(&undecided, &tomato()), None);
    }

    #[test]
    fn test_transplant_date_direct_sow_profile() {
        let record = container_record(date(2025, 3, 1));
        let profile = PlantTimingProfile {
            is_direct_sow: true,
            ..tomato()
        };
        assert_eq!(derive_expected_transplant_date(&record, &profile), None);
    }

    #[test]
    fn test_harvest_date_from_planted_date() {
        let mut record = container_record(date(2025, 3, 1));
        record.planted_date = Some(date(2025, 5, 1));
        assert_eq!(
            derive_expected_harvest_date(&record, &tomato()),
            Some(date(2025, 7, 10))
        );
    }

    #[test]
    fn test_harvest_date_falls_back_to_direct_duration() {
        let mut record = PlantingRecord::new(1, 1, Position::new(0, 0));
        record.planted_date = Some(date(2025, 5, 1));
        let radish = PlantTimingProfile {
            days_to_harvest_direct: Some(25),
            is_direct_sow: true,
            ..Default::default()
        };
        assert_eq!(
            derive_expected_harvest_date(&record, &radish),
            Some(date(2025, 5, 26))
        );
        assert_eq!(
            derive_expected_harvest_date(&record, &PlantTimingProfile::default()),
            None
        );
    }

    #[test]
    fn test_harvest_date_keeps_stored_value() {
        let mut record = container_record(date(2025, 3, 1));
        record.planted_date = Some(date(2025, 5, 1));
        record.expected_harvest_date = Some(date(2025, 8, 1));
        assert_eq!(derive_expected_harvest_date(&record, &tomato()), None);
    }

    #[test]
    fn test_harvest_date_requires_planted_date() {
        let record = container_record(date(2025, 3, 1));
        assert_eq!(derive_expected_harvest_date(&record, &tomato()), None);
    }

    #[test]
    fn test_add_days_overflow_is_none() {
        assert_eq!(add_days(date(9999, 12, 1), 365), None);
        assert_eq!(add_days(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
    }
}
