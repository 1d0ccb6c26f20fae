//! Row decoding helpers shared by the query modules.
//!
//! Calendar dates are stored as ISO `YYYY-MM-DD` text and timestamps as
//! RFC 3339 text. Decoding failures surface as
//! `FromSqlConversionFailure` so they carry the offending column index.

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Row};

use crate::models::{
    Garden, GardenNote, Plant, PlantTimingProfile, PlantingRecord, Position, StartMethod,
};

pub(crate) const GARDEN_COLUMNS: &str =
    "g.id, g.owner, g.name, g.description, g.grid_rows, g.grid_cols, g.created_at, g.updated_at";

pub(crate) const PLANTING_COLUMNS: &str = "p.id, p.garden_id, p.plant_id, p.row_index, \
     p.col_index, p.start_method, p.planned_seed_start_date, p.planned_planting_date, \
     p.seed_started_date, p.planted_date, p.expected_harvest_date, p.actual_harvest_date, \
     p.created_at, p.updated_at";

/// Number of columns in [`PLANTING_COLUMNS`].
pub(crate) const PLANTING_COLUMN_COUNT: usize = 14;

pub(crate) const TIMING_COLUMNS: &str = "t.plant_id, t.days_to_harvest_from_transplant, \
     t.days_to_harvest_direct, t.is_direct_sow, t.days_to_germination, t.days_to_transplant_ready";

pub(crate) const NOTE_COLUMNS: &str = "n.id, n.garden_id, n.plant_id, pl.name, n.title, \
     n.note_text, n.row_index, n.col_index, n.note_date, n.created_at, n.updated_at";

pub(crate) fn date_to_sql(date: Option<Date>) -> Option<String> {
    date.map(|d| d.to_string())
}

fn conversion_error(
    idx: usize,
    ty: Type,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(err))
}

pub(crate) fn get_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

pub(crate) fn get_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|text| {
            text.parse::<Date>()
                .map_err(|e| conversion_error(idx, Type::Text, e))
        })
        .transpose()
}

pub(crate) fn get_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(idx, Type::Text, e))
}

fn get_start_method(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<StartMethod>> {
    row.get::<_, Option<String>>(idx)?
        .map(|text| {
            text.parse::<StartMethod>().map_err(|msg| {
                conversion_error(
                    idx,
                    Type::Text,
                    std::io::Error::new(std::io::ErrorKind::InvalidData, msg),
                )
            })
        })
        .transpose()
}

/// Decodes a garden from [`GARDEN_COLUMNS`] starting at column 0.
pub(crate) fn garden_from_row(row: &Row<'_>) -> rusqlite::Result<Garden> {
    Ok(Garden {
        id: get_id(row, 0)?,
        owner: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        rows: row.get(4)?,
        cols: row.get(5)?,
        created_at: get_timestamp(row, 6)?,
        updated_at: get_timestamp(row, 7)?,
    })
}

/// Decodes a planting from [`PLANTING_COLUMNS`] starting at column 0.
pub(crate) fn planting_from_row(row: &Row<'_>) -> rusqlite::Result<PlantingRecord> {
    Ok(PlantingRecord {
        id: get_id(row, 0)?,
        garden_id: get_id(row, 1)?,
        plant_id: get_id(row, 2)?,
        position: Position::new(row.get(3)?, row.get(4)?),
        start_method: get_start_method(row, 5)?,
        planned_seed_start_date: get_date(row, 6)?,
        planned_planting_date: get_date(row, 7)?,
        seed_started_date: get_date(row, 8)?,
        planted_date: get_date(row, 9)?,
        expected_harvest_date: get_date(row, 10)?,
        actual_harvest_date: get_date(row, 11)?,
        created_at: get_timestamp(row, 12)?,
        updated_at: get_timestamp(row, 13)?,
    })
}

/// Decodes an optional timing profile from [`TIMING_COLUMNS`] at `offset`.
///
/// A NULL `plant_id` means the LEFT JOIN found no timing row.
pub(crate) fn timing_from_row(
    row: &Row<'_>,
    offset: usize,
) -> rusqlite::Result<Option<PlantTimingProfile>> {
    if row.get::<_, Option<i64>>(offset)?.is_none() {
        return Ok(None);
    }
    Ok(Some(PlantTimingProfile {
        days_to_harvest_from_transplant: row.get(offset + 1)?,
        days_to_harvest_direct: row.get(offset + 2)?,
        is_direct_sow: row.get(offset + 3)?,
        days_to_germination: row.get(offset + 4)?,
        days_from_germination_to_transplant_ready: row.get(offset + 5)?,
    }))
}

/// Decodes a plant from `pl.id, pl.name, pl.latin_name` followed by
/// [`TIMING_COLUMNS`].
pub(crate) fn plant_from_row(row: &Row<'_>) -> rusqlite::Result<Plant> {
    Ok(Plant {
        id: get_id(row, 0)?,
        name: row.get(1)?,
        latin_name: row.get(2)?,
        timing: timing_from_row(row, 3)?,
    })
}

/// Decodes a note from [`NOTE_COLUMNS`] starting at column 0.
///
/// A cell is only set when both of its coordinates are stored.
pub(crate) fn note_from_row(row: &Row<'_>) -> rusqlite::Result<GardenNote> {
    let position = match (row.get::<_, Option<u32>>(6)?, row.get::<_, Option<u32>>(7)?) {
        (Some(r), Some(c)) => Some(Position::new(r, c)),
        _ => None,
    };
    Ok(GardenNote {
        id: get_id(row, 0)?,
        garden_id: get_id(row, 1)?,
        plant_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
        plant_name: row.get(3)?,
        title: row.get(4)?,
        text: row.get(5)?,
        position,
        note_date: get_date(row, 8)?.ok_or_else(|| {
            conversion_error(
                8,
                Type::Null,
                std::io::Error::new(std::io::ErrorKind::InvalidData, "missing note date"),
            )
        })?,
        created_at: get_timestamp(row, 9)?,
        updated_at: get_timestamp(row, 10)?,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn test_date_round_trip_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        let stored = date_to_sql(Some(date(2025, 4, 12)));
        assert_eq!(stored.as_deref(), Some("2025-04-12"));

        let decoded = conn
            .query_row("SELECT ?1", [&stored], |row| get_date(row, 0))
            .unwrap();
        assert_eq!(decoded, Some(date(2025, 4, 12)));
    }

    #[test]
    fn test_null_date_decodes_to_none() {
        let conn = Connection::open_in_memory().unwrap();
        let decoded = conn
            .query_row("SELECT NULL", [], |row| get_date(row, 0))
            .unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_bad_date_is_conversion_failure() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row("SELECT 'April 12th'", [], |row| get_date(row, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(0, Type::Text, _)
        ));
    }
}
