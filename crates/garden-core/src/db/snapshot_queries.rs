//! Snapshot reads feeding the scheduling engine.
//!
//! A snapshot is read inside a single transaction so the engine sees one
//! consistent view of an owner's gardens.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{
    garden_from_row, planting_from_row, timing_from_row, GARDEN_COLUMNS, PLANTING_COLUMNS,
    PLANTING_COLUMN_COUNT, TIMING_COLUMNS,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Garden, GardenSnapshot, ScheduledPlanting},
};

fn scheduled_plantings_sql(filter: &str) -> String {
    format!(
        "SELECT {PLANTING_COLUMNS}, pl.name, {TIMING_COLUMNS} FROM plantings p \
         JOIN plants pl ON pl.id = p.plant_id \
         LEFT JOIN plant_timings t ON t.plant_id = p.plant_id \
         {filter} ORDER BY p.garden_id, p.row_index, p.col_index"
    )
}

fn scheduled_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScheduledPlanting> {
    Ok(ScheduledPlanting {
        record: planting_from_row(row)?,
        plant_name: row.get(PLANTING_COLUMN_COUNT)?,
        timing: timing_from_row(row, PLANTING_COLUMN_COUNT + 1)?,
    })
}

/// Attaches plantings to their gardens, keeping garden order.
fn assemble(gardens: Vec<Garden>, plantings: Vec<ScheduledPlanting>) -> Vec<GardenSnapshot> {
    let mut by_garden: HashMap<u64, Vec<ScheduledPlanting>> = HashMap::new();
    for planting in plantings {
        by_garden
            .entry(planting.record.garden_id)
            .or_default()
            .push(planting);
    }
    gardens
        .into_iter()
        .map(|garden| GardenSnapshot {
            plantings: by_garden.remove(&garden.id).unwrap_or_default(),
            garden,
        })
        .collect()
}

fn read_owner_snapshots(conn: &Connection, owner: &str) -> Result<Vec<GardenSnapshot>> {
    let gardens_sql =
        format!("SELECT {GARDEN_COLUMNS} FROM gardens g WHERE g.owner = ?1 ORDER BY g.id");
    let gardens = conn
        .prepare(&gardens_sql)
        .db_context("Failed to prepare garden query")?
        .query_map(params![owner], garden_from_row)
        .db_context("Failed to query gardens")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read garden rows")?;

    let plantings_sql = scheduled_plantings_sql(
        "WHERE p.garden_id IN (SELECT id FROM gardens WHERE owner = ?1)",
    );
    let plantings = conn
        .prepare(&plantings_sql)
        .db_context("Failed to prepare planting query")?
        .query_map(params![owner], scheduled_from_row)
        .db_context("Failed to query plantings")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read planting rows")?;

    Ok(assemble(gardens, plantings))
}

fn read_garden_snapshot(conn: &Connection, garden_id: u64) -> Result<Option<GardenSnapshot>> {
    let garden_sql = format!("SELECT {GARDEN_COLUMNS} FROM gardens g WHERE g.id = ?1");
    let Some(garden) = conn
        .query_row(&garden_sql, params![garden_id as i64], garden_from_row)
        .optional()
        .db_context("Failed to load garden")?
    else {
        return Ok(None);
    };

    let plantings = conn
        .prepare(&scheduled_plantings_sql("WHERE p.garden_id = ?1"))
        .db_context("Failed to prepare planting query")?
        .query_map(params![garden_id as i64], scheduled_from_row)
        .db_context("Failed to query plantings")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read planting rows")?;

    Ok(Some(GardenSnapshot { garden, plantings }))
}

impl super::Database {
    /// Every garden of `owner` with its plantings, gardens by id and
    /// plantings in grid order.
    pub fn owner_snapshots(&self, owner: &str) -> Result<Vec<GardenSnapshot>> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")?;
        let snapshots = read_owner_snapshots(&tx, owner)?;
        tx.commit().db_context("Failed to end read transaction")?;
        Ok(snapshots)
    }

    /// One garden with its plantings, `None` if the garden does not exist.
    pub fn garden_snapshot(&self, garden_id: u64) -> Result<Option<GardenSnapshot>> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")?;
        let snapshot = read_garden_snapshot(&tx, garden_id)?;
        tx.commit().db_context("Failed to end read transaction")?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{
        db::Database,
        models::{PlantTimingProfile, Position, UpdatePlantingRequest},
    };

    #[test]
    fn test_owner_snapshots_group_and_order() {
        let mut db = Database::in_memory().unwrap();
        let back = db.create_garden("alice", "Back Yard", None, 3, 3).unwrap();
        let empty = db.create_garden("alice", "Balcony", None, 1, 1).unwrap();
        let other = db.create_garden("bob", "Allotment", None, 2, 2).unwrap();

        let tomato = db
            .add_plant(
                "Tomato",
                None,
                Some(&PlantTimingProfile {
                    days_to_harvest_from_transplant: Some(70),
                    ..Default::default()
                }),
            )
            .unwrap();
        let basil = db.add_plant("Basil", None, None).unwrap();

        let planted = UpdatePlantingRequest {
            planted_date: Some(date(2025, 5, 1)),
            ..Default::default()
        };
        db.place_plant(back.id, basil.id, Position::new(2, 0), &planted)
            .unwrap();
        db.place_plant(back.id, tomato.id, Position::new(0, 1), &planted)
            .unwrap();
        db.place_plant(other.id, tomato.id, Position::new(0, 0), &planted)
            .unwrap();

        let snapshots = db.owner_snapshots("alice").unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].garden.id, back.id);
        assert_eq!(snapshots[1].garden.id, empty.id);
        assert!(snapshots[1].plantings.is_empty());

        let back_plantings = &snapshots[0].plantings;
        assert_eq!(back_plantings[0].plant_name, "Tomato");
        assert!(back_plantings[0].timing.is_some());
        assert_eq!(back_plantings[1].plant_name, "Basil");
        assert!(back_plantings[1].timing.is_none());
    }

    #[test]
    fn test_missing_garden_snapshot() {
        let db = Database::in_memory().unwrap();
        assert!(db.garden_snapshot(5).unwrap().is_none());
    }
}
