//! Plant catalog operations.

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use super::utils::{plant_from_row, TIMING_COLUMNS};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{Plant, PlantTimingProfile},
};

const INSERT_PLANT_SQL: &str = "INSERT INTO plants (name, latin_name) VALUES (?1, ?2)";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)";
const UPSERT_TIMING_SQL: &str = "INSERT INTO plant_timings (plant_id, days_to_harvest_from_transplant, days_to_harvest_direct, is_direct_sow, days_to_germination, days_to_transplant_ready) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(plant_id) DO UPDATE SET days_to_harvest_from_transplant = excluded.days_to_harvest_from_transplant, days_to_harvest_direct = excluded.days_to_harvest_direct, is_direct_sow = excluded.is_direct_sow, days_to_germination = excluded.days_to_germination, days_to_transplant_ready = excluded.days_to_transplant_ready";
const DELETE_TIMING_SQL: &str = "DELETE FROM plant_timings WHERE plant_id = ?1";
const INSERT_COMPANION_SQL: &str =
    "INSERT OR IGNORE INTO plant_companions (plant_id, companion_id) VALUES (?1, ?2)";
const DELETE_COMPANION_SQL: &str =
    "DELETE FROM plant_companions WHERE plant_id = ?1 AND companion_id = ?2";

fn select_plants_sql(filter: &str) -> String {
    format!(
        "SELECT pl.id, pl.name, pl.latin_name, {TIMING_COLUMNS} FROM plants pl \
         LEFT JOIN plant_timings t ON t.plant_id = pl.id {filter}"
    )
}

pub(crate) fn ensure_plant_exists(conn: &Connection, id: u64) -> Result<()> {
    let exists: bool = conn
        .query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check plant existence")?;
    if !exists {
        return Err(GardenError::PlantNotFound { id });
    }
    Ok(())
}

/// The pairs a companion change touches: `plant -> companion`, and the
/// reverse when `mutual`.
fn companion_pairs(plant_id: u64, companion_id: u64, mutual: bool) -> Vec<(u64, u64)> {
    let mut pairs = vec![(plant_id, companion_id)];
    if mutual {
        pairs.push((companion_id, plant_id));
    }
    pairs
}

fn write_timing(tx: &Transaction<'_>, plant_id: u64, timing: Option<&PlantTimingProfile>) -> Result<()> {
    match timing {
        Some(t) => tx
            .execute(
                UPSERT_TIMING_SQL,
                params![
                    plant_id as i64,
                    t.days_to_harvest_from_transplant,
                    t.days_to_harvest_direct,
                    t.is_direct_sow,
                    t.days_to_germination,
                    t.days_from_germination_to_transplant_ready,
                ],
            )
            .db_context("Failed to save plant timing")?,
        None => tx
            .execute(DELETE_TIMING_SQL, params![plant_id as i64])
            .db_context("Failed to remove plant timing")?,
    };
    Ok(())
}

impl super::Database {
    /// Adds a plant to the catalog. Names are unique, ignoring case.
    pub fn add_plant(
        &mut self,
        name: &str,
        latin_name: Option<&str>,
        timing: Option<&PlantTimingProfile>,
    ) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_PLANT_SQL, params![name, latin_name])
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(ref code, _)
                    if code.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    GardenError::invalid_input("name")
                        .with_reason(format!("A plant named '{name}' already exists"))
                }
                e => GardenError::database("Failed to insert plant", e),
            })?;
        let id = tx.last_insert_rowid() as u64;

        if timing.is_some() {
            write_timing(&tx, id, timing)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plant {
            id,
            name: name.into(),
            latin_name: latin_name.map(String::from),
            timing: timing.copied(),
        })
    }

    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        self.connection
            .query_row(
                &select_plants_sql("WHERE pl.id = ?1"),
                params![id as i64],
                plant_from_row,
            )
            .optional()
            .db_context("Failed to load plant")
    }

    /// Looks a plant up by name, ignoring case.
    pub fn find_plant_by_name(&self, name: &str) -> Result<Option<Plant>> {
        self.connection
            .query_row(
                &select_plants_sql("WHERE pl.name = ?1"),
                params![name],
                plant_from_row,
            )
            .optional()
            .db_context("Failed to look up plant")
    }

    /// All plants, alphabetically.
    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        let sql = select_plants_sql("ORDER BY pl.name");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare plant query")?;
        let plants = stmt
            .query_map([], plant_from_row)
            .db_context("Failed to query plants")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plant rows")?;
        Ok(plants)
    }

    /// Replaces a plant's timing profile. `None` removes it, which silences
    /// every milestone for plantings of that plant.
    pub fn set_plant_timing(
        &mut self,
        id: u64,
        timing: Option<&PlantTimingProfile>,
    ) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_plant_exists(&tx, id)?;
        write_timing(&tx, id, timing)?;
        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plant(id)?.ok_or(GardenError::PlantNotFound { id })
    }

    /// Lists `companion_id` as a companion of `plant_id`, and the reverse
    /// when `mutual`. Returns the pairs that were not listed before.
    pub fn add_companion(
        &mut self,
        plant_id: u64,
        companion_id: u64,
        mutual: bool,
    ) -> Result<Vec<(u64, u64)>> {
        if plant_id == companion_id {
            return Err(GardenError::invalid_input("companion")
                .with_reason("A plant cannot be its own companion"));
        }
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        ensure_plant_exists(&tx, plant_id)?;
        ensure_plant_exists(&tx, companion_id)?;

        let mut added = Vec::new();
        for (from, to) in companion_pairs(plant_id, companion_id, mutual) {
            let inserted = tx
                .execute(INSERT_COMPANION_SQL, params![from as i64, to as i64])
                .db_context("Failed to add companion")?;
            if inserted > 0 {
                added.push((from, to));
            }
        }
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("added {} companion pair(s) for plant {plant_id}", added.len());
        Ok(added)
    }

    /// Removes a companion listing, and the reverse when `mutual`. Returns
    /// the pairs that were actually listed.
    pub fn remove_companion(
        &mut self,
        plant_id: u64,
        companion_id: u64,
        mutual: bool,
    ) -> Result<Vec<(u64, u64)>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut removed = Vec::new();
        for (from, to) in companion_pairs(plant_id, companion_id, mutual) {
            let deleted = tx
                .execute(DELETE_COMPANION_SQL, params![from as i64, to as i64])
                .db_context("Failed to remove companion")?;
            if deleted > 0 {
                removed.push((from, to));
            }
        }
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }

    /// Plants listed as companions of `plant_id`, alphabetically.
    pub fn list_companions(&self, plant_id: u64) -> Result<Vec<Plant>> {
        ensure_plant_exists(&self.connection, plant_id)?;
        let sql = select_plants_sql(
            "JOIN plant_companions c ON c.companion_id = pl.id WHERE c.plant_id = ?1 ORDER BY pl.name",
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare companion query")?;
        let companions = stmt
            .query_map(params![plant_id as i64], plant_from_row)
            .db_context("Failed to query companions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read companion rows")?;
        Ok(companions)
    }
}
