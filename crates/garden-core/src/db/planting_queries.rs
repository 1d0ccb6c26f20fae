//! Planting operations on a garden grid.
//!
//! Every write goes through [`save_planting`], which applies the direct-sow
//! rule and persists a derived expected harvest date in the same
//! transaction as the record itself.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use super::utils::{
    date_to_sql, garden_from_row, planting_from_row, timing_from_row, GARDEN_COLUMNS,
    PLANTING_COLUMNS, TIMING_COLUMNS,
};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{Garden, PlantTimingProfile, PlantingRecord, Position, UpdatePlantingRequest},
    schedule::derive_expected_harvest_date,
};

const INSERT_PLANTING_SQL: &str = "INSERT INTO plantings (garden_id, plant_id, row_index, col_index, start_method, planned_seed_start_date, planned_planting_date, seed_started_date, planted_date, expected_harvest_date, actual_harvest_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const UPDATE_PLANTING_SQL: &str = "UPDATE plantings SET start_method = ?1, planned_seed_start_date = ?2, planned_planting_date = ?3, seed_started_date = ?4, planted_date = ?5, expected_harvest_date = ?6, actual_harvest_date = ?7, updated_at = ?8 WHERE id = ?9";
const DELETE_PLANTING_SQL: &str = "DELETE FROM plantings WHERE id = ?1";
const UPDATE_GARDEN_TIMESTAMP_SQL: &str = "UPDATE gardens SET updated_at = ?1 WHERE id = ?2";

/// Applies the rules every saved record must satisfy.
///
/// Sowing directly in the ground counts as planting, and once a record is
/// planted its expected harvest is derived from the plant's timing unless a
/// value is already stored. Returns a description of each derived change.
pub(crate) fn apply_save_rules(
    record: &mut PlantingRecord,
    timing: Option<&PlantTimingProfile>,
) -> Vec<String> {
    let mut changes = Vec::new();

    if record.sync_direct_sow() {
        if let Some(planted) = record.planted_date {
            changes.push(format!("Set planted date to {planted} (sown in ground)"));
        }
    }

    if let Some(profile) = timing {
        if let Some(expected) = derive_expected_harvest_date(record, profile) {
            record.expected_harvest_date = Some(expected);
            changes.push(format!("Set expected harvest date to {expected} (derived)"));
        }
    }

    changes
}

/// Timing for `plant_id`, or `PlantNotFound` if the plant does not exist.
fn load_timing(tx: &Transaction<'_>, plant_id: u64) -> Result<Option<PlantTimingProfile>> {
    let sql = format!(
        "SELECT pl.id, {TIMING_COLUMNS} FROM plants pl LEFT JOIN plant_timings t ON t.plant_id = pl.id WHERE pl.id = ?1"
    );
    tx.query_row(&sql, params![plant_id as i64], |row| timing_from_row(row, 1))
        .optional()
        .db_context("Failed to load plant timing")?
        .ok_or(GardenError::PlantNotFound { id: plant_id })
}

pub(crate) fn load_garden(tx: &Transaction<'_>, garden_id: u64) -> Result<Garden> {
    let sql = format!("SELECT {GARDEN_COLUMNS} FROM gardens g WHERE g.id = ?1");
    tx.query_row(&sql, params![garden_id as i64], garden_from_row)
        .optional()
        .db_context("Failed to load garden")?
        .ok_or(GardenError::GardenNotFound { id: garden_id })
}

fn load_planting(tx: &Transaction<'_>, id: u64) -> Result<PlantingRecord> {
    let sql = format!("SELECT {PLANTING_COLUMNS} FROM plantings p WHERE p.id = ?1");
    tx.query_row(&sql, params![id as i64], planting_from_row)
        .optional()
        .db_context("Failed to load planting")?
        .ok_or(GardenError::PlantingNotFound { id })
}

/// The planting occupying a cell, if any.
fn find_planting_at(
    conn: &Connection,
    garden_id: u64,
    position: Position,
) -> Result<Option<PlantingRecord>> {
    let sql = format!(
        "SELECT {PLANTING_COLUMNS} FROM plantings p WHERE p.garden_id = ?1 AND p.row_index = ?2 AND p.col_index = ?3"
    );
    conn.query_row(
        &sql,
        params![garden_id as i64, position.row, position.col],
        planting_from_row,
    )
    .optional()
    .db_context("Failed to load planting")
}

/// Rejects positions outside the garden's grid.
pub(crate) fn ensure_in_grid(garden: &Garden, position: Position) -> Result<()> {
    if garden.contains(position) {
        return Ok(());
    }
    Err(GardenError::invalid_input("position").with_reason(format!(
        "Cell ({}, {}) is outside the {}x{} grid of garden {}",
        position.row, position.col, garden.rows, garden.cols, garden.id
    )))
}

/// Writes every mutable column of an existing record.
fn save_planting(tx: &Transaction<'_>, record: &PlantingRecord) -> Result<()> {
    tx.execute(
        UPDATE_PLANTING_SQL,
        params![
            record.start_method.map(|m| m.as_str()),
            date_to_sql(record.planned_seed_start_date),
            date_to_sql(record.planned_planting_date),
            date_to_sql(record.seed_started_date),
            date_to_sql(record.planted_date),
            date_to_sql(record.expected_harvest_date),
            date_to_sql(record.actual_harvest_date),
            record.updated_at.to_string(),
            record.id as i64,
        ],
    )
    .db_context("Failed to update planting")?;
    tx.execute(
        UPDATE_GARDEN_TIMESTAMP_SQL,
        params![record.updated_at.to_string(), record.garden_id as i64],
    )
    .db_context("Failed to update garden timestamp")?;
    Ok(())
}

impl super::Database {
    /// Places a plant in an empty cell of a garden's grid.
    ///
    /// `initial` is applied to the fresh record before it is saved, so a
    /// planting can be created with its dates in one step.
    pub fn place_plant(
        &mut self,
        garden_id: u64,
        plant_id: u64,
        position: Position,
        initial: &UpdatePlantingRequest,
    ) -> Result<(PlantingRecord, Vec<String>)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let garden = load_garden(&tx, garden_id)?;
        ensure_in_grid(&garden, position)?;

        if find_planting_at(&tx, garden_id, position)?.is_some() {
            return Err(GardenError::CellOccupied {
                garden_id,
                row: position.row,
                col: position.col,
            });
        }

        let timing = load_timing(&tx, plant_id)?;

        let mut record = PlantingRecord::new(garden_id, plant_id, position);
        let mut changes = initial.apply_to(&mut record);
        changes.extend(apply_save_rules(&mut record, timing.as_ref()));

        tx.execute(
            INSERT_PLANTING_SQL,
            params![
                garden_id as i64,
                plant_id as i64,
                position.row,
                position.col,
                record.start_method.map(|m| m.as_str()),
                date_to_sql(record.planned_seed_start_date),
                date_to_sql(record.planned_planting_date),
                date_to_sql(record.seed_started_date),
                date_to_sql(record.planted_date),
                date_to_sql(record.expected_harvest_date),
                date_to_sql(record.actual_harvest_date),
                record.created_at.to_string(),
                record.updated_at.to_string(),
            ],
        )
        .db_context("Failed to insert planting")?;
        record.id = tx.last_insert_rowid() as u64;

        tx.execute(
            UPDATE_GARDEN_TIMESTAMP_SQL,
            params![record.updated_at.to_string(), garden_id as i64],
        )
        .db_context("Failed to update garden timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("placed planting {} in garden {garden_id}", record.id);
        Ok((record, changes))
    }

    /// Applies `request` to a planting and saves it, returning the stored
    /// record and a description of each change.
    pub fn update_planting(
        &mut self,
        id: u64,
        request: &UpdatePlantingRequest,
    ) -> Result<(PlantingRecord, Vec<String>)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut record = load_planting(&tx, id)?;
        let timing = load_timing(&tx, record.plant_id)?;

        let mut changes = request.apply_to(&mut record);
        changes.extend(apply_save_rules(&mut record, timing.as_ref()));
        record.updated_at = Timestamp::now();

        save_planting(&tx, &record)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok((record, changes))
    }

    pub fn get_planting(&self, id: u64) -> Result<Option<PlantingRecord>> {
        let sql = format!("SELECT {PLANTING_COLUMNS} FROM plantings p WHERE p.id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], planting_from_row)
            .optional()
            .db_context("Failed to load planting")
    }

    /// Plantings in a garden in grid order (row, then column).
    pub fn list_plantings(&self, garden_id: u64) -> Result<Vec<PlantingRecord>> {
        if self.get_garden(garden_id)?.is_none() {
            return Err(GardenError::GardenNotFound { id: garden_id });
        }
        let sql = format!(
            "SELECT {PLANTING_COLUMNS} FROM plantings p WHERE p.garden_id = ?1 ORDER BY p.row_index, p.col_index"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare planting query")?;
        let plantings = stmt
            .query_map(params![garden_id as i64], planting_from_row)
            .db_context("Failed to query plantings")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read planting rows")?;
        Ok(plantings)
    }

    /// Removes the planting in a cell, returning it.
    pub fn clear_cell(&mut self, garden_id: u64, position: Position) -> Result<PlantingRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let garden = load_garden(&tx, garden_id)?;
        ensure_in_grid(&garden, position)?;

        let record = find_planting_at(&tx, garden_id, position)?
            .ok_or_else(|| {
                GardenError::invalid_input("position").with_reason(format!(
                    "Cell ({}, {}) in garden {garden_id} is empty",
                    position.row, position.col
                ))
            })?;

        tx.execute(DELETE_PLANTING_SQL, params![record.id as i64])
            .db_context("Failed to delete planting")?;
        tx.execute(
            UPDATE_GARDEN_TIMESTAMP_SQL,
            params![Timestamp::now().to_string(), garden_id as i64],
        )
        .db_context("Failed to update garden timestamp")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(record)
    }
}
