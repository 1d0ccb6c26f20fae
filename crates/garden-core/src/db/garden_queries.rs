//! Garden CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{garden_from_row, GARDEN_COLUMNS};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::Garden,
};

const INSERT_GARDEN_SQL: &str = "INSERT INTO gardens (owner, name, description, grid_rows, grid_cols, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_GARDEN_SQL: &str = "DELETE FROM gardens WHERE id = ?1";
const SELECT_OWNERS_SQL: &str = "SELECT DISTINCT owner FROM gardens ORDER BY owner";

impl super::Database {
    /// Creates a garden with an empty `rows` x `cols` grid.
    pub fn create_garden(
        &mut self,
        owner: &str,
        name: &str,
        description: Option<&str>,
        rows: u32,
        cols: u32,
    ) -> Result<Garden> {
        if rows == 0 || cols == 0 {
            return Err(GardenError::invalid_input("grid")
                .with_reason(format!("Grid must have at least one cell, got {rows}x{cols}")));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_GARDEN_SQL,
                params![owner, name, description, rows, cols, &now_str, &now_str],
            )
            .db_context("Failed to insert garden")?;

        Ok(Garden {
            id: self.connection.last_insert_rowid() as u64,
            owner: owner.into(),
            name: name.into(),
            description: description.map(String::from),
            rows,
            cols,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_garden(&self, id: u64) -> Result<Option<Garden>> {
        let sql = format!("SELECT {GARDEN_COLUMNS} FROM gardens g WHERE g.id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], garden_from_row)
            .optional()
            .db_context("Failed to load garden")
    }

    /// Gardens ordered by id, optionally restricted to one owner.
    pub fn list_gardens(&self, owner: Option<&str>) -> Result<Vec<Garden>> {
        let sql = format!(
            "SELECT {GARDEN_COLUMNS} FROM gardens g WHERE (?1 IS NULL OR g.owner = ?1) ORDER BY g.id"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare garden query")?;
        let gardens = stmt
            .query_map(params![owner], garden_from_row)
            .db_context("Failed to query gardens")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read garden rows")?;
        Ok(gardens)
    }

    /// Deletes a garden and, through the foreign key cascade, its plantings.
    pub fn delete_garden(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_GARDEN_SQL, params![id as i64])
            .db_context("Failed to delete garden")?;
        if deleted == 0 {
            return Err(GardenError::GardenNotFound { id });
        }
        Ok(())
    }

    /// Every owner with at least one garden, alphabetically.
    pub fn list_owners(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_OWNERS_SQL)
            .db_context("Failed to prepare owner query")?;
        let owners = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query owners")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read owner rows")?;
        Ok(owners)
    }
}
