//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, GardenError, Result};

/// Columns added to `plantings` after the first schema revision.
const PLANTING_MIGRATIONS: &[(&str, &str)] = &[
    ("start_method", "ALTER TABLE plantings ADD COLUMN start_method TEXT"),
    (
        "planned_seed_start_date",
        "ALTER TABLE plantings ADD COLUMN planned_seed_start_date TEXT",
    ),
    (
        "planned_planting_date",
        "ALTER TABLE plantings ADD COLUMN planned_planting_date TEXT",
    ),
    (
        "seed_started_date",
        "ALTER TABLE plantings ADD COLUMN seed_started_date TEXT",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }

    /// Brings databases created by older releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        for (column, sql) in PLANTING_MIGRATIONS {
            if !self.has_column("plantings", column)? {
                self.connection.execute(sql, []).map_err(|e| {
                    GardenError::database(
                        format!("Failed to add {column} column to plantings table"),
                        e,
                    )
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::Database;

    #[test]
    fn test_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garden.db");
        Database::new(&path).unwrap();
        Database::new(&path).unwrap();
    }

    #[test]
    fn test_migrates_old_plantings_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE plantings (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    garden_id INTEGER NOT NULL,
                    plant_id INTEGER NOT NULL,
                    row_index INTEGER NOT NULL,
                    col_index INTEGER NOT NULL,
                    planted_date TEXT,
                    expected_harvest_date TEXT,
                    actual_harvest_date TEXT,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .unwrap();
        }

        let db = Database::new(&path).unwrap();
        for column in ["start_method", "planned_seed_start_date", "seed_started_date"] {
            assert!(db.has_column("plantings", column).unwrap(), "{column}");
        }
    }
}
