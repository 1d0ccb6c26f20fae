//! SQLite storage for gardens, plants, plantings and garden notes.
//!
//! Each query module adds methods to [`Database`]. Connections are cheap and
//! short-lived: the planner opens one per operation.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod garden_queries;
pub mod migrations;
pub mod note_queries;
pub mod plant_queries;
pub mod planting_queries;
pub mod snapshot_queries;
pub(crate) mod utils;

pub use note_queries::NewNote;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// An in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
