//! Error types for the garden planner library.
//!
//! The scheduling engine in [`crate::schedule`] never fails: incomplete timing
//! data simply produces no notification. Everything here belongs to the
//! storage and facade layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all planner operations.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Garden not found for the given ID
    #[error("Garden with ID {id} not found")]
    GardenNotFound { id: u64 },
    /// Plant not found for the given ID
    #[error("Plant with ID {id} not found")]
    PlantNotFound { id: u64 },
    /// Planting not found for the given ID
    #[error("Planting with ID {id} not found")]
    PlantingNotFound { id: u64 },
    /// Garden note not found for the given ID
    #[error("Note with ID {id} not found")]
    NoteNotFound { id: u64 },
    /// A grid cell already holds a planting
    #[error("Cell ({row}, {col}) in garden {garden_id} is already planted")]
    CellOccupied { garden_id: u64, row: u32, col: u32 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A blocking storage task panicked or was cancelled
    #[error("Background task failed: {message}")]
    Task { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GardenError {
        GardenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GardenError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a rusqlite error with a message.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Wraps a blocking task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        let message = if error.is_panic() {
            "storage task panicked".to_string()
        } else {
            error.to_string()
        };
        Self::Task { message }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = GardenError::invalid_input("row").with_reason("outside the grid");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'row': outside the grid"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load garden").unwrap_err();
        assert!(matches!(err, GardenError::Database { .. }));
        assert!(err.to_string().contains("Failed to load garden"));
    }

    #[test]
    fn test_cell_occupied_message() {
        let err = GardenError::CellOccupied {
            garden_id: 3,
            row: 1,
            col: 2,
        };
        assert_eq!(err.to_string(), "Cell (1, 2) in garden 3 is already planted");
    }

    #[tokio::test]
    async fn test_panicked_task_maps_to_task_error() {
        let join_error = tokio::task::spawn_blocking(|| panic!("lost connection"))
            .await
            .unwrap_err();
        let err = GardenError::join(join_error);
        assert!(matches!(err, GardenError::Task { .. }));
        assert_eq!(err.to_string(), "Background task failed: storage task panicked");
    }
}
