//! Garden model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Position;

/// A garden bed laid out as a grid of cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Garden {
    /// Unique identifier for the garden
    pub id: u64,

    /// Username of the owner
    pub owner: String,

    /// Display name of the garden
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Number of grid rows
    pub rows: u32,

    /// Number of grid columns
    pub cols: u32,

    /// Timestamp when the garden was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the garden was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Garden {
    /// Whether a position lies inside this garden's grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }
}
