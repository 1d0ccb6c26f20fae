//! Garden journal entries.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Position;

/// A dated observation or reminder kept with a garden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenNote {
    pub id: u64,

    /// ID of the garden the note belongs to
    pub garden_id: u64,

    /// Plant the note is about; cleared when the plant is removed
    pub plant_id: Option<u64>,

    /// Name of that plant, filled in on read
    pub plant_name: Option<String>,

    pub title: Option<String>,

    /// The note itself
    pub text: String,

    /// Grid cell the note refers to, if any
    pub position: Option<Position>,

    /// Day the note was written
    pub note_date: Date,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
