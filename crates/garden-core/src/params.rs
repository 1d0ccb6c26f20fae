//! Parameter structures for garden planner operations.
//!
//! These are the loosely typed inputs an interface collects (plain strings
//! for dates and start methods, raw integers for durations). Each one is
//! validated into the typed request the planner works with, so the CLI
//! never parses dates itself.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Typed requests  │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GardenError, Result},
    models::{PlantTimingProfile, PlantingField, Position, StartMethod, UpdatePlantingRequest},
    schedule::Window,
};

/// Parses an ISO `YYYY-MM-DD` date, naming `field` in the error.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|_| {
        GardenError::invalid_input(field)
            .with_reason(format!("Expected a date as YYYY-MM-DD, got '{value}'"))
    })
}

fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    value.map(|v| parse_date(field, v)).transpose()
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// Parameters for creating a garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGarden {
    /// Username of the gardener who receives notifications
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    /// Number of grid rows, at least 1
    pub rows: u32,
    /// Number of grid columns, at least 1
    pub cols: u32,
}

impl CreateGarden {
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(GardenError::invalid_input("owner").with_reason("Owner must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(GardenError::invalid_input("name").with_reason("Name must not be empty"));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(GardenError::invalid_input("grid").with_reason(format!(
                "Grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// Parameters for listing gardens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListGardens {
    /// Only gardens of this owner; all gardens when absent
    pub owner: Option<String>,
}

/// Raw timing values for a plant.
///
/// All fields absent and `direct_sow` unset means "no timing profile".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantTiming {
    pub days_to_harvest_from_transplant: Option<u32>,
    pub days_to_harvest_direct: Option<u32>,
    #[serde(default)]
    pub direct_sow: bool,
    pub days_to_germination: Option<u32>,
    pub days_to_transplant_ready: Option<u32>,
}

impl PlantTiming {
    /// The profile these values describe, if any were given.
    pub fn to_profile(&self) -> Option<PlantTimingProfile> {
        let profile = PlantTimingProfile {
            days_to_harvest_from_transplant: self.days_to_harvest_from_transplant,
            days_to_harvest_direct: self.days_to_harvest_direct,
            is_direct_sow: self.direct_sow,
            days_to_germination: self.days_to_germination,
            days_from_germination_to_transplant_ready: self.days_to_transplant_ready,
        };
        (profile != PlantTimingProfile::default()).then_some(profile)
    }
}

/// Parameters for adding a plant to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlant {
    pub name: String,
    pub latin_name: Option<String>,
    #[serde(flatten)]
    pub timing: PlantTiming,
}

impl CreatePlant {
    pub fn validate(&self) -> Result<Option<PlantTimingProfile>> {
        if self.name.trim().is_empty() {
            return Err(GardenError::invalid_input("name").with_reason("Name must not be empty"));
        }
        Ok(self.timing.to_profile())
    }
}

/// Parameters for replacing a plant's timing profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPlantTiming {
    pub id: u64,
    #[serde(flatten)]
    pub timing: PlantTiming,
    /// Remove the profile instead of setting one
    #[serde(default)]
    pub clear: bool,
}

impl SetPlantTiming {
    pub fn validate(&self) -> Result<Option<PlantTimingProfile>> {
        if self.clear {
            return Ok(None);
        }
        match self.timing.to_profile() {
            Some(profile) => Ok(Some(profile)),
            None => Err(GardenError::invalid_input("timing")
                .with_reason("Give at least one timing value, or clear the profile")),
        }
    }
}

/// Date and start-method values for a planting, as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantingDates {
    /// "container" or "direct"
    pub start_method: Option<String>,
    pub planned_seed_start: Option<String>,
    pub planned_planting: Option<String>,
    pub seed_started: Option<String>,
    pub planted: Option<String>,
    pub expected_harvest: Option<String>,
    pub harvested: Option<String>,
}

impl PlantingDates {
    /// Parses every value into an update request with nothing to clear.
    pub fn validate(&self) -> Result<UpdatePlantingRequest> {
        let start_method = self
            .start_method
            .as_deref()
            .map(|s| {
                s.parse::<StartMethod>().map_err(|_| {
                    GardenError::invalid_input("start_method").with_reason(format!(
                        "Invalid start method: {s}. Must be 'container' or 'direct'"
                    ))
                })
            })
            .transpose()?;

        Ok(UpdatePlantingRequest {
            start_method,
            planned_seed_start_date: parse_optional_date(
                "planned_seed_start",
                self.planned_seed_start.as_deref(),
            )?,
            planned_planting_date: parse_optional_date(
                "planned_planting",
                self.planned_planting.as_deref(),
            )?,
            seed_started_date: parse_optional_date("seed_started", self.seed_started.as_deref())?,
            planted_date: parse_optional_date("planted", self.planted.as_deref())?,
            expected_harvest_date: parse_optional_date(
                "expected_harvest",
                self.expected_harvest.as_deref(),
            )?,
            actual_harvest_date: parse_optional_date("harvested", self.harvested.as_deref())?,
            clear: Vec::new(),
        })
    }
}

/// Parameters for placing a plant in a grid cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacePlant {
    pub garden_id: u64,
    /// Plant id, or plant name (case-insensitive)
    pub plant: String,
    pub row: u32,
    pub col: u32,
    #[serde(flatten)]
    pub dates: PlantingDates,
}

impl PlacePlant {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Parameters for updating a planting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanting {
    pub id: u64,
    #[serde(flatten)]
    pub dates: PlantingDates,
    /// Field names to clear before the new values are set
    #[serde(default)]
    pub clear: Vec<String>,
}

impl UpdatePlanting {
    /// Validate and return the typed request.
    ///
    /// ```rust
    /// use garden_core::params::{PlantingDates, UpdatePlanting};
    ///
    /// let params = UpdatePlanting {
    ///     id: 1,
    ///     dates: PlantingDates {
    ///         planted: Some("2025-05-01".to_string()),
    ///         ..Default::default()
    ///     },
    ///     clear: vec!["expected-harvest".to_string()],
    /// };
    /// let request = params.validate()?;
    /// assert_eq!(request.clear.len(), 1);
    ///
    /// let bad = UpdatePlanting {
    ///     id: 1,
    ///     dates: PlantingDates {
    ///         planted: Some("May 1st".to_string()),
    ///         ..Default::default()
    ///     },
    ///     clear: vec![],
    /// };
    /// assert!(bad.validate().is_err());
    /// # Ok::<(), garden_core::GardenError>(())
    /// ```
    pub fn validate(&self) -> Result<UpdatePlantingRequest> {
        let mut request = self.dates.validate()?;
        request.clear = self
            .clear
            .iter()
            .map(|name| {
                name.parse::<PlantingField>()
                    .map_err(|reason| GardenError::invalid_input("clear").with_reason(reason))
            })
            .collect::<Result<Vec<_>>>()?;

        if request == UpdatePlantingRequest::default() {
            return Err(GardenError::invalid_input("update")
                .with_reason("Nothing to update: give a date, a start method, or a field to clear"));
        }
        Ok(request)
    }
}

/// Parameters naming a grid cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    pub garden_id: u64,
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Parameters naming a plant by id or name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantRef {
    /// Plant id, or plant name (case-insensitive)
    pub plant: String,
}

/// Parameters for adding or removing a companion listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanionParams {
    /// Plant whose companion list changes (id or name)
    pub plant: String,
    /// Plant listed as growing well beside it (id or name)
    pub companion: String,
    /// Apply the change in both directions
    #[serde(default)]
    pub mutual: bool,
}

impl CompanionParams {
    pub fn validate(&self) -> Result<()> {
        if self.plant.trim().is_empty() {
            return Err(GardenError::invalid_input("plant").with_reason("Plant must not be empty"));
        }
        if self.companion.trim().is_empty() {
            return Err(GardenError::invalid_input("companion")
                .with_reason("Companion must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for adding a note to a garden's journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNote {
    pub garden_id: u64,
    pub text: String,
    pub title: Option<String>,
    /// Plant id or name the note is about
    pub plant: Option<String>,
    pub row: Option<u32>,
    pub col: Option<u32>,
}

impl CreateNote {
    /// Checks the text and returns the referenced cell, if any.
    ///
    /// A cell needs both a row and a column.
    pub fn validate(&self) -> Result<Option<Position>> {
        if self.text.trim().is_empty() {
            return Err(GardenError::invalid_input("text").with_reason("Note must not be empty"));
        }
        match (self.row, self.col) {
            (Some(row), Some(col)) => Ok(Some(Position::new(row, col))),
            (None, None) => Ok(None),
            _ => Err(GardenError::invalid_input("position")
                .with_reason("Give both a row and a column, or neither")),
        }
    }
}

/// Lookback and lookahead overrides for notification windows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WindowParams {
    pub lookback_days: Option<u32>,
    pub lookahead_days: Option<u32>,
}

impl WindowParams {
    /// The window to classify with, seven days either side by default.
    pub fn window(&self) -> Window {
        Window::new(
            self.lookback_days.unwrap_or(Window::DEFAULT_DAYS),
            self.lookahead_days.unwrap_or(Window::DEFAULT_DAYS),
        )
    }
}

/// Parameters for an owner's notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationQuery {
    pub owner: String,
    #[serde(flatten)]
    pub window: WindowParams,
}

/// Parameters for a garden's harvest view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarvestQuery {
    pub garden_id: u64,
    #[serde(flatten)]
    pub window: WindowParams,
}

/// Parameters for the weekly digest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestParams {
    /// Only this owner; every owner with a garden when absent
    pub owner: Option<String>,
    #[serde(flatten)]
    pub window: WindowParams,
}
