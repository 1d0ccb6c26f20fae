//! Planting records: one plant placed on one grid cell.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{HarvestStatus, StartMethod};

/// Zero-indexed grid cell coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A plant placed on a garden cell, with planned and actual stage dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantingRecord {
    /// Unique identifier for the planting
    pub id: u64,

    /// ID of the garden holding this planting
    pub garden_id: u64,

    /// ID of the planted species
    pub plant_id: u64,

    /// Grid cell, unique within the garden
    pub position: Position,

    /// How the plant is started, if decided
    pub start_method: Option<StartMethod>,

    /// Forecast date to start seeds
    pub planned_seed_start_date: Option<Date>,

    /// Forecast date to plant out (transplant or direct sow)
    pub planned_planting_date: Option<Date>,

    /// Confirmed date seeds were started
    pub seed_started_date: Option<Date>,

    /// Confirmed date the plant went into the ground
    pub planted_date: Option<Date>,

    /// Expected harvest, derived once from `planted_date` and kept
    pub expected_harvest_date: Option<Date>,

    /// Confirmed harvest date; closes the record
    pub actual_harvest_date: Option<Date>,

    /// Timestamp when the planting was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the planting was last modified (UTC)
    pub updated_at: Timestamp,
}

impl PlantingRecord {
    /// A new record with no dates, as created when a plant is placed.
    pub fn new(garden_id: u64, plant_id: u64, position: Position) -> Self {
        let now = Timestamp::now();
        Self {
            id: 0,
            garden_id,
            plant_id,
            position,
            start_method: None,
            planned_seed_start_date: None,
            planned_planting_date: None,
            seed_started_date: None,
            planted_date: None,
            expected_harvest_date: None,
            actual_harvest_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the record has been harvested and is closed.
    pub fn is_closed(&self) -> bool {
        self.actual_harvest_date.is_some()
    }

    /// Applies the direct-sow rule: sowing in the ground is planting.
    ///
    /// Returns `true` if `planted_date` was filled in.
    pub fn sync_direct_sow(&mut self) -> bool {
        if self.start_method != Some(StartMethod::DirectInGround) || self.planted_date.is_some() {
            return false;
        }
        match self.seed_started_date {
            Some(sown) => {
                self.planted_date = Some(sown);
                true
            }
            None => false,
        }
    }

    /// Days from `today` until the expected harvest (negative when past).
    pub fn days_until_harvest(&self, today: Date) -> Option<i32> {
        self.expected_harvest_date
            .map(|expected| (expected - today).get_days())
    }

    /// Harvest progress relative to `today`.
    pub fn harvest_status(&self, today: Date) -> HarvestStatus {
        if self.is_closed() {
            return HarvestStatus::Harvested;
        }
        match self.days_until_harvest(today) {
            None => HarvestStatus::NoDate,
            Some(days) if days < 0 => HarvestStatus::Overdue,
            Some(0) => HarvestStatus::Ready,
            Some(days) if days <= 7 => HarvestStatus::Soon,
            Some(_) => HarvestStatus::Growing,
        }
    }
}
