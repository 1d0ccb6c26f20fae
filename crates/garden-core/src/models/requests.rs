//! Request types for updating plantings.

use std::str::FromStr;

use jiff::civil::Date;

use super::{PlantingRecord, StartMethod};

/// Planting fields that can be explicitly cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantingField {
    StartMethod,
    PlannedSeedStart,
    PlannedPlanting,
    SeedStarted,
    Planted,
    ExpectedHarvest,
    ActualHarvest,
}

impl FromStr for PlantingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "start_method" => Ok(PlantingField::StartMethod),
            "planned_seed_start" => Ok(PlantingField::PlannedSeedStart),
            "planned_planting" => Ok(PlantingField::PlannedPlanting),
            "seed_started" => Ok(PlantingField::SeedStarted),
            "planted" => Ok(PlantingField::Planted),
            "expected_harvest" => Ok(PlantingField::ExpectedHarvest),
            "actual_harvest" | "harvested" => Ok(PlantingField::ActualHarvest),
            _ => Err(format!("Invalid planting field: {s}")),
        }
    }
}

impl PlantingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantingField::StartMethod => "start method",
            PlantingField::PlannedSeedStart => "planned seed start",
            PlantingField::PlannedPlanting => "planned planting",
            PlantingField::SeedStarted => "seed started",
            PlantingField::Planted => "planted",
            PlantingField::ExpectedHarvest => "expected harvest",
            PlantingField::ActualHarvest => "actual harvest",
        }
    }
}

/// Validated changes to a planting record.
///
/// Clears are applied before sets, so a field can be cleared and re-set in
/// one request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdatePlantingRequest {
    pub start_method: Option<StartMethod>,
    pub planned_seed_start_date: Option<Date>,
    pub planned_planting_date: Option<Date>,
    pub seed_started_date: Option<Date>,
    pub planted_date: Option<Date>,
    pub expected_harvest_date: Option<Date>,
    pub actual_harvest_date: Option<Date>,
    pub clear: Vec<PlantingField>,
}

impl UpdatePlantingRequest {
    /// Apply the request to a record, returning a description of each change.
    pub fn apply_to(&self, record: &mut PlantingRecord) -> Vec<String> {
        let mut changes = Vec::new();

        for field in &self.clear {
            let cleared = match field {
                PlantingField::StartMethod => record.start_method.take().is_some(),
                PlantingField::PlannedSeedStart => record.planned_seed_start_date.take().is_some(),
                PlantingField::PlannedPlanting => record.planned_planting_date.take().is_some(),
                PlantingField::SeedStarted => record.seed_started_date.take().is_some(),
                PlantingField::Planted => record.planted_date.take().is_some(),
                PlantingField::ExpectedHarvest => record.expected_harvest_date.take().is_some(),
                PlantingField::ActualHarvest => record.actual_harvest_date.take().is_some(),
            };
            if cleared {
                changes.push(format!("Cleared {}", field.as_str()));
            }
        }

        if let Some(method) = self.start_method {
            record.start_method = Some(method);
            changes.push(format!("Set start method to {}", method.as_str()));
        }

        let dates = [
            (
                self.planned_seed_start_date,
                &mut record.planned_seed_start_date,
                PlantingField::PlannedSeedStart,
            ),
            (
                self.planned_planting_date,
                &mut record.planned_planting_date,
                PlantingField::PlannedPlanting,
            ),
            (
                self.seed_started_date,
                &mut record.seed_started_date,
                PlantingField::SeedStarted,
            ),
            (self.planted_date, &mut record.planted_date, PlantingField::Planted),
            (
                self.expected_harvest_date,
                &mut record.expected_harvest_date,
                PlantingField::ExpectedHarvest,
            ),
            (
                self.actual_harvest_date,
                &mut record.actual_harvest_date,
                PlantingField::ActualHarvest,
            ),
        ];
        for (value, slot, field) in dates {
            if let Some(date) = value {
                *slot = Some(date);
                changes.push(format!("Set {} date to {date}", field.as_str()));
            }
        }

        changes
    }
}

impl TryFrom<crate::params::UpdatePlanting> for UpdatePlantingRequest {
    type Error = crate::GardenError;

    fn try_from(params: crate::params::UpdatePlanting) -> Result<Self, Self::Error> {
        params.validate()
    }
}
