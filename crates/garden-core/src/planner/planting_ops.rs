//! Planting operations for the GardenPlanner.

use log::debug;

use super::{plant_ops::resolve_plant, GardenPlanner};
use crate::{
    error::{GardenError, Result},
    models::{PlantingRecord, UpdatePlantingRequest},
    params::{Cell, Id, PlacePlant, UpdatePlanting},
};

impl GardenPlanner {
    /// Places a plant in an empty cell, returning the new record and the
    /// changes applied to it.
    pub async fn place_plant(&self, params: &PlacePlant) -> Result<(PlantingRecord, Vec<String>)> {
        let initial = params.dates.validate()?;
        let garden_id = params.garden_id;
        let plant = params.plant.trim().to_string();
        let position = params.position();

        self.with_db(move |db| {
            let plant = resolve_plant(db, &plant)?;
            debug!(
                "placing {} at ({}, {}) in garden {garden_id}",
                plant.name, position.row, position.col
            );
            db.place_plant(garden_id, plant.id, position, &initial)
        })
        .await
    }

    /// Applies an update to a planting and saves it.
    pub async fn update_planting(
        &self,
        params: &UpdatePlanting,
    ) -> Result<(PlantingRecord, Vec<String>)> {
        let request = UpdatePlantingRequest::try_from(params.clone())?;
        let id = params.id;
        self.with_db(move |db| db.update_planting(id, &request))
            .await
    }

    /// Empties a grid cell, returning the removed planting.
    pub async fn clear_cell(&self, params: &Cell) -> Result<PlantingRecord> {
        let garden_id = params.garden_id;
        let position = params.position();
        self.with_db(move |db| db.clear_cell(garden_id, position))
            .await
    }

    pub async fn get_planting(&self, params: &Id) -> Result<PlantingRecord> {
        let id = params.id;
        self.with_db(move |db| db.get_planting(id))
            .await?
            .ok_or(GardenError::PlantingNotFound { id })
    }

    /// Plantings of a garden in grid order.
    pub async fn list_plantings(&self, params: &Id) -> Result<Vec<PlantingRecord>> {
        let garden_id = params.id;
        self.with_db(move |db| db.list_plantings(garden_id))
            .await
    }
}
