//! Planner operations that return display wrappers.

use jiff::civil::Date;

use super::GardenPlanner;
use crate::{
    display::{
        CreateResult, DeleteResult, GardenView, Gardens, Notes, PlantingList, Plants, UpdateResult,
    },
    error::Result,
    models::{Garden, GardenNote, Plant, PlantCompanions, PlantingRecord},
    params::{
        Cell, CompanionParams, CreateGarden, CreateNote, CreatePlant, Id, ListGardens, PlacePlant,
        PlantRef, SetPlantTiming, UpdatePlanting,
    },
};

impl GardenPlanner {
    pub async fn create_garden_result(&self, params: &CreateGarden) -> Result<CreateResult<Garden>> {
        self.create_garden(params).await.map(CreateResult::new)
    }

    pub async fn list_gardens_display(&self, params: &ListGardens) -> Result<Gardens> {
        self.list_gardens(params).await.map(Gardens)
    }

    /// A garden with its grid and the harvest status of each planting.
    pub async fn show_garden(&self, params: &Id, today: Date) -> Result<GardenView> {
        let snapshot = self.garden_snapshot(params).await?;
        Ok(GardenView::new(snapshot, today))
    }

    pub async fn delete_garden_result(&self, params: &Id) -> Result<DeleteResult<Garden>> {
        self.delete_garden(params).await.map(DeleteResult::new)
    }

    pub async fn add_plant_result(&self, params: &CreatePlant) -> Result<CreateResult<Plant>> {
        self.add_plant(params).await.map(CreateResult::new)
    }

    pub async fn list_plants_display(&self) -> Result<Plants> {
        self.list_plants().await.map(Plants)
    }

    pub async fn set_plant_timing_result(
        &self,
        params: &SetPlantTiming,
    ) -> Result<UpdateResult<Plant>> {
        let change = if params.clear {
            "Removed timing profile"
        } else {
            "Replaced timing profile"
        };
        let plant = self.set_plant_timing(params).await?;
        Ok(UpdateResult::with_changes(plant, vec![change.to_string()]))
    }

    pub async fn add_companion_result(
        &self,
        params: &CompanionParams,
    ) -> Result<UpdateResult<PlantCompanions>> {
        let (companions, changes) = self.add_companion(params).await?;
        Ok(UpdateResult::with_changes(companions, changes))
    }

    pub async fn remove_companion_result(
        &self,
        params: &CompanionParams,
    ) -> Result<UpdateResult<PlantCompanions>> {
        let (companions, changes) = self.remove_companion(params).await?;
        Ok(UpdateResult::with_changes(companions, changes))
    }

    pub async fn place_plant_result(
        &self,
        params: &PlacePlant,
    ) -> Result<CreateResult<PlantingRecord>> {
        let (record, changes) = self.place_plant(params).await?;
        Ok(CreateResult::with_changes(record, changes))
    }

    pub async fn update_planting_result(
        &self,
        params: &UpdatePlanting,
    ) -> Result<UpdateResult<PlantingRecord>> {
        let (record, changes) = self.update_planting(params).await?;
        Ok(UpdateResult::with_changes(record, changes))
    }

    pub async fn clear_cell_result(&self, params: &Cell) -> Result<DeleteResult<PlantingRecord>> {
        self.clear_cell(params).await.map(DeleteResult::new)
    }

    /// Plantings of a garden with plant names and harvest status.
    pub async fn planting_list(&self, params: &Id, today: Date) -> Result<PlantingList> {
        let snapshot = self.garden_snapshot(params).await?;
        Ok(PlantingList {
            plantings: snapshot.plantings,
            today,
        })
    }

    pub async fn add_note_result(&self, params: &CreateNote) -> Result<CreateResult<GardenNote>> {
        self.add_note(params).await.map(CreateResult::new)
    }

    pub async fn notes_display(&self, params: &Id) -> Result<Notes> {
        self.list_notes(params).await.map(Notes)
    }

    pub async fn delete_note_result(&self, params: &Id) -> Result<DeleteResult<GardenNote>> {
        self.delete_note(params).await.map(DeleteResult::new)
    }
}
