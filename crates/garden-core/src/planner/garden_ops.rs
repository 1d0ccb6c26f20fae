//! Garden operations for the GardenPlanner.

use super::GardenPlanner;
use crate::{
    error::{GardenError, Result},
    models::{Garden, GardenSnapshot},
    params::{CreateGarden, Id, ListGardens},
};

impl GardenPlanner {
    /// Creates a garden with an empty grid.
    pub async fn create_garden(&self, params: &CreateGarden) -> Result<Garden> {
        params.validate()?;
        let params = params.clone();
        self.with_db(move |db| {
            db.create_garden(
                params.owner.trim(),
                params.name.trim(),
                params.description.as_deref(),
                params.rows,
                params.cols,
            )
        })
        .await
    }

    pub async fn get_garden(&self, params: &Id) -> Result<Option<Garden>> {
        let id = params.id;
        self.with_db(move |db| db.get_garden(id)).await
    }

    /// A garden with every planting on its grid, joined to plant details.
    pub async fn garden_snapshot(&self, params: &Id) -> Result<GardenSnapshot> {
        let id = params.id;
        self.with_db(move |db| db.garden_snapshot(id))
            .await?
            .ok_or(GardenError::GardenNotFound { id })
    }

    pub async fn list_gardens(&self, params: &ListGardens) -> Result<Vec<Garden>> {
        let owner = params.owner.clone();
        self.with_db(move |db| db.list_gardens(owner.as_deref()))
            .await
    }

    /// Deletes a garden and its plantings, returning the deleted garden.
    pub async fn delete_garden(&self, params: &Id) -> Result<Garden> {
        let id = params.id;
        self.with_db(move |db| {
            let garden = db.get_garden(id)?.ok_or(GardenError::GardenNotFound { id })?;
            db.delete_garden(id)?;
            Ok(garden)
        })
        .await
    }

    /// Every owner with at least one garden.
    pub async fn list_owners(&self) -> Result<Vec<String>> {
        self.with_db(|db| db.list_owners()).await
    }
}
