//! Plant catalog operations for the GardenPlanner.

use super::GardenPlanner;
use crate::{
    error::{GardenError, Result},
    models::{Plant, PlantCompanions},
    params::{CompanionParams, CreatePlant, Id, PlantRef, SetPlantTiming},
};

impl GardenPlanner {
    pub async fn add_plant(&self, params: &CreatePlant) -> Result<Plant> {
        let timing = params.validate()?;
        let name = params.name.trim().to_string();
        let latin_name = params.latin_name.clone();
        self.with_db(move |db| db.add_plant(&name, latin_name.as_deref(), timing.as_ref()))
            .await
    }

    pub async fn get_plant(&self, params: &Id) -> Result<Option<Plant>> {
        let id = params.id;
        self.with_db(move |db| db.get_plant(id)).await
    }

    pub async fn list_plants(&self) -> Result<Vec<Plant>> {
        self.with_db(|db| db.list_plants()).await
    }

    /// Replaces or removes a plant's timing profile.
    ///
    /// Stored expected harvest dates are not touched; clear them on a
    /// planting to have them recomputed from the new profile.
    pub async fn set_plant_timing(&self, params: &SetPlantTiming) -> Result<Plant> {
        let timing = params.validate()?;
        let id = params.id;
        self.with_db(move |db| db.set_plant_timing(id, timing.as_ref()))
            .await
    }

    /// Lists a companion for a plant, both ways when `mutual` is set.
    ///
    /// Returns the plant's companions afterwards and a line per new listing.
    pub async fn add_companion(
        &self,
        params: &CompanionParams,
    ) -> Result<(PlantCompanions, Vec<String>)> {
        params.validate()?;
        let params = params.clone();
        self.with_db(move |db| {
            let plant = resolve_plant(db, params.plant.trim())?;
            let companion = resolve_plant(db, params.companion.trim())?;
            let added = db.add_companion(plant.id, companion.id, params.mutual)?;

            let mut changes = describe_pairs(&added, &plant, &companion, "now lists");
            if changes.is_empty() {
                changes.push(format!(
                    "{} already lists {} as a companion",
                    plant.name, companion.name
                ));
            }
            let companions = db.list_companions(plant.id)?;
            Ok((PlantCompanions { plant, companions }, changes))
        })
        .await
    }

    /// Removes a companion listing, both ways when `mutual` is set.
    ///
    /// Fails when no listing existed.
    pub async fn remove_companion(
        &self,
        params: &CompanionParams,
    ) -> Result<(PlantCompanions, Vec<String>)> {
        params.validate()?;
        let params = params.clone();
        self.with_db(move |db| {
            let plant = resolve_plant(db, params.plant.trim())?;
            let companion = resolve_plant(db, params.companion.trim())?;
            let removed = db.remove_companion(plant.id, companion.id, params.mutual)?;
            if removed.is_empty() {
                return Err(GardenError::invalid_input("companion").with_reason(format!(
                    "{} does not list {} as a companion",
                    plant.name, companion.name
                )));
            }

            let changes = describe_pairs(&removed, &plant, &companion, "no longer lists");
            let companions = db.list_companions(plant.id)?;
            Ok((PlantCompanions { plant, companions }, changes))
        })
        .await
    }

    pub async fn list_companions(&self, params: &PlantRef) -> Result<PlantCompanions> {
        let plant = params.plant.trim().to_string();
        self.with_db(move |db| {
            let plant = resolve_plant(db, &plant)?;
            let companions = db.list_companions(plant.id)?;
            Ok(PlantCompanions { plant, companions })
        })
        .await
    }

    /// Resolves a plant by id or by case-insensitive name.
    pub async fn resolve_plant(&self, plant: &str) -> Result<Plant> {
        let plant = plant.trim().to_string();
        self.with_db(move |db| resolve_plant(db, &plant)).await
    }
}

pub(crate) fn resolve_plant(db: &crate::db::Database, plant: &str) -> Result<Plant> {
    if let Ok(id) = plant.parse::<u64>() {
        return db.get_plant(id)?.ok_or(GardenError::PlantNotFound { id });
    }
    db.find_plant_by_name(plant)?.ok_or_else(|| {
        GardenError::invalid_input("plant").with_reason(format!("No plant named '{plant}'"))
    })
}

/// "Tomato now lists Basil as a companion" for each touched pair.
fn describe_pairs(pairs: &[(u64, u64)], plant: &Plant, companion: &Plant, verb: &str) -> Vec<String> {
    pairs
        .iter()
        .map(|&(from, _)| {
            let (a, b) = if from == plant.id {
                (plant, companion)
            } else {
                (companion, plant)
            };
            format!("{} {verb} {} as a companion", a.name, b.name)
        })
        .collect()
}
