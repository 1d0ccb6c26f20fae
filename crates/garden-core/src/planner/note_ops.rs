//! Garden journal operations for the GardenPlanner.

use super::{plant_ops::resolve_plant, GardenPlanner};
use crate::{
    db::NewNote,
    error::Result,
    models::GardenNote,
    params::{CreateNote, Id},
};

impl GardenPlanner {
    /// Adds a note dated today by the planner's clock.
    pub async fn add_note(&self, params: &CreateNote) -> Result<GardenNote> {
        let position = params.validate()?;
        let note_date = self.today();
        let params = params.clone();
        self.with_db(move |db| {
            let plant_id = match params.plant.as_deref().map(str::trim) {
                Some(plant) if !plant.is_empty() => Some(resolve_plant(db, plant)?.id),
                _ => None,
            };
            let title = params
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty());
            db.add_note(
                params.garden_id,
                &NewNote {
                    plant_id,
                    title,
                    text: params.text.trim(),
                    position,
                    note_date,
                },
            )
        })
        .await
    }

    /// A garden's notes, newest first.
    pub async fn list_notes(&self, params: &Id) -> Result<Vec<GardenNote>> {
        let garden_id = params.id;
        self.with_db(move |db| db.list_notes(garden_id)).await
    }

    pub async fn delete_note(&self, params: &Id) -> Result<GardenNote> {
        let id = params.id;
        self.with_db(move |db| db.delete_note(id)).await
    }
}
