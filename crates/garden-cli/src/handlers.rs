//! Command handlers for the CLI.
//!
//! Each handler calls one planner operation, wraps failures with context and
//! hands the markdown result to the terminal renderer.

use anyhow::{anyhow, Context, Result};
use garden_core::{
    display::{digest_subject, DigestRun},
    params::{
        CompanionParams, CreateGarden, CreateNote, CreatePlant, DigestParams, HarvestQuery, Id,
        ListGardens, NotificationQuery, PlacePlant, PlantRef, SetPlantTiming, UpdatePlanting,
    },
    GardenPlanner,
};
use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use crate::{
    cli::{
        CompanionCommands, DigestArgs, GardenCommands, HarvestArgs, NoteCommands, NotifyArgs,
        PlantCommands, PlantingCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: GardenPlanner,
    renderer: TerminalRenderer,
    today: Date,
}

impl Cli {
    pub fn new(planner: GardenPlanner, renderer: TerminalRenderer) -> Self {
        let today = planner.today();
        Self {
            planner,
            renderer,
            today,
        }
    }

    fn print_json<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }

    pub async fn handle_garden_command(&self, command: GardenCommands) -> Result<()> {
        match command {
            GardenCommands::Create(args) => self.create_garden(&args.into()).await,
            GardenCommands::List(args) => self.list_gardens(&args.into()).await,
            GardenCommands::Show(args) => self.show_garden(&args.into()).await,
            GardenCommands::Delete(args) => self.delete_garden(&args.into()).await,
        }
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Add(args) => self.add_plant(&args.into()).await,
            PlantCommands::List => self.list_plants().await,
            PlantCommands::Show(args) => self.show_plant(&args.into()).await,
            PlantCommands::Timing(args) => self.set_plant_timing(&args.into()).await,
            PlantCommands::Companion { command } => match command {
                CompanionCommands::Add(args) => self.add_companion(&args.into()).await,
                CompanionCommands::Remove(args) => self.remove_companion(&args.into()).await,
                CompanionCommands::List(args) => self.list_companions(&args.into()).await,
            },
        }
    }

    pub async fn handle_planting_command(&self, command: PlantingCommands) -> Result<()> {
        match command {
            PlantingCommands::Place(args) => self.place_plant(&args.into()).await,
            PlantingCommands::Update(args) => self.update_planting(&args.into()).await,
            PlantingCommands::Clear(args) => {
                let params = args.into();
                let result = self
                    .planner
                    .clear_cell_result(&params)
                    .await
                    .context("Failed to clear cell")?;
                self.renderer.render(&result.to_string())
            }
            PlantingCommands::List(args) => self.list_plantings(&args.into()).await,
            PlantingCommands::Show(args) => {
                let params: Id = args.into();
                let record = self
                    .planner
                    .get_planting(&params)
                    .await
                    .context("Failed to get planting")?;
                self.renderer.render(&record.to_string())
            }
        }
    }

    pub async fn handle_note_command(&self, command: NoteCommands) -> Result<()> {
        match command {
            NoteCommands::Add(args) => self.add_note(&args.into()).await,
            NoteCommands::List(args) => {
                let notes = self
                    .planner
                    .notes_display(&args.into())
                    .await
                    .context("Failed to list notes")?;
                self.renderer.render(&notes.to_string())
            }
            NoteCommands::Delete(args) => {
                let result = self
                    .planner
                    .delete_note_result(&args.into())
                    .await
                    .context("Failed to delete note")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Gardens
    // ------------------------------------------------------------------------

    async fn create_garden(&self, params: &CreateGarden) -> Result<()> {
        debug!("create_garden: {params:?}");
        let result = self
            .planner
            .create_garden_result(params)
            .await
            .context("Failed to create garden")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn list_gardens(&self, params: &ListGardens) -> Result<()> {
        let gardens = self
            .planner
            .list_gardens_display(params)
            .await
            .context("Failed to list gardens")?;

        if gardens.is_empty() {
            return self.renderer.render("# No gardens found\n");
        }
        let title = match &params.owner {
            Some(owner) => format!("Gardens of {owner}"),
            None => "Gardens".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{gardens}"))
    }

    async fn show_garden(&self, params: &Id) -> Result<()> {
        let view = self
            .planner
            .show_garden(params, self.today)
            .await
            .context("Failed to get garden")?;
        self.renderer.render(&view.to_string())
    }

    async fn delete_garden(&self, params: &Id) -> Result<()> {
        let result = self
            .planner
            .delete_garden_result(params)
            .await
            .context("Failed to delete garden")?;
        self.renderer.render(&result.to_string())
    }

    // ------------------------------------------------------------------------
    // Plants
    // ------------------------------------------------------------------------

    async fn add_plant(&self, params: &CreatePlant) -> Result<()> {
        debug!("add_plant: {params:?}");
        let result = self
            .planner
            .add_plant_result(params)
            .await
            .context("Failed to add plant")?;
        self.renderer.render(&result.to_string())
    }

    async fn list_plants(&self) -> Result<()> {
        let plants = self
            .planner
            .list_plants_display()
            .await
            .context("Failed to list plants")?;
        self.renderer.render(&format!("# Plants\n\n{plants}"))
    }

    async fn show_plant(&self, params: &Id) -> Result<()> {
        let plant = self
            .planner
            .get_plant(params)
            .await
            .context("Failed to get plant")?
            .ok_or_else(|| anyhow!("Plant with ID {} not found", params.id))?;
        self.renderer.render(&plant.to_string())
    }

    async fn set_plant_timing(&self, params: &SetPlantTiming) -> Result<()> {
        debug!("set_plant_timing: {params:?}");
        let result = self
            .planner
            .set_plant_timing_result(params)
            .await
            .context("Failed to update plant timing")?;
        self.renderer.render(&result.to_string())
    }

    async fn add_companion(&self, params: &CompanionParams) -> Result<()> {
        debug!("add_companion: {params:?}");
        let result = self
            .planner
            .add_companion_result(params)
            .await
            .context("Failed to add companion")?;
        self.renderer.render(&result.to_string())
    }

    async fn remove_companion(&self, params: &CompanionParams) -> Result<()> {
        debug!("remove_companion: {params:?}");
        let result = self
            .planner
            .remove_companion_result(params)
            .await
            .context("Failed to remove companion")?;
        self.renderer.render(&result.to_string())
    }

    async fn list_companions(&self, params: &PlantRef) -> Result<()> {
        let companions = self
            .planner
            .list_companions(params)
            .await
            .context("Failed to list companions")?;
        self.renderer.render(&companions.to_string())
    }

    // ------------------------------------------------------------------------
    // Plantings
    // ------------------------------------------------------------------------

    async fn place_plant(&self, params: &PlacePlant) -> Result<()> {
        debug!("place_plant: {params:?}");
        let result = self
            .planner
            .place_plant_result(params)
            .await
            .context("Failed to place plant")?;
        self.renderer.render(&result.to_string())
    }

    async fn update_planting(&self, params: &UpdatePlanting) -> Result<()> {
        debug!("update_planting: {params:?}");
        let result = self
            .planner
            .update_planting_result(params)
            .await
            .context("Failed to update planting")?;
        self.renderer.render(&result.to_string())
    }

    async fn list_plantings(&self, params: &Id) -> Result<()> {
        let list = self
            .planner
            .planting_list(params, self.today)
            .await
            .context("Failed to list plantings")?;
        self.renderer
            .render(&format!("# Plantings in garden {}\n\n{list}", params.id))
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    async fn add_note(&self, params: &CreateNote) -> Result<()> {
        debug!("add_note: {params:?}");
        let result = self
            .planner
            .add_note_result(params)
            .await
            .context("Failed to add note")?;
        self.renderer.render(&result.to_string())
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub async fn notify(&self, args: NotifyArgs) -> Result<()> {
        let json = args.json;
        let query: NotificationQuery = args.into();
        let set = self
            .planner
            .notifications_for_owner(&query, self.today)
            .await
            .context("Failed to compute notifications")?;

        if json {
            return Self::print_json(&set);
        }
        self.renderer.render(&set.to_string())
    }

    pub async fn harvest(&self, args: HarvestArgs) -> Result<()> {
        let json = args.json;
        let query: HarvestQuery = args.into();
        let harvests = self
            .planner
            .harvest_notifications(&query, self.today)
            .await
            .context("Failed to compute harvests")?;

        if json {
            return Self::print_json(&harvests);
        }
        self.renderer.render(&harvests.to_string())
    }

    /// Prints digests; nothing is ever delivered.
    pub async fn digest(&self, args: DigestArgs) -> Result<()> {
        let params = DigestParams::from(&args);
        let digests = self
            .planner
            .weekly_digest(&params, self.today)
            .await
            .context("Failed to build weekly digest")?;

        if args.json {
            return Self::print_json(&digests);
        }

        if args.dry_run {
            let run = DigestRun {
                digests: &digests,
                date: self.today,
            };
            return self.renderer.render(&run.to_string());
        }

        if digests.is_empty() {
            return self
                .renderer
                .render("# Weekly Digest\n\nNo owners have gardens; no digests were built.\n");
        }
        for digest in &digests {
            self.renderer.render(&format!(
                "Subject: {}\n\n{digest}\n",
                digest_subject(&digest.notifications)
            ))?;
        }
        Ok(())
    }
}
