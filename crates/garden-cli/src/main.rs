//! Garden CLI Application
//!
//! Command-line interface for the garden planting schedule and notification
//! tool.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use garden_core::{
    params::{parse_date, ListGardens},
    GardenPlannerBuilder,
};
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        command,
    } = Args::parse();

    let today = today
        .as_deref()
        .map(|value| parse_date("today", value))
        .transpose()?;

    let planner = GardenPlannerBuilder::new()
        .with_database_path(database_file)
        .with_today(today)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Garden started, today is {}", planner.today());

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Garden { command }) => cli.handle_garden_command(command).await,
        Some(Plant { command }) => cli.handle_plant_command(command).await,
        Some(Planting { command }) => cli.handle_planting_command(command).await,
        Some(Note { command }) => cli.handle_note_command(command).await,
        Some(Notify(args)) => cli.notify(args).await,
        Some(Harvest(args)) => cli.harvest(args).await,
        Some(Digest(args)) => cli.digest(args).await,
        None => cli.list_gardens(&ListGardens { owner: None }).await,
    }
}
