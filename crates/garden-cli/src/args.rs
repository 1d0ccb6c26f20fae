use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    DigestArgs, GardenCommands, HarvestArgs, NoteCommands, NotifyArgs, PlantCommands,
    PlantingCommands,
};

/// Garden planting schedule and notification tool
///
/// Lay out gardens as grids, record what is planted where and when, and see
/// which seed starts, transplants, plantings and harvests are overdue, due
/// today or coming up.
#[derive(Parser)]
#[command(version, about, name = "garden")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/garden/garden.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage gardens
    #[command(alias = "g")]
    Garden {
        #[command(subcommand)]
        command: GardenCommands,
    },
    /// Manage the plant catalog
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Manage plantings in garden cells
    #[command(alias = "pl")]
    Planting {
        #[command(subcommand)]
        command: PlantingCommands,
    },
    /// Keep dated notes on a garden
    #[command(alias = "nt")]
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Show pending tasks across an owner's gardens
    #[command(alias = "n")]
    Notify(NotifyArgs),
    /// Show upcoming and overdue harvests in one garden
    #[command(alias = "h")]
    Harvest(HarvestArgs),
    /// Build the weekly digest for one or every owner
    Digest(DigestArgs),
}
