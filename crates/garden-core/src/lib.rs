//! Core library for the garden planner.
//!
//! Gardens are grids of cells; each planted cell holds a planting record
//! with planned and actual dates for seed starting, transplanting, planting
//! out and harvest. From those dates and a plant's timing profile the
//! [`schedule`] engine works out which tasks are overdue, due today or
//! coming up.
//!
//! - [`models`]: data types, including the typed notification results
//! - [`schedule`]: the pure scheduling engine; `today` is always an argument
//! - [`db`]: SQLite storage that builds snapshots for the engine
//! - [`planner`]: the async [`GardenPlanner`] facade used by the CLI
//! - [`display`]: markdown formatting of results
//!
//! # Quick Start
//!
//! ```rust
//! use garden_core::{
//!     params::{CreateGarden, CreatePlant, PlacePlant, PlantTiming, PlantingDates},
//!     GardenPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = GardenPlannerBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! let garden = planner
//!     .create_garden(&CreateGarden {
//!         owner: "alice".to_string(),
//!         name: "Back Yard".to_string(),
//!         description: None,
//!         rows: 4,
//!         cols: 6,
//!     })
//!     .await?;
//!
//! planner
//!     .add_plant(&CreatePlant {
//!         name: "Tomato".to_string(),
//!         latin_name: None,
//!         timing: PlantTiming {
//!             days_to_harvest_from_transplant: Some(70),
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//!
//! let (planting, _) = planner
//!     .place_plant(&PlacePlant {
//!         garden_id: garden.id,
//!         plant: "Tomato".to_string(),
//!         row: 0,
//!         col: 0,
//!         dates: PlantingDates {
//!             planted: Some("2025-05-01".to_string()),
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//! println!("{planting}");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;

pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, UpdateResult};
pub use error::{GardenError, Result};
pub use models::{
    Digest, Garden, GardenNote, GardenNotifications, GardenSnapshot, HarvestNotifications,
    HarvestStatus, Milestone, MilestoneKind, Notification, NotificationSet, Plant,
    PlantCompanions, PlantTimingProfile, PlantingRecord, Position, ScheduledPlanting,
    StartMethod, Timing, UpdatePlantingRequest,
};
pub use planner::{GardenPlanner, GardenPlannerBuilder};
pub use schedule::Window;
