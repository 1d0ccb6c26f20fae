//! Data models for gardens, plants, plantings and notifications.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] and [`crate::display::notifications`], keeping
//! the data structures free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{PlantingRecord, Position, StartMethod, HarvestStatus};
//! use jiff::civil::date;
//!
//! let mut record = PlantingRecord::new(1, 1, Position::new(0, 2));
//! record.start_method = Some(StartMethod::DirectInGround);
//! record.seed_started_date = Some(date(2025, 5, 1));
//!
//! // Sowing in the ground is planting
//! assert!(record.sync_direct_sow());
//! assert_eq!(record.planted_date, Some(date(2025, 5, 1)));
//! assert_eq!(record.harvest_status(date(2025, 5, 2)), HarvestStatus::NoDate);
//! ```

pub mod garden;
pub mod note;
pub mod notification;
pub mod plant;
pub mod planting;
pub mod requests;
pub mod snapshot;
pub mod status;


pub use garden::Garden;
pub use notification::{
    Digest, GardenNotifications, HarvestNotifications, Milestone, MilestoneKind, Notification,
    NotificationSet, Timing,
};
pub use note::GardenNote;
pub use plant::{Plant, PlantCompanions, PlantTimingProfile};
pub use planting::{PlantingRecord, Position};
pub use requests::{PlantingField, UpdatePlantingRequest};
pub use snapshot::{GardenSnapshot, ScheduledPlanting};
pub use status::{HarvestStatus, StartMethod};
