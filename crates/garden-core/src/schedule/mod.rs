//! Planting schedule engine.
//!
//! Given a snapshot of gardens and a date, works out which garden tasks are
//! overdue, due today, or coming up. Everything in this module is a pure
//! function of its inputs: `today` is always a parameter, nothing here reads
//! the clock or the database, and missing timing data never produces an
//! error, only the absence of a notification.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ GardenSnapshot  │    │   milestones    │    │    classify     │
//! │ (records +      │───▶│ (gates, derive) │───▶│ (±window days)  │
//! │  timing)        │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                                        │
//!                                                        ▼
//!                                               ┌─────────────────┐
//!                                               │    aggregate    │
//!                                               │ (group, sort,   │
//!                                               │  totals)        │
//!                                               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use garden_core::{
//!     models::{Garden, GardenSnapshot, PlantTimingProfile, PlantingRecord, Position,
//!              ScheduledPlanting, StartMethod, Timing},
//!     schedule::{aggregate, Window},
//! };
//! use jiff::{civil::date, Timestamp};
//!
//! let mut record = PlantingRecord::new(1, 1, Position::new(0, 0));
//! record.id = 1;
//! record.start_method = Some(StartMethod::Container);
//! record.seed_started_date = Some(date(2025, 3, 1));
//!
//! let snapshot = GardenSnapshot {
//!     garden: Garden {
//!         id: 1,
//!         owner: "alice".to_string(),
//!         name: "Back Yard".to_string(),
//!         description: None,
//!         rows: 4,
//!         cols: 4,
//!         created_at: Timestamp::UNIX_EPOCH,
//!         updated_at: Timestamp::UNIX_EPOCH,
//!     },
//!     plantings: vec![ScheduledPlanting {
//!         record,
//!         plant_name: "Tomato".to_string(),
//!         timing: Some(PlantTimingProfile {
//!             days_to_germination: Some(7),
//!             days_from_germination_to_transplant_ready: Some(35),
//!             ..Default::default()
//!         }),
//!     }],
//! };
//!
//! let set = aggregate(&[snapshot], date(2025, 4, 11), Window::default());
//! assert_eq!(set.total_coming_up, 1);
//! assert_eq!(set.gardens[0].coming_up[0].timing, Timing::ComingUp { days_until: 1 });
//! ```

pub mod aggregate;
pub mod derive;
pub mod milestones;
pub mod window;


pub use aggregate::{aggregate, classify_garden_harvests, garden_notifications, planting_notifications};
pub use derive::{derive_expected_harvest_date, derive_expected_transplant_date};
pub use milestones::pending_milestones;
pub use window::{classify, Window};
