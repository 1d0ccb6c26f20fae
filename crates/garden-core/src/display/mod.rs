//! Markdown display wrappers for planner results.
//!
//! Domain models implement `Display` directly (see [`models`] and
//! [`notifications`]); collections and operation outcomes get newtype
//! wrappers. All output is markdown, rendered by the CLI.
//!
//! ```rust
//! use garden_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{PlantingRecord, Position},
//! };
//! use jiff::civil::date;
//!
//! let mut record = PlantingRecord::new(1, 2, Position::new(0, 3));
//! record.id = 7;
//! record.planted_date = Some(date(2025, 5, 1));
//!
//! let created = CreateResult::new(record.clone()).to_string();
//! assert!(created.starts_with("Placed planting 7 at (0, 3) in garden 1"));
//!
//! let changes = vec!["Set planted date to 2025-05-01".to_string()];
//! let updated = UpdateResult::with_changes(record, changes).to_string();
//! assert!(updated.contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod notifications;
pub mod results;

pub use collections::{GardenView, Gardens, Notes, PlantingList, Plants};
pub use datetime::{Days, LocalDateTime};
pub use notifications::{digest_subject, DigestRun, DigestSummary};
pub use results::{CreateResult, DeleteResult, UpdateResult};
