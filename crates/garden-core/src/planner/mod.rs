//! High-level planner API over the garden store and scheduling engine.
//!
//! [`GardenPlanner`] is the async facade the CLI talks to. Storage work runs
//! on the blocking thread pool with a fresh connection per operation; the
//! notification operations read one snapshot and hand it to the pure
//! functions in [`crate::schedule`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display        │───▶│ (garden_ops,    │───▶│   (via db/)     │
//! │  wrappers)      │    │  planting_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use garden_core::{
//!     params::{CreateGarden, NotificationQuery},
//!     GardenPlannerBuilder,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::TempDir::new()?;
//! let planner = GardenPlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("garden.db")))
//!     .with_today(Some(date(2025, 4, 11)))
//!     .build()
//!     .await?;
//!
//! planner
//!     .create_garden(&CreateGarden {
//!         owner: "alice".to_string(),
//!         name: "Back Yard".to_string(),
//!         description: None,
//!         rows: 4,
//!         cols: 4,
//!     })
//!     .await?;
//!
//! let query = NotificationQuery {
//!     owner: "alice".to_string(),
//!     ..Default::default()
//! };
//! let set = planner.notifications_for_owner(&query, planner.today()).await?;
//! assert!(!set.has_notifications);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::civil::Date;
use tokio::task;

use crate::{
    clock::Clock,
    db::Database,
    error::{GardenError, Result},
};

pub mod builder;
pub mod garden_ops;
pub mod handlers;
pub mod note_ops;
pub mod notification_ops;
pub mod plant_ops;
pub mod planting_ops;

#[cfg(test)]
mod tests;

pub use builder::GardenPlannerBuilder;

/// Main planner interface for gardens, plants, plantings and notifications.
pub struct GardenPlanner {
    pub(crate) db_path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl GardenPlanner {
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { db_path, clock }
    }

    /// Today's date according to the planner's clock.
    ///
    /// Callers read this once per request and pass it to the notification
    /// operations.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(GardenError::join)?
    }
}
