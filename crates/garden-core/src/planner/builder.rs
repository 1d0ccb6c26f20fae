//! Builder for creating and configuring GardenPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::civil::Date;
use tokio::task;

use super::GardenPlanner;
use crate::{
    clock::{Clock, FixedClock, SystemClock},
    db::Database,
    error::{GardenError, Result},
};

/// Builder for creating and configuring GardenPlanner instances.
#[derive(Clone)]
pub struct GardenPlannerBuilder {
    database_path: Option<PathBuf>,
    clock: Arc<dyn Clock>,
}

impl GardenPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/garden/garden.db` or `~/.local/share/garden/garden.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the system clock.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Pins "today" to a fixed date when one is given.
    pub fn with_today(self, today: Option<Date>) -> Self {
        match today {
            Some(date) => self.with_clock(FixedClock(date)),
            None => self,
        }
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the database directory cannot be
    /// created and `GardenError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<GardenPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .map_err(GardenError::join)??;

        Ok(GardenPlanner::new(db_path, self.clock))
    }

    /// Returns the default database path under the XDG data directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garden")
            .place_data_file("garden.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}

impl Default for GardenPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
