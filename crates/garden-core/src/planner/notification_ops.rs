//! Notification operations for the GardenPlanner.
//!
//! Each operation reads a snapshot in one transaction and then runs the pure
//! scheduling functions on it; nothing here writes to the store.

use jiff::civil::Date;
use log::{debug, info};

use super::GardenPlanner;
use crate::{
    error::{GardenError, Result},
    models::{Digest, HarvestNotifications, NotificationSet},
    params::{DigestParams, HarvestQuery, NotificationQuery},
    schedule,
};

impl GardenPlanner {
    /// Pending tasks across every garden of an owner as of `today`.
    pub async fn notifications_for_owner(
        &self,
        params: &NotificationQuery,
        today: Date,
    ) -> Result<NotificationSet> {
        let owner = params.owner.trim().to_string();
        if owner.is_empty() {
            return Err(GardenError::invalid_input("owner").with_reason("Owner must not be empty"));
        }
        let window = params.window.window();

        let snapshots = {
            let owner = owner.clone();
            self.with_db(move |db| db.owner_snapshots(&owner)).await?
        };
        debug!(
            "loaded {} garden(s) with {} planting(s) for {owner}",
            snapshots.len(),
            snapshots.iter().map(|s| s.plantings.len()).sum::<usize>()
        );

        Ok(schedule::aggregate(&snapshots, today, window))
    }

    /// Harvest-only view of one garden as of `today`.
    pub async fn harvest_notifications(
        &self,
        params: &HarvestQuery,
        today: Date,
    ) -> Result<HarvestNotifications> {
        let garden_id = params.garden_id;
        let window = params.window.window();

        let snapshot = self
            .with_db(move |db| db.garden_snapshot(garden_id))
            .await?
            .ok_or(GardenError::GardenNotFound { id: garden_id })?;
        debug!(
            "loaded {} planting(s) for garden {garden_id}",
            snapshot.plantings.len()
        );

        Ok(schedule::classify_garden_harvests(&snapshot, today, window))
    }

    /// Weekly digests for one owner, or for every owner with a garden.
    ///
    /// A digest is produced for each owner even when nothing is pending.
    pub async fn weekly_digest(&self, params: &DigestParams, today: Date) -> Result<Vec<Digest>> {
        let owners = match params.owner.as_deref().map(str::trim) {
            Some(owner) if !owner.is_empty() => vec![owner.to_string()],
            Some(_) => {
                return Err(
                    GardenError::invalid_input("owner").with_reason("Owner must not be empty")
                )
            }
            None => self.list_owners().await?,
        };
        info!("building weekly digest for {} owner(s)", owners.len());

        let mut digests = Vec::with_capacity(owners.len());
        for owner in owners {
            let query = NotificationQuery {
                owner: owner.clone(),
                window: params.window,
            };
            let notifications = self.notifications_for_owner(&query, today).await?;
            info!(
                "digest for {owner}: {} overdue, {} due today, {} coming up",
                notifications.total_overdue,
                notifications.total_due_today,
                notifications.total_coming_up
            );
            digests.push(Digest {
                owner,
                date: today,
                notifications,
            });
        }
        Ok(digests)
    }
}
