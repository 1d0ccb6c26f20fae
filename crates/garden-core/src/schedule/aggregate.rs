//! Grouping of classified milestones per garden and per owner.

use jiff::civil::Date;
use log::trace;

use crate::models::{
    GardenNotifications, GardenSnapshot, HarvestNotifications, Notification, NotificationSet,
    ScheduledPlanting, Timing,
};

use super::{classify, milestones, Window};

/// Classified notifications for one planting, in gate order.
///
/// Plantings whose plant has no timing profile produce nothing.
pub fn planting_notifications(
    planting: &ScheduledPlanting,
    today: Date,
    window: Window,
) -> Vec<Notification> {
    let Some(profile) = planting.timing.as_ref() else {
        return Vec::new();
    };
    milestones::pending_milestones(&planting.record, profile)
        .into_iter()
        .filter_map(|milestone| {
            let timing = classify(milestone.date(), today, window)?;
            trace!(
                "planting {} {} on {} classified as {:?}",
                planting.record.id,
                milestone.kind().as_str(),
                milestone.date(),
                timing
            );
            Some(Notification {
                planting_id: planting.record.id,
                plant_name: planting.plant_name.clone(),
                position: planting.record.position,
                milestone,
                timing,
            })
        })
        .collect()
}

/// Pending tasks for a single garden, sorted for display.
///
/// Overdue tasks lead with the most overdue; upcoming tasks lead with the
/// soonest. Ties keep grid order.
pub fn garden_notifications(
    snapshot: &GardenSnapshot,
    today: Date,
    window: Window,
) -> GardenNotifications {
    let mut result = GardenNotifications {
        garden_id: snapshot.garden.id,
        garden_name: snapshot.garden.name.clone(),
        ..Default::default()
    };

    for planting in &snapshot.plantings {
        for notification in planting_notifications(planting, today, window) {
            match notification.timing {
                Timing::Overdue { .. } => result.overdue.push(notification),
                Timing::DueToday => result.due_today.push(notification),
                Timing::ComingUp { .. } => result.coming_up.push(notification),
            }
        }
    }

    result
        .overdue
        .sort_by(|a, b| b.days_overdue().cmp(&a.days_overdue()));
    result.coming_up.sort_by_key(Notification::days_until);
    result
}

/// Pending tasks across all of an owner's gardens.
///
/// Gardens without pending tasks are left out entirely.
pub fn aggregate(gardens: &[GardenSnapshot], today: Date, window: Window) -> NotificationSet {
    let gardens: Vec<GardenNotifications> = gardens
        .iter()
        .map(|snapshot| garden_notifications(snapshot, today, window))
        .filter(|notifications| !notifications.is_empty())
        .collect();

    let total_overdue = gardens.iter().map(|g| g.overdue.len()).sum();
    let total_due_today = gardens.iter().map(|g| g.due_today.len()).sum();
    let total_coming_up = gardens.iter().map(|g| g.coming_up.len()).sum();

    NotificationSet {
        has_notifications: total_overdue + total_due_today + total_coming_up > 0,
        gardens,
        total_overdue,
        total_due_today,
        total_coming_up,
    }
}

/// Harvest-only view of one garden.
///
/// `planting_ready` is reserved and always empty.
pub fn classify_garden_harvests(
    snapshot: &GardenSnapshot,
    today: Date,
    window: Window,
) -> HarvestNotifications {
    let mut result = HarvestNotifications::default();

    for planting in &snapshot.plantings {
        if planting.timing.is_none() {
            continue;
        }
        let Some(milestone) = milestones::harvest_milestone(&planting.record) else {
            continue;
        };
        let Some(timing) = classify(milestone.date(), today, window) else {
            continue;
        };
        let notification = Notification {
            planting_id: planting.record.id,
            plant_name: planting.plant_name.clone(),
            position: planting.record.position,
            milestone,
            timing,
        };
        match timing {
            Timing::Overdue { .. } => result.harvest_overdue.push(notification),
            Timing::DueToday => result.harvest_ready.push(notification),
            Timing::ComingUp { .. } => result.harvest_soon.push(notification),
        }
    }

    result
}
