//! Typed notification results.
//!
//! Notifications are computed on demand and never stored. Each one pairs a
//! [`Milestone`], which carries only the dates relevant to its kind, with a
//! [`Timing`] that places it in one of the three buckets.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Position;

/// The four dated tasks a planting can raise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    SeedStart,
    Transplant,
    Planting,
    Harvest,
}

impl MilestoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneKind::SeedStart => "seed_start",
            MilestoneKind::Transplant => "transplant",
            MilestoneKind::Planting => "planting",
            MilestoneKind::Harvest => "harvest",
        }
    }

    /// Short human label used in digests.
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneKind::SeedStart => "Start seeds",
            MilestoneKind::Transplant => "Transplant",
            MilestoneKind::Planting => "Plant out",
            MilestoneKind::Harvest => "Harvest",
        }
    }
}

/// A pending task for a planting together with the dates that define it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Milestone {
    /// Seeds are planned to be started in a container
    SeedStart { planned: Date },

    /// Container seedlings should be ready to move outside
    Transplant { expected: Date, seed_started: Date },

    /// The plant is planned to go into the ground
    Planting { planned: Date },

    /// The crop is expected to be ready
    Harvest { expected: Date, planted: Date },
}

impl Milestone {
    pub fn kind(&self) -> MilestoneKind {
        match self {
            Milestone::SeedStart { .. } => MilestoneKind::SeedStart,
            Milestone::Transplant { .. } => MilestoneKind::Transplant,
            Milestone::Planting { .. } => MilestoneKind::Planting,
            Milestone::Harvest { .. } => MilestoneKind::Harvest,
        }
    }

    /// The date the task falls due.
    pub fn date(&self) -> Date {
        match *self {
            Milestone::SeedStart { planned } | Milestone::Planting { planned } => planned,
            Milestone::Transplant { expected, .. } | Milestone::Harvest { expected, .. } => {
                expected
            }
        }
    }
}

/// Where a milestone falls relative to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "bucket", rename_all = "snake_case")]
pub enum Timing {
    /// Past due, within the lookback window
    Overdue { days_overdue: u32 },

    /// Due today
    DueToday,

    /// Due within the lookahead window
    ComingUp { days_until: u32 },
}

/// One pending task for one planting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub planting_id: u64,
    pub plant_name: String,
    pub position: Position,
    pub milestone: Milestone,
    pub timing: Timing,
}

impl Notification {
    pub fn kind(&self) -> MilestoneKind {
        self.milestone.kind()
    }

    pub fn date(&self) -> Date {
        self.milestone.date()
    }

    /// Days past due, zero unless overdue.
    pub fn days_overdue(&self) -> u32 {
        match self.timing {
            Timing::Overdue { days_overdue } => days_overdue,
            _ => 0,
        }
    }

    /// Days until due, zero unless coming up.
    pub fn days_until(&self) -> u32 {
        match self.timing {
            Timing::ComingUp { days_until } => days_until,
            _ => 0,
        }
    }
}

/// Pending tasks of one garden, split by bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenNotifications {
    pub garden_id: u64,
    pub garden_name: String,
    /// Most overdue first
    pub overdue: Vec<Notification>,
    pub due_today: Vec<Notification>,
    /// Soonest first
    pub coming_up: Vec<Notification>,
}

impl GardenNotifications {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.due_today.is_empty() && self.coming_up.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overdue.len() + self.due_today.len() + self.coming_up.len()
    }
}

/// Pending tasks across every garden of an owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSet {
    /// Only gardens with at least one pending task
    pub gardens: Vec<GardenNotifications>,
    pub total_overdue: usize,
    pub total_due_today: usize,
    pub total_coming_up: usize,
    pub has_notifications: bool,
}

impl NotificationSet {
    /// Tasks that need attention now (overdue plus due today).
    pub fn needs_attention(&self) -> usize {
        self.total_overdue + self.total_due_today
    }
}

/// Harvest-only view of a single garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarvestNotifications {
    /// Expected harvest is today
    pub harvest_ready: Vec<Notification>,

    /// Expected harvest within the lookahead window
    pub harvest_soon: Vec<Notification>,

    /// Expected harvest passed within the lookback window
    pub harvest_overdue: Vec<Notification>,

    /// Reserved for planting reminders; no code path fills it.
    pub planting_ready: Vec<Notification>,
}

impl HarvestNotifications {
    pub fn is_empty(&self) -> bool {
        self.harvest_ready.is_empty()
            && self.harvest_soon.is_empty()
            && self.harvest_overdue.is_empty()
            && self.planting_ready.is_empty()
    }
}

/// One owner's weekly digest: their notifications as of a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Digest {
    pub owner: String,
    pub date: Date,
    pub notifications: NotificationSet,
}
