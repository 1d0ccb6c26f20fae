//! Markdown rendering of notifications, harvest views and digests.

use std::fmt;

use jiff::civil::Date;

use super::datetime::Days;
use crate::models::{
    Digest, GardenNotifications, HarvestNotifications, Notification, NotificationSet, Timing,
};

const DIGEST_TITLE: &str = "🌱 Your Weekly Garden Digest";

/// Subject line for a digest, counting tasks that need attention now.
///
/// ```rust
/// use garden_core::{display::digest_subject, models::NotificationSet};
///
/// let mut set = NotificationSet::default();
/// assert_eq!(digest_subject(&set), "🌱 Your Weekly Garden Digest");
///
/// set.total_overdue = 2;
/// set.total_due_today = 1;
/// assert_eq!(
///     digest_subject(&set),
///     "🌱 Your Weekly Garden Digest - 3 tasks need attention"
/// );
/// ```
pub fn digest_subject(notifications: &NotificationSet) -> String {
    match notifications.needs_attention() {
        0 => DIGEST_TITLE.to_string(),
        1 => format!("{DIGEST_TITLE} - 1 task needs attention"),
        n => format!("{DIGEST_TITLE} - {n} tasks need attention"),
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Timing::Overdue { days_overdue } => write!(f, "{} overdue", Days(days_overdue)),
            Timing::DueToday => write!(f, "due today"),
            Timing::ComingUp { days_until } => write!(f, "in {}", Days(days_until)),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** at {}: {} {} ({})",
            self.plant_name,
            self.position,
            self.kind().label(),
            self.timing,
            self.date()
        )
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, items: &[Notification]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "### {title}")?;
    writeln!(f)?;
    for item in items {
        write!(f, "{item}")?;
    }
    writeln!(f)
}

impl fmt::Display for GardenNotifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.garden_name, self.garden_id)?;
        writeln!(f)?;
        write_section(f, "Overdue", &self.overdue)?;
        write_section(f, "Due Today", &self.due_today)?;
        write_section(f, "Coming Up", &self.coming_up)
    }
}

fn write_totals(f: &mut fmt::Formatter<'_>, set: &NotificationSet) -> fmt::Result {
    writeln!(
        f,
        "{} overdue, {} due today, {} coming up",
        set.total_overdue, set.total_due_today, set.total_coming_up
    )
}

fn write_gardens(f: &mut fmt::Formatter<'_>, set: &NotificationSet) -> fmt::Result {
    if !set.has_notifications {
        return writeln!(f, "Nothing needs doing in your gardens right now.");
    }
    write_totals(f, set)?;
    writeln!(f)?;
    for garden in &set.gardens {
        write!(f, "{garden}")?;
    }
    Ok(())
}

impl fmt::Display for NotificationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Garden Tasks")?;
        writeln!(f)?;
        write_gardens(f, self)
    }
}

impl fmt::Display for HarvestNotifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Harvest")?;
        writeln!(f)?;
        if self.is_empty() {
            return writeln!(f, "No harvests due around this date.");
        }
        write_section(f, "Ready Today", &self.harvest_ready)?;
        write_section(f, "Overdue", &self.harvest_overdue)?;
        write_section(f, "Coming Soon", &self.harvest_soon)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", digest_subject(&self.notifications))?;
        writeln!(f)?;
        writeln!(f, "- **Owner**: {}", self.owner)?;
        writeln!(f, "- **Date**: {}", self.date)?;
        writeln!(f)?;
        write_gardens(f, &self.notifications)
    }
}

/// One-line summary of a digest, as printed by a dry run.
pub struct DigestSummary<'a>(pub &'a Digest);

impl fmt::Display for DigestSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = &self.0.notifications;
        write!(f, "- Would send to **{}**: ", self.0.owner)?;
        write_totals(f, set)
    }
}

/// Dry-run report for one digest batch.
///
/// Lists the owners a digest would go to; nothing is delivered.
pub struct DigestRun<'a> {
    pub digests: &'a [Digest],
    pub date: Date,
}

impl fmt::Display for DigestRun<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Weekly Digest (dry run)")?;
        writeln!(f)?;
        if self.digests.is_empty() {
            return writeln!(f, "No owners have gardens; no digests were built.");
        }
        for digest in self.digests {
            write!(f, "{}", DigestSummary(digest))?;
        }
        writeln!(f)?;
        let attention: usize = self
            .digests
            .iter()
            .map(|d| d.notifications.needs_attention())
            .sum();
        writeln!(
            f,
            "Built {} digest(s) for {} with {attention} task(s) needing attention; nothing was sent.",
            self.digests.len(),
            self.date
        )
    }
}
