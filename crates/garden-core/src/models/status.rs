//! Enumerations for planting start methods and harvest status.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a planting was (or will be) started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StartMethod {
    /// Seeds started in a container, transplanted later
    Container,

    /// Sown directly where the plant will grow
    DirectInGround,
}

impl FromStr for StartMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "container" | "indoor" => Ok(StartMethod::Container),
            "direct" | "direct_in_ground" | "direct-in-ground" => {
                Ok(StartMethod::DirectInGround)
            }
            _ => Err(format!("Invalid start method: {s}")),
        }
    }
}

impl StartMethod {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StartMethod::Container => "container",
            StartMethod::DirectInGround => "direct",
        }
    }
}

/// Harvest progress of a single planting relative to a given day.
///
/// Unlike notifications this has no lookback cutoff: a planting whose
/// expected harvest passed months ago is still `Overdue`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HarvestStatus {
    /// An actual harvest date has been recorded
    Harvested,

    /// No expected harvest date is known
    NoDate,

    /// Expected harvest is in the past
    Overdue,

    /// Expected harvest is today
    Ready,

    /// Expected harvest is within the next week
    Soon,

    /// Expected harvest is more than a week away
    Growing,
}

impl HarvestStatus {
    /// Convert to its lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HarvestStatus::Harvested => "harvested",
            HarvestStatus::NoDate => "no_date",
            HarvestStatus::Overdue => "overdue",
            HarvestStatus::Ready => "ready",
            HarvestStatus::Soon => "soon",
            HarvestStatus::Growing => "growing",
        }
    }

    /// Status with an icon for terminal display.
    ///
    /// ```rust
    /// use garden_core::models::HarvestStatus;
    ///
    /// assert_eq!(HarvestStatus::Ready.with_icon(), "★ Ready");
    /// assert_eq!(HarvestStatus::Harvested.with_icon(), "✓ Harvested");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            HarvestStatus::Harvested => "✓ Harvested",
            HarvestStatus::NoDate => "· No date",
            HarvestStatus::Overdue => "! Overdue",
            HarvestStatus::Ready => "★ Ready",
            HarvestStatus::Soon => "➤ Soon",
            HarvestStatus::Growing => "○ Growing",
        }
    }
}
