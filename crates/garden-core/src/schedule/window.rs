//! Classification of a milestone date against today.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::Timing;

/// Days either side of today within which milestones are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Overdue milestones older than this are dropped
    pub lookback_days: u32,
    /// Milestones further out than this are not reported yet
    pub lookahead_days: u32,
}

impl Window {
    pub const DEFAULT_DAYS: u32 = 7;

    pub fn new(lookback_days: u32, lookahead_days: u32) -> Self {
        Self {
            lookback_days,
            lookahead_days,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAYS, Self::DEFAULT_DAYS)
    }
}

/// Places `milestone` relative to `today`, or `None` outside the window.
///
/// ```rust
/// use garden_core::{models::Timing, schedule::{classify, Window}};
/// use jiff::civil::date;
///
/// let today = date(2025, 4, 11);
/// assert_eq!(
///     classify(date(2025, 4, 18), today, Window::default()),
///     Some(Timing::ComingUp { days_until: 7 })
/// );
/// assert_eq!(classify(date(2025, 4, 19), today, Window::default()), None);
/// ```
pub fn classify(milestone: Date, today: Date, window: Window) -> Option<Timing> {
    let delta = i64::from((milestone - today).get_days());
    let lookback = i64::from(window.lookback_days);
    let lookahead = i64::from(window.lookahead_days);

    if delta < -lookback || delta > lookahead {
        return None;
    }
    let timing = match delta {
        0 => Timing::DueToday,
        d if d < 0 => Timing::Overdue {
            days_overdue: u32::try_from(-d).ok()?,
        },
        d => Timing::ComingUp {
            days_until: u32::try_from(d).ok()?,
        },
    };
    Some(timing)
}
