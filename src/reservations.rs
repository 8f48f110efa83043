//! Urgency buckets for timed plan items
//!
//! Everything runs on minutes since midnight in the park's own time zone.
//! Slots never cross midnight.

use chrono::{NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parks::Park;
use crate::parser::TimeLabel;
use crate::plan::PlanItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Past,
    InProgress,
    Imminent,
    Soon,
    Later,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Past => "past",
            Urgency::InProgress => "in progress",
            Urgency::Imminent => "imminent",
            Urgency::Soon => "soon",
            Urgency::Later => "later",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyThresholds {
    /// Start within this many minutes is imminent.
    pub imminent_minutes: u32,
    pub soon_minutes: u32,
    /// How long a single time counts as in progress after it starts.
    pub grace_minutes: u32,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self { imminent_minutes: 15, soon_minutes: 60, grace_minutes: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationStatus {
    pub urgency: Urgency,
    /// Negative once the slot has started.
    pub minutes_until: i64,
    pub countdown: String,
}

fn minutes_of(now: NaiveTime) -> i64 {
    now.hour() as i64 * 60 + now.minute() as i64
}

fn countdown_until(minutes: i64) -> String {
    if minutes >= 60 {
        format!("in {}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("in {}m", minutes)
    }
}

fn countdown_since(minutes: i64) -> String {
    if minutes == 0 {
        "now".to_string()
    } else {
        format!("started {}m ago", minutes)
    }
}

/// Classify a slot against `now`. Untimed labels have no status.
///
/// A range whose end precedes its start is judged on its start alone,
/// like a single time.
pub fn assess(
    label: &TimeLabel,
    now: NaiveTime,
    thresholds: &UrgencyThresholds,
) -> Option<ReservationStatus> {
    let now = minutes_of(now);
    let (start, end) = match label {
        TimeLabel::Untimed => return None,
        TimeLabel::Single(start) => (start.minutes_of_day(), None),
        TimeLabel::Range(start, end) if end >= start => {
            (start.minutes_of_day(), Some(end.minutes_of_day()))
        }
        TimeLabel::Range(start, _) => (start.minutes_of_day(), None),
    };
    let minutes_until = start - now;
    let elapsed = -minutes_until;
    let last_minute = end.unwrap_or(start + thresholds.grace_minutes as i64);

    let (urgency, countdown) = if elapsed >= 0 && now > last_minute {
        (Urgency::Past, "ended".to_string())
    } else if elapsed >= 0 {
        (Urgency::InProgress, countdown_since(elapsed))
    } else if minutes_until <= thresholds.imminent_minutes as i64 {
        (Urgency::Imminent, countdown_until(minutes_until))
    } else if minutes_until <= thresholds.soon_minutes as i64 {
        (Urgency::Soon, countdown_until(minutes_until))
    } else {
        (Urgency::Later, countdown_until(minutes_until))
    };

    Some(ReservationStatus { urgency, minutes_until, countdown })
}

/// Statuses for every timed item, in plan order.
pub fn assess_plan<'a>(
    items: &'a [PlanItem],
    now: NaiveTime,
    thresholds: &UrgencyThresholds,
) -> Vec<(&'a PlanItem, ReservationStatus)> {
    items
        .iter()
        .filter_map(|item| assess(&item.time_label, now, thresholds).map(|status| (item, status)))
        .collect()
}

/// Wall-clock time right now at the park.
pub fn park_now(park: &Park) -> NaiveTime {
    Utc::now().with_timezone(&park.timezone).time()
}
