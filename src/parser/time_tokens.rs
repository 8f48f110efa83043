//! Time token recognizers
//!
//! The three recognizers in this module are the leaves of the schedule parser.
//! Each one accepts a single token (no surrounding text) and returns the
//! canonical 24-hour [`ClockTime`] or `None`. None of them panic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TimeParseError;

static AM_PM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})(?::([0-9]{1,2}))?([ap]m)$").expect("valid am/pm regex"));

static H24_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid 24h regex"));

/// A wall-clock time in 24-hour form, rendered as `H:MM` (no hour padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour: hour as u8, minute: minute as u8 })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_of_day(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// The time slot attached to a plan item.
///
/// Ranges keep whatever order they were typed in; `end` is never checked
/// against `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeLabel {
    #[default]
    Untimed,
    Single(ClockTime),
    Range(ClockTime, ClockTime),
}

impl TimeLabel {
    pub fn is_timed(&self) -> bool {
        !matches!(self, TimeLabel::Untimed)
    }

    /// Start of the slot, if any.
    pub fn start(&self) -> Option<ClockTime> {
        match self {
            TimeLabel::Untimed => None,
            TimeLabel::Single(t) | TimeLabel::Range(t, _) => Some(*t),
        }
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLabel::Untimed => Ok(()),
            TimeLabel::Single(t) => write!(f, "{}", t),
            TimeLabel::Range(start, end) => write!(f, "{}-{}", start, end),
        }
    }
}

impl FromStr for TimeLabel {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::edit_field::normalize_edit_time(s)
    }
}

impl TryFrom<String> for TimeLabel {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.to_string()
    }
}

/// Parse a 12-hour token such as `10pm`, `8:30 am` or `12AM`.
///
/// Whitespace anywhere in the token is ignored. The hour must be 1-12. A
/// single-digit minute (`8:5pm`) is read as `:00` rather than guessed at.
pub fn parse_am_pm(token: &str) -> Option<ClockTime> {
    let compact: String =
        token.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
    let caps = AM_PM_TOKEN.captures(&compact)?;

    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let minute: u32 = match caps.get(2) {
        None => 0,
        Some(m) if m.as_str().len() == 1 => 0,
        Some(m) => m.as_str().parse().ok()?,
    };
    if minute > 59 {
        return None;
    }

    let hour_24 = match (hour, &caps[3]) {
        (12, "am") => 0,
        (12, _) => 12,
        (h, "pm") => h + 12,
        (h, _) => h,
    };
    ClockTime::new(hour_24, minute)
}

/// Parse a strict `H:MM` / `HH:MM` token. The minute must be two digits.
pub fn parse_24h(token: &str) -> Option<ClockTime> {
    let caps = H24_TOKEN.captures(token.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    ClockTime::new(hour, minute)
}

/// Parse a four-digit military token (`HHMM`). Any out-of-range part rejects
/// the whole token.
pub fn parse_military(token: &str) -> Option<ClockTime> {
    let token = token.trim();
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = token[..2].parse().ok()?;
    let minute: u32 = token[2..].parse().ok()?;
    ClockTime::new(hour, minute)
}
