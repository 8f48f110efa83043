//! ParkPlan schedule parser
//!
//! Recognises time tokens in free text. Everything here is pure and total:
//! invalid input yields `None` or [`TimeParseError`], never a panic.
pub mod edit_field;
pub mod line_parser;
pub mod time_tokens;
pub mod trailing;
pub mod utils;

pub use edit_field::normalize_edit_time;
pub use line_parser::{parse_line, ParsedLine};
pub use time_tokens::{parse_24h, parse_am_pm, parse_military, ClockTime, TimeLabel};
pub use trailing::{strip_trailing_time_tokens, DEFAULT_STRIP_PASSES};
pub use utils::{has_alphanumeric, normalize_dashes, sanitize_user_input};

/// 12-hour token as it appears inside a line (`10pm`, `8:30 am`).
pub(crate) const AM_PM_SHAPE: &str = r"[0-9]{1,2}(?:\s*:\s*[0-9]{1,2})?\s*[ap]m\b";
/// 24-hour token with a strict two-digit minute.
pub(crate) const H24_SHAPE: &str = r"[0-9]{1,2}:[0-9]{2}";
/// 24-hour token as matched inside ranges, loose enough to catch `9:5`.
pub(crate) const H24_LOOSE_SHAPE: &str = r"[0-9]{1,2}:[0-9]{1,2}";
/// Four-digit military token.
pub(crate) const MILITARY_SHAPE: &str = r"[0-9]{4}";

/// Error surfaced when a typed time cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("'{0}' is not a recognised time (try 14:30, 2:30pm, 1430 or 2pm-3pm)")]
    Invalid(String),
}
