//! Validation for a directly edited time field.
//!
//! Unlike the line parser there is no name to extract here: the whole input
//! must be one time shape or it is rejected.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::time_tokens::{parse_24h, parse_am_pm, parse_military, TimeLabel};
use super::utils::normalize_dashes;
use super::{TimeParseError, AM_PM_SHAPE, H24_SHAPE};

static AM_PM_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^({a})\s*-\s*({a})$", a = AM_PM_SHAPE))
        .expect("valid am/pm range regex")
});

static H24_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({h})\s*-\s*({h})$", h = H24_SHAPE)).expect("valid 24h range regex")
});

/// Normalise a time typed into an edit field.
///
/// Accepted, in order: `HHMM` military, 12-hour range, 12-hour single,
/// strict 24-hour range, strict 24-hour single. Empty input clears the slot.
pub fn normalize_edit_time(input: &str) -> Result<TimeLabel, TimeParseError> {
    let normalized = normalize_dashes(input);
    let value = normalized.trim();
    if value.is_empty() {
        return Ok(TimeLabel::Untimed);
    }

    let invalid = || TimeParseError::Invalid(value.to_string());

    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return parse_military(value).map(TimeLabel::Single).ok_or_else(invalid);
    }

    if let Some(caps) = AM_PM_RANGE.captures(value) {
        return match (parse_am_pm(&caps[1]), parse_am_pm(&caps[2])) {
            (Some(start), Some(end)) => Ok(TimeLabel::Range(start, end)),
            _ => Err(invalid()),
        };
    }

    if let Some(time) = parse_am_pm(value) {
        return Ok(TimeLabel::Single(time));
    }

    if let Some(caps) = H24_RANGE.captures(value) {
        return match (parse_24h(&caps[1]), parse_24h(&caps[2])) {
            (Some(start), Some(end)) => Ok(TimeLabel::Range(start, end)),
            _ => Err(invalid()),
        };
    }

    if let Some(time) = parse_24h(value) {
        return Ok(TimeLabel::Single(time));
    }

    debug!("Rejected edit-field time '{}'", value);
    Err(invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", ""; "empty clears")]
    #[test_case("   ", ""; "blank clears")]
    #[test_case("0930", "9:30")]
    #[test_case("7pm", "19:00")]
    #[test_case("7:00pm-8:00pm", "19:00-20:00")]
    #[test_case("7pm \u{2013} 8pm", "19:00-20:00"; "en dash range")]
    #[test_case("10:00-11:30", "10:00-11:30")]
    #[test_case("9:05", "9:05")]
    #[test_case("11pm-1am", "23:00-1:00"; "backwards range accepted")]
    #[test_case("10 : 30 pm", "22:30"; "spaced colon single")]
    #[test_case("10 : 30 pm - 11pm", "22:30-23:00"; "spaced colon range")]
    fn accepted(input: &str, expected: &str) {
        assert_eq!(normalize_edit_time(input).unwrap().to_string(), expected);
    }

    #[test_case("2460"; "military rejected without fallback")]
    #[test_case("13pm")]
    #[test_case("7pm-13pm")]
    #[test_case("8:5")]
    #[test_case("10:00-11:5")]
    #[test_case("0900-1000"; "military ranges are not an edit form")]
    #[test_case("Space Mountain 10pm"; "names are not accepted")]
    #[test_case("noon")]
    #[test_case("\u{661}\u{660}pm"; "non ascii digits")]
    #[test_case("\u{ff11}\u{ff10}:\u{ff10}\u{ff10}"; "fullwidth digits")]
    fn rejected(input: &str) {
        assert!(matches!(normalize_edit_time(input), Err(TimeParseError::Invalid(_))));
    }
}
