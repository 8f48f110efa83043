//! Removal of leftover time tokens from the end of a name.
//!
//! A name typed as `Space Mountain 10pm` after its time slot was already
//! filled in elsewhere still carries the token. This module peels such tokens
//! off the end, one per pass.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::time_tokens::{parse_24h, parse_am_pm, parse_military, ClockTime};
use super::utils::{has_alphanumeric, trim_separators};
use super::{AM_PM_SHAPE, H24_SHAPE, MILITARY_SHAPE};

/// Number of passes used when the caller has no preference.
pub const DEFAULT_STRIP_PASSES: usize = 2;

pub(super) static TRAILING_AM_PM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(.*?)\s*\b({})$", AM_PM_SHAPE)).expect("valid trailing am/pm regex")
});

pub(super) static TRAILING_24H: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(.*?)\s*\b({})$", H24_SHAPE)).expect("valid trailing 24h regex")
});

pub(super) static TRAILING_MILITARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(.*?)\s*\b({})$", MILITARY_SHAPE))
        .expect("valid trailing military regex")
});

/// Split `text` into the part before a trailing token and the token itself.
pub(super) fn split_trailing<'t>(re: &Regex, text: &'t str) -> Option<(&'t str, &'t str)> {
    let caps = re.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

type TokenParser = fn(&str) -> Option<ClockTime>;

fn strip_one(text: &str) -> Option<String> {
    let kinds: [(&Regex, TokenParser); 3] = [
        (&*TRAILING_AM_PM, parse_am_pm),
        (&*TRAILING_24H, parse_24h),
        (&*TRAILING_MILITARY, parse_military),
    ];

    for (re, parse) in kinds {
        let Some((prefix, token)) = split_trailing(re, text) else {
            continue;
        };
        let prefix = trim_separators(prefix);
        if parse(token).is_some() && has_alphanumeric(prefix) {
            debug!("Stripped trailing time token '{}' from '{}'", token, text);
            return Some(prefix.to_string());
        }
    }
    None
}

/// Remove up to `max_passes` time tokens from the end of `name`.
///
/// Each pass tries a 12-hour token, then a strict 24-hour token, then a
/// military token. A token is only removed when it is valid and the text
/// left in front of it still contains a letter or digit. Stops at the first
/// pass that removes nothing.
pub fn strip_trailing_time_tokens(name: &str, max_passes: usize) -> String {
    let mut current = name.trim().to_string();
    for _ in 0..max_passes {
        match strip_one(&current) {
            Some(rest) => current = rest,
            None => break,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mixed_tokens_over_two_passes() {
        assert_eq!(strip_trailing_time_tokens("Space Mountain 10pm 22:00", 2), "Space Mountain");
    }

    #[test]
    fn respects_pass_limit() {
        assert_eq!(strip_trailing_time_tokens("Parade 3pm 15:00", 1), "Parade 3pm");
        assert_eq!(
            strip_trailing_time_tokens("Parade 1500 3pm 15:00", DEFAULT_STRIP_PASSES),
            "Parade 1500"
        );
    }

    #[test]
    fn keeps_invalid_tokens() {
        assert_eq!(strip_trailing_time_tokens("Route 9999", 2), "Route 9999");
        assert_eq!(strip_trailing_time_tokens("Stage 13pm", 2), "Stage 13pm");
    }

    #[test]
    fn never_strips_down_to_nothing() {
        assert_eq!(strip_trailing_time_tokens("10pm", 2), "10pm");
        assert_eq!(strip_trailing_time_tokens("!! 10pm", 2), "!! 10pm");
    }

    #[test]
    fn falls_through_to_later_kinds_when_earlier_shape_is_invalid() {
        // "1234" is not a 24h token but is a valid military one.
        assert_eq!(strip_trailing_time_tokens("Lunch 1234", 2), "Lunch");
    }

    #[test]
    fn drops_separator_before_token() {
        assert_eq!(strip_trailing_time_tokens("Dinner - 7pm", 2), "Dinner");
        assert_eq!(strip_trailing_time_tokens("  Plain name  ", 2), "Plain name");
    }
}
