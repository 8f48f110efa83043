//! Free-text schedule line parser
//!
//! Turns one pasted or typed line such as `10:30 Haunted Mansion` or
//! `Fantasmic! 7:00pm-8:00pm` into a time label plus activity name.
//!
//! Shapes are tried in a fixed priority order: leading 12-hour (range, single,
//! time-only), leading military, leading 24-hour, then the trailing shapes
//! (ranges before singles). Once a *range* or a leading 12-hour single matches
//! by shape, an invalid value ends the search and the line is kept as a plain
//! name. A leading military or 24-hour single with an invalid value lets the
//! search carry on. Callers must convert Unicode dashes first
//! (see [`normalize_dashes`](super::utils::normalize_dashes)).

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::time_tokens::{parse_24h, parse_am_pm, parse_military, ClockTime, TimeLabel};
use super::trailing::{
    split_trailing, strip_trailing_time_tokens, DEFAULT_STRIP_PASSES, TRAILING_24H,
    TRAILING_AM_PM, TRAILING_MILITARY,
};
use super::utils::{has_alphanumeric, trim_separators};
use super::{AM_PM_SHAPE, H24_LOOSE_SHAPE, H24_SHAPE, MILITARY_SHAPE};

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("valid line parser regex")
}

static LEADING_AM_PM_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"(?i)^({a})\s*-\s*({a})\s*(.*)$", a = AM_PM_SHAPE))
});
static LEADING_AM_PM_SINGLE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"(?i)^({})\s+(.+)$", AM_PM_SHAPE)));
static LEADING_AM_PM_ONLY: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"(?i)^({})$", AM_PM_SHAPE)));

static LEADING_MILITARY_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"^({m})\s*-\s*({m})\b\s*(.*)$", m = MILITARY_SHAPE))
});
static LEADING_MILITARY_SINGLE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^({})\s+(.+)$", MILITARY_SHAPE)));
static LEADING_MILITARY_ONLY: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^({})$", MILITARY_SHAPE)));

static LEADING_24H_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"^({h})\s*-\s*({h})\b\s*(.*)$", h = H24_LOOSE_SHAPE))
});
static LEADING_24H_SINGLE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^({})\s+(.+)$", H24_SHAPE)));
static LEADING_24H_ONLY: Lazy<Regex> = Lazy::new(|| compile(format!(r"^({})$", H24_SHAPE)));

static TRAILING_AM_PM_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"(?i)^(.*?)\s*\b({a})\s*-\s*({a})$", a = AM_PM_SHAPE))
});
static TRAILING_24H_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"^(.*?)\s*\b({h})\s*-\s*({h})$", h = H24_LOOSE_SHAPE))
});
static TRAILING_MILITARY_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(format!(r"^(.*?)\s*\b({m})\s*-\s*({m})$", m = MILITARY_SHAPE))
});

type TokenParser = fn(&str) -> Option<ClockTime>;

/// A plan entry recovered from one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub time_label: TimeLabel,
    pub name: String,
}

impl ParsedLine {
    fn name_only(line: &str) -> Self {
        Self { time_label: TimeLabel::Untimed, name: line.to_string() }
    }
}

/// Outcome of one cascade rule.
enum Step {
    /// The rule owns the line; `None` means the line is dropped.
    Done(Option<ParsedLine>),
    /// Try the next rule.
    Next,
}

/// Parse one line of schedule text.
///
/// Returns `None` for lines that carry no usable entry: empty or punctuation
/// only, or a time with no name attached.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let line = line.trim();
    if !has_alphanumeric(line) {
        return None;
    }

    let rules: [fn(&str) -> Step; 9] = [
        leading_am_pm_range,
        leading_am_pm_single,
        leading_am_pm_only,
        leading_military_range,
        leading_military_single,
        leading_military_only,
        leading_24h_range,
        leading_24h_single,
        leading_24h_only,
    ];
    for rule in rules {
        if let Step::Done(parsed) = rule(line) {
            return parsed;
        }
    }

    let trailing_ranges: [(&Regex, TokenParser); 3] = [
        (&*TRAILING_AM_PM_RANGE, parse_am_pm),
        (&*TRAILING_24H_RANGE, parse_24h),
        (&*TRAILING_MILITARY_RANGE, parse_military),
    ];
    for (re, parse) in trailing_ranges {
        if let Some(caps) = re.captures(line) {
            let label = match (parse(&caps[2]), parse(&caps[3])) {
                (Some(start), Some(end)) => Some(TimeLabel::Range(start, end)),
                _ => None,
            };
            return finish_trailing(label, &caps[1], line);
        }
    }

    let trailing_singles: [(&Regex, TokenParser); 3] = [
        (&*TRAILING_AM_PM, parse_am_pm),
        (&*TRAILING_24H, parse_24h),
        (&*TRAILING_MILITARY, parse_military),
    ];
    for (re, parse) in trailing_singles {
        if let Some((name_part, token)) = split_trailing(re, line) {
            let label = parse(token).map(TimeLabel::Single);
            return finish_trailing(label, name_part, line);
        }
    }

    debug!("No time found in '{}', keeping it as a name", line);
    Some(ParsedLine::name_only(line))
}

/// Build the entry for a leading match from whatever followed the time.
fn finish_leading(label: TimeLabel, rest: &str) -> Option<ParsedLine> {
    let rest = trim_separators(rest);
    if !has_alphanumeric(rest) {
        debug!("Dropping time-only line ({})", label);
        return None;
    }
    Some(ParsedLine {
        time_label: label,
        name: strip_trailing_time_tokens(rest, DEFAULT_STRIP_PASSES),
    })
}

fn finish_trailing(label: Option<TimeLabel>, name_part: &str, line: &str) -> Option<ParsedLine> {
    let name_part = trim_separators(name_part);
    match label {
        Some(label) if has_alphanumeric(name_part) => Some(ParsedLine {
            time_label: label,
            name: strip_trailing_time_tokens(name_part, DEFAULT_STRIP_PASSES),
        }),
        Some(_) => None,
        None if !has_alphanumeric(name_part) => None,
        None => Some(ParsedLine::name_only(line)),
    }
}

fn leading_range(caps: Captures<'_>, parse: TokenParser, line: &str) -> Step {
    match (parse(&caps[1]), parse(&caps[2])) {
        (Some(start), Some(end)) => {
            Step::Done(finish_leading(TimeLabel::Range(start, end), &caps[3]))
        }
        _ => {
            debug!("Leading range in '{}' is not a real time, keeping line as a name", line);
            Step::Done(Some(ParsedLine::name_only(line)))
        }
    }
}

fn leading_am_pm_range(line: &str) -> Step {
    match LEADING_AM_PM_RANGE.captures(line) {
        Some(caps) => leading_range(caps, parse_am_pm, line),
        None => Step::Next,
    }
}

fn leading_am_pm_single(line: &str) -> Step {
    let Some(caps) = LEADING_AM_PM_SINGLE.captures(line) else {
        return Step::Next;
    };
    match parse_am_pm(&caps[1]) {
        Some(time) => Step::Done(finish_leading(TimeLabel::Single(time), &caps[2])),
        None => Step::Done(Some(ParsedLine::name_only(line))),
    }
}

fn leading_am_pm_only(line: &str) -> Step {
    time_only(&LEADING_AM_PM_ONLY, parse_am_pm, line)
}

fn leading_military_range(line: &str) -> Step {
    match LEADING_MILITARY_RANGE.captures(line) {
        Some(caps) => leading_range(caps, parse_military, line),
        None => Step::Next,
    }
}

fn leading_military_single(line: &str) -> Step {
    fallthrough_single(&LEADING_MILITARY_SINGLE, parse_military, line)
}

fn leading_military_only(line: &str) -> Step {
    time_only(&LEADING_MILITARY_ONLY, parse_military, line)
}

fn leading_24h_range(line: &str) -> Step {
    match LEADING_24H_RANGE.captures(line) {
        Some(caps) => leading_range(caps, parse_24h, line),
        None => Step::Next,
    }
}

fn leading_24h_single(line: &str) -> Step {
    fallthrough_single(&LEADING_24H_SINGLE, parse_24h, line)
}

fn leading_24h_only(line: &str) -> Step {
    time_only(&LEADING_24H_ONLY, parse_24h, line)
}

/// Leading single token whose invalid value hands the line to later rules.
fn fallthrough_single(re: &Regex, parse: TokenParser, line: &str) -> Step {
    let Some(caps) = re.captures(line) else {
        return Step::Next;
    };
    match parse(&caps[1]) {
        Some(time) => Step::Done(finish_leading(TimeLabel::Single(time), &caps[2])),
        None => Step::Next,
    }
}

/// A line that is nothing but a valid token is dropped.
fn time_only(re: &Regex, parse: TokenParser, line: &str) -> Step {
    match re.captures(line) {
        Some(caps) if parse(&caps[1]).is_some() => Step::Done(None),
        _ => Step::Next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parsed(line: &str) -> Option<(String, String)> {
        parse_line(line).map(|p| (p.time_label.to_string(), p.name))
    }

    fn entry(label: &str, name: &str) -> Option<(String, String)> {
        Some((label.to_string(), name.to_string()))
    }

    #[test_case("Space Mountain 10pm", "22:00", "Space Mountain")]
    #[test_case("10:30 Haunted Mansion", "10:30", "Haunted Mansion")]
    #[test_case("Fantasmic! 7:00pm-8:00pm", "19:00-20:00", "Fantasmic!")]
    #[test_case("10am-11am Morning Block", "10:00-11:00", "Morning Block")]
    #[test_case("0930 Rope Drop", "9:30", "Rope Drop")]
    #[test_case("0900-1000 Breakfast", "9:00-10:00", "Breakfast")]
    #[test_case("10:00-11:00 Lunch", "10:00-11:00", "Lunch")]
    #[test_case("Dinner 1800-1930", "18:00-19:30", "Dinner")]
    #[test_case("Dinner 8:30", "8:30", "Dinner")]
    #[test_case("Fireworks 8:5pm", "20:00", "Fireworks")]
    #[test_case("Show 12:00am-1:30am", "0:00-1:30", "Show")]
    #[test_case("Parade 3pm 15:00", "15:00", "Parade")]
    #[test_case("10am Breakfast 10am", "10:00", "Breakfast")]
    #[test_case("10am - Character Breakfast", "10:00", "Character Breakfast")]
    #[test_case("Late Show 11pm-1am", "23:00-1:00", "Late Show"; "backwards range kept as typed")]
    fn timed_lines(line: &str, label: &str, name: &str) {
        assert_eq!(parsed(line), entry(label, name));
    }

    #[test_case("3pm")]
    #[test_case("!!!")]
    #[test_case("")]
    #[test_case("   ")]
    #[test_case("10am-11am")]
    #[test_case("10am -")]
    #[test_case("1030")]
    #[test_case("9999")]
    #[test_case("14:30")]
    #[test_case("!!! 9999")]
    #[test_case("-- 7pm")]
    fn ignored_lines(line: &str) {
        assert_eq!(parsed(line), None);
    }

    #[test_case("10am-13pm Character Breakfast"; "invalid leading am/pm range is atomic")]
    #[test_case("0900-2500 Breakfast"; "invalid leading military range is atomic")]
    #[test_case("9:00-9:5 Parade"; "malformed 24h range is atomic")]
    #[test_case("13pm Lunch"; "invalid leading am/pm single is terminal")]
    #[test_case("25:00 Fireworks"; "invalid 24h single falls through to fallback")]
    #[test_case("2500 Main Street Stroll"; "invalid military single falls through to fallback")]
    #[test_case("Tour 9999"; "invalid trailing token keeps whole line")]
    #[test_case("Ride 8:5"; "single digit 24h minute is not a token")]
    #[test_case("Meet Mickey"; "no time at all")]
    fn name_only_lines(line: &str) {
        assert_eq!(parsed(line), entry("", line));
    }

    #[test]
    fn invalid_military_prefix_continues_to_trailing_rules() {
        assert_eq!(
            parsed("2500 Main Street Stroll 10pm"),
            entry("22:00", "2500 Main Street Stroll")
        );
    }

    #[test]
    fn invalid_24h_prefix_continues_to_trailing_rules() {
        assert_eq!(parsed("25:00 Fireworks 10pm"), entry("22:00", "25:00 Fireworks"));
        assert_eq!(parsed("24:30 Parade 21:15"), entry("21:15", "24:30 Parade"));
    }

    #[test]
    fn non_ascii_digits_are_not_time_tokens() {
        // Arabic-Indic digits read as text, so the leading rules never fire.
        assert_eq!(parsed("\u{661}\u{660}pm Parade 9pm"), entry("21:00", "\u{661}\u{660}pm Parade"));
        assert_eq!(
            parsed("Parade \u{661}\u{662}:\u{663}\u{660}"),
            entry("", "Parade \u{661}\u{662}:\u{663}\u{660}")
        );
        assert_eq!(parsed("\u{ff11}\u{ff10}:\u{ff10}\u{ff10} Lunch"), entry("", "\u{ff11}\u{ff10}:\u{ff10}\u{ff10} Lunch"));
    }

    #[test]
    fn spaced_colon_am_pm_range_matches_single() {
        assert_eq!(parsed("10 : 30 pm Fireworks"), entry("22:30", "Fireworks"));
        assert_eq!(parsed("10 : 30 pm-11pm Fireworks"), entry("22:30-23:00", "Fireworks"));
        assert_eq!(parsed("Fireworks 10 : 30 pm-11pm"), entry("22:30-23:00", "Fireworks"));
    }

    #[test]
    fn invalid_am_pm_prefix_does_not_reach_trailing_rules() {
        assert_eq!(parsed("13pm Lunch 2pm"), entry("", "13pm Lunch 2pm"));
    }

    #[test]
    fn invalid_trailing_range_does_not_try_singles() {
        assert_eq!(parsed("Stage Show 11am-13pm"), entry("", "Stage Show 11am-13pm"));
    }

    #[test]
    fn outer_whitespace_is_trimmed() {
        assert_eq!(parsed("   Jungle Cruise   "), entry("", "Jungle Cruise"));
        assert_eq!(parsed("\tJungle Cruise 2pm  "), entry("14:00", "Jungle Cruise"));
    }

    #[test]
    fn am_pm_is_case_insensitive() {
        assert_eq!(parsed("9AM Rope Drop"), entry("9:00", "Rope Drop"));
        assert_eq!(parsed("Dinner 6:30 PM"), entry("18:30", "Dinner"));
    }
}
