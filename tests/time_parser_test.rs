use parkplan::parser::{
    normalize_dashes, normalize_edit_time, parse_24h, parse_am_pm, parse_line, parse_military,
    strip_trailing_time_tokens, ClockTime, TimeLabel,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn line(text: &str) -> Option<(String, String)> {
    parse_line(&normalize_dashes(text)).map(|p| (p.time_label.to_string(), p.name))
}

fn timed(label: &str, name: &str) -> Option<(String, String)> {
    Some((label.to_string(), name.to_string()))
}

#[test]
fn every_valid_24h_time_round_trips() {
    for hour in 0..24 {
        for minute in 0..60 {
            let text = format!("{}:{:02}", hour, minute);
            let parsed = parse_24h(&text).unwrap();
            assert_eq!((parsed.hour(), parsed.minute()), (hour, minute));
            assert_eq!(parsed.to_string(), text);
        }
    }
}

#[test_case("2460" ; "minute out of range")]
#[test_case("2400" ; "hour out of range")]
#[test_case("0860" ; "sixty minutes")]
#[test_case("abc1" ; "letters")]
#[test_case("930" ; "three digits")]
#[test_case("09300" ; "five digits")]
fn military_rejections(text: &str) {
    assert_eq!(parse_military(text), None);
}

#[test]
fn am_pm_conversions() {
    assert_eq!(parse_am_pm("12am").map(|t| t.to_string()), Some("0:00".to_string()));
    assert_eq!(parse_am_pm("12pm").map(|t| t.to_string()), Some("12:00".to_string()));
    assert_eq!(parse_am_pm("1pm").map(|t| t.to_string()), Some("13:00".to_string()));
    assert_eq!(parse_am_pm("8:5pm").map(|t| t.to_string()), Some("20:00".to_string()));
    assert_eq!(parse_24h("8:5"), None);
}

#[test_case("Space Mountain 10pm", timed("22:00", "Space Mountain") ; "trailing am pm")]
#[test_case("10:30 Haunted Mansion", timed("10:30", "Haunted Mansion") ; "leading 24h")]
#[test_case("Fantasmic! 7:00pm-8:00pm", timed("19:00-20:00", "Fantasmic!") ; "trailing am pm range")]
#[test_case("Fantasmic! 7:00pm\u{2013}8:00pm", timed("19:00-20:00", "Fantasmic!") ; "en dash range")]
#[test_case("10am-11am Morning Block", timed("10:00-11:00", "Morning Block") ; "leading am pm range")]
#[test_case("1300-1400 Lunch", timed("13:00-14:00", "Lunch") ; "leading military range")]
#[test_case("25:00 Fireworks 10pm", timed("22:00", "25:00 Fireworks") ; "invalid leading 24h keeps searching")]
#[test_case("10 : 30 pm-11pm Fireworks", timed("22:30-23:00", "Fireworks") ; "spaced colon range")]
#[test_case("3pm", None ; "time only")]
#[test_case("!!!", None ; "punctuation")]
#[test_case("", None ; "empty")]
#[test_case("Dole Whip", timed("", "Dole Whip") ; "no time")]
fn schedule_lines(text: &str, expected: Option<(String, String)>) {
    assert_eq!(line(text), expected);
}

#[test]
fn trailing_tokens_are_stripped_in_two_passes() {
    assert_eq!(strip_trailing_time_tokens("Space Mountain 10pm 22:00", 2), "Space Mountain");
}

#[test]
fn edit_field_grammar() {
    assert_eq!(normalize_edit_time("").unwrap(), TimeLabel::Untimed);
    assert_eq!(normalize_edit_time("2200").unwrap().to_string(), "22:00");
    assert_eq!(normalize_edit_time("7pm\u{2014}8pm").unwrap().to_string(), "19:00-20:00");
    assert_eq!(normalize_edit_time("19:00-20:00").unwrap().to_string(), "19:00-20:00");
    assert!(normalize_edit_time("2460").is_err());
    assert!(normalize_edit_time("Space Mountain 10pm").is_err());
}

#[test]
fn ranges_keep_typed_order() {
    let label = normalize_edit_time("9pm-8pm").unwrap();
    assert_eq!(
        label,
        TimeLabel::Range(ClockTime::new(21, 0).unwrap(), ClockTime::new(20, 0).unwrap())
    );
}
