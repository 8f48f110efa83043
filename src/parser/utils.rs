//! Common text helpers shared by the schedule parsers

/// Replace Unicode en/em dashes (and the minus sign) with an ASCII hyphen.
///
/// Line parsing expects this to have been applied by the caller.
pub fn normalize_dashes(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// True if the text contains at least one letter or digit.
pub fn has_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Filter out control characters except for newlines and tabs
pub fn sanitize_user_input(input: &str) -> String {
    input.chars().filter(|&c| !c.is_control() || c == '\n' || c == '\t').collect::<String>()
}

/// Trim whitespace plus the separator punctuation people put between a time
/// and a name (`10am - Breakfast`, `Dinner: 7pm`).
pub(crate) fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | ',' | '|' | '@'))
}
