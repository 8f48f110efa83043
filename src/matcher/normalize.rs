//! Name normalisation for matching
//!
//! None of these helpers are meant for display text; they only produce keys.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words dropped before containment matching.
pub const STOP_WORDS: &[&str] = &["the", "of", "and", "a", "an", "to", "at"];

static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)|\[[^\]]*\]").expect("valid annotation regex"));

/// Lowercase, drop apostrophes, and collapse everything that is not a letter
/// or digit into single spaces.
///
/// ```
/// use parkplan::matcher::normalize_key;
/// assert_eq!(normalize_key("Tiana's Bayou Adventure"), "tianas bayou adventure");
/// assert_eq!(normalize_key("  Rock 'n' Roller Coaster! "), "rock n roller coaster");
/// ```
pub fn normalize_key(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut gap = false;
    for c in lowered.chars() {
        if matches!(c, '\'' | '\u{2018}' | '\u{2019}') {
            continue;
        }
        if c.is_alphanumeric() {
            if gap && !key.is_empty() {
                key.push(' ');
            }
            gap = false;
            key.push(c);
        } else {
            gap = true;
        }
    }
    key
}

/// Remove `(...)` and `[...]` spans, then collapse whitespace.
pub fn strip_annotations(name: &str) -> String {
    ANNOTATION.replace_all(name, " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalised key into words, dropping [`STOP_WORDS`].
pub fn tokenize(key: &str) -> Vec<&str> {
    key.split(' ').filter(|word| !word.is_empty() && !STOP_WORDS.contains(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apostrophe_variants_normalise_alike() {
        let plain = normalize_key("Tianas Bayou Adventure");
        assert_eq!(normalize_key("Tiana's Bayou Adventure"), plain);
        assert_eq!(normalize_key("Tiana\u{2019}s Bayou Adventure"), plain);
        assert_eq!(normalize_key("TIANA\u{2018}S  bayou -- adventure"), plain);
    }

    #[test]
    fn punctuation_collapses_to_single_spaces() {
        assert_eq!(normalize_key("Na'vi River Journey"), "navi river journey");
        assert_eq!(normalize_key("Star Wars: Rise of the Resistance"), "star wars rise of the resistance");
        assert_eq!(normalize_key("...!!!"), "");
    }

    #[test]
    fn normalize_key_is_idempotent() {
        for name in ["Space Mountain", "  Peter Pan's Flight!! ", "Rock 'n' Roller", "Café [Lunch]"] {
            let once = normalize_key(name);
            assert_eq!(normalize_key(&once), once);
        }
    }

    #[test]
    fn annotations_are_removed() {
        assert_eq!(strip_annotations("Space Mountain (Lightning Lane)"), "Space Mountain");
        assert_eq!(strip_annotations("[LL] Slinky Dog Dash"), "Slinky Dog Dash");
        assert_eq!(strip_annotations("Jungle (Cruise) [9am] Tour"), "Jungle Tour");
        assert_eq!(strip_annotations("Unclosed (paren"), "Unclosed (paren");
    }

    #[test]
    fn strip_annotations_is_idempotent() {
        for name in ["a (b (c) d) e", "[a (b] c)", "( x [y] )", "( a [b]", "plain  text"] {
            let once = strip_annotations(name);
            assert_eq!(strip_annotations(&once), once, "input: {}", name);
        }
    }

    #[test]
    fn tokenize_drops_stop_words() {
        assert_eq!(tokenize("pirates of the caribbean"), vec!["pirates", "caribbean"]);
        assert_eq!(tokenize("a an and at the to of"), Vec::<&str>::new());
        assert_eq!(tokenize(""), Vec::<&str>::new());
    }
}
