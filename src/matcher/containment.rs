//! Whole-word sequence containment

use super::normalize::tokenize;

/// True if `query_tokens` appear, in order and adjacent, as whole words in
/// the stop-word-filtered `candidate_key`.
///
/// Both sides are padded with spaces before the substring test, so `mountain`
/// never matches inside `mountains`.
pub fn contains_whole_word_sequence(candidate_key: &str, query_tokens: &[&str]) -> bool {
    if query_tokens.is_empty() {
        return false;
    }
    let haystack = format!(" {} ", tokenize(candidate_key).join(" "));
    let needle = format!(" {} ", query_tokens.join(" "));
    haystack.contains(&needle)
}
