//! Activity name to attraction matching
//!
//! [`lookup_wait`] resolves whatever the user typed for an activity to one
//! wait record, or to nothing. It never guesses: an exact key, an alias, or a
//! single unambiguous whole-word containment hit are the only ways to match.
pub mod aliases;
pub mod containment;
pub mod normalize;
pub mod table;

use log::debug;

pub use aliases::AliasTable;
pub use containment::contains_whole_word_sequence;
pub use normalize::{normalize_key, strip_annotations, tokenize, STOP_WORDS};
pub use table::{WaitRecord, WaitStatus, WaitTable};

/// Prefix retried without itself when the direct alias lookup misses.
const ARTICLE_PREFIX: &str = "the ";

/// Find the wait record for an activity name.
///
/// 1. exact normalised key,
/// 2. alias table (retrying without a leading "the"),
/// 3. whole-word containment, only for queries of two or more meaningful
///    words and only when exactly one record contains them.
pub fn lookup_wait<'t>(
    name: &str,
    table: &'t WaitTable,
    aliases: &AliasTable,
) -> Option<&'t WaitRecord> {
    let key = normalize_key(&strip_annotations(name));
    if key.is_empty() {
        return None;
    }

    if let Some(record) = table.get(&key) {
        return Some(record);
    }

    if let Some(record) = lookup_alias(&key, table, aliases) {
        debug!("'{}' matched '{}' through the alias table", name, record.name);
        return Some(record);
    }

    let tokens = tokenize(&key);
    if tokens.len() < 2 {
        return None;
    }

    let mut candidates = table
        .iter()
        .filter(|(candidate, _)| contains_whole_word_sequence(candidate, &tokens))
        .map(|(_, record)| record);
    match (candidates.next(), candidates.next()) {
        (Some(record), None) => {
            debug!("'{}' matched '{}' by containment", name, record.name);
            Some(record)
        }
        (Some(_), Some(_)) => {
            debug!("'{}' is ambiguous, leaving it unmatched", name);
            None
        }
        _ => None,
    }
}

fn lookup_alias<'t>(key: &str, table: &'t WaitTable, aliases: &AliasTable) -> Option<&'t WaitRecord> {
    let direct = aliases.resolve(key).and_then(|target| table.get(target));
    if direct.is_some() {
        return direct;
    }
    let bare = key.strip_prefix(ARTICLE_PREFIX)?;
    aliases.resolve(bare).and_then(|target| table.get(target))
}
