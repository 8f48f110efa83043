//! Wait-time records and the keyed lookup table built from them

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use super::normalize::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WaitStatus {
    Operating,
    Down,
    Closed,
}

impl fmt::Display for WaitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WaitStatus::Operating => "Operating",
            WaitStatus::Down => "Down",
            WaitStatus::Closed => "Closed",
        };
        f.write_str(label)
    }
}

/// Current state of one attraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitRecord {
    pub name: String,
    pub status: WaitStatus,
    pub wait_mins: Option<u32>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl WaitRecord {
    pub fn new(name: impl Into<String>, status: WaitStatus, wait_mins: Option<u32>) -> Self {
        Self { name: name.into(), status, wait_mins, last_updated: None }
    }
}

/// Wait records keyed by [`normalize_key`] of their display name.
///
/// When two names normalise to the same key the first record is kept.
#[derive(Debug, Clone, Default)]
pub struct WaitTable {
    entries: BTreeMap<String, WaitRecord>,
}

impl WaitTable {
    pub fn from_records(records: impl IntoIterator<Item = WaitRecord>) -> Self {
        let mut entries = BTreeMap::new();
        for record in records {
            let key = normalize_key(&record.name);
            if key.is_empty() {
                continue;
            }
            match entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(existing) => {
                    debug!(
                        "Skipping '{}': key '{}' already taken by '{}'",
                        record.name,
                        existing.key(),
                        existing.get().name
                    );
                }
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&WaitRecord> {
        self.entries.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WaitRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WaitRecord> for WaitTable {
    fn from_iter<I: IntoIterator<Item = WaitRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalised_and_first_wins() {
        let table = WaitTable::from_records(vec![
            WaitRecord::new("Peter Pan's Flight", WaitStatus::Operating, Some(60)),
            WaitRecord::new("Peter Pans Flight", WaitStatus::Down, None),
            WaitRecord::new("???", WaitStatus::Closed, None),
        ]);
        assert_eq!(table.len(), 1);
        let record = table.get("peter pans flight").unwrap();
        assert_eq!(record.wait_mins, Some(60));
    }

    #[test]
    fn records_use_upper_case_status_on_the_wire() {
        let record = WaitRecord::new("Space Mountain", WaitStatus::Down, None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "DOWN");
        assert_eq!(json["waitMins"], serde_json::Value::Null);
    }
}
