//! The itinerary: an ordered list of plan items.
//!
//! Items are never reordered. Every constructor and mutation keeps the
//! invariant that an item's name contains at least one letter or digit.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::{
    has_alphanumeric, normalize_dashes, normalize_edit_time, parse_line,
    strip_trailing_time_tokens, TimeLabel, TimeParseError, DEFAULT_STRIP_PASSES,
};

/// Custom error type for plan operations
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Activity name cannot be empty")]
    EmptyName,
    #[error("'{0}' is only a time; add an activity name")]
    TimeOnly(String),
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
    #[error("No plan item matches id '{0}'")]
    NotFound(String),
    #[error("Id '{0}' matches more than one plan item; type more of it")]
    AmbiguousId(String),
}

/// Generate an opaque item id. Ids carry no ordering.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub time_label: TimeLabel,
}

impl PlanItem {
    pub fn new(name: &str, time_label: TimeLabel) -> Result<Self, PlanError> {
        Self::with_id(new_item_id(), name, time_label)
    }

    pub fn with_id(id: String, name: &str, time_label: TimeLabel) -> Result<Self, PlanError> {
        let name = name.trim();
        if !has_alphanumeric(name) {
            return Err(PlanError::EmptyName);
        }
        Ok(Self { id, name: name.to_string(), time_label })
    }

    /// First eight characters of the id, enough to type back in.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Build an item from a name field and an optional separately typed time.
///
/// With a time, the name is cleaned of leftover trailing tokens. Without
/// one, the name field is read as a schedule line so `Space Mountain 10pm`
/// still picks up its time.
pub fn item_from_entry(name_field: &str, time_field: Option<&str>) -> Result<PlanItem, PlanError> {
    match time_field.filter(|t| !t.trim().is_empty()) {
        Some(time) => {
            let label = normalize_edit_time(time)?;
            let name = strip_trailing_time_tokens(name_field, DEFAULT_STRIP_PASSES);
            PlanItem::new(&name, label)
        }
        None => {
            let line = normalize_dashes(name_field);
            match parse_line(&line) {
                Some(parsed) => PlanItem::new(&parsed.name, parsed.time_label),
                None if has_alphanumeric(&line) => Err(PlanError::TimeOnly(line.trim().to_string())),
                None => Err(PlanError::EmptyName),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    items: Vec<PlanItem>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PlanItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<PlanItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an entry typed by the user. See [`item_from_entry`].
    pub fn add_entry(
        &mut self,
        name_field: &str,
        time_field: Option<&str>,
    ) -> Result<&PlanItem, PlanError> {
        let item = item_from_entry(name_field, time_field)?;
        debug!("Adding plan item '{}' at '{}'", item.name, item.time_label);
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Append items in order, e.g. from an import.
    pub fn extend(&mut self, items: impl IntoIterator<Item = PlanItem>) {
        self.items.extend(items);
    }

    /// Resolve a full id or a unique id prefix to an index.
    fn position(&self, id: &str) -> Result<usize, PlanError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(PlanError::NotFound(id.to_string()));
        }
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            return Ok(index);
        }
        let mut matches = self.items.iter().enumerate().filter(|(_, item)| item.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some((index, _)), None) => Ok(index),
            (Some(_), Some(_)) => Err(PlanError::AmbiguousId(id.to_string())),
            _ => Err(PlanError::NotFound(id.to_string())),
        }
    }

    pub fn find(&self, id: &str) -> Result<&PlanItem, PlanError> {
        let index = self.position(id)?;
        Ok(&self.items[index])
    }

    /// Replace the name and/or time of an item.
    ///
    /// When the resulting slot is timed the name is cleaned of leftover
    /// trailing time tokens.
    pub fn edit(
        &mut self,
        id: &str,
        name: Option<&str>,
        time: Option<&str>,
    ) -> Result<&PlanItem, PlanError> {
        let index = self.position(id)?;
        let current = &self.items[index];

        let label = match time {
            Some(time) => normalize_edit_time(time)?,
            None => current.time_label,
        };
        let raw_name = name.unwrap_or(&current.name);
        let name = if label.is_timed() {
            strip_trailing_time_tokens(raw_name, DEFAULT_STRIP_PASSES)
        } else {
            raw_name.trim().to_string()
        };

        let updated = PlanItem::with_id(current.id.clone(), &name, label)?;
        debug!("Edited plan item {} -> '{}' at '{}'", updated.id, updated.name, updated.time_label);
        self.items[index] = updated;
        Ok(&self.items[index])
    }

    pub fn remove(&mut self, id: &str) -> Result<PlanItem, PlanError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Remove every item, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        info!("Cleared {} plan items", count);
        count
    }
}
