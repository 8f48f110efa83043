use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::parser::{normalize_edit_time, TimeLabel};
use crate::plan::{new_item_id, PlanItem};

const STATE_DIR: &str = ".parkplan";
const PLAN_FILE: &str = "plan.json";
/// Current on-disk schema version.
pub const SCHEMA_VERSION: u32 = 1;
// Maximum allowed size for state files to prevent DoS attacks (10MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const MAX_ITEMS: usize = 10_000;

#[derive(Debug, Serialize)]
struct PlanEnvelope<'a> {
    version: u32,
    items: &'a [PlanItem],
}

/// Reads and writes the plan file.
///
/// Loading never fails because of file content: anything unreadable is
/// logged and treated as an empty plan.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Store at `~/.parkplan/plan.json`.
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(Self { path: home_dir.join(STATE_DIR).join(PLAN_FILE) })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<PlanItem> {
        if !self.path.exists() {
            debug!("No plan file at {}", self.path.display());
            return Vec::new();
        }

        match fs::metadata(&self.path) {
            Ok(metadata) if metadata.len() > MAX_FILE_SIZE => {
                warn!("Plan file {} exceeds security limits, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not stat plan file {}: {}", self.path.display(), e);
                return Vec::new();
            }
            Ok(_) => {}
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => decode_plan(&content),
            Err(e) => {
                warn!("Could not read plan file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[PlanItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &PlanEnvelope { version: SCHEMA_VERSION, items })
            .context("Failed to write plan file")?;
        info!("Saved {} plan items to {}", items.len(), self.path.display());
        Ok(())
    }
}

/// Decode plan file content, migrating legacy layouts.
///
/// * bare array or `version: 0` – legacy items, migrated field by field
/// * `version: 1` (or newer) – current items; undecodable ones are dropped
/// * anything else – empty plan
pub fn decode_plan(content: &str) -> Vec<PlanItem> {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Plan file is corrupt ({}), starting with an empty plan", e);
            return Vec::new();
        }
    };

    let (version, items) = match value {
        Value::Array(items) => (0, items),
        Value::Object(mut map) => {
            let version = map.get("version").and_then(Value::as_u64);
            match (version, map.remove("items")) {
                (Some(version), Some(Value::Array(items))) => (version, items),
                _ => {
                    warn!("Plan file has an unknown layout, starting with an empty plan");
                    return Vec::new();
                }
            }
        }
        _ => {
            warn!("Plan file has an unknown layout, starting with an empty plan");
            return Vec::new();
        }
    };

    if items.len() > MAX_ITEMS {
        warn!("Plan file holds {} items (maximum {}), starting empty", items.len(), MAX_ITEMS);
        return Vec::new();
    }

    match version {
        0 => {
            info!("Migrating {} legacy plan items", items.len());
            items.iter().filter_map(migrate_legacy_item).collect()
        }
        v => {
            if v > SCHEMA_VERSION as u64 {
                warn!("Plan file version {} is newer than {}, reading what we can", v, SCHEMA_VERSION);
            }
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<PlanItem>(item) {
                    Ok(item) => match PlanItem::with_id(item.id, &item.name, item.time_label) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            warn!("Dropping plan item: {}", e);
                            None
                        }
                    },
                    Err(e) => {
                        warn!("Dropping undecodable plan item: {}", e);
                        None
                    }
                })
                .collect()
        }
    }
}

/// Convert one unversioned item (`{id?, name, time?|timeLabel?}`).
fn migrate_legacy_item(value: &Value) -> Option<PlanItem> {
    let name = value.get("name").and_then(Value::as_str)?;
    let id = match value.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => new_item_id(),
    };
    let time_label = value
        .get("timeLabel")
        .or_else(|| value.get("time"))
        .and_then(Value::as_str)
        .map(|raw| {
            normalize_edit_time(raw).unwrap_or_else(|e| {
                warn!("Legacy item '{}' has an unreadable time: {}", name, e);
                TimeLabel::Untimed
            })
        })
        .unwrap_or_default();

    match PlanItem::with_id(id, name, time_label) {
        Ok(item) => Some(item),
        Err(_) => {
            warn!("Dropping legacy plan item with an empty name");
            None
        }
    }
}
