use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::parks::{Park, DEFAULT_PARK};
use crate::reservations::UrgencyThresholds;
use crate::state::PlanStore;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themeparks.wiki/v1";

/// Keys accepted by `config set`.
pub const SETTABLE_KEYS: &[&str] = &[
    "park",
    "api_base_url",
    "refresh_seconds",
    "timeout_seconds",
    "plan_file",
    "imminent_minutes",
    "soon_minutes",
    "grace_minutes",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub park: ParkConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub reservations: UrgencyThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkConfig {
    pub park: String,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self { park: DEFAULT_PARK.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub api_base_url: String,
    /// Cache lifetime and `waits --watch` poll interval.
    pub refresh_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_string(), refresh_seconds: 45, timeout_seconds: 10 }
    }
}

impl LiveConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds.max(1))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub plan_file: Option<PathBuf>,
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("'{}' expects a whole number, got '{}'", key, value))
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load from `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, writing defaults", path.display());
            let default_config = Config::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// The configured park.
    pub fn park(&self) -> Result<&'static Park> {
        Park::find(&self.park.park)
            .ok_or_else(|| anyhow!("Unknown park '{}' in config", self.park.park))
    }

    pub fn plan_store(&self) -> Result<PlanStore> {
        match &self.storage.plan_file {
            Some(path) => Ok(PlanStore::at(path)),
            None => PlanStore::new(),
        }
    }

    /// Update one setting by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "park" => {
                let park = Park::find(value).ok_or_else(|| {
                    anyhow!("Unknown park '{}'. Run 'parkplan parks' for the list", value)
                })?;
                self.park.park = park.slug.to_string();
            }
            "api_base_url" => {
                let url = value.trim();
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(anyhow!("api_base_url must be an http(s) URL"));
                }
                self.live.api_base_url = url.to_string();
            }
            "refresh_seconds" => self.live.refresh_seconds = parse_number(key, value)?,
            "timeout_seconds" => self.live.timeout_seconds = parse_number(key, value)?,
            "plan_file" => {
                let value = value.trim();
                self.storage.plan_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "imminent_minutes" => self.reservations.imminent_minutes = parse_number(key, value)?,
            "soon_minutes" => self.reservations.soon_minutes = parse_number(key, value)?,
            "grace_minutes" => self.reservations.grace_minutes = parse_number(key, value)?,
            _ => {
                return Err(anyhow!(
                    "Unknown config key '{}'. Valid keys: {}",
                    key,
                    SETTABLE_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "parkplan", "parkplan")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.park.park, "waltdisneyworldmagickingdom");
        assert_eq!(config.live.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.live.refresh_seconds, 45);
        assert_eq!(config.reservations.imminent_minutes, 15);
        assert!(config.storage.plan_file.is_none());
        assert_eq!(config.park().unwrap().name, "Magic Kingdom");
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        // First load writes the defaults
        let created = Config::load_from(&config_path)?;
        assert!(config_path.exists());
        assert_eq!(created, Config::default());

        let mut config = created;
        config.set("park", "WaltDisneyWorldEpcot")?;
        config.set("refresh_seconds", "30")?;
        config.set("plan_file", "/tmp/day-two.json")?;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.park.park, "waltdisneyworldepcot");
        assert_eq!(loaded.plan_store()?.path(), Path::new("/tmp/day-two.json"));
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[live]\nrefresh_seconds = 20\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.live.refresh_seconds, 20);
        assert_eq!(config.live.timeout_seconds, 10);
        assert_eq!(config.park, ParkConfig::default());
        Ok(())
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("park", "atlantis").is_err());
        assert!(config.set("refresh_seconds", "soon").is_err());
        assert!(config.set("api_base_url", "ftp://example.test").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }
}
