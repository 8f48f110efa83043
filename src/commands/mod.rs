//! Command handlers shared by the one-shot CLI and the interactive mode.

use anyhow::{anyhow, Result};
use log::debug;
use std::path::PathBuf;

use crate::cli::Commands;
use crate::config::{get_config_path, Config};
use crate::live::{http_source_or_offline, LiveWaits};
use crate::matcher::AliasTable;
use crate::parks::Park;
use crate::plan::Plan;
use crate::state::{PlanStore, MAX_ITEMS};

pub mod config;
pub mod help;
pub mod plan;
pub mod reservations;
pub mod waits;

/// Everything a command needs: settings, the selected park and the plan.
pub struct Session {
    pub config: Config,
    config_path: PathBuf,
    pub park: &'static Park,
    store: PlanStore,
    pub plan: Plan,
    live: Option<LiveWaits>,
}

impl Session {
    /// Load the user's config and plan.
    pub fn open(park_override: Option<&str>) -> Result<Self> {
        let config_path = get_config_path()?;
        let config = Config::load_from(&config_path)?;
        Self::from_config(config, config_path, park_override)
    }

    pub fn from_config(
        config: Config,
        config_path: PathBuf,
        park_override: Option<&str>,
    ) -> Result<Self> {
        let park = match park_override {
            Some(slug) => Park::find(slug).ok_or_else(|| anyhow!("Unknown park '{}'", slug))?,
            None => config.park()?,
        };
        let store = config.plan_store()?;
        let plan = Plan::from_items(store.load());
        debug!("Session for {} with {} plan items", park.slug, plan.len());
        Ok(Self { config, config_path, park, store, plan, live: None })
    }

    /// Use `live` for wait data instead of the configured HTTP source.
    pub fn with_live(mut self, live: LiveWaits) -> Self {
        self.live = Some(live);
        self
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn aliases(&self) -> &'static AliasTable {
        AliasTable::for_resort(self.park.resort)
    }

    pub fn save_plan(&self) -> Result<()> {
        if self.plan.len() > MAX_ITEMS {
            return Err(anyhow!("Plan is limited to {} items", MAX_ITEMS));
        }
        self.store.save(self.plan.items())
    }

    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }

    /// Wait-data service, created on first use. Without a usable HTTP
    /// client every lookup is served from the offline lists.
    pub fn live(&mut self) -> &LiveWaits {
        let settings = &self.config.live;
        self.live.get_or_insert_with(|| {
            let source = http_source_or_offline(&settings.api_base_url, settings.timeout());
            LiveWaits::new(source, settings.refresh_interval())
        })
    }
}

pub async fn execute(session: &mut Session, command: Commands) -> Result<()> {
    debug!("Executing {:?}", command);
    match command {
        Commands::List { live } => plan::list(session, live).await,
        Commands::Add { entry, time } => plan::add(session, &entry.join(" "), time.as_deref()),
        Commands::Edit { id, name, time } => {
            plan::edit(session, &id, name.as_deref(), time.as_deref())
        }
        Commands::Remove { id } => plan::remove(session, &id),
        Commands::Clear => plan::clear(session),
        Commands::Import { file, replace } => plan::import(session, file.as_deref(), replace),
        Commands::Waits { filter, watch } => waits::show(session, filter.as_deref(), watch).await,
        Commands::Reservations => reservations::show(session),
        Commands::Parks => config::list_parks(session),
        Commands::Config { action } => config::handle(session, action),
    }
}

/// Pad a time label into a fixed column, `--` when untimed.
pub(crate) fn time_column(label: &crate::parser::TimeLabel) -> String {
    if label.is_timed() {
        format!("{:<11}", label.to_string())
    } else {
        format!("{:<11}", "--")
    }
}
