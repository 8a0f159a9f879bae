pub mod history;
pub mod people;
pub mod play;
pub mod session;
pub mod tasks;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use colored::Colorize;

use tv_engine::{Catalogs, Engine, EngineConfig, Outcome};
use tv_roster::{Clock, RosterAccess, RosterStore};

/// Options shared by every command.
pub struct Context {
    pub data: PathBuf,
    pub seed: Option<u64>,
    pub at: Option<NaiveDateTime>,
    pub catalog: Option<PathBuf>,
}

impl Context {
    /// Load the store, pinning its clock if `--at` was given.
    pub fn load_store(&self) -> Result<RosterStore, String> {
        let store = RosterStore::load(&self.data).map_err(|e| e.to_string())?;
        let clock = self.at.map(Clock::Fixed).unwrap_or_default();
        if let Some(at) = self.at {
            log::debug!("clock pinned to {at}");
        }
        Ok(store.with_clock(clock))
    }

    /// Write the store back to disk.
    pub fn save_store(&self, store: &RosterStore) -> Result<(), String> {
        store.save(&self.data).map_err(|e| e.to_string())
    }

    /// Build an engine from the seed and catalog options.
    pub fn engine(&self) -> Result<Engine, String> {
        let mut config = EngineConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let catalogs = match &self.catalog {
            Some(path) => {
                log::debug!("loading catalogs from {}", path.display());
                Catalogs::from_file(path).map_err(|e| e.to_string())?
            }
            None => Catalogs::default(),
        };
        match self.seed {
            Some(seed) => log::debug!("engine seeded with {seed}"),
            None => log::debug!("engine seeded from OS entropy"),
        }
        Ok(Engine::with_catalogs(config, catalogs))
    }
}

/// Record a successful outcome in the store's history.
///
/// Returns the outcome's message as the error for failed outcomes, which
/// are never recorded.
pub fn record(store: &mut RosterStore, outcome: &Outcome) -> Result<(), String> {
    match outcome.history_entry(store.now()) {
        Some(entry) => {
            store.record_history(entry);
            Ok(())
        }
        None => Err(outcome.message.clone()),
    }
}

/// Render an outcome for the terminal.
pub fn render(outcome: &Outcome) -> String {
    if outcome.ok {
        format!("{}\n\n{}", outcome.game_label.bold().cyan(), outcome.message)
    } else {
        format!("{}", outcome.message.yellow())
    }
}
