//! An engine session: random source, catalogs, and selector memory.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use crate::birthday::todays_birthdays;
use crate::catalog::Catalogs;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::game::Game;
use crate::games;
use crate::outcome::Outcome;
use crate::selector::Selector;

/// Runs games against a roster store.
///
/// Construct one per session and keep it around: the selector's memory of
/// the last chaos pick lives here. The engine never writes the results
/// history; record successful outcomes yourself.
pub struct Engine {
    config: EngineConfig,
    catalogs: Catalogs,
    selector: Selector,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with the default catalogs.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalogs(config, Catalogs::default())
    }

    /// Create an engine with custom catalogs.
    pub fn with_catalogs(config: EngineConfig, catalogs: Catalogs) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            catalogs,
            selector: Selector::new(),
            rng,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The prompt catalogs in use.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// The chaos selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Run a specific game.
    pub fn play<S: RosterAccess + ?Sized>(&mut self, game: Game, store: &mut S) -> EngineResult<Outcome> {
        games::run(game, store, &self.catalogs, &self.config, &mut self.rng)
    }

    /// Hand a random active task to the named person.
    pub fn assign_task_to<S: RosterAccess + ?Sized>(
        &mut self,
        person: &str,
        store: &S,
    ) -> EngineResult<Outcome> {
        games::picks::assign_task_to_person(person, store, &mut self.rng)
    }

    /// Let the selector pick and run a game.
    pub fn chaos<S: RosterAccess + ?Sized>(&mut self, store: &mut S) -> EngineResult<Outcome> {
        self.selector
            .spin(store, &self.catalogs, &self.config, &mut self.rng)
    }

    /// People whose birthday is `today`.
    pub fn todays_birthdays<S: RosterAccess + ?Sized>(&self, store: &S, today: NaiveDate) -> Vec<String> {
        todays_birthdays(store, today)
    }
}
