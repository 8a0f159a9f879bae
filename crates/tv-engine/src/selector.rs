//! The chaos selector: pick a game that suits the moment.
//!
//! Before noon only quick warm-ups are on offer; Friday afternoons lean
//! into group games; otherwise anything in [`Game::CHAOS_POOL`] goes. The
//! previous pick is skipped whenever something else is available.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use crate::catalog::Catalogs;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::game::Game;
use crate::games;
use crate::outcome::Outcome;
use crate::random::pick_one;

/// Label prefix marking a selector-chosen outcome.
pub const CHAOS_PREFIX: &str = "💥 CHAOS: ";

/// Remembers the last game it ran, for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    last: Option<Game>,
}

impl Selector {
    /// A selector with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game picked on the previous spin.
    pub fn last(&self) -> Option<Game> {
        self.last
    }

    /// Games that fit the given moment.
    pub fn candidates(now: NaiveDateTime) -> &'static [Game] {
        if now.hour() < 12 {
            &Game::MORNING_POOL
        } else if now.weekday() == Weekday::Fri {
            &Game::FRIDAY_POOL
        } else {
            &Game::CHAOS_POOL
        }
    }

    /// Choose the next game and remember it.
    pub fn choose(&mut self, now: NaiveDateTime, rng: &mut StdRng) -> EngineResult<Game> {
        let context = Self::candidates(now);
        let fresh: Vec<Game> = context
            .iter()
            .copied()
            .filter(|g| Some(*g) != self.last)
            .collect();
        let pool = if fresh.is_empty() { context } else { &fresh[..] };
        let game = *pick_one(pool, rng)?;
        log::debug!(
            "selector picked {game} from {} candidates (last: {:?})",
            pool.len(),
            self.last
        );
        self.last = Some(game);
        Ok(game)
    }

    /// Choose a game, run it, and mark the outcome as a chaos pick.
    ///
    /// The pick is remembered even if the game then fails its
    /// preconditions.
    pub fn spin<S: RosterAccess + ?Sized>(
        &mut self,
        store: &mut S,
        catalogs: &Catalogs,
        config: &EngineConfig,
        rng: &mut StdRng,
    ) -> EngineResult<Outcome> {
        let game = self.choose(store.now(), rng)?;
        let outcome = games::run(game, store, catalogs, config, rng)?;
        Ok(outcome.with_label_prefix(CHAOS_PREFIX))
    }
}
