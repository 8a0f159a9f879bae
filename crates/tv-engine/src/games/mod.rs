//! Game operations and the dispatch table from [`Game`] to them.
//!
//! Every operation checks its own preconditions and reports a shortfall
//! as a failed [`Outcome`]; `Err` is reserved for engine faults.

pub mod groups;
pub mod picks;
pub mod santa;

use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use crate::catalog::Catalogs;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::game::Game;
use crate::outcome::Outcome;
use crate::roles::role_roulette;

pub(crate) const NO_PEOPLE: &str = "No names available! Add some tribe members first.";
pub(crate) const NO_TASKS: &str = "No tasks available! Add some tasks first.";
pub(crate) const NO_PROMPTS: &str = "Nothing to draw from! This game's catalog is empty.";

/// Run `game` against the store.
pub fn run<S: RosterAccess + ?Sized>(
    game: Game,
    store: &mut S,
    catalogs: &Catalogs,
    config: &EngineConfig,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    match game {
        Game::RandomPerson => picks::random_person(&*store, rng),
        Game::RandomPersonAndTask => picks::random_person_and_task(&*store, rng),
        Game::ShufflePairs => groups::shuffle_pairs(&*store, rng),
        Game::ChaosTeams => groups::chaos_teams(&*store, rng),
        Game::MostLikelyTo => picks::most_likely_to(&*store, catalogs, rng),
        Game::RoleRoulette => role_roulette(store, &catalogs.roles, rng),
        Game::SecretSanta => santa::secret_santa(&*store, config.santa_attempts, rng),
        Game::CheckBirthdays => Ok(picks::check_birthdays(&*store)),
        Game::AssignTask => picks::assign_task_to_random_person(&*store, rng),
        Game::Spotlight => picks::spotlight(&*store, catalogs, rng),
        Game::StandupRoulette => picks::standup_roulette(&*store, rng),
        Game::OpinionSplit => picks::opinion_split(catalogs, rng),
        Game::TimeBoxChallenge => picks::time_box_challenge(&*store, catalogs, rng),
        Game::BuddySwitch => groups::buddy_switch(&*store, rng),
    }
}
