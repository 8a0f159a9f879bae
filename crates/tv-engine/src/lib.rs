//! Game engine for Tribe Vibe.
//!
//! Turns a roster, a task pool, and the current date/time into a game
//! outcome: random picks, pairs, teams, role assignment, Secret Santa, and
//! more. The [`Selector`] picks a game from the time-of-day context without
//! repeating the previous one. Everything reads and writes through
//! [`tv_roster::RosterAccess`].

pub mod birthday;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod games;
pub mod outcome;
pub mod random;
pub mod roles;
pub mod selector;

pub use birthday::{Birthdate, todays_birthdays};
pub use catalog::Catalogs;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use game::Game;
pub use outcome::{Outcome, OutcomeDetail, Pair};
pub use roles::{RoleAssignment, RoleMode};
pub use selector::Selector;
