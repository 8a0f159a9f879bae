//! The closed set of games the engine can run.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A game that needs nothing but the roster, tasks, and clock.
///
/// Assigning a task to a caller-chosen person takes an argument and so is
/// not a variant; see [`Engine::assign_task_to`](crate::Engine::assign_task_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    /// Pick one person.
    RandomPerson,
    /// Pick a person and a task, with a birthday bonus.
    RandomPersonAndTask,
    /// Pair everyone up.
    ShufflePairs,
    /// Split into two or three teams.
    ChaosTeams,
    /// "Who's most likely to..." prompt.
    MostLikelyTo,
    /// Give everyone a role for the session.
    RoleRoulette,
    /// Secret gift-giving assignments.
    SecretSanta,
    /// List today's birthdays.
    CheckBirthdays,
    /// Give a random person a random task.
    AssignTask,
    /// Publicly appreciate someone.
    Spotlight,
    /// Pick who opens the standup.
    StandupRoulette,
    /// A debate prompt to split the room.
    OpinionSplit,
    /// A task against the clock.
    TimeBoxChallenge,
    /// Daily buddy pairs.
    BuddySwitch,
}

impl Game {
    /// Every game, in menu order.
    pub const ALL: [Game; 14] = [
        Game::RandomPerson,
        Game::RandomPersonAndTask,
        Game::ShufflePairs,
        Game::ChaosTeams,
        Game::MostLikelyTo,
        Game::RoleRoulette,
        Game::SecretSanta,
        Game::CheckBirthdays,
        Game::AssignTask,
        Game::Spotlight,
        Game::StandupRoulette,
        Game::OpinionSplit,
        Game::TimeBoxChallenge,
        Game::BuddySwitch,
    ];

    /// The selector's full candidate set.
    pub const CHAOS_POOL: [Game; 12] = [
        Game::RandomPerson,
        Game::RandomPersonAndTask,
        Game::ShufflePairs,
        Game::ChaosTeams,
        Game::MostLikelyTo,
        Game::RoleRoulette,
        Game::AssignTask,
        Game::Spotlight,
        Game::StandupRoulette,
        Game::OpinionSplit,
        Game::TimeBoxChallenge,
        Game::BuddySwitch,
    ];

    /// Candidates before noon.
    pub const MORNING_POOL: [Game; 2] = [Game::StandupRoulette, Game::Spotlight];

    /// Candidates on Friday afternoons and evenings.
    pub const FRIDAY_POOL: [Game; 3] = [Game::ChaosTeams, Game::RoleRoulette, Game::OpinionSplit];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomPerson => "Random Person",
            Self::RandomPersonAndTask => "Random Person & Task",
            Self::ShufflePairs => "Shuffle Pairs",
            Self::ChaosTeams => "Chaos Teams",
            Self::MostLikelyTo => "Most Likely To",
            Self::RoleRoulette => "Role Roulette",
            Self::SecretSanta => "Secret Santa",
            Self::CheckBirthdays => "Birthday Check",
            Self::AssignTask => "Task Assignment",
            Self::Spotlight => "Spotlight Appreciation",
            Self::StandupRoulette => "Standup Roulette",
            Self::OpinionSplit => "Opinion Split",
            Self::TimeBoxChallenge => "Time-Box Challenge",
            Self::BuddySwitch => "Buddy Switch",
        }
    }

    /// Command-line identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Self::RandomPerson => "random-person",
            Self::RandomPersonAndTask => "person-task",
            Self::ShufflePairs => "pairs",
            Self::ChaosTeams => "teams",
            Self::MostLikelyTo => "most-likely",
            Self::RoleRoulette => "roles",
            Self::SecretSanta => "secret-santa",
            Self::CheckBirthdays => "birthdays",
            Self::AssignTask => "assign-task",
            Self::Spotlight => "spotlight",
            Self::StandupRoulette => "standup",
            Self::OpinionSplit => "opinion",
            Self::TimeBoxChallenge => "time-box",
            Self::BuddySwitch => "buddies",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Game {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|g| g.slug() == wanted)
            .ok_or_else(|| EngineError::UnknownGame(s.to_string()))
    }
}
