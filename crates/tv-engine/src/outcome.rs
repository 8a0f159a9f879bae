//! Structured results returned by every game.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use tv_roster::HistoryEntry;

use crate::roles::{RoleAssignment, RoleMode};

/// Two people matched together. For Secret Santa, `first` gives to `second`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// First person (the giver, for Secret Santa).
    pub first: String,
    /// Second person (the receiver, for Secret Santa).
    pub second: String,
}

impl Pair {
    /// Create a pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Game-specific payload of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeDetail {
    /// Nothing beyond the message (used by failures).
    None,
    /// A single person was chosen.
    Person {
        /// The chosen person.
        person: String,
    },
    /// A person and a task were chosen.
    PersonTask {
        /// The chosen person.
        person: String,
        /// The chosen task.
        task: String,
        /// The person has a birthday today and may pass the task on.
        birthday_bonus: bool,
    },
    /// Everyone was paired up.
    Pairs {
        /// The pairs, in shuffle order.
        pairs: Vec<Pair>,
        /// The leftover person when the roster is odd.
        wildcard: Option<String>,
    },
    /// Everyone was split into teams.
    Teams {
        /// Members of each team.
        teams: Vec<Vec<String>>,
    },
    /// A "most likely to" verdict.
    MostLikely {
        /// The chosen person.
        person: String,
        /// The prompt they were chosen for.
        prompt: String,
    },
    /// Everyone was given a role.
    Roles {
        /// Mode the round ran in.
        mode: RoleMode,
        /// One assignment per person, in shuffle order.
        assignments: Vec<RoleAssignment>,
    },
    /// Secret Santa pairs: each `first` gives to `second`.
    SecretSanta {
        /// Giver/receiver pairs, in roster order of givers.
        assignments: Vec<Pair>,
    },
    /// Today's birthdays.
    Birthdays {
        /// People with a birthday today.
        people: Vec<String>,
    },
    /// A task handed to a person.
    Task {
        /// Who got the task.
        person: String,
        /// The task.
        task: String,
    },
    /// Someone is being appreciated.
    Spotlight {
        /// The person in the spotlight.
        person: String,
        /// The appreciation phrase.
        phrase: String,
        /// The kind of recognition.
        recognition: String,
    },
    /// Someone opens the standup.
    Standup {
        /// Who goes first.
        person: String,
    },
    /// A debate prompt.
    Opinion {
        /// The prompt.
        prompt: String,
    },
    /// A task with a time limit.
    TimeBox {
        /// The task.
        task: String,
        /// Time limit in minutes.
        minutes: u32,
        /// Display icon.
        icon: String,
    },
    /// Daily buddy pairs.
    Buddies {
        /// The day the buddies are for.
        date: NaiveDate,
        /// The pairs, in shuffle order.
        pairs: Vec<Pair>,
        /// The leftover person when the roster is odd.
        wildcard: Option<String>,
    },
}

/// What a game produced.
///
/// A failed outcome (`ok == false`) carries a reason in `message` and must
/// not be recorded to history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the game ran.
    pub ok: bool,
    /// Rendered result, or the reason it could not run.
    pub message: String,
    /// Label of the game that produced this.
    pub game_label: String,
    /// Game-specific data.
    pub detail: OutcomeDetail,
}

impl Outcome {
    /// A successful outcome.
    pub fn success(label: impl Into<String>, message: impl Into<String>, detail: OutcomeDetail) -> Self {
        Self {
            ok: true,
            message: message.into(),
            game_label: label.into(),
            detail,
        }
    }

    /// A failed outcome with a human-readable reason.
    pub fn failure(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: reason.into(),
            game_label: label.into(),
            detail: OutcomeDetail::None,
        }
    }

    /// Prefix the game label, e.g. to mark a chaos pick.
    pub fn with_label_prefix(mut self, prefix: &str) -> Self {
        self.game_label = format!("{prefix}{}", self.game_label);
        self
    }

    /// The history entry for this outcome, or `None` if it failed.
    pub fn history_entry(&self, at: NaiveDateTime) -> Option<HistoryEntry> {
        self.ok
            .then(|| HistoryEntry::new(self.game_label.clone(), self.message.clone(), at))
    }
}
