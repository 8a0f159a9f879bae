//! Prompt catalogs used by the games.
//!
//! These are data, not logic. The defaults below can be replaced wholesale
//! or in part from a JSON file; any field left out keeps its default.
//!
//! ```json
//! {
//!   "debates": ["Pineapple on pizza?", "Cats or dogs?"],
//!   "timebox_minutes": [2, 5]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::roles::RoleTable;

/// Prompts for "Who's most likely to ...".
pub const MOST_LIKELY_PROMPTS: &[&str] = &[
    "fall asleep during a meeting",
    "become a millionaire",
    "win a dance-off",
    "survive a zombie apocalypse",
    "become famous",
    "forget their own birthday",
    "win a cooking show",
    "get lost in their own neighborhood",
    "start a cult accidentally",
    "become a meme",
    "adopt 10 cats",
    "invent something ridiculous but useful",
];

/// Appreciation phrases for the spotlight.
pub const APPRECIATION_PHRASES: &[&str] = &[
    "always brings good energy to the room",
    "quietly makes everyone else's work easier",
    "asks the questions that move us forward",
    "never lets a teammate get stuck alone",
    "turns chaos into a plan",
    "makes hard things look easy",
    "keeps the team laughing when it counts",
    "follows through, every single time",
];

/// Kinds of recognition for the spotlight.
pub const RECOGNITION_TYPES: &[&str] = &[
    "🏆 MVP of the Week",
    "🌟 Team Player Award",
    "🚀 Momentum Maker",
    "🧠 Big Brain Moment",
    "💖 Kindness Champion",
    "🛠️ Problem Solver",
];

/// Debate prompts for Opinion Split.
pub const DEBATE_PROMPTS: &[&str] = &[
    "Is a hot dog a sandwich?",
    "Pineapple on pizza: yes or no?",
    "Early bird or night owl?",
    "Cats or dogs?",
    "Should meetings be allowed to run past 30 minutes?",
    "Tabs or spaces?",
    "Is cereal a soup?",
    "Beach holiday or mountain holiday?",
    "Would you rather be able to fly or be invisible?",
    "Is it acceptable to reply-all?",
];

/// Time limits (minutes) for Time-Box Challenge.
pub const TIMEBOX_MINUTES: &[u32] = &[1, 2, 3, 5];

/// Icons for Time-Box Challenge.
pub const TIMEBOX_ICONS: &[&str] = &["⏱️", "⏳", "⌛", "🔥"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Every prompt table the games draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalogs {
    /// "Who's most likely to" prompts.
    pub most_likely: Vec<String>,
    /// Spotlight appreciation phrases.
    pub appreciation: Vec<String>,
    /// Spotlight recognition types.
    pub recognition: Vec<String>,
    /// Opinion Split prompts.
    pub debates: Vec<String>,
    /// Time-Box Challenge limits in minutes.
    pub timebox_minutes: Vec<u32>,
    /// Time-Box Challenge icons.
    pub timebox_icons: Vec<String>,
    /// Role Roulette configuration.
    pub roles: RoleTable,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            most_likely: owned(MOST_LIKELY_PROMPTS),
            appreciation: owned(APPRECIATION_PHRASES),
            recognition: owned(RECOGNITION_TYPES),
            debates: owned(DEBATE_PROMPTS),
            timebox_minutes: TIMEBOX_MINUTES.to_vec(),
            timebox_icons: owned(TIMEBOX_ICONS),
            roles: RoleTable::default(),
        }
    }
}

impl Catalogs {
    /// Parse catalogs from JSON, filling gaps with defaults.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let catalogs: Self =
            serde_json::from_str(json).map_err(|e| EngineError::Catalog(e.to_string()))?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Read catalogs from a JSON file.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Reject tables the games cannot draw from.
    pub fn validate(&self) -> EngineResult<()> {
        let lists = [
            ("most_likely", self.most_likely.len()),
            ("appreciation", self.appreciation.len()),
            ("recognition", self.recognition.len()),
            ("debates", self.debates.len()),
            ("timebox_minutes", self.timebox_minutes.len()),
            ("timebox_icons", self.timebox_icons.len()),
            ("roles.durations", self.roles.durations.len()),
        ];
        match lists.iter().find(|(_, len)| *len == 0) {
            Some((name, _)) => Err(EngineError::Catalog(format!("{name} must not be empty"))),
            None => Ok(()),
        }
    }
}
