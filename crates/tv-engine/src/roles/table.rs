//! Role data: categories, roles, anchor roles, and durations.
//!
//! The assignment algorithm only sees this table, so roles and categories
//! can be added (or loaded from a catalog file) without touching it.

use serde::{Deserialize, Serialize};

use super::RoleMode;

/// One assignable role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDef {
    /// Role label, also the key kept in role history.
    pub label: String,
    /// Display icon.
    #[serde(default)]
    pub icon: String,
    /// What the holder is expected to do.
    pub prompt: String,
}

/// A group of roles that is switched on or off as a whole per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCategory {
    /// Category name.
    pub name: String,
    /// Modes in which this category's roles are on offer.
    pub modes: Vec<RoleMode>,
    /// The roles.
    pub roles: Vec<RoleDef>,
}

/// A role on offer this round, with the category it came from.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The role.
    pub role: &'a RoleDef,
    /// Its category name.
    pub category: &'a str,
}

/// The full role configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleTable {
    /// Regular role categories.
    pub categories: Vec<RoleCategory>,
    /// Anchor roles; one goes to the first person of every round.
    pub anchors: Vec<RoleDef>,
    /// How long a role lasts.
    pub durations: Vec<String>,
    /// Prompt for a role label that is not in the table.
    pub generic_prompt: String,
}

fn role(icon: &str, label: &str, prompt: &str) -> RoleDef {
    RoleDef {
        label: label.to_string(),
        icon: icon.to_string(),
        prompt: prompt.to_string(),
    }
}

fn category(name: &str, modes: &[RoleMode], roles: Vec<RoleDef>) -> RoleCategory {
    RoleCategory {
        name: name.to_string(),
        modes: modes.to_vec(),
        roles,
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        use RoleMode::{Brainstorm, Friday, Meeting};

        Self {
            categories: vec![
                category(
                    "Execution",
                    &[Meeting, Friday],
                    vec![
                        role("🎯", "Task Master", "Turn every idea into a concrete next step with an owner."),
                        role("⏱️", "Deadline Guardian", "Ask \"by when?\" whenever something gets agreed."),
                        role("✅", "Action Item Tracker", "Keep a running list of who promised what."),
                        role("🧹", "Loose-Ends Sweeper", "Call out anything left unresolved before moving on."),
                    ],
                ),
                category(
                    "Creativity",
                    &[Meeting, Brainstorm, Friday],
                    vec![
                        role("🎨", "Creative Director", "Push every idea one step weirder before it is judged."),
                        role("💡", "Idea Generator", "Bring at least three new ideas to the table."),
                        role("🔮", "Wild Card Visionary", "Describe how this looks five years from now."),
                        role("🧩", "Remix Artist", "Combine two ideas nobody thought belonged together."),
                    ],
                ),
                category(
                    "Communication",
                    &[Meeting, Brainstorm, Friday],
                    vec![
                        role("📢", "Hype Person", "Celebrate every good point out loud."),
                        role("🌉", "Bridge Builder", "Connect what one person said to what another meant."),
                        role("🎤", "Spokesperson", "Summarize the group's position in one sentence."),
                        role("🙋", "Question Asker", "Ask the question everyone is thinking but nobody says."),
                    ],
                ),
                category(
                    "Chaos",
                    &[Friday],
                    vec![
                        role("🤡", "Chaos Agent", "Introduce one harmless plot twist per round."),
                        role("🕵️", "Secret Agent", "Pick a secret mission and complete it unnoticed."),
                        role("🎭", "Drama Queen/King", "React to every update as if it were a season finale."),
                        role("😈", "Devil's Advocate", "Argue the opposite of whatever the room agrees on."),
                    ],
                ),
                category(
                    "Observation",
                    &[Meeting, Brainstorm, Friday],
                    vec![
                        role("🧠", "Strategist", "Watch for the big picture and flag when it gets lost."),
                        role("😎", "Vibe Curator", "Read the room and call a reset when energy dips."),
                        role("🔍", "Detail Detective", "Spot the small thing everyone else missed."),
                        role("📊", "Pattern Spotter", "Point out when the same topic keeps coming back."),
                    ],
                ),
            ],
            anchors: vec![
                role("👑", "Moderator", "Keep the conversation on track and make sure everyone gets heard."),
                role("⏰", "Timekeeper", "Watch the clock and give a heads-up before time runs out."),
                role("📝", "Scribe", "Capture the key points and share them afterwards."),
                role("🤝", "Facilitator", "Open the round, invite quiet voices in, and close it out."),
            ],
            durations: vec![
                "for the next 10 minutes".to_string(),
                "for the next 15 minutes".to_string(),
                "until the next break".to_string(),
                "for the rest of the session".to_string(),
            ],
            generic_prompt: "Make this role your own and have fun with it.".to_string(),
        }
    }
}

impl RoleTable {
    /// Roles from every category enabled in `mode`, in table order.
    pub fn available(&self, mode: RoleMode) -> Vec<Candidate<'_>> {
        self.categories
            .iter()
            .filter(|c| c.modes.contains(&mode))
            .flat_map(|c| {
                c.roles.iter().map(move |role| Candidate {
                    role,
                    category: c.name.as_str(),
                })
            })
            .collect()
    }

    /// Look up a role by label among categories and anchors.
    pub fn find(&self, label: &str) -> Option<&RoleDef> {
        self.categories
            .iter()
            .flat_map(|c| c.roles.iter())
            .chain(self.anchors.iter())
            .find(|r| r.label == label)
    }

    /// Descriptive prompt for a role label, or the generic prompt.
    pub fn prompt_for(&self, label: &str) -> &str {
        self.find(label)
            .map(|r| r.prompt.as_str())
            .unwrap_or(&self.generic_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_five_categories_of_four() {
        let table = RoleTable::default();
        assert_eq!(table.categories.len(), 5);
        assert!(table.categories.iter().all(|c| c.roles.len() == 4));
        assert_eq!(table.anchors.len(), 4);
    }

    #[test]
    fn meeting_excludes_chaos() {
        let table = RoleTable::default();
        let roles = table.available(RoleMode::Meeting);
        assert_eq!(roles.len(), 16);
        assert!(roles.iter().all(|c| c.category != "Chaos"));
    }

    #[test]
    fn brainstorm_is_creative_communicative_observant() {
        let table = RoleTable::default();
        let roles = table.available(RoleMode::Brainstorm);
        assert_eq!(roles.len(), 12);
        assert!(
            roles
                .iter()
                .all(|c| matches!(c.category, "Creativity" | "Communication" | "Observation"))
        );
    }

    #[test]
    fn friday_allows_everything() {
        let table = RoleTable::default();
        assert_eq!(table.available(RoleMode::Friday).len(), 20);
    }

    #[test]
    fn prompt_lookup_falls_back() {
        let table = RoleTable::default();
        assert_eq!(
            table.prompt_for("Scribe"),
            "Capture the key points and share them afterwards."
        );
        assert_eq!(table.prompt_for("Astronaut"), table.generic_prompt);
    }

    #[test]
    fn labels_are_unique() {
        let table = RoleTable::default();
        let mut labels: Vec<_> = table
            .categories
            .iter()
            .flat_map(|c| c.roles.iter())
            .chain(table.anchors.iter())
            .map(|r| r.label.as_str())
            .collect();
        let total = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }
}
