//! Role Roulette: give everyone a role, avoiding recent repeats.
//!
//! The first person in shuffle order gets an anchor role (Moderator,
//! Timekeeper, ...). Everyone else draws from the categories enabled for
//! the current mode, skipping roles they held recently and roles already
//! handed out this round. When that leaves nothing, the pool widens to
//! ignore personal history, and as a last resort roles may repeat within
//! the round.

pub mod table;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use tv_roster::RosterAccess;

use crate::error::EngineResult;
use crate::game::Game;
use crate::games::NO_PEOPLE;
use crate::outcome::{Outcome, OutcomeDetail};
use crate::random::{pick_one, shuffle};

pub use table::{Candidate, RoleCategory, RoleDef, RoleTable};

/// Closing note appended to every round.
pub const SWAP_GUIDANCE: &str =
    "🔄 Role swap: each person may trade roles with someone else once this round. Use it wisely!";

/// Which flavour of round to run, derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMode {
    /// Focused roles for a working meeting.
    Meeting,
    /// Idea-friendly roles.
    Brainstorm,
    /// Friday afternoon: everything goes.
    Friday,
}

impl RoleMode {
    /// Mode for the given moment: Friday from 14:00, meeting before noon,
    /// brainstorm until 17:00, meeting after that.
    pub fn at(now: NaiveDateTime) -> Self {
        let hour = now.hour();
        if now.weekday() == Weekday::Fri && hour >= 14 {
            Self::Friday
        } else if hour < 12 {
            Self::Meeting
        } else if hour < 17 {
            Self::Brainstorm
        } else {
            Self::Meeting
        }
    }

    /// Heading shown above the assignments.
    pub fn banner(self) -> &'static str {
        match self {
            Self::Meeting => "🎭 Role Roulette: Meeting Mode\nEveryone gets a job that keeps the meeting moving.",
            Self::Brainstorm => "🎭 Role Roulette: Brainstorm Mode\nIdeas first, judgement later.",
            Self::Friday => "🎭 Role Roulette: Friday Mode\nIt's Friday afternoon. Anything goes!",
        }
    }
}

impl std::fmt::Display for RoleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meeting => write!(f, "meeting"),
            Self::Brainstorm => write!(f, "brainstorm"),
            Self::Friday => write!(f, "friday"),
        }
    }
}

/// How far the candidate pool had to be relaxed for an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolTier {
    /// Not recently held by this person and not yet used this round.
    Fresh,
    /// Personal history ignored; still unused this round.
    Widened,
    /// Round's used set cleared; roles may repeat.
    Reset,
}

/// One person's role for the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Who holds the role.
    pub person: String,
    /// Role label.
    pub role: String,
    /// Role icon.
    pub icon: String,
    /// Category the role came from; `None` for anchor roles.
    pub category: Option<String>,
    /// Whether this is the round's anchor role.
    pub anchor: bool,
    /// How long the role lasts.
    pub duration: String,
    /// What the holder is expected to do.
    pub prompt: String,
    /// How far the pool was relaxed to find this role.
    pub tier: PoolTier,
}

impl std::fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.icon.is_empty() { "" } else { " " };
        write!(
            f,
            "{} → {}{sep}{} ({})\n   {}",
            self.person, self.icon, self.role, self.duration, self.prompt
        )
    }
}

fn pick_anchor<'a>(
    table: &'a RoleTable,
    history: &[String],
    used: &HashSet<String>,
    rng: &mut StdRng,
) -> EngineResult<(&'a RoleDef, PoolTier)> {
    let fresh: Vec<&RoleDef> = table
        .anchors
        .iter()
        .filter(|r| !history.contains(&r.label) && !used.contains(&r.label))
        .collect();
    if !fresh.is_empty() {
        return Ok((*pick_one(&fresh, rng)?, PoolTier::Fresh));
    }
    let unused: Vec<&RoleDef> = table
        .anchors
        .iter()
        .filter(|r| !used.contains(&r.label))
        .collect();
    if !unused.is_empty() {
        return Ok((*pick_one(&unused, rng)?, PoolTier::Widened));
    }
    let all: Vec<&RoleDef> = table.anchors.iter().collect();
    Ok((*pick_one(&all, rng)?, PoolTier::Reset))
}

fn candidate_pool<'a>(
    available: &[Candidate<'a>],
    history: &[String],
    used: &HashSet<String>,
) -> (Vec<Candidate<'a>>, PoolTier) {
    let fresh: Vec<_> = available
        .iter()
        .filter(|c| !history.contains(&c.role.label) && !used.contains(&c.role.label))
        .copied()
        .collect();
    if !fresh.is_empty() {
        return (fresh, PoolTier::Fresh);
    }
    let widened: Vec<_> = available
        .iter()
        .filter(|c| !used.contains(&c.role.label))
        .copied()
        .collect();
    if !widened.is_empty() {
        return (widened, PoolTier::Widened);
    }
    (available.to_vec(), PoolTier::Reset)
}

/// Run a round of Role Roulette.
///
/// Every assignment is pushed onto the holder's role history.
pub fn role_roulette<S: RosterAccess + ?Sized>(
    store: &mut S,
    table: &RoleTable,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::RoleRoulette.label();
    let people = store.people().to_vec();
    if people.is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }

    let mode = RoleMode::at(store.now());
    let available = table.available(mode);
    if available.is_empty() || table.durations.is_empty() {
        return Ok(Outcome::failure(
            label,
            format!("No roles are configured for {mode} mode."),
        ));
    }

    let order = shuffle(&people, rng);
    let mut used: HashSet<String> = HashSet::new();
    let mut assignments = Vec::with_capacity(order.len());

    for (i, person) in order.iter().enumerate() {
        let history = store.role_history(person);
        let (role, category, anchor, tier) = if i == 0 && !table.anchors.is_empty() {
            let (role, tier) = pick_anchor(table, history, &used, rng)?;
            (role, None, true, tier)
        } else {
            let (pool, tier) = candidate_pool(&available, history, &used);
            match tier {
                PoolTier::Fresh => {}
                PoolTier::Widened => log::debug!("role pool for {person} widened past history"),
                PoolTier::Reset => {
                    log::debug!("role pool exhausted at {person}, allowing repeats");
                    used.clear();
                }
            }
            let pick = *pick_one(&pool, rng)?;
            (pick.role, Some(pick.category.to_string()), false, tier)
        };

        used.insert(role.label.clone());
        let duration = pick_one(&table.durations, rng)?.clone();
        store.append_role_history(person, &role.label);

        assignments.push(RoleAssignment {
            person: person.clone(),
            role: role.label.clone(),
            icon: role.icon.clone(),
            category,
            anchor,
            duration,
            prompt: table.prompt_for(&role.label).to_string(),
            tier,
        });
    }

    let lines: Vec<String> = assignments.iter().map(ToString::to_string).collect();
    let message = format!("{}\n\n{}\n\n{SWAP_GUIDANCE}", mode.banner(), lines.join("\n"));

    Ok(Outcome::success(
        label,
        message,
        OutcomeDetail::Roles { mode, assignments },
    ))
}
