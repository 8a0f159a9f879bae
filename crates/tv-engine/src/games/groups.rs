//! Games that split the whole roster into pairs or teams.

use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use crate::error::EngineResult;
use crate::game::Game;
use crate::outcome::{Outcome, OutcomeDetail, Pair};
use crate::random::shuffle;

const TEAM_ICONS: &[&str] = &["🔴", "🔵", "🟢"];

/// Pair consecutive people; an odd one out becomes the wildcard.
pub fn pair_up(people: &[String]) -> (Vec<Pair>, Option<String>) {
    let mut pairs = Vec::with_capacity(people.len() / 2);
    let mut wildcard = None;
    for chunk in people.chunks(2) {
        match chunk {
            [a, b] => pairs.push(Pair::new(a.clone(), b.clone())),
            [a] => wildcard = Some(a.clone()),
            _ => {}
        }
    }
    (pairs, wildcard)
}

/// Deal people round-robin into `count` teams, so sizes differ by at most one.
pub fn split_teams(people: &[String], count: usize) -> Vec<Vec<String>> {
    let mut teams = vec![Vec::new(); count];
    if count == 0 {
        return teams;
    }
    for (i, person) in people.iter().enumerate() {
        teams[i % count].push(person.clone());
    }
    teams
}

fn render_pairs(pairs: &[Pair], wildcard: Option<&String>) -> String {
    let mut lines: Vec<String> = pairs
        .iter()
        .map(|p| format!("{} 🤝 {}", p.first, p.second))
        .collect();
    if let Some(w) = wildcard {
        lines.push(format!("{w} (solo - wildcard!)"));
    }
    lines.join("\n")
}

/// Shuffle the roster and pair everyone up.
pub fn shuffle_pairs<S: RosterAccess + ?Sized>(store: &S, rng: &mut StdRng) -> EngineResult<Outcome> {
    let label = Game::ShufflePairs.label();
    if store.people().len() < 2 {
        return Ok(Outcome::failure(label, "Need at least 2 people to make pairs!"));
    }
    let shuffled = shuffle(store.people(), rng);
    let (pairs, wildcard) = pair_up(&shuffled);
    Ok(Outcome::success(
        label,
        format!("👥 Pairs:\n\n{}", render_pairs(&pairs, wildcard.as_ref())),
        OutcomeDetail::Pairs { pairs, wildcard },
    ))
}

/// Shuffle the roster into two teams (under six people) or three.
pub fn chaos_teams<S: RosterAccess + ?Sized>(store: &S, rng: &mut StdRng) -> EngineResult<Outcome> {
    let label = Game::ChaosTeams.label();
    let size = store.people().len();
    if size < 4 {
        return Ok(Outcome::failure(label, "Need at least 4 people to make teams!"));
    }
    let count = if size < 6 { 2 } else { 3 };
    let teams = split_teams(&shuffle(store.people(), rng), count);

    let rendered: Vec<String> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let icon = TEAM_ICONS.get(i).copied().unwrap_or("⚪");
            format!("{icon} Team {}:\n{}", i + 1, team.join(", "))
        })
        .collect();

    Ok(Outcome::success(
        label,
        format!("🔀 Chaos Teams:\n\n{}", rendered.join("\n\n")),
        OutcomeDetail::Teams { teams },
    ))
}

/// Today's buddy pairs, dated with the current day.
pub fn buddy_switch<S: RosterAccess + ?Sized>(store: &S, rng: &mut StdRng) -> EngineResult<Outcome> {
    let label = Game::BuddySwitch.label();
    if store.people().len() < 2 {
        return Ok(Outcome::failure(label, "Need at least 2 people to pick buddies!"));
    }
    let date = store.now().date();
    let shuffled = shuffle(store.people(), rng);
    let (pairs, wildcard) = pair_up(&shuffled);
    Ok(Outcome::success(
        label,
        format!(
            "🤝 Daily Buddies for {}:\n\n{}\n\nCheck in with your buddy at least once today!",
            date.format("%A, %d %B %Y"),
            render_pairs(&pairs, wildcard.as_ref())
        ),
        OutcomeDetail::Buddies {
            date,
            pairs,
            wildcard,
        },
    ))
}
