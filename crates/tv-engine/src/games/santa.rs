//! Secret Santa: a derangement of the roster.

use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use crate::error::EngineResult;
use crate::game::Game;
use crate::outcome::{Outcome, OutcomeDetail, Pair};
use crate::random::shuffle;

/// Shuffle `items` until no element stays in place, up to `attempts` times.
///
/// Each try succeeds with probability about 1/e, so a few dozen attempts
/// practically never run out for three or more items.
pub fn find_derangement<T: Clone + PartialEq>(
    items: &[T],
    attempts: u32,
    rng: &mut StdRng,
) -> Option<Vec<T>> {
    (0..attempts)
        .map(|_| shuffle(items, rng))
        .find(|candidate| items.iter().zip(candidate).all(|(a, b)| a != b))
}

/// Assign every person a different person to give to.
pub fn secret_santa<S: RosterAccess + ?Sized>(
    store: &S,
    attempts: u32,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::SecretSanta.label();
    let givers = store.people();
    if givers.len() < 3 {
        return Ok(Outcome::failure(label, "Need at least 3 people for Secret Santa!"));
    }

    let Some(receivers) = find_derangement(givers, attempts, rng) else {
        log::warn!("no derangement of {} people in {attempts} attempts", givers.len());
        return Ok(Outcome::failure(
            label,
            "Could not generate valid Secret Santa pairs. Try again!",
        ));
    };

    let assignments: Vec<Pair> = givers
        .iter()
        .zip(receivers)
        .map(|(giver, receiver)| Pair::new(giver.clone(), receiver))
        .collect();
    let lines: Vec<String> = assignments
        .iter()
        .map(|p| format!("{} 🎁 → {}", p.first, p.second))
        .collect();

    Ok(Outcome::success(
        label,
        format!(
            "🎅 Secret Santa Assignments:\n\n{}\n\n(Screenshot individually - keep it secret!)",
            lines.join("\n")
        ),
        OutcomeDetail::SecretSanta { assignments },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use tv_roster::RosterStore;

    fn roster(n: usize) -> RosterStore {
        let mut s = RosterStore::new();
        s.add_people((0..n).map(|i| format!("P{i}")));
        s
    }

    #[test]
    fn needs_three_people() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 0..3 {
            let out = secret_santa(&roster(n), 50, &mut rng).unwrap();
            assert!(!out.ok);
            assert_eq!(out.message, "Need at least 3 people for Secret Santa!");
        }
    }

    #[test]
    fn two_items_have_one_derangement() {
        let mut rng = StdRng::seed_from_u64(1);
        let d = find_derangement(&[1, 2], 50, &mut rng).unwrap();
        assert_eq!(d, vec![2, 1]);
    }

    #[test]
    fn single_item_never_deranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(find_derangement(&["only"], 50, &mut rng).is_none());
    }

    #[test]
    fn exhausted_attempts_fail_softly() {
        // With one attempt, some seed will hit a fixed point; look for it.
        let s = roster(3);
        let failed = (0..50u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = secret_santa(&s, 1, &mut rng).unwrap();
            !out.ok && out.message.contains("Try again")
        });
        assert!(failed);
    }

    #[test]
    fn message_lists_pairs() {
        let mut rng = StdRng::seed_from_u64(8);
        let out = secret_santa(&roster(3), 50, &mut rng).unwrap();
        assert!(out.ok);
        assert_eq!(out.message.matches("🎁 →").count(), 3);
        assert!(out.message.ends_with("(Screenshot individually - keep it secret!)"));
    }

    proptest! {
        #[test]
        fn assignments_are_derangements(n in 3usize..25, seed in any::<u64>()) {
            let s = roster(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let out = secret_santa(&s, 50, &mut rng).unwrap();
            prop_assert!(out.ok);
            let OutcomeDetail::SecretSanta { assignments } = out.detail else {
                panic!("expected assignments");
            };
            let givers: Vec<&str> = assignments.iter().map(|p| p.first.as_str()).collect();
            let mut receivers: Vec<&str> = assignments.iter().map(|p| p.second.as_str()).collect();
            prop_assert!(assignments.iter().all(|p| p.first != p.second));
            let roster_order: Vec<&str> = s.people().iter().map(String::as_str).collect();
            prop_assert_eq!(&givers, &roster_order);
            receivers.sort_unstable();
            let mut expected = roster_order.clone();
            expected.sort_unstable();
            prop_assert_eq!(receivers, expected);
        }
    }
}
