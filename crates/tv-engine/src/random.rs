//! Random utilities shared by every game.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{EngineError, EngineResult};

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input is left untouched.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut StdRng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Pick one element uniformly at random.
pub fn pick_one<'a, T>(items: &'a [T], rng: &mut StdRng) -> EngineResult<&'a T> {
    if items.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    Ok(&items[rng.random_range(0..items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn shuffle_does_not_mutate_input() {
        let items = vec![1, 2, 3, 4, 5];
        let mut rng = StdRng::seed_from_u64(1);
        let _ = shuffle(&items, &mut rng);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle::<u8>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn shuffle_positions_are_uniform() {
        // 4 items, 40k shuffles: each (item, position) cell expects 10k hits.
        let items = [0usize, 1, 2, 3];
        let runs = 40_000;
        let mut counts = [[0u32; 4]; 4];
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..runs {
            for (pos, item) in shuffle(&items, &mut rng).into_iter().enumerate() {
                counts[item][pos] += 1;
            }
        }
        for row in counts {
            for cell in row {
                assert!((9_000..=11_000).contains(&cell), "skewed cell: {cell}");
            }
        }
    }

    #[test]
    fn pick_one_single_element() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(*pick_one(&["solo"], &mut rng).unwrap(), "solo");
        }
    }

    #[test]
    fn pick_one_empty_errors() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = pick_one::<u8>(&[], &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::EmptyInput));
    }

    #[test]
    fn pick_one_covers_all_elements() {
        let items = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*pick_one(&items, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(items in proptest::collection::vec(any::<u16>(), 0..40), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut shuffled = shuffle(&items, &mut rng);
            let mut original = items.clone();
            shuffled.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(shuffled, original);
        }
    }
}
