use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks `n` items from `items` with a Fisher-Yates shuffle driven by `seed`.
///
/// The same items, `n` and `seed` always give the same picks.
/// If `n` covers all items, they are returned unshuffled.
pub fn sample<T>(mut items: Vec<T>, n: usize, seed: u64) -> Vec<T> {
    if n >= items.len() {
        return items;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items.truncate(n);
    debug!(sampled = n, seed, "sampled individuals");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sample() {
        let items = (0..100).collect::<Vec<_>>();
        assert_eq!(sample(items.clone(), 10, 42), sample(items, 10, 42));
    }

    #[test]
    fn different_seeds_differ() {
        let items = (0..100).collect::<Vec<_>>();
        assert_ne!(sample(items.clone(), 10, 1), sample(items, 10, 2));
    }

    #[test]
    fn sample_has_requested_size_without_duplicates() {
        let mut picked = sample((0..50).collect(), 20, 7);
        assert_eq!(picked.len(), 20);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20);
    }

    #[test]
    fn large_n_keeps_everything_in_order() {
        let items = vec!["a", "b", "c"];
        assert_eq!(sample(items.clone(), 3, 9), items);
        assert_eq!(sample(items.clone(), 10, 9), items);
    }

    #[test]
    fn zero_picks_nothing() {
        assert!(sample(vec![1, 2, 3], 0, 5).is_empty());
    }
}
