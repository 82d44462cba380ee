//! Random place suggestion.

use crate::catalog::{places, Place};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Picks one catalog place uniformly at random using `rng`.
///
/// Returns `None` only if the catalog is empty.
pub fn pick_random_place<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static Place> {
    places().choose(rng)
}

/// Picks one catalog place using the thread-local RNG.
pub fn pick_random_place_default() -> Option<&'static Place> {
    pick_random_place(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::pick_random_place;
    use crate::catalog::find_place;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn picks_come_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let place = pick_random_place(&mut rng).unwrap();
            assert!(find_place(place.id).is_some());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                pick_random_place(&mut a).map(|p| p.id),
                pick_random_place(&mut b).map(|p| p.id)
            );
        }
    }

    #[test]
    fn many_picks_cover_more_than_one_place() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: BTreeSet<_> = (0..200)
            .filter_map(|_| pick_random_place(&mut rng).map(|p| p.id))
            .collect();
        assert!(seen.len() > 1);
    }
}
