use rand::{thread_rng, Rng, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Source of uniform randomness consumed by the generators.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Seeds a [`Random`], picking a fresh seed when none is given. Returns the seed used.
pub fn seeded(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Fisher–Yates: for `i` from the last index down to 1, swap with a uniform index in `[0, i]`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};

    use super::{testing::Scripted, *};

    fn reference_shuffle(array: &mut [u8; 4], rng: &mut Random) {
        let mut i = array.len() - 1;
        while i > 0 {
            let j = rng.gen_range(0..i + 1);
            array.swap(i, j);
            i -= 1;
        }
    }

    #[test]
    fn shuffle_matches_reference() {
        for seed in [0, 1, 42, 0xdead_beef] {
            let mut ours = Random::seed_from_u64(seed);
            let mut theirs = Random::seed_from_u64(seed);

            for _ in 0..64 {
                let mut a = [0u8, 1, 2, 3];
                let mut b = a;
                shuffle(&mut a, &mut ours);
                reference_shuffle(&mut b, &mut theirs);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn shuffle_uses_scripted_draws() {
        // i = 3 swaps with 0, i = 2 stays, i = 1 swaps with 0
        let mut rng = Scripted::new([0, 2, 0]);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['b', 'd', 'c', 'a']);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn shuffle_is_permutation() {
        let (mut rng, _) = seeded(Some(7));
        for _ in 0..100 {
            let mut items = [3, 1, 0, 2];
            shuffle(&mut items, &mut rng);
            let mut sorted = items;
            sorted.sort();
            assert_eq!(sorted, [0, 1, 2, 3]);
        }
    }

    #[test]
    fn short_slices_draw_nothing() {
        let mut rng = Scripted::new([]);
        let mut one = [1];
        shuffle(&mut one, &mut rng);
        let mut none: [u8; 0] = [];
        shuffle(&mut none, &mut rng);
        assert_eq!(one, [1]);
    }

    #[test]
    fn seeded_is_deterministic() {
        let (mut a, seed) = seeded(Some(99));
        let (mut b, _) = seeded(Some(seed));
        assert_eq!(seed, 99);
        assert_eq!(a.below(1000), b.below(1000));
    }
}
