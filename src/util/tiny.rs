use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A seeded rng that produces the same sequence on every run, for tests and reproducible self-play.
pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}
