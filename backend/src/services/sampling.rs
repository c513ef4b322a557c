//! Deterministic selection of starting integers.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Smallest value sampled; 1 is the fixed point and 0 has no orbit.
pub const POPULATION_START: u64 = 2;

/// Sample up to `n_starts` distinct integers from `[2, max_start)`.
///
/// The sample size is clamped to the population size, and the same
/// `(n_starts, max_start, seed)` always yields the same starts in the same order.
pub fn sample_starts(n_starts: u64, max_start: u64, seed: u64) -> Vec<u64> {
    let population = max_start.saturating_sub(POPULATION_START);
    let amount = n_starts.min(population);
    if amount == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // index::sample works on usize; populations beyond that fall back to
    // rejection sampling, which stays cheap because `amount` is bounded.
    match usize::try_from(population) {
        Ok(len) => rand::seq::index::sample(&mut rng, len, amount as usize)
            .into_iter()
            .map(|i| POPULATION_START + i as u64)
            .collect(),
        Err(_) => sample_sparse(&mut rng, population, amount),
    }
}

fn sample_sparse(rng: &mut StdRng, population: u64, amount: u64) -> Vec<u64> {
    use rand::Rng;
    use std::collections::HashSet;

    let mut seen = HashSet::with_capacity(amount as usize);
    let mut out = Vec::with_capacity(amount as usize);
    while (out.len() as u64) < amount {
        let candidate = POPULATION_START + rng.gen_range(0..population);
        if seen.insert(candidate) {
            out.push(candidate);
        }
    }
    out
}
