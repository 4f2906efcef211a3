use crate::engines::generation::genome::Genome;
use crate::types::Share;
use rand::Rng;

/// Largest step a single mutation applies to one count, in either direction
pub const MUTATION_SPREAD: i64 = 250;

/// Tournament selection: pick the lowest cost of K random candidates
pub fn tournament_selection<G: Genome, R: Rng + ?Sized>(
    population: &[(G, f64)],
    tournament_size: usize,
    rng: &mut R,
) -> G {
    let mut best_idx = rng.gen_range(0..population.len());
    let mut best_cost = population[best_idx].1;

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..population.len());
        if population[idx].1 < best_cost {
            best_idx = idx;
            best_cost = population[idx].1;
        }
    }

    population[best_idx].0.clone()
}

/// Mutation: shift every count by a uniform step in [-250, 250], then clamp
/// it up to the share's owned floor. No upper clamp.
pub fn mutate_counts<R: Rng + ?Sized>(counts: &mut [i64], shares: &[Share], rng: &mut R) {
    for (count, share) in counts.iter_mut().zip(shares) {
        *count += rng.gen_range(-MUTATION_SPREAD..=MUTATION_SPREAD);
        if *count < share.owned {
            *count = share.owned;
        }
    }
}

/// Generate random counts x such that 0 <= x < upper
pub fn random_counts<R: Rng + ?Sized>(length: usize, upper: u64, rng: &mut R) -> Vec<i64> {
    (0..length)
        .map(|_| (rng.gen::<f64>() * upper as f64).floor() as i64)
        .collect()
}
