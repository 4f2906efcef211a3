//! Genome representation for the allocation search
//!
//! A candidate is one integer per share, in dataset order: the number of
//! shares to hold. Every candidate of a run points at the same `Dataset`
//! through an `Arc`, so cloning a candidate copies only its counts.
//!
//! The search is mutation-only. `Genome::crossover` is part of the contract
//! the engine drives, but `Candidate` implements it as a no-op: two lineages
//! never exchange counts.

use crate::engines::evaluation::fitness;
use crate::engines::generation::operators::{mutate_counts, random_counts};
use crate::error::{AllocationError, Result};
use crate::types::Dataset;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Capabilities the evolution engine needs from an individual
pub trait Genome: Clone + Send + Sync + fmt::Display {
    /// Cost of this individual, lower is better
    fn evaluate(&self) -> f64;

    /// Randomly perturb this individual in place
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Exchange material with another individual
    fn crossover<R: Rng + ?Sized>(&mut self, other: &mut Self, rng: &mut R);
}

/// Search configuration a candidate was created under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBounds {
    /// Portfolio value the allocation should reach
    pub target_value: f64,
    /// Exclusive upper bound for initial counts
    pub max_shares: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    dataset: Arc<Dataset>,
    bounds: SearchBounds,
    counts: Vec<i64>,
}

impl Candidate {
    /// Build a candidate from explicit counts, one per dataset share
    pub fn new(dataset: Arc<Dataset>, bounds: SearchBounds, counts: Vec<i64>) -> Result<Self> {
        if counts.len() != dataset.share_count() {
            return Err(AllocationError::Genome(format!(
                "Expected {} counts (one per share), got {}",
                dataset.share_count(),
                counts.len()
            )));
        }

        Ok(Self {
            dataset,
            bounds,
            counts,
        })
    }

    /// Draw a candidate uniformly from `[0, max_shares)` per share.
    ///
    /// Owned floors are not applied here; only mutation enforces them.
    pub fn random<R: Rng + ?Sized>(dataset: Arc<Dataset>, bounds: SearchBounds, rng: &mut R) -> Self {
        let counts = random_counts(dataset.share_count(), bounds.max_shares, rng);
        Self {
            dataset,
            bounds,
            counts,
        }
    }

    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Realized portfolio value of this candidate
    pub fn total_value(&self) -> f64 {
        self.counts
            .iter()
            .zip(self.dataset.shares())
            .map(|(count, share)| share.value_of(*count))
            .sum()
    }

    /// Whether every count sits at or above its share's owned floor
    pub fn respects_owned(&self) -> bool {
        self.counts
            .iter()
            .zip(self.dataset.shares())
            .all(|(count, share)| *count >= share.owned)
    }
}

impl Genome for Candidate {
    fn evaluate(&self) -> f64 {
        fitness::evaluate(&self.counts, &self.dataset, self.bounds.target_value)
    }

    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        mutate_counts(&mut self.counts, self.dataset.shares(), rng);
    }

    fn crossover<R: Rng + ?Sized>(&mut self, _other: &mut Self, _rng: &mut R) {}
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
