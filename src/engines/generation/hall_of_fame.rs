use crate::engines::generation::genome::Genome;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct EliteCandidate<G> {
    pub genome: G,
    pub cost: f64,
    pub generation: usize,      // Generation it was first seen in
    pub canonical_string: String, // For deduplication
}

/// Best candidates seen across a whole run, lowest cost first
pub struct HallOfFame<G> {
    candidates: Vec<EliteCandidate<G>>,
    max_size: usize,
    seen_signatures: HashSet<String>,
}

impl<G: Genome> HallOfFame<G> {
    pub fn new(max_size: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(max_size + 1),
            max_size,
            seen_signatures: HashSet::new(),
        }
    }

    /// Attempt to add a candidate to the Hall of Fame.
    ///
    /// Entries already present win ties, so the earliest of equal-cost
    /// candidates is kept.
    pub fn try_add(&mut self, genome: &G, cost: f64, generation: usize) -> bool {
        if self.max_size == 0 || cost.is_nan() {
            return false;
        }

        if self.candidates.len() >= self.max_size {
            match self.candidates.last() {
                Some(worst) if cost < worst.cost => {}
                _ => return false,
            }
        }

        let canonical_string = genome.to_string();
        if self.seen_signatures.contains(&canonical_string) {
            return false; // Duplicate, reject
        }

        let position = self.candidates.partition_point(|c| c.cost <= cost);
        self.seen_signatures.insert(canonical_string.clone());
        self.candidates.insert(
            position,
            EliteCandidate {
                genome: genome.clone(),
                cost,
                generation,
                canonical_string,
            },
        );

        // Trim to max size
        while self.candidates.len() > self.max_size {
            if let Some(removed) = self.candidates.pop() {
                self.seen_signatures.remove(&removed.canonical_string);
            }
        }

        true
    }

    /// Lowest cost candidate seen so far
    pub fn best(&self) -> Option<&EliteCandidate<G>> {
        self.candidates.first()
    }

    /// Get all elite candidates
    pub fn get_all(&self) -> &[EliteCandidate<G>] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
