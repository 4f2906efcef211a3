use crate::engines::generation::{
    genome::Genome,
    hall_of_fame::{EliteCandidate, HallOfFame},
    operators::tournament_selection,
};
use crate::error::AllocationError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub tournament_size: usize,
    pub hall_of_fame_size: usize,
    pub parallel: bool, // Evaluate each generation on the rayon pool
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 10_000,
            tournament_size: 3,
            hall_of_fame_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct EvolutionResult<G> {
    pub best: EliteCandidate<G>,
    pub hall_of_fame: Vec<EliteCandidate<G>>,
    pub generations: usize,
    pub elapsed: Duration,
}

pub trait ProgressCallback<G>: Send {
    fn on_generation_complete(
        &mut self,
        generation: usize,
        elapsed: Duration,
        best: &EliteCandidate<G>,
        hall_of_fame_size: usize,
    );
}

pub struct EvolutionEngine<G> {
    config: EvolutionConfig,
    hall_of_fame: HallOfFame<G>,
    rng: StdRng,
}

impl<G: Genome> EvolutionEngine<G> {
    pub fn new(config: EvolutionConfig) -> Result<Self, AllocationError> {
        if config.population_size == 0 {
            return Err(AllocationError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if config.tournament_size == 0 {
            return Err(AllocationError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if config.hall_of_fame_size == 0 {
            return Err(AllocationError::Configuration(
                "Hall of fame size must be at least 1".to_string(),
            ));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            hall_of_fame: HallOfFame::new(config.hall_of_fame_size),
            config,
            rng,
        })
    }

    /// Generations between two progress reports, about 1% of the run
    pub fn report_interval(&self) -> usize {
        (self.config.generations / 100).max(1)
    }

    /// Run the evolution process.
    ///
    /// `init` is called once per population slot to seed generation 0. The
    /// initial population is evaluated, then `generations` rounds of
    /// select, clone, mutate and evaluate follow.
    pub fn run<F, C>(&mut self, mut init: F, callback: &mut C) -> Result<EvolutionResult<G>, AllocationError>
    where
        F: FnMut(&mut StdRng) -> G,
        C: ProgressCallback<G>,
    {
        let started = Instant::now();
        let interval = self.report_interval();
        self.hall_of_fame = HallOfFame::new(self.config.hall_of_fame_size);

        log::info!(
            "Starting search: {} candidates, {} generations, parallel={}",
            self.config.population_size,
            self.config.generations,
            self.config.parallel
        );

        // Initialize population
        let population: Vec<G> = (0..self.config.population_size)
            .map(|_| init(&mut self.rng))
            .collect();

        let mut ranked = self.evaluate_population(population);
        self.update_hall_of_fame(&ranked, 0);
        self.report(0, started, callback)?;

        // Evolution loop
        for generation in 1..=self.config.generations {
            let population = self.create_next_generation(&ranked);
            ranked = self.evaluate_population(population);
            self.update_hall_of_fame(&ranked, generation);

            if let Some((_, cost)) = ranked.first() {
                log::debug!("Generation {}: best cost in population {}", generation, cost);
            }

            if generation % interval == 0 {
                self.report(generation, started, callback)?;
            }
        }

        let best = self.best()?.clone();
        log::info!(
            "Search finished after {} generations in {:?}, best cost {}",
            self.config.generations,
            started.elapsed(),
            best.cost
        );

        Ok(EvolutionResult {
            best,
            hall_of_fame: self.hall_of_fame.get_all().to_vec(),
            generations: self.config.generations,
            elapsed: started.elapsed(),
        })
    }

    /// Evaluate every member and rank ascending by cost. The sort is stable,
    /// so equal costs keep population order.
    fn evaluate_population(&self, population: Vec<G>) -> Vec<(G, f64)> {
        let costs: Vec<f64> = if self.config.parallel {
            population.par_iter().map(|genome| genome.evaluate()).collect()
        } else {
            population.iter().map(|genome| genome.evaluate()).collect()
        };

        let mut ranked: Vec<(G, f64)> = population.into_iter().zip(costs).collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    fn update_hall_of_fame(&mut self, ranked: &[(G, f64)], generation: usize) {
        for (genome, cost) in ranked {
            // Ranked ascending: once one is rejected on cost the rest will be too
            if self.hall_of_fame.len() == self.config.hall_of_fame_size {
                if let Some(worst) = self.hall_of_fame.get_all().last() {
                    if *cost >= worst.cost {
                        break;
                    }
                }
            }
            self.hall_of_fame.try_add(genome, *cost, generation);
        }
    }

    /// Tournament-select survivors, clone them, then mutate every clone.
    /// Crossover is still offered to consecutive pairs.
    fn create_next_generation(&mut self, ranked: &[(G, f64)]) -> Vec<G> {
        let mut next_generation: Vec<G> = (0..self.config.population_size)
            .map(|_| tournament_selection(ranked, self.config.tournament_size, &mut self.rng))
            .collect();

        for pair in next_generation.chunks_exact_mut(2) {
            let (first, second) = pair.split_at_mut(1);
            first[0].crossover(&mut second[0], &mut self.rng);
        }

        for child in next_generation.iter_mut() {
            child.mutate(&mut self.rng);
        }

        next_generation
    }

    fn report<C: ProgressCallback<G>>(
        &self,
        generation: usize,
        started: Instant,
        callback: &mut C,
    ) -> Result<(), AllocationError> {
        let best = self.best()?;
        callback.on_generation_complete(generation, started.elapsed(), best, self.hall_of_fame.len());
        Ok(())
    }

    fn best(&self) -> Result<&EliteCandidate<G>, AllocationError> {
        self.hall_of_fame.best().ok_or_else(|| {
            AllocationError::Generation("No candidate with a comparable cost was found".to_string())
        })
    }
}
