use crate::config::SearchConfig;
use crate::engines::generation::{
    Candidate, EvolutionEngine, EvolutionResult, ProgressCallback, SearchBounds,
};
use crate::error::Result;
use crate::types::Dataset;
use std::sync::Arc;

/// Searches share counts for one dataset.
///
/// Owns the dataset for the whole run; every candidate borrows it through a
/// clone of the same `Arc`.
pub struct AllocationSearch {
    dataset: Arc<Dataset>,
    bounds: SearchBounds,
    engine: EvolutionEngine<Candidate>,
}

impl AllocationSearch {
    pub fn new(dataset: Dataset, config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            dataset: Arc::new(dataset),
            bounds: config.bounds(),
            engine: EvolutionEngine::new(config.to_engine_config())?,
        })
    }

    pub fn run<C: ProgressCallback<Candidate>>(&mut self, callback: &mut C) -> Result<EvolutionResult<Candidate>> {
        let dataset = &self.dataset;
        let bounds = self.bounds;

        self.engine
            .run(|rng| Candidate::random(Arc::clone(dataset), bounds, rng), callback)
    }
}
