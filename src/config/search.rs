use super::traits::ConfigSection;
use crate::engines::generation::{EvolutionConfig, SearchBounds};
use crate::error::AllocationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub generations: usize,
    pub target_value: f64,
    pub max_shares: u64,
    pub population_size: usize,
    pub tournament_size: usize,
    pub hall_of_fame_size: usize,
    pub parallel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            generations: 10_000,
            target_value: 50_000.0,
            max_shares: 10_000,
            population_size: 30,
            tournament_size: 3,
            hall_of_fame_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn bounds(&self) -> SearchBounds {
        SearchBounds {
            target_value: self.target_value,
            max_shares: self.max_shares,
        }
    }

    pub fn to_engine_config(&self) -> EvolutionConfig {
        EvolutionConfig {
            population_size: self.population_size,
            generations: self.generations,
            tournament_size: self.tournament_size,
            hall_of_fame_size: self.hall_of_fame_size,
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), AllocationError> {
        if !self.target_value.is_finite() || self.target_value <= 0.0 {
            return Err(AllocationError::Configuration(
                "Target value must be a positive number".to_string()
            ));
        }
        if self.population_size == 0 {
            return Err(AllocationError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.tournament_size == 0 {
            return Err(AllocationError::Configuration(
                "Tournament size must be at least 1".to_string()
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(AllocationError::Configuration(
                "Hall of fame size must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
