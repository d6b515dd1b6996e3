pub mod operators;
pub mod population;
pub mod search;
pub mod selection;

pub use operators::*;
pub use population::*;
pub use search::*;
pub use selection::*;

use crate::config::constant::{
    CROSSOVER_PROB, GENERATIONS, GENE_MUTATION_PROB, MUTATION_MU, MUTATION_PROB, MUTATION_SIGMA,
    POPULATION_SIZE, TOURNAMENT_SIZE,
};
use crate::error::LocatorError;

/// Knobs for the generational search.
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Chance that a consecutive pair of offspring is mated.
    pub crossover_prob: f64,
    /// Chance that an offspring is handed to the mutation operator.
    pub mutation_prob: f64,
    /// Chance, once mutating, that each gene is perturbed.
    pub gene_mutation_prob: f64,
    pub mutation_mu: f64,
    pub mutation_sigma: f64,
    pub tournament_size: usize,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            population_size: POPULATION_SIZE,
            generations: GENERATIONS,
            crossover_prob: CROSSOVER_PROB,
            mutation_prob: MUTATION_PROB,
            gene_mutation_prob: GENE_MUTATION_PROB,
            mutation_mu: MUTATION_MU,
            mutation_sigma: MUTATION_SIGMA,
            tournament_size: TOURNAMENT_SIZE,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn validate(&self) -> Result<(), LocatorError> {
        if self.population_size == 0 {
            return Err(LocatorError::InvalidConfig(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(LocatorError::InvalidConfig(
                "tournament size must be at least 1".to_string(),
            ));
        }
        for (name, p) in [
            ("crossover probability", self.crossover_prob),
            ("mutation probability", self.mutation_prob),
            ("per-gene mutation probability", self.gene_mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(LocatorError::InvalidConfig(format!(
                    "{name} {p} is outside [0, 1]"
                )));
            }
        }
        if !self.mutation_sigma.is_finite() || self.mutation_sigma < 0.0 {
            return Err(LocatorError::InvalidConfig(format!(
                "mutation sigma {} must be finite and non-negative",
                self.mutation_sigma
            )));
        }
        Ok(())
    }
}
