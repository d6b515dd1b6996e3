use rand::Rng;

use crate::domain::types::Individual;

pub trait Selection: Sync {
    /// Choose `k` survivors (cloned) from `population`.
    fn select<R: Rng>(&self, population: &[Individual], k: usize, rng: &mut R) -> Vec<Individual>;
}

/// Keep the fittest of `size` aspirants drawn with replacement, `k` times.
#[derive(Debug, Clone, Copy)]
pub struct Tournament {
    pub size: usize,
}

impl Selection for Tournament {
    fn select<R: Rng>(&self, population: &[Individual], k: usize, rng: &mut R) -> Vec<Individual> {
        if population.is_empty() {
            return vec![];
        }

        (0..k)
            .map(|_| {
                let winner = (0..self.size.max(1))
                    .map(|_| &population[rng.gen_range(0..population.len())])
                    .min_by(|a, b| a.score().total_cmp(&b.score()));
                // size >= 1, so a winner always exists
                winner.unwrap_or(&population[0]).clone()
            })
            .collect()
    }
}
