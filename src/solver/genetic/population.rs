use rand::Rng;

use crate::domain::types::{Individual, SearchSpace};

/// Sample `size` unevaluated individuals, each gene uniform in its range.
pub fn init_population<R: Rng>(
    size: usize,
    space: &SearchSpace,
    rng: &mut R,
) -> Vec<Individual> {
    (0..size)
        .map(|_| {
            let genes = space
                .ranges
                .iter()
                .map(|range| rng.gen_range(range.clone()))
                .collect();
            Individual::new(genes)
        })
        .collect()
}
