use geo_types::Point;

use crate::domain::types::{Coordinate, Individual};

/// Read a flat gene vector back as consecutive (lon, lat) centroids.
/// A trailing unpaired gene is ignored.
pub fn decode_centroids(genes: &[f64]) -> Vec<Coordinate> {
    genes
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Lowest-fitness individual; the first one wins on ties.
pub fn best_individual(population: &[Individual]) -> Option<&Individual> {
    population
        .iter()
        .min_by(|a, b| a.score().total_cmp(&b.score()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pairs_in_order() {
        let centroids = decode_centroids(&[35.0, 39.0, 35.1, 39.05]);
        assert_eq!(centroids, vec![Point::new(35.0, 39.0), Point::new(35.1, 39.05)]);
    }

    #[test]
    fn best_prefers_lowest_and_first_on_tie() {
        let mut a = Individual::new(vec![1.0, 1.0]);
        a.fitness = Some(2.0);
        let mut b = Individual::new(vec![2.0, 2.0]);
        b.fitness = Some(0.5);
        let mut c = Individual::new(vec![3.0, 3.0]);
        c.fitness = Some(0.5);
        let unevaluated = Individual::new(vec![4.0, 4.0]);

        let population = vec![a, b, c, unevaluated];
        let best = best_individual(&population).unwrap();
        assert_eq!(best.genes, vec![2.0, 2.0]);
    }

    #[test]
    fn best_of_empty_is_none() {
        assert!(best_individual(&[]).is_none());
    }
}
