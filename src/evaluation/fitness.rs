use crate::distance::euclidean;
use crate::domain::solution::decode_centroids;
use crate::domain::types::{Coordinate, ProblemInstance};
use crate::evaluation::penalty::penalty;

/// Anything the genetic search can minimise.
pub trait Objective: Sync {
    fn evaluate(&self, genes: &[f64]) -> f64;
}

impl Objective for ProblemInstance {
    fn evaluate(&self, genes: &[f64]) -> f64 {
        find_fitness(&decode_centroids(genes), self)
    }
}

pub fn find_fitness(centroids: &[Coordinate], pi: &ProblemInstance) -> f64 {
    find_distance(centroids, &pi.nearest)
        + penalty(centroids, &pi.user, pi.proximity_threshold, pi.penalty_value)
}

/// Sum over targets of the distance to their closest centroid.
/// With no centroids every target is infinitely far away.
pub fn find_distance(centroids: &[Coordinate], targets: &[Coordinate]) -> f64 {
    targets
        .iter()
        .map(|target| {
            centroids
                .iter()
                .map(|centroid| euclidean(target, centroid))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
