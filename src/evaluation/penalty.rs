use crate::distance::euclidean;
use crate::domain::types::Coordinate;

/// `penalty_value` for every centroid strictly farther than `threshold` degrees from the user.
pub fn penalty(
    centroids: &[Coordinate],
    user: &Coordinate,
    threshold: f64,
    penalty_value: f64,
) -> f64 {
    let strays = centroids
        .iter()
        .filter(|centroid| euclidean(user, centroid) > threshold)
        .count();

    (strays as f64) * penalty_value
}
