use tracing::{debug, warn};

use crate::distance::metric::euclidean;
use crate::domain::types::Coordinate;
use crate::error::LocatorError;

/// Pick the `count` observations closest to `user` by Euclidean degree distance.
///
/// Equal distances keep dataset order. A dataset smaller than `count` yields
/// every observation; an empty one is an error.
pub fn select_nearest(
    user: &Coordinate,
    observations: &[Coordinate],
    count: usize,
) -> Result<Vec<Coordinate>, LocatorError> {
    if observations.is_empty() {
        return Err(LocatorError::EmptyDataset);
    }
    if observations.len() < count {
        warn!(
            "Only {} observations available, fewer than the {} requested",
            observations.len(),
            count
        );
    }

    let mut ranked: Vec<(f64, usize)> = observations
        .iter()
        .enumerate()
        .map(|(ind, point)| (euclidean(user, point), ind))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let nearest: Vec<Coordinate> = ranked
        .iter()
        .take(count)
        .map(|&(_, ind)| observations[ind])
        .collect();

    debug!("Nearest observations: {:?}", nearest);
    Ok(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    fn scattered() -> Vec<Coordinate> {
        vec![
            Point::new(36.0, 40.0),
            Point::new(35.01, 39.0),
            Point::new(34.5, 38.5),
            Point::new(35.0, 39.2),
            Point::new(35.0, 38.97),
            Point::new(30.0, 30.0),
            Point::new(35.1, 39.1),
            Point::new(35.05, 39.0),
        ]
    }

    #[test]
    fn returns_exactly_count_closest() {
        let user = Point::new(35.0, 39.0);
        let data = scattered();
        let nearest = select_nearest(&user, &data, 5).unwrap();
        assert_eq!(nearest.len(), 5);

        let worst_selected = nearest
            .iter()
            .map(|p| euclidean(&user, p))
            .fold(f64::MIN, f64::max);
        for point in data.iter().filter(|p| !nearest.contains(p)) {
            assert!(worst_selected <= euclidean(&user, point));
        }
    }

    #[test]
    fn sorted_ascending() {
        let user = Point::new(35.0, 39.0);
        let nearest = select_nearest(&user, &scattered(), 5).unwrap();
        assert_eq!(nearest[0], Point::new(35.01, 39.0));
        assert_eq!(nearest[1], Point::new(35.0, 38.97));
    }

    #[test]
    fn ties_keep_dataset_order() {
        let user = Point::new(0.0, 0.0);
        let data = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
        ];
        let nearest = select_nearest(&user, &data, 2).unwrap();
        assert_eq!(nearest, vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    }

    #[test]
    fn small_dataset_returns_everything() {
        let user = Point::new(35.0, 39.0);
        let data = vec![Point::new(35.0, 39.1), Point::new(35.2, 39.0)];
        let nearest = select_nearest(&user, &data, 5).unwrap();
        assert_eq!(nearest.len(), 2);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let err = select_nearest(&Point::new(35.0, 39.0), &[], 5).unwrap_err();
        assert!(matches!(err, LocatorError::EmptyDataset));
    }
}
