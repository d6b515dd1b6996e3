use geo::{Distance, Euclidean, Geodesic};

use crate::domain::types::Coordinate;

/// Straight-line distance in raw degrees. Used inside the optimiser only.
pub fn euclidean(a: &Coordinate, b: &Coordinate) -> f64 {
    Euclidean.distance(*a, *b)
}

/// Ellipsoidal (WGS84) distance in kilometres.
pub fn geodesic_km(a: &Coordinate, b: &Coordinate) -> f64 {
    Geodesic.distance(*a, *b) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn euclidean_is_plain_degree_distance() {
        let d = euclidean(&Point::new(35.0, 39.0), &Point::new(35.03, 39.04));
        assert!((d - 0.05).abs() < 1e-12);
    }

    #[test]
    fn geodesic_one_degree_of_latitude_at_equator() {
        let d = geodesic_km(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
        assert!((d - 110.574).abs() < 0.01, "got {d}");
    }

    #[test]
    fn geodesic_is_zero_for_same_point() {
        let p = Point::new(35.0, 39.0);
        assert!(geodesic_km(&p, &p).abs() < 1e-9);
    }
}
