use std::ops::RangeInclusive;

use geo_types::Point;

/// (longitude, latitude) in EPSG:4326 degrees.
pub type Coordinate = Point<f64>;

/// One candidate placement: `num_clusters` (lon, lat) pairs flattened into genes.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genes: Vec<f64>,
    /// `None` until evaluated, and again after crossover or mutation touches the genes.
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new(genes: Vec<f64>) -> Self {
        Individual {
            genes,
            fitness: None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Fitness for ranking. Unevaluated individuals rank last.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }
}

#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub user: Coordinate,
    /// Observations nearest the user; the optimisation target set.
    pub nearest: Vec<Coordinate>,
    pub num_clusters: usize,
    pub penalty_value: f64,
    pub proximity_threshold: f64,
}

/// Per-gene sampling ranges for the initial population.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    pub ranges: Vec<RangeInclusive<f64>>,
}

impl SearchSpace {
    /// Alternating longitude/latitude ranges centred on `centre`, one pair per cluster.
    pub fn around(centre: Coordinate, lon_spread: f64, lat_spread: f64, num_clusters: usize) -> Self {
        let lon = (centre.x() - lon_spread)..=(centre.x() + lon_spread);
        let lat = (centre.y() - lat_spread)..=(centre.y() + lat_spread);
        let ranges = std::iter::repeat([lon, lat])
            .take(num_clusters)
            .flatten()
            .collect();
        SearchSpace { ranges }
    }

    pub fn gene_count(&self) -> usize {
        self.ranges.len()
    }
}
