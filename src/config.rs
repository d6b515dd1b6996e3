use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::LocatorError;
use crate::solver::genetic::GaConfig;

pub mod constant {
    /// Access points proposed per run.
    pub const NUM_CLUSTERS: usize = 2;
    /// Observations the centroids are fitted against.
    pub const NEAREST_COUNT: usize = 5;
    pub const PENALTY_VALUE: f64 = 1000.0;
    /// ~10 km expressed in degrees of latitude.
    pub const PROXIMITY_THRESHOLD_DEG: f64 = 0.09;
    pub const LONGITUDE_SPREAD_DEG: f64 = 0.12;
    pub const LATITUDE_SPREAD_DEG: f64 = 0.09;
    pub const WITHIN_RADIUS_KM: f64 = 10.0;

    pub const POPULATION_SIZE: usize = 200;
    pub const GENERATIONS: usize = 5;
    pub const CROSSOVER_PROB: f64 = 0.5;
    pub const MUTATION_PROB: f64 = 0.2;
    pub const GENE_MUTATION_PROB: f64 = 0.2;
    pub const MUTATION_MU: f64 = 0.0;
    pub const MUTATION_SIGMA: f64 = 0.01;
    pub const TOURNAMENT_SIZE: usize = 3;

    pub const WORKER_THREADS: usize = 2;

    pub const DEFAULT_OBSERVATIONS_PATH: &str = "data/bdtim_mt.csv";
    pub const DEFAULT_BOUNDARY_PATH: &str = "data/gadm41_TUR_1.shp";
    pub const DEFAULT_MAP_PATH: &str = "wifi_points.svg";
}

/// Runtime settings, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub observations_path: PathBuf,
    pub boundary_path: PathBuf,
    pub map_output: PathBuf,
    pub worker_threads: usize,
    pub ga: GaConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            observations_path: PathBuf::from(constant::DEFAULT_OBSERVATIONS_PATH),
            boundary_path: PathBuf::from(constant::DEFAULT_BOUNDARY_PATH),
            map_output: PathBuf::from(constant::DEFAULT_MAP_PATH),
            worker_threads: constant::WORKER_THREADS,
            ga: GaConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, LocatorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LocatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = lookup("OBSERVATIONS_CSV") {
            settings.observations_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("BOUNDARY_PATH") {
            settings.boundary_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("MAP_OUTPUT") {
            settings.map_output = PathBuf::from(path);
        }
        if let Some(raw) = lookup("WORKER_THREADS") {
            settings.worker_threads = parse_var("WORKER_THREADS", &raw)?;
            if settings.worker_threads == 0 {
                return Err(LocatorError::InvalidConfig(
                    "WORKER_THREADS must be at least 1".to_string(),
                ));
            }
        }
        if let Some(raw) = lookup("GA_SEED") {
            let seed: u64 = parse_var("GA_SEED", &raw)?;
            info!("Using fixed GA seed {}", seed);
            settings.ga.seed = Some(seed);
        }

        settings.ga.validate()?;
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, LocatorError> {
    raw.trim()
        .parse()
        .map_err(|_| LocatorError::InvalidConfig(format!("{key}='{raw}' is not a valid number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(
            settings.observations_path,
            PathBuf::from(constant::DEFAULT_OBSERVATIONS_PATH)
        );
        assert_eq!(settings.worker_threads, constant::WORKER_THREADS);
        assert_eq!(settings.ga.population_size, 200);
        assert!(settings.ga.seed.is_none());
    }

    #[test]
    fn environment_overrides_paths_and_seed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("OBSERVATIONS_CSV", "quakes.csv"),
            ("BOUNDARY_PATH", "tr.geojson"),
            ("GA_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(settings.observations_path, PathBuf::from("quakes.csv"));
        assert_eq!(settings.boundary_path, PathBuf::from("tr.geojson"));
        assert_eq!(settings.ga.seed, Some(42));
    }

    #[test]
    fn rejects_garbage_seed() {
        let err = Settings::from_lookup(lookup_from(&[("GA_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, LocatorError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Settings::from_lookup(lookup_from(&[("WORKER_THREADS", "0")])).unwrap_err();
        assert!(matches!(err, LocatorError::InvalidConfig(_)));
    }
}
