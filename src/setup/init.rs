use tracing::{debug, info};

use crate::config::constant::{
    LATITUDE_SPREAD_DEG, LONGITUDE_SPREAD_DEG, NEAREST_COUNT, NUM_CLUSTERS, PENALTY_VALUE,
    PROXIMITY_THRESHOLD_DEG,
};
use crate::distance::select_nearest;
use crate::domain::types::{Coordinate, ProblemInstance, SearchSpace};
use crate::error::LocatorError;

/// Build the optimisation problem around `user` and the box its initial
/// population is drawn from.
pub fn setup(
    user: Coordinate,
    observations: &[Coordinate],
) -> Result<(ProblemInstance, SearchSpace), LocatorError> {
    info!(
        "Starting setup for user at ({}, {}) with {} observations",
        user.x(),
        user.y(),
        observations.len()
    );

    let nearest = select_nearest(&user, observations, NEAREST_COUNT)?;

    let problem_instance = ProblemInstance {
        user,
        nearest,
        num_clusters: NUM_CLUSTERS,
        penalty_value: PENALTY_VALUE,
        proximity_threshold: PROXIMITY_THRESHOLD_DEG,
    };

    let space = SearchSpace::around(
        user,
        LONGITUDE_SPREAD_DEG,
        LATITUDE_SPREAD_DEG,
        NUM_CLUSTERS,
    );
    debug!("Search space: {:?}", space.ranges);

    info!("Setup completed successfully");
    Ok((problem_instance, space))
}
