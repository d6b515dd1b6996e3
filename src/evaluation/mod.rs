pub mod fitness;
pub mod penalty;

pub use fitness::{find_distance, find_fitness, Objective};
pub use penalty::penalty;
