pub mod boundary;
pub mod observations;

pub use boundary::Boundary;
pub use observations::load_observations;
