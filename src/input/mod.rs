pub mod provider;

pub use provider::{parse_coordinate, CoordinateSource, LineInput, ScriptedInput};
