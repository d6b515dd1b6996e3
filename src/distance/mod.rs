pub mod metric;
pub mod nearest;

pub use metric::{euclidean, geodesic_km};
pub use nearest::select_nearest;
