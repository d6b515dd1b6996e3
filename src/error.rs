use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed observation data: {0}")]
    Csv(#[from] csv::Error),

    #[error("observation data has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("malformed shapefile: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("malformed GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("unsupported boundary format for {0} (expected .shp, .geojson or .json)")]
    UnsupportedBoundaryFormat(PathBuf),

    #[error("boundary file {0} contains no polygons")]
    EmptyBoundary(PathBuf),

    #[error("'{input}' is not a valid {axis}")]
    InvalidCoordinate { axis: &'static str, input: String },

    #[error("no value entered for {0}")]
    MissingInput(&'static str),

    #[error("observation dataset is empty, nothing to place access points around")]
    EmptyDataset,

    #[error("none of the proposed access points lie inside the boundary")]
    NoCentroidsInBoundary,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to render map: {0}")]
    Render(String),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl LocatorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocatorError::Io {
            path: path.into(),
            source,
        }
    }
}
