use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use geo_types::Point;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::types::Coordinate;
use crate::error::LocatorError;

const REQUIRED_COLUMNS: [&str; 2] = ["Longitude", "Latitude"];

/// Only the two coordinate columns are read; anything else in the row is ignored.
#[derive(Debug, Deserialize)]
struct ObservationRow {
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
}

/// Reads earthquake observations from a `;`-delimited file with a header row.
pub fn load_observations(path: &Path) -> Result<Vec<Coordinate>, LocatorError> {
    let file = File::open(path).map_err(|e| LocatorError::io(path, e))?;
    let observations = read_observations(file)?;
    info!(
        "Loaded {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}

pub fn read_observations<R: Read>(source: R) -> Result<Vec<Coordinate>, LocatorError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LocatorError::MissingColumn(column));
        }
    }

    let mut observations = Vec::new();
    for (idx, row) in reader.deserialize::<ObservationRow>().enumerate() {
        let row = row?;
        match (row.longitude, row.latitude) {
            (Some(lon), Some(lat)) => observations.push(Point::new(lon, lat)),
            // Incomplete rows carry no location.
            _ => debug!("Skipping row {} with a missing coordinate", idx + 1),
        }
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_columns_and_ignores_the_rest() {
        let data = "Date;Latitude;Longitude;Magnitude\n\
                    2020-01-01;39.1;35.2;4.1\n\
                    2020-01-02; 38.9 ; 34.8 ;3.0\n";
        let observations = read_observations(data.as_bytes()).unwrap();
        assert_eq!(
            observations,
            vec![Point::new(35.2, 39.1), Point::new(34.8, 38.9)]
        );
    }

    #[test]
    fn skips_rows_with_missing_coordinates() {
        let data = "Longitude;Latitude\n35.0;39.0\n;39.5\n36.0;\n";
        let observations = read_observations(data.as_bytes()).unwrap();
        assert_eq!(observations, vec![Point::new(35.0, 39.0)]);
    }

    #[test]
    fn header_only_file_is_empty() {
        let observations = read_observations("Longitude;Latitude\n".as_bytes()).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "Longitude;Depth\n35.0;10\n";
        let err = read_observations(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LocatorError::MissingColumn("Latitude")));
    }

    #[test]
    fn garbage_number_is_an_error() {
        let data = "Longitude;Latitude\nabc;39.0\n";
        assert!(read_observations(data.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_observations(Path::new("/nonexistent/quakes.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/quakes.csv"));
    }
}
