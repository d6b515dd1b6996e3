use std::fs;
use std::path::Path;

use geo::{unary_union, Contains};
use geo_types::{Geometry, MultiPolygon, Polygon};
use geojson::GeoJson;
use tracing::{debug, info, warn};

use crate::domain::types::Coordinate;
use crate::error::LocatorError;

/// Union of administrative polygons, assumed to be in EPSG:4326.
#[derive(Debug, Clone)]
pub struct Boundary {
    union: MultiPolygon<f64>,
}

impl Boundary {
    /// Dissolves shared edges so neighbouring regions form one area.
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Self {
        let union = unary_union(&polygons);
        debug!(
            "Dissolved {} polygons into {} parts",
            polygons.len(),
            union.0.len()
        );
        Boundary { union }
    }

    /// Load from an ESRI shapefile or a GeoJSON document, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, LocatorError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let polygons = match extension.as_deref() {
            Some("shp") => polygons_from_shapefile(path)?,
            Some("geojson") | Some("json") => polygons_from_geojson(path)?,
            _ => return Err(LocatorError::UnsupportedBoundaryFormat(path.to_path_buf())),
        };

        if polygons.is_empty() {
            return Err(LocatorError::EmptyBoundary(path.to_path_buf()));
        }

        info!(
            "Loaded {} boundary polygons from {}",
            polygons.len(),
            path.display()
        );
        Ok(Self::from_polygons(polygons))
    }

    /// Strict interior test against the union: points on its outer edge are outside.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.union.contains(point)
    }

    /// Keep the points that fall inside, preserving order.
    pub fn filter(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        points
            .iter()
            .copied()
            .filter(|point| {
                let inside = self.contains(point);
                if !inside {
                    warn!("Dropping ({}, {}): outside boundary", point.x(), point.y());
                }
                inside
            })
            .collect()
    }
}

fn polygons_from_shapefile(path: &Path) -> Result<Vec<Polygon<f64>>, LocatorError> {
    let shapes = shapefile::read_shapes_as::<_, shapefile::Polygon>(path)?;
    debug!("Read {} polygon records from shapefile", shapes.len());

    Ok(shapes
        .into_iter()
        .flat_map(|shape| MultiPolygon::<f64>::from(shape).0)
        .collect())
}

fn polygons_from_geojson(path: &Path) -> Result<Vec<Polygon<f64>>, LocatorError> {
    let text = fs::read_to_string(path).map_err(|e| LocatorError::io(path, e))?;
    polygons_from_geojson_str(&text)
}

pub(crate) fn polygons_from_geojson_str(text: &str) -> Result<Vec<Polygon<f64>>, LocatorError> {
    let document: GeoJson = text.parse()?;
    let collection = geojson::quick_collection(&document)?;

    let mut polygons = Vec::new();
    collect_polygons(Geometry::GeometryCollection(collection), &mut polygons);
    Ok(polygons)
}

fn collect_polygons(geometry: Geometry<f64>, out: &mut Vec<Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(polygon) => out.push(polygon),
        Geometry::MultiPolygon(multi) => out.extend(multi.0),
        Geometry::GeometryCollection(collection) => {
            for inner in collection.0 {
                collect_polygons(inner, out);
            }
        }
        other => debug!("Ignoring non-polygon boundary geometry: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, Point};
    use tempfile::TempDir;

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
        polygon![
            (x: min_x, y: min_y),
            (x: max_x, y: min_y),
            (x: max_x, y: max_y),
            (x: min_x, y: max_y),
            (x: min_x, y: min_y),
        ]
    }

    fn two_provinces() -> Boundary {
        Boundary::from_polygons(vec![
            square(34.0, 38.0, 35.0, 40.0),
            square(35.0, 38.0, 36.0, 40.0),
        ])
    }

    #[test]
    fn interior_point_is_kept() {
        let boundary = two_provinces();
        assert!(boundary.contains(&Point::new(35.5, 39.0)));
        assert!(boundary.contains(&Point::new(34.2, 38.1)));
    }

    #[test]
    fn shared_edge_between_regions_is_inside() {
        let boundary = two_provinces();
        assert!(boundary.contains(&Point::new(35.0, 39.0)));
        assert!(!boundary.contains(&Point::new(34.0, 39.0)));
        assert!(!boundary.contains(&Point::new(36.0, 39.0)));
    }

    #[test]
    fn mid_ocean_point_is_dropped() {
        assert!(!two_provinces().contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn filter_preserves_order() {
        let kept = two_provinces().filter(&[
            Point::new(35.5, 39.0),
            Point::new(0.0, 0.0),
            Point::new(34.5, 39.5),
        ]);
        assert_eq!(kept, vec![Point::new(35.5, 39.0), Point::new(34.5, 39.5)]);
    }

    #[test]
    fn parses_feature_collection() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"NAME_1": "Kayseri"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[34,38],[36,38],[36,40],[34,40],[34,38]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"NAME_1": "Station"},
                    "geometry": {"type": "Point", "coordinates": [35, 39]}
                }
            ]
        }"#;
        let polygons = polygons_from_geojson_str(text).unwrap();
        assert_eq!(polygons.len(), 1);
        assert!(Boundary::from_polygons(polygons).contains(&Point::new(35.0, 39.0)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = Boundary::load(Path::new("provinces.kml")).unwrap_err();
        assert!(matches!(err, LocatorError::UnsupportedBoundaryFormat(_)));
    }

    #[test]
    fn geojson_without_polygons_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("points.geojson");
        fs::write(&path, r#"{"type": "Point", "coordinates": [35, 39]}"#).unwrap();

        let err = Boundary::load(&path).unwrap_err();
        assert!(matches!(err, LocatorError::EmptyBoundary(_)));
    }

    #[test]
    fn loads_polygon_shapefile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("provinces.shp");

        // Outer rings are clockwise in ESRI files.
        let ring = vec![
            shapefile::Point::new(34.0, 38.0),
            shapefile::Point::new(34.0, 40.0),
            shapefile::Point::new(36.0, 40.0),
            shapefile::Point::new(36.0, 38.0),
            shapefile::Point::new(34.0, 38.0),
        ];
        let province = shapefile::Polygon::new(shapefile::PolygonRing::Outer(ring));
        let writer = shapefile::ShapeWriter::from_path(&path).unwrap();
        writer.write_shapes(&[province]).unwrap();

        let boundary = Boundary::load(&path).unwrap();
        assert!(boundary.contains(&Point::new(35.0, 39.0)));
        assert!(!boundary.contains(&Point::new(0.0, 0.0)));
    }
}
