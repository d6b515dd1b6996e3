pub mod map;

use std::io::Write;

use tracing::info;

use crate::distance::geodesic_km;
use crate::domain::types::Coordinate;
use crate::error::LocatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Within,
    Outside,
}

/// `Within` up to and including `radius_km`.
pub fn classify(distance_km: f64, radius_km: f64) -> Proximity {
    if distance_km <= radius_km {
        Proximity::Within
    } else {
        Proximity::Outside
    }
}

/// A proposed access point that survived the boundary filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub label: String,
    pub location: Coordinate,
    pub distance_km: f64,
    pub proximity: Proximity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementReport {
    pub user: Coordinate,
    pub radius_km: f64,
    pub placements: Vec<Placement>,
}

/// Label surviving centroids `WN1..` and measure them against the user.
pub fn build_report(user: Coordinate, centroids: &[Coordinate], radius_km: f64) -> PlacementReport {
    let placements = centroids
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let distance_km = geodesic_km(&user, location);
            Placement {
                label: format!("WN{}", i + 1),
                location: *location,
                distance_km,
                proximity: classify(distance_km, radius_km),
            }
        })
        .collect();

    PlacementReport {
        user,
        radius_km,
        placements,
    }
}

/// Distances first, then one classification line per placement.
pub fn write_report<W: Write>(report: &PlacementReport, out: &mut W) -> Result<(), LocatorError> {
    for placement in &report.placements {
        info!(
            "{} at ({:.6}, {:.6}), {:.3} km from user",
            placement.label,
            placement.location.x(),
            placement.location.y(),
            placement.distance_km
        );
        writeln!(
            out,
            "Distance between {} and user: {:.2} km",
            placement.label, placement.distance_km
        )?;
    }

    let radius = report.radius_km;
    for placement in &report.placements {
        match placement.proximity {
            Proximity::Within => writeln!(
                out,
                "{} is within {} km of the user.",
                placement.label, radius
            )?,
            Proximity::Outside => writeln!(
                out,
                "{} is outside of {} km from the user.",
                placement.label, radius
            )?,
        }
    }
    Ok(())
}
