use std::ops::Range;
use std::path::Path;

use geo::BoundingRect;
use geo_types::{MultiPoint, Rect};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::domain::types::Coordinate;
use crate::error::LocatorError;
use crate::report::Placement;

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const MAP_SIZE: (u32, u32) = (1000, 1000);
const LEGEND_LINE_HEIGHT: i32 = 16;

/// Everything drawn on the map.
#[derive(Debug, Clone, Copy)]
pub struct MapScene<'a> {
    pub observations: &'a [Coordinate],
    pub user: Coordinate,
    pub placements: &'a [Placement],
}

impl MapScene<'_> {
    fn all_points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.observations
            .iter()
            .copied()
            .chain(std::iter::once(self.user))
            .chain(self.placements.iter().map(|p| p.location))
    }
}

/// Padded lon/lat extent covering every point in the scene.
pub fn map_bounds(scene: &MapScene) -> (Range<f64>, Range<f64>) {
    let extent = MultiPoint::new(scene.all_points().collect())
        .bounding_rect()
        .unwrap_or(Rect::new(scene.user.0, scene.user.0));
    let (min, max) = (extent.min(), extent.max());

    let pad_x = (extent.width() * 0.05).max(0.01);
    let pad_y = (extent.height() * 0.05).max(0.01);
    ((min.x - pad_x)..(max.x + pad_x), (min.y - pad_y)..(max.y + pad_y))
}

/// `WN<i> = (lon, lat)` for the coordinate box.
pub fn legend_lines(placements: &[Placement]) -> Vec<String> {
    placements
        .iter()
        .map(|p| {
            format!(
                "{} = ({:.6}, {:.6})",
                p.label,
                p.location.x(),
                p.location.y()
            )
        })
        .collect()
}

fn render_error<E: std::fmt::Display>(e: E) -> LocatorError {
    LocatorError::Render(e.to_string())
}

pub fn draw_map<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &MapScene,
) -> Result<(), LocatorError> {
    root.fill(&WHITE).map_err(render_error)?;

    let (x_range, y_range) = map_bounds(scene);
    let mut chart = ChartBuilder::on(root)
        .caption("Proposed WiFi Points and Earthquake Data", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(
            scene
                .observations
                .iter()
                .map(|p| Circle::new((p.x(), p.y()), 2, RED.mix(0.5).filled())),
        )
        .map_err(render_error)?
        .label("Earthquake Data")
        .legend(|(x, y)| Circle::new((x, y), 3, RED.mix(0.5).filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (scene.user.x(), scene.user.y()),
            7,
            GREEN.mix(0.7).filled(),
        )))
        .map_err(render_error)?
        .label("User Location")
        .legend(|(x, y)| Circle::new((x, y), 5, GREEN.mix(0.7).filled()));

    chart
        .draw_series(scene.placements.iter().map(|p| {
            Cross::new(
                (p.location.x(), p.location.y()),
                6,
                PURPLE.mix(0.7).stroke_width(2),
            )
        }))
        .map_err(render_error)?
        .label("Proposed WiFi Points")
        .legend(|(x, y)| Cross::new((x, y), 5, PURPLE.stroke_width(2)));

    chart
        .draw_series(scene.placements.iter().map(|p| {
            EmptyElement::at((p.location.x(), p.location.y()))
                + Text::new(p.label.clone(), (5, -15), ("sans-serif", 14).into_font())
        }))
        .map_err(render_error)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_error)?;

    draw_coordinate_box(root, &legend_lines(scene.placements))
}

fn draw_coordinate_box<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    lines: &[String],
) -> Result<(), LocatorError> {
    if lines.is_empty() {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let longest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32;
    let left = width as i32 / 2;
    let top = height as i32 - 70 - LEGEND_LINE_HEIGHT * lines.len() as i32;
    let corners = [
        (left - 6, top - 6),
        (
            left + longest * 7 + 6,
            top + LEGEND_LINE_HEIGHT * lines.len() as i32 + 2,
        ),
    ];

    root.draw(&Rectangle::new(corners, WHITE.filled()))
        .map_err(render_error)?;
    root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))
        .map_err(render_error)?;
    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (left, top + i as i32 * LEGEND_LINE_HEIGHT),
            ("sans-serif", 13).into_font(),
        ))
        .map_err(render_error)?;
    }
    Ok(())
}

/// Draw the scene into an SVG file.
pub fn render_svg(path: &Path, scene: &MapScene) -> Result<(), LocatorError> {
    let root = SVGBackend::new(path, MAP_SIZE).into_drawing_area();
    draw_map(&root, scene)?;
    root.present().map_err(render_error)?;
    info!("Map written to {}", path.display());
    Ok(())
}
