use std::collections::VecDeque;
use std::io::{BufRead, Write};

use geo_types::Point;
use tracing::debug;

use crate::domain::types::Coordinate;
use crate::error::LocatorError;

pub const LONGITUDE_PROMPT: &str = "Enter your Longitude (in EPSG:4326 format): ";
pub const LATITUDE_PROMPT: &str = "Enter your Latitude (in EPSG:4326 format): ";

/// Where the user's position comes from.
pub trait CoordinateSource {
    /// Next raw value for `axis` ("longitude" / "latitude"), or `None` once exhausted.
    fn next_value(&mut self, axis: &'static str, prompt: &str) -> Result<Option<String>, LocatorError>;

    fn read_user_location(&mut self) -> Result<Coordinate, LocatorError> {
        let longitude = self.read_axis("longitude", LONGITUDE_PROMPT)?;
        let latitude = self.read_axis("latitude", LATITUDE_PROMPT)?;
        debug!("User location: ({}, {})", longitude, latitude);
        Ok(Point::new(longitude, latitude))
    }

    fn read_axis(&mut self, axis: &'static str, prompt: &str) -> Result<f64, LocatorError> {
        let raw = self
            .next_value(axis, prompt)?
            .ok_or(LocatorError::MissingInput(axis))?;
        parse_coordinate(axis, &raw)
    }
}

/// Any finite real number; no range check is applied.
pub fn parse_coordinate(axis: &'static str, raw: &str) -> Result<f64, LocatorError> {
    let trimmed = raw.trim();
    let invalid = || LocatorError::InvalidCoordinate {
        axis,
        input: trimmed.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Prompts on `prompt_out` and reads one line per value from `reader`.
/// Covers both the interactive terminal and a piped file.
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        LineInput { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> CoordinateSource for LineInput<R, W> {
    fn next_value(&mut self, axis: &'static str, prompt: &str) -> Result<Option<String>, LocatorError> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            debug!("Input closed before {} was entered", axis);
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Pre-recorded answers, for tests and scripted runs.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    values: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_location(longitude: f64, latitude: f64) -> Self {
        Self::new([longitude.to_string(), latitude.to_string()])
    }
}

impl CoordinateSource for ScriptedInput {
    fn next_value(&mut self, _axis: &'static str, _prompt: &str) -> Result<Option<String>, LocatorError> {
        Ok(self.values.pop_front())
    }
}
