//! Validated freehand strokes.

use crate::util::Point;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while building a [`Stroke`].
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("stroke needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("point {index} has a non-finite coordinate or timestamp")]
    NonFinite { index: usize },

    #[error("timestamp of point {index} goes backwards")]
    DecreasingTime { index: usize },

    #[error("timestamps must be given for every point or for none")]
    PartialTimestamps,

    #[error("invalid stroke JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered pen samples with optional timestamps in seconds.
///
/// Construction guarantees at least two finite points and, when timestamps are
/// present, one non-decreasing timestamp per point.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    times: Option<Vec<f64>>,
}

/// One JSON sample: `[x, y]`, `[x, y, t]`, or `{"x": .., "y": .., "t": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSample {
    Pair([f64; 2]),
    Timed([f64; 3]),
    Object { x: f64, y: f64, t: Option<f64> },
}

impl RawSample {
    fn split(self) -> (Point, Option<f64>) {
        match self {
            RawSample::Pair([x, y]) => (Point::new(x, y), None),
            RawSample::Timed([x, y, t]) => (Point::new(x, y), Some(t)),
            RawSample::Object { x, y, t } => (Point::new(x, y), t),
        }
    }
}

impl Stroke {
    /// Untimed stroke.
    pub fn new(points: Vec<Point>) -> Result<Self, StrokeError> {
        Self::validate_points(&points)?;
        Ok(Self {
            points,
            times: None,
        })
    }

    /// Stroke with one timestamp per point.
    pub fn with_times(points: Vec<Point>, times: Vec<f64>) -> Result<Self, StrokeError> {
        Self::validate_points(&points)?;
        if times.len() != points.len() {
            return Err(StrokeError::PartialTimestamps);
        }
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(StrokeError::NonFinite { index });
        }
        if let Some(index) = times.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(StrokeError::DecreasingTime { index: index + 1 });
        }
        Ok(Self {
            points,
            times: Some(times),
        })
    }

    /// Parses a JSON array of samples.
    pub fn from_json(text: &str) -> Result<Self, StrokeError> {
        let raw: Vec<RawSample> = serde_json::from_str(text)?;
        let (points, times): (Vec<Point>, Vec<Option<f64>>) =
            raw.into_iter().map(RawSample::split).unzip();

        match times.iter().filter(|t| t.is_some()).count() {
            0 => Self::new(points),
            n if n == times.len() => Self::with_times(points, times.into_iter().flatten().collect()),
            _ => Err(StrokeError::PartialTimestamps),
        }
    }

    fn validate_points(points: &[Point]) -> Result<(), StrokeError> {
        if points.len() < 2 {
            return Err(StrokeError::TooFewPoints(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(StrokeError::NonFinite { index });
        }
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn times(&self) -> Option<&[f64]> {
        self.times.as_deref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Seconds between the first and last sample, if timed.
    pub fn duration(&self) -> Option<f64> {
        let times = self.times.as_ref()?;
        Some(times.last()? - times.first()?)
    }
}
