//! Freehand stroke recognition.
//!
//! A stroke is tested against each detector in a fixed priority order and the
//! first match wins:
//!
//! 1. line (open and straight)
//! 2. arc (open and curved)
//! 3. rectangle (closed, 3-5 corners)
//! 4. triangle (closed, 2-3 corners)
//! 5. circle (closed and smooth)
//!
//! Closed polygons are tried before the circle because a hand-drawn square also
//! fits an ellipse reasonably well.

mod arc;
mod circle;
mod line;
pub mod path;
mod rectangle;
pub mod snap;
mod triangle;


pub use crate::draw::{RecognizedKind, RecognizedShape};
pub use snap::{can_be_perfected, perfect};

use crate::config::RecognizerConfig;
use crate::util::Point;
use log::debug;

/// Strokes with fewer points are never classified.
pub const MIN_POINTS: usize = 4;

const ORDER: [RecognizedKind; 5] = [
    RecognizedKind::Line,
    RecognizedKind::Arc,
    RecognizedKind::Rectangle,
    RecognizedKind::Triangle,
    RecognizedKind::Circle,
];

/// Classifies strokes using a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Idealized shape for `points`, or `None` when nothing fits.
    pub fn recognize(&self, points: &[Point]) -> Option<RecognizedShape> {
        if points.len() < MIN_POINTS || !self.config.enabled {
            return None;
        }

        let shape = ORDER
            .into_iter()
            .filter(|&kind| self.config.allows(kind))
            .find_map(|kind| self.run(kind, points))?;
        debug!("Recognized {} with bounds {:?}", shape.kind(), shape.bounds());
        Some(shape)
    }

    fn run(&self, kind: RecognizedKind, points: &[Point]) -> Option<RecognizedShape> {
        match kind {
            RecognizedKind::Line => line::detect(points, &self.config),
            RecognizedKind::Arc => arc::detect(points),
            RecognizedKind::Rectangle => rectangle::detect(points, &self.config),
            RecognizedKind::Triangle => triangle::detect(points),
            RecognizedKind::Circle => circle::detect(points, &self.config),
        }
    }
}

/// Recognizes `points` with the default configuration.
pub fn recognize(points: &[Point]) -> Option<RecognizedShape> {
    Recognizer::default().recognize(points)
}
