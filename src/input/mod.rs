//! Stroke input.
//!
//! Freehand strokes arrive as raw point lists (from JSON in the CLI). This
//! module validates them before they reach the recognizer.

pub mod stroke;

// Re-export commonly used types at module level
pub use stroke::{Stroke, StrokeError};
