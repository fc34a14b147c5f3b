//! Library exports for the inkshape shape engine.
//!
//! Exposes the rasterizer, outline generator, and freehand recognizer together
//! with their configuration so that host applications and the `inkshape` CLI
//! share one implementation.

pub mod config;
pub mod draw;
pub mod input;
pub mod recognize;
pub mod util;

pub use config::Config;
pub use draw::{RecognizedShape, ShapeKind};
pub use recognize::{Recognizer, recognize};
