//! Configuration file support for inkshape.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkshape/config.toml`. Settings cover which shapes the recognizer
//! may report, its snapping thresholds, and the density of generated outlines.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{OutlineConfig, RecognizerConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Example configuration with documentation comments, written by `config --init`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [recognizer]
/// disabled_shapes = ["triangle"]
/// axis_snap_degrees = 5.0
///
/// [outline]
/// ellipse_segments = 64
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Freehand recognition and snapping
    #[serde(default)]
    pub recognizer: RecognizerConfig,

    /// Vector outline sampling
    #[serde(default)]
    pub outline: OutlineConfig,
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(&*value) {
        log::warn!("Invalid {name} {value:.3}, clamping to {min}-{max} range");
        // NaN fails `contains` but survives `clamp`
        *value = if value.is_nan() { min } else { (*value).clamp(min, max) };
    }
}

fn clamp_u32(name: &str, value: &mut u32, min: u32, max: u32) {
    if !(min..=max).contains(&*value) {
        log::warn!("Invalid {name} {value}, clamping to {min}-{max} range");
        *value = (*value).clamp(min, max);
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `axis_snap_degrees`: 0.0 - 45.0
    /// - `square_snap_aspect`, `circle_snap_aspect`: 0.0 - 1.0
    /// - `perfect_aspect_tolerance`: 0.0 - 0.5
    /// - `line_angle_step_degrees`: 1.0 - 90.0
    /// - `ellipse_segments`: 8 - 720, `arc_segments`: 4 - 720
    /// - `rectangle_edge_points`, `polygon_edge_points`: 1 - 200
    pub fn validate_and_clamp(&mut self) {
        let r = &mut self.recognizer;
        clamp_f64("axis_snap_degrees", &mut r.axis_snap_degrees, 0.0, 45.0);
        clamp_f64("square_snap_aspect", &mut r.square_snap_aspect, 0.0, 1.0);
        clamp_f64("circle_snap_aspect", &mut r.circle_snap_aspect, 0.0, 1.0);
        clamp_f64(
            "perfect_aspect_tolerance",
            &mut r.perfect_aspect_tolerance,
            0.0,
            0.5,
        );
        clamp_f64(
            "line_angle_step_degrees",
            &mut r.line_angle_step_degrees,
            1.0,
            90.0,
        );

        let o = &mut self.outline;
        clamp_u32("ellipse_segments", &mut o.ellipse_segments, 8, 720);
        clamp_u32("rectangle_edge_points", &mut o.rectangle_edge_points, 1, 200);
        clamp_u32("polygon_edge_points", &mut o.polygon_edge_points, 1, 200);
        clamp_u32("arc_segments", &mut o.arc_segments, 4, 720);

        let before = self.recognizer.disabled_shapes.len();
        let mut seen = Vec::with_capacity(before);
        self.recognizer.disabled_shapes.retain(|kind| {
            let fresh = !seen.contains(kind);
            seen.push(*kind);
            fresh
        });
        if self.recognizer.disabled_shapes.len() != before {
            debug!("Dropped duplicate entries from disabled_shapes");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkshape/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkshape");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `path`, or returns defaults if the file does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax or unknown shape names
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the config tree, pretty-printed.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}
