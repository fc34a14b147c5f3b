use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use inkshape::config::Config;
use inkshape::draw::{PixelGrid, ShapeKind, raster, recognized_outline, tool_outline};
use inkshape::input::Stroke;
use inkshape::recognize::{self, Recognizer};
use inkshape::util::Point;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fs, io};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("INKSHAPE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "inkshape")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand shape recognition and pixel-grid shape rasterization"
)]
struct Cli {
    /// Config file to use instead of ~/.config/inkshape/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a freehand stroke given as a JSON array of points
    Recognize {
        /// Stroke file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print the generated vector outline instead of the shape
        #[arg(long)]
        outline: bool,

        /// Snap the result to its perfect form (square, circle, 15° line)
        #[arg(long)]
        perfect: bool,
    },

    /// Rasterize a shape onto grid cells between two row,col anchors
    Rasterize {
        /// line, rectangle, square, circle, oval, or star
        shape: ShapeKind,

        #[arg(long, value_name = "ROW,COL", value_parser = parse_pair::<i32>, allow_hyphen_values = true)]
        from: (i32, i32),

        #[arg(long, value_name = "ROW,COL", value_parser = parse_pair::<i32>, allow_hyphen_values = true)]
        to: (i32, i32),

        /// Fill the interior (ignored for lines)
        #[arg(long)]
        filled: bool,

        /// Render an ASCII grid ('#' painted, '.' empty) instead of listing cells
        #[arg(long)]
        grid: bool,

        /// Flood fill the rendered grid from this cell, marking it with '+'
        #[arg(long, value_name = "ROW,COL", value_parser = parse_pair::<i32>, requires = "grid")]
        fill_at: Option<(i32, i32)>,
    },

    /// Print the vector outline of a shape-tool drag between two x,y points
    Outline {
        shape: ShapeKind,

        #[arg(long, value_name = "X,Y", value_parser = parse_pair::<f64>, allow_hyphen_values = true)]
        from: (f64, f64),

        #[arg(long, value_name = "X,Y", value_parser = parse_pair::<f64>, allow_hyphen_values = true)]
        to: (f64, f64),
    },

    /// Create, describe, or print the configuration
    #[command(group(ArgGroup::new("action").required(true).args(["init", "schema", "show"])))]
    Config {
        /// Write the documented example config
        #[arg(long)]
        init: bool,

        /// Print the JSON schema of the config file
        #[arg(long)]
        schema: bool,

        /// Print the effective configuration as TOML
        #[arg(long)]
        show: bool,
    },
}

/// Parses `a,b` into two values of the same type.
fn parse_pair<T: FromStr>(s: &str) -> Result<(T, T), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated values, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<T>()
            .map_err(|_| format!("'{}' is not a valid number", part.trim()))
    };
    Ok((parse(a)?, parse(b)?))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    match cli.command {
        Command::Recognize {
            file,
            outline,
            perfect,
        } => run_recognize(&config_path, file.as_deref(), outline, perfect),
        Command::Rasterize {
            shape,
            from,
            to,
            filled,
            grid,
            fill_at,
        } => {
            let cells = raster::rasterize(shape, from.0, from.1, to.0, to.1, filled);
            log::debug!("Rasterized {shape} into {} cells", cells.len());
            if grid {
                print_grid(&cells, fill_at);
            } else {
                for (row, col) in cells {
                    println!("{row},{col}");
                }
            }
            Ok(())
        }
        Command::Outline { shape, from, to } => {
            let config = Config::load_from(&config_path)?;
            let points = tool_outline(
                shape,
                Point::from(from),
                Point::from(to),
                &config.outline,
            );
            println!("{}", serde_json::to_string_pretty(&points)?);
            Ok(())
        }
        Command::Config { init, schema, .. } => {
            if init {
                Config::create_default_file(&config_path)?;
                println!("Created config at {}", config_path.display());
            } else if schema {
                println!("{}", Config::json_schema()?);
            } else {
                let config = Config::load_from(&config_path)?;
                print!(
                    "{}",
                    toml::to_string_pretty(&config).context("Failed to serialize config")?
                );
            }
            Ok(())
        }
    }
}

fn run_recognize(config_path: &Path, file: Option<&Path>, outline: bool, perfect: bool) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read stroke from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stroke from stdin")?;
            text
        }
    };
    let stroke = Stroke::from_json(&text).context("Failed to parse stroke")?;

    let config = Config::load_from(config_path)?;
    let recognizer = Recognizer::new(config.recognizer.clone());
    let mut shape = recognizer.recognize(stroke.points());
    if shape.is_none() {
        log::info!("No shape recognized in {} points", stroke.len());
    }

    if perfect {
        shape = shape.map(|s| {
            if recognize::can_be_perfected(&s, recognizer.config()) {
                recognize::perfect(&s, recognizer.config())
            } else {
                s
            }
        });
    }

    let json = if outline {
        let points = shape.map(|s| recognized_outline(&s, &config.outline));
        serde_json::to_string_pretty(&points)?
    } else {
        serde_json::to_string_pretty(&shape)?
    };
    println!("{json}");
    Ok(())
}

/// Prints `cells` as rows of '#' and '.', covering rows and columns from zero to
/// the furthest painted cell. Cells with negative coordinates are clipped.
fn print_grid(cells: &[(i32, i32)], fill_at: Option<(i32, i32)>) {
    let extent = |pick: fn(&(i32, i32)) -> i32| {
        cells
            .iter()
            .chain(fill_at.iter())
            .map(pick)
            .max()
            .map_or(1, |max| usize::try_from(max + 1).unwrap_or(0).max(1))
    };
    let height = extent(|cell| cell.0);
    let width = extent(|cell| cell.1);

    let mut grid = PixelGrid::new(width, height);
    grid.paint(cells, '#');
    if let Some((row, col)) = fill_at {
        let filled = grid.flood_fill(row, col, '+');
        log::debug!("Flood fill from {row},{col} changed {filled} cells");
    }

    for row in 0..grid.height() as i32 {
        let line: String = (0..grid.width() as i32)
            .map(|col| grid.get(row, col).copied().unwrap_or('.'))
            .collect();
        println!("{line}");
    }
}
