use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Spheres on a floor with hard and soft shadows
    Spheres,
    /// Pyramids, a cube and a mirror with transparent surfaces
    Pyramids,
    /// Cylinders and tubes under a spot light
    Cylinders,
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Recursive Phong ray tracer with soft shadows")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "spheres")]
    pub scene: DemoScene,

    /// Image width in pixels
    #[arg(long, default_value = "500")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "500")]
    pub height: u32,

    /// Rays per pixel (overrides the config file)
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Worker threads, 0 for one per core (overrides the config file)
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// JSON render config
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Output image, format taken from the extension (.png, .ppm)
    #[arg(long, short = 'o', default_value = "lumen.png")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Trace against the flat scene list instead of a BVH
    #[arg(long)]
    pub no_bvh: bool,
}
