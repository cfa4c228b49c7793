use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render, RenderConfig, SimpleRayTracer};
use std::time::Instant;

mod cli;
mod logger;
mod scenes;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }

    let demo = scenes::build(args.scene).context("failed to build scene")?;
    let camera = demo
        .camera
        .resolution(args.width, args.height)
        .build()
        .context("invalid camera")?;

    let mut scene = demo.scene;
    log::info!(
        "Scene '{}': {} primitives, {} lights",
        scene.name,
        scene.geometries.leaf_count(),
        scene.lights.len()
    );

    if args.no_bvh {
        log::info!("BVH disabled");
    } else {
        let start = Instant::now();
        scene = scene.build_bvh();
        log::info!(
            "BVH built in {:.2?} (depth {})",
            start.elapsed(),
            scene.geometries.depth()
        );
    }

    let tracer = SimpleRayTracer::new(&scene, config.tracer);
    let image = render(&camera, &tracer, &config)?;
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
