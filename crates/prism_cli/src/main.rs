//! Command-line front end: settings file in, HDR image out.
//!
//! Run with: cargo run --release -- scenes/render.cfg

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use prism_core::{load_config, RenderSettings, SceneDescription};
use prism_renderer::{render, Scene};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <config-file>", args[0]);
        std::process::exit(2);
    }

    let settings = load_config(&args[1])
        .with_context(|| format!("Failed to read settings from {}", args[1]))?;
    log::info!("{}", settings);

    run(&settings)
}

fn run(settings: &RenderSettings) -> Result<()> {
    let description = match &settings.scene_path {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::warn!("No scene_path given, rendering the built-in demo scene");
            SceneDescription::demo()
        }
    };

    let start = Instant::now();
    let scene = Scene::from_description(&description, settings.image_width, settings.image_height)
        .context("Invalid scene")?;
    log::info!("Scene built in {:?}", start.elapsed());

    let start = Instant::now();
    let image = render(&scene).context("Render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    save(&image, &settings.output_path)?;
    log::info!("HDR image is finished: {}", settings.output_path.display());
    Ok(())
}

fn save(image: &prism_renderer::FloatImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    image
        .save(path)
        .with_context(|| format!("Failed to save image to {}", path.display()))
}
