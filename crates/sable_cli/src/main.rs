use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sable_core::{load_scene, Preset, Scene};
use sable_renderer::{render, render_parallel, PixelBuffer, RenderConfig};

/// Render a sphere scene with a recursive ray tracer.
#[derive(Parser, Debug)]
#[command(name = "sable", version)]
struct Args {
    /// Built-in scene to render (room, basic, shiny, mirrors, colored)
    #[arg(short, long, conflicts_with = "scene")]
    preset: Option<Preset>,

    /// JSON scene file to render instead of a preset
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Maximum reflection depth
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// Disable mirror reflections
    #[arg(long)]
    no_reflections: bool,

    /// Disable inverse-square falloff for point lights
    #[arg(long)]
    no_falloff: bool,

    /// Average coloured lights to grey
    #[arg(long)]
    mono: bool,

    /// Render buckets in parallel
    #[arg(long)]
    parallel: bool,

    /// Output image (format from extension: .png or .ppm)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// List the built-in presets and exit
    #[arg(long)]
    list_presets: bool,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_max_depth(self.depth)
            .with_shadows(!self.no_shadows)
            .with_reflections(!self.no_reflections)
            .with_inverse_square_falloff(!self.no_falloff)
            .with_per_channel_intensity(!self.mono)
    }

    fn load(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => {
                let preset = self.preset.unwrap_or(Preset::Room);
                preset
                    .scene()
                    .with_context(|| format!("Failed to build preset {preset}"))
            }
        }
    }
}

fn save_image(image: &PixelBuffer, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(image.width(), image.height(), image.as_bytes().to_vec())
        .context("Pixel buffer does not match its dimensions")?;
    // Alpha is always opaque; RGB keeps every output format happy.
    image::DynamicImage::ImageRgba8(rgba)
        .to_rgb8()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_presets {
        for preset in Preset::ALL {
            println!("{preset}");
        }
        return Ok(());
    }

    let scene = args.load()?;
    let config = args.render_config();

    let image = if args.parallel {
        render_parallel(&scene, args.width, args.height, &config)?
    } else {
        render(&scene, args.width, args.height, &config)?
    };

    save_image(&image, &args.output)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
