//! Simple ray tracer example.
//!
//! Renders the "room" preset and saves it in PPM format.

use sable_core::Preset;
use sable_renderer::{render_parallel, PixelBuffer, RenderConfig};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sable Ray Tracer - Simple Example");
    println!("=================================");

    let scene = Preset::Room.scene()?;
    let config = RenderConfig::default().with_max_depth(5);

    println!(
        "Rendering '{}' at 800x800, depth {}...",
        scene.name(),
        config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, 800, 800, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn save_ppm(image: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for rgba in image.pixels() {
        writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
    }

    Ok(())
}
