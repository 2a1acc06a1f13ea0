use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

mod raytracing;
use raytracing::camera::Camera;
use raytracing::output::{save_image, save_ppm};
use raytracing::render::render;
use raytracing::scene::{cornell_box, CAMERA_POSITION};
use raytracing::shading::TraceSettings;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the path where the rendered image is saved as plain text PPM
    #[arg(default_value = "cornellbox.ppm")]
    output: PathBuf,
    /// also save the image in the format given by this path's extension (e.g. png)
    #[arg(long)]
    png: Option<PathBuf>,
    /// let occluders farther than the light cast shadows
    #[arg(long, default_value = "false")]
    unbounded_shadows: bool,
    /// exclude the walls from the shadow test
    #[arg(long, default_value = "false")]
    legacy_planes: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = cornell_box(args.legacy_planes).context("invalid scene geometry")?;
    let camera = Camera::new(CAMERA_POSITION.into());
    let settings = TraceSettings {
        clip_shadow_rays: !args.unbounded_shadows,
        ..Default::default()
    };

    log::info!("Rendering {}x{} image...", WIDTH, HEIGHT);
    let start = Instant::now();
    let frame = render(&scene, &camera, &settings, WIDTH, HEIGHT);
    log::info!(
        "Rendered {} pixels in {:?}",
        frame.pixels.len(),
        start.elapsed()
    );

    save_ppm(&frame, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    if let Some(path) = &args.png {
        save_image(&frame, path).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Saved {}", path.display());
    }
    Ok(())
}
