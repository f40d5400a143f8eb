mod output;
mod scenes;

use std::{io, sync::Arc};

use clap::{Parser, ValueEnum};
use output::{OutputSink, PpmSink};
use scenes::Setup;
use tracer_core::prelude::*;
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
enum SceneName {
    BouncingSpheres,
    CheckeredSpheres,
    Quads,
    SimpleLight,
    CornellBox,
    CornellSmoke,
    PerlinSpheres,
    Earth,
    FinalScene,
}

/// Renders one of the book's demo scenes to a PPM image on stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(value_enum, default_value_t = SceneName::BouncingSpheres)]
    scene: SceneName,

    /// Image width in pixels; height follows the scene's aspect ratio.
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Samples per pixel.
    #[arg(long, default_value_t = 100)]
    samples: u32,

    /// Maximum bounce depth.
    #[arg(long, default_value_t = 50)]
    depth: u32,

    /// Worker thread count; defaults to available parallelism.
    #[arg(long)]
    threads: Option<usize>,

    /// RNG seed, used both for scene construction and per-thread rendering.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn build(scene: SceneName, seed: u64) -> Setup {
    match scene {
        SceneName::BouncingSpheres => scenes::bouncing_spheres(seed),
        SceneName::CheckeredSpheres => scenes::checkered_spheres(),
        SceneName::Quads => scenes::quads(),
        SceneName::SimpleLight => scenes::simple_light(seed),
        SceneName::CornellBox => scenes::cornell_box(),
        SceneName::CornellSmoke => scenes::cornell_smoke(),
        SceneName::PerlinSpheres => scenes::perlin_spheres(seed),
        SceneName::Earth => scenes::earth(),
        SceneName::FinalScene => scenes::final_scene(seed),
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    let setup = build(args.scene, args.seed);

    let camera = setup
        .camera
        .image_width(args.width)
        .samples_per_pixel(args.samples)
        .max_depth(args.depth)
        .build();

    let settings = RenderSettings { seed: args.seed, thread_count: args.threads };
    let buffer = camera.render(&Arc::new(setup.scene), &settings);

    info!("writing PPM image to stdout");
    PpmSink.write_frame(&buffer, &mut io::stdout().lock())?;
    eprintln!("Done.");

    Ok(())
}
