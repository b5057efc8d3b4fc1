extern crate rust_raytracer as root;

use root::parsing::{construct_camera, construct_world, get_settings, parse_tonemapper};
use root::prelude::*;
use root::tonemap::write_png;

use std::path::{Path, PathBuf};

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
    #[structopt(long, default_value = "output")]
    pub output_dir: String,
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config = get_settings(Path::new(&opts.config_file))?;

    // override scene file based on provided command line argument
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file;
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads as usize)
        .build_global()
        .context("failed to build the global thread pool")?;

    let world = construct_world(config.scene_file.as_deref().map(Path::new))?;
    let camera = construct_camera(&config);
    let settings = &config.render_settings;

    let integrator = WhittedIntegrator {
        world: &world,
        shading: PhongShading::new(settings.shading),
        max_bounces: settings.max_bounces,
        shadow_policy: settings.shadow_policy,
        scan_mode: settings.scan_mode,
        background: settings.background,
    };
    info!(
        "max bounces {}, {:?} shadows, {:?} scan",
        integrator.max_bounces, integrator.shadow_policy, integrator.scan_mode
    );

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let film = NaiveRenderer::new().render(
        &integrator,
        &camera,
        settings.resolution.width,
        settings.resolution.height,
    );

    let filename = settings
        .filename
        .clone()
        .unwrap_or_else(|| String::from("beauty"));
    let png_filename = PathBuf::from(&opts.output_dir).join(format!("{}.png", filename));
    let tonemapper = parse_tonemapper(settings.tonemap_settings);
    write_png(&film, tonemapper.as_ref(), &png_filename)
}

fn main() {
    let opts = Opt::from_args();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(opts) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
