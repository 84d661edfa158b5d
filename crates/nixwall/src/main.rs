//! Generate the scattered-lambda wallpaper.
//!
//! Usage: `nixwall [CONFIG.json]`. Without a config file the stock
//! 2560x1440 wallpaper is written to `nixwall.svg`. Set `RUST_LOG=debug`
//! for scatter statistics.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use nixwall_core::{GeneratorConfig, SceneComposer};
use nixwall_io::{load_config, write_svg_file};

fn read_config(arg: Option<PathBuf>) -> Result<GeneratorConfig> {
    match arg {
        Some(path) => load_config(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!("usage: nixwall [CONFIG.json]");
    }

    let config = read_config(config_path)?;
    let output = config.output.clone();
    let composer = SceneComposer::new(config).context("invalid configuration")?;

    let scene = composer.compose(&mut rand::thread_rng());
    log::info!(
        "Composed {} shapes ({} scattered lambdas)",
        scene.shape_count(),
        scene.scatter_accepted
    );

    write_svg_file(&scene, Path::new(&output))
        .with_context(|| format!("writing {}", output))?;
    Ok(())
}
