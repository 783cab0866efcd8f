// RustPixel
// copyright zipxing@hotmail.com 2022～2025

/// pixel_lesson: random black squares, a rotating sprite and debug text on sdl2
///
/// Usage:
/// cargo run --features sdl
/// cargo run --features sdl -- --config lesson.toml
/// cargo run --features sdl -- --asset-dir /opt/lesson --seed 7 --frames 600
///
/// Exit codes: 0 quit, 1 sdl init, 2 window/renderer, 3 config,
/// 4 image decode, 5 texture upload, 6 font
use clap::Parser;
use log::{error, info};
use pixel_lesson::{
    config::GameConfig,
    error::SetupResult,
    game::Game,
    log::init_log,
    render::adapter::sdl_adapter::SdlAdapter,
    util::get_project_path,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixel_lesson", version, about = "sdl2 lesson: grid squares, sprites and text")]
struct Cli {
    /// toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// directory asset paths are resolved against
    #[arg(short, long)]
    asset_dir: Option<String>,

    /// rng seed for the cell picks
    #[arg(short, long)]
    seed: Option<u64>,

    /// stop after this many frames
    #[arg(short, long)]
    frames: Option<u64>,

    /// log level: off, error, warn, info, debug, trace
    #[arg(short, long)]
    log_level: Option<String>,
}

fn run(cli: Cli) -> SetupResult<()> {
    let mut cfg = GameConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        cfg.seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    let level = cfg.level_filter()?;
    if let Err(e) = init_log(level, &cfg.log_file) {
        eprintln!("log disabled: {}", e);
    }

    let project_path = cli.asset_dir.unwrap_or_else(get_project_path);
    info!("pixel_lesson start... asset path {}", project_path);

    let mut g = Game::new(Box::new(SdlAdapter::new()), &cfg, &project_path)?;
    g.model.frame_limit = cli.frames;
    g.run();
    g.shutdown();
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            error!("{}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}
