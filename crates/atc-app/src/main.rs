use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atc_app::game_loop::{run_loop, LoopOptions};
use atc_app::renderer::{spawn_stdin_reader, JsonLinesRenderer};
use atc_core::config::AtcConfig;
use atc_sim::AirspaceController;

/// Headless ATC zone simulation. Snapshots go to stdout as JSON lines; type
/// `spawn` or `quit` on stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Run as fast as possible instead of at the transmit rate
    #[arg(long)]
    no_pacing: bool,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AtcConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AtcConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut controller = AirspaceController::new(config).context("invalid configuration")?;
    let input = spawn_stdin_reader().context("starting input thread")?;
    let mut renderer = JsonLinesRenderer::with_input(io::stdout().lock(), input);

    let options = LoopOptions {
        max_ticks: args.ticks,
        pacing: !args.no_pacing,
    };
    let ticks = run_loop(&mut controller, &mut renderer, options);

    info!(
        ticks,
        landed = controller.landed_count(),
        active = controller.aircraft_count(),
        "{controller} shut down"
    );
    Ok(())
}
