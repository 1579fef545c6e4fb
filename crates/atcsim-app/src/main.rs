//! ATCSIM headless runner.
//!
//! Reads controller commands as JSON lines on stdin and writes one frame
//! snapshot per line on stdout. Logs go to stderr (`RUST_LOG`, default
//! `info`).

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atcsim_app::config::load_settings;
use atcsim_app::frame_loop::{spawn_frame_loop, LoopConfig};
use atcsim_app::state::latest_snapshot;
use atcsim_app::{bridge, loader};
use atcsim_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(version, about = "Headless ATC radar training simulator")]
struct Args {
    /// Settings file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation records (JSON); overrides `nav_data` from the settings.
    #[arg(short, long)]
    nav_data: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(short, long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.nav_data.is_some() {
        settings.nav_data = args.nav_data;
    }

    let engine = SimulationEngine::new(&settings).context("building simulation")?;
    let bounds = *engine.projection().bounds();

    let latest = latest_snapshot();
    let (tx, frame_loop) = spawn_frame_loop(
        engine,
        LoopConfig {
            frame_rate_hz: settings.frame_rate_hz,
            max_frames: args.frames,
        },
        Box::new(io::stdout()),
        latest.clone(),
    )
    .context("starting frame loop")?;

    match settings.nav_data.clone() {
        Some(path) => {
            loader::spawn_nav_loader(path, bounds, tx.clone())
                .context("starting navigation loader")?;
        }
        None => info!("no navigation data configured"),
    }
    bridge::spawn_stdin_bridge(tx).context("starting command input")?;

    let frames = frame_loop
        .join()
        .map_err(|_| anyhow::anyhow!("frame loop thread panicked"))?;

    let sweeps = latest
        .lock()
        .ok()
        .and_then(|lock| lock.as_ref().map(|snap| snap.time.sweeps))
        .unwrap_or(0);
    info!(frames, sweeps, "simulation finished");
    Ok(())
}
