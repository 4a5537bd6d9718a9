//! netviz-replay binary
//!
//! Loads a JSON scenario, drives playback headless, and prints the final
//! scene state. Useful for checking that a recording replays to the same
//! state hash regardless of how it is scrubbed.
//!
//! ## Logging
//!
//! Set `RUST_LOG` to control verbosity (default `info`); logs go to stderr.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use netviz::prelude::*;
use serde::Serialize;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "netviz-replay", about = "Headless netviz scenario replay", version)]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Jump to this time (ms) after loading
    #[arg(long)]
    seek: Option<f64>,

    /// Play from the current time until the end bound pauses playback
    #[arg(long)]
    play: bool,

    /// Override the scenario's per-tick step (ms, negative rewinds)
    #[arg(long, allow_negative_numbers = true)]
    step_ms: Option<f64>,

    /// Stop playing after this many ticks
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Print entity state as JSON instead of text
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NodeReport<'a> {
    id: NodeId,
    label: Option<&'a str>,
    position: [f32; 3],
    orientation: Orientation,
    base_color: Option<Rgb>,
    highlight_color: Option<Rgb>,
    trail_len: usize,
    transmitting: bool,
}

#[derive(Serialize)]
struct SceneReport<'a> {
    time_ms: f64,
    mode: PlayMode,
    applied: usize,
    pending: usize,
    state_hash: String,
    nodes: Vec<NodeReport<'a>>,
}

fn report(scene: &Scene) -> SceneReport<'_> {
    SceneReport {
        time_ms: scene.now().as_millis_f64(),
        mode: scene.mode(),
        applied: scene.store().history_len(),
        pending: scene.store().pending_len(),
        state_hash: format!("{:016x}", scene.state_hash()),
        nodes: scene
            .nodes()
            .map(|n| NodeReport {
                id: n.id(),
                label: n.label(),
                position: n.position().to_array(),
                orientation: n.orientation(),
                base_color: n.base_color(),
                highlight_color: n.highlight_color(),
                trail_len: n.trail().len(),
                transmitting: n.is_transmitting(),
            })
            .collect(),
    }
}

fn print_text(r: &SceneReport<'_>) {
    println!(
        "t={:.3}ms mode={} applied={} pending={} hash={}",
        r.time_ms, r.mode, r.applied, r.pending, r.state_hash
    );
    for n in &r.nodes {
        let color = |c: Option<Rgb>| c.map_or_else(|| "-".to_string(), |c| c.to_string());
        println!(
            "  node {:>4} {:<12} pos=({:.3}, {:.3}, {:.3}) base={} highlight={} trail={}{}",
            n.id,
            n.label.unwrap_or(""),
            n.position[0],
            n.position[1],
            n.position[2],
            color(n.base_color),
            color(n.highlight_color),
            n.trail_len,
            if n.transmitting { " transmitting" } else { "" },
        );
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let path = args.scenario.clone();

    let mut scene = Scene::default();
    scene.begin_load(path.display().to_string(), move || {
        let text = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str::<Scenario>(&text)?)
    })?;
    let ingest = match scene.wait_load() {
        Some(result) => result
            .with_context(|| format!("loading {}", args.scenario.display()))?,
        None => bail!("no scenario load was in flight"),
    };
    if ingest.dropped_unknown > 0 {
        tracing::warn!(
            dropped = ingest.dropped_unknown,
            "events referenced unknown entities"
        );
    }

    if let Some(step) = args.step_ms {
        let delta = TimeDelta::from_millis_f64(step);
        if !step.is_finite() || delta == TimeDelta::ZERO {
            bail!("--step-ms must be finite and at least 1ns, got {step}");
        }
        scene.set_time_step(delta);
    }

    if let Some(ms) = args.seek {
        if !ms.is_finite() || ms < 0.0 {
            bail!("--seek must be a non-negative time, got {ms}");
        }
        let stats = scene.set_time(SimTime::from_millis_f64(ms));
        tracing::info!(applied = stats.applied, undone = stats.undone, "seek complete");
    }

    if args.play {
        if scene.config().end_time.is_none() && scene.time_step().is_forward() {
            tracing::warn!(max_ticks = args.max_ticks, "no end_time; playing until tick limit");
        }
        scene.play();
        let mut ticks = 0u64;
        while scene.mode() == PlayMode::Playing && ticks < args.max_ticks {
            scene.tick();
            ticks += 1;
        }
        scene.pause();
        let m = scene.metrics();
        tracing::info!(
            ticks,
            applied = m.events_applied,
            undone = m.events_undone,
            dropped = m.events_dropped,
            "playback finished"
        );
    }

    let r = report(&scene);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&r)?);
    } else {
        print_text(&r);
    }
    Ok(())
}
