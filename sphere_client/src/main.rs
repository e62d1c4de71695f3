//! Standalone headless client.
//!
//! Usage:
//!   cargo run -p sphere_client -- [--config world.json] [--ticks 2000] [--seed 1]
//!
//! Drives a session at a fixed tick rate with scripted intent, logging
//! snapshot statistics. Terminal states trigger an automatic restart,
//! standing in for the host's restart key.

use std::env;
use std::time::Duration;

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use sphere_client::input;
use sphere_core::config::WorldConfig;
use sphere_core::field::{ParticleField, SessionState};
use tracing::info;

struct Args {
    config_path: Option<String>,
    ticks: u64,
    seed: u64,
    /// Run flat out instead of sleeping between ticks.
    no_throttle: bool,
}

fn parse_args() -> Args {
    let mut parsed = Args {
        config_path: None,
        ticks: 2_000,
        seed: 1,
        no_throttle: false,
    };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                parsed.config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--ticks" if i + 1 < args.len() => {
                parsed.ticks = args[i + 1].parse().unwrap_or(parsed.ticks);
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                parsed.seed = args[i + 1].parse().unwrap_or(parsed.seed);
                i += 2;
            }
            "--no-throttle" => {
                parsed.no_throttle = true;
                i += 1;
            }
            _ => i += 1,
        }
    }
    parsed
}

fn load_config(path: Option<&str>) -> anyhow::Result<WorldConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {path}"))?;
            WorldConfig::from_json_str(&text).with_context(|| format!("parse config {path}"))
        }
        None => Ok(WorldConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args();
    let cfg = load_config(args.config_path.as_deref())?;
    info!(
        particles = cfg.particle_count,
        radius = cfg.sphere_radius,
        projection = ?cfg.projection,
        seed = args.seed,
        "starting session"
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut field = ParticleField::new(cfg, &mut rng).context("spawn field")?;

    let tick_interval = Duration::from_secs_f64(1.0 / 60.0);

    for tick in 0..args.ticks {
        let intent = input::build_intent(input::scripted_keys(tick));
        let state = field.tick(intent);

        match state {
            SessionState::Won => {
                info!(tick, "session won, restarting");
                field.restart(&mut rng).context("restart")?;
            }
            SessionState::TimedOut => {
                info!(tick, touched = field.touched_count(), "timed out, restarting");
                field.restart(&mut rng).context("restart")?;
            }
            SessionState::Spawning | SessionState::Active => {}
        }

        if tick % 64 == 0 {
            let snap = field.snapshot();
            info!(
                tick,
                visible = snap.sprites.len(),
                segments = snap.background.len(),
                touched = field.touched_count(),
                remaining = field.remaining_ticks(),
                "snapshot"
            );
        }

        if !args.no_throttle {
            std::thread::sleep(tick_interval);
        }
    }

    info!("done");
    Ok(())
}
