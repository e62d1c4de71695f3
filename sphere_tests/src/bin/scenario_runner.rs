//! Scenario runner.
//!
//! Runs the long-form gameplay scenarios outside the test harness so
//! they can be scripted in CI with custom tick counts, and prints a
//! plain pass/fail summary.
//!
//! Usage:
//!   cargo run -p sphere_tests --bin scenario_runner -- [ticks]

use std::f64::consts::PI;
use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use sphere_client::input;
use sphere_core::config::WorldConfig;
use sphere_core::field::{ParticleField, SessionState};
use sphere_core::intent::Intent;
use sphere_core::projection::ProjectionModel;

struct Outcome {
    name: &'static str,
    passed: bool,
    detail: String,
    seconds: f64,
}

fn run_scenario(
    name: &'static str,
    f: impl FnOnce() -> anyhow::Result<String>,
) -> Outcome {
    let start = Instant::now();
    let result = f();
    let seconds = start.elapsed().as_secs_f64();
    match result {
        Ok(detail) => Outcome {
            name,
            passed: true,
            detail,
            seconds,
        },
        Err(e) => Outcome {
            name,
            passed: false,
            detail: format!("{e:#}"),
            seconds,
        },
    }
}

fn forward_walk(ticks: u64) -> anyhow::Result<String> {
    let cfg = WorldConfig {
        particle_count: 15,
        sphere_radius: 320.0,
        min_separation: Some(PI / 9.0),
        ..WorldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = ParticleField::new(cfg, &mut rng)?;

    field.tick(Intent::IDLE);
    for tick in 0..ticks {
        field.tick(Intent::forward());
        anyhow::ensure!(field.order_is_valid(), "ordering broke at tick {tick}");
    }
    Ok(format!("{ticks} ticks, ordering intact"))
}

fn scripted_marathon(ticks: u64, model: ProjectionModel) -> anyhow::Result<String> {
    let cfg = WorldConfig {
        particle_count: 100,
        projection: model,
        countdown_ticks: u32::MAX,
        ..WorldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(77);
    let mut field = ParticleField::new(cfg, &mut rng)?;

    let mut restarts = 0;
    field.tick(Intent::IDLE);
    for tick in 0..ticks {
        let state = field.tick(input::build_intent(input::scripted_keys(tick)));
        anyhow::ensure!(field.order_is_valid(), "ordering broke at tick {tick}");
        if state == SessionState::Won {
            restarts += 1;
            field.restart(&mut rng)?;
        }
    }
    Ok(format!(
        "{ticks} ticks, {} touched, {restarts} wins",
        field.touched_count()
    ))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5_000);

    let outcomes = vec![
        run_scenario("forward_walk", || forward_walk(ticks)),
        run_scenario("scripted_telephoto", || {
            scripted_marathon(ticks, ProjectionModel::Telephoto)
        }),
        run_scenario("scripted_dolly_out", || {
            scripted_marathon(ticks, ProjectionModel::DollyOut)
        }),
    ];

    println!("scenario results ({ticks} ticks each)");
    println!("------------------------------------");
    let mut failed = 0;
    for o in &outcomes {
        let mark = if o.passed { "ok  " } else { "FAIL" };
        println!("{mark} {:<20} {:.2}s  {}", o.name, o.seconds, o.detail);
        if !o.passed {
            failed += 1;
        }
    }
    println!("------------------------------------");
    println!("{} passed, {failed} failed", outcomes.len() - failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
