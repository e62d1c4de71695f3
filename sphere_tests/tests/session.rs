//! Full-session scenarios across crate boundaries.

use std::f64::consts::PI;

use rand::{rngs::StdRng, SeedableRng};
use sphere_core::config::WorldConfig;
use sphere_core::field::{ParticleField, SessionState};
use sphere_core::intent::Intent;

fn separated_config() -> WorldConfig {
    WorldConfig {
        particle_count: 15,
        sphere_radius: 320.0,
        min_separation: Some(PI / 9.0),
        ..WorldConfig::default()
    }
}

/// Walking forward for 500 ticks keeps the depth ordering valid after
/// every tick and never changes the particle count.
#[test]
fn forward_walk_keeps_order_valid() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = ParticleField::new(separated_config(), &mut rng)?;

    field.tick(Intent::IDLE);
    for tick in 0..500 {
        field.tick(Intent::forward());
        assert!(field.order_is_valid(), "ordering broke at tick {tick}");
        assert_eq!(field.particles().len(), 15);
    }
    Ok(())
}

/// The scripted demo input drives a long mixed-intent session without
/// ever invalidating the ordering.
#[test]
fn scripted_session_stays_consistent() -> anyhow::Result<()> {
    let cfg = WorldConfig {
        particle_count: 100,
        ..WorldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(77);
    let mut field = ParticleField::new(cfg, &mut rng)?;

    field.tick(Intent::IDLE);
    for tick in 0..1_000 {
        let intent = sphere_client::input::build_intent(sphere_client::input::scripted_keys(tick));
        field.tick(intent);
        assert!(field.order_is_valid(), "ordering broke at tick {tick}");
    }
    assert_eq!(field.particles().len(), 100);
    Ok(())
}

/// A session that times out restarts into a fresh spawning state.
#[test]
fn timeout_then_restart() -> anyhow::Result<()> {
    let cfg = WorldConfig {
        particle_count: 10,
        countdown_ticks: 50,
        ..WorldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new(cfg, &mut rng)?;

    let mut state = field.tick(Intent::IDLE);
    for _ in 0..60 {
        state = field.tick(Intent::forward());
    }
    assert_eq!(state, SessionState::TimedOut);

    field.restart(&mut rng)?;
    assert_eq!(field.state(), SessionState::Spawning);
    assert_eq!(field.remaining_ticks(), 50);
    assert!(field.order_is_valid());
    Ok(())
}

/// Snapshots are well-formed every frame: background present, sprite
/// footprints finite, and no more sprites than particles.
#[test]
fn snapshots_stay_well_formed() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(31);
    let mut field = ParticleField::new(separated_config(), &mut rng)?;

    field.tick(Intent::IDLE);
    for _ in 0..100 {
        field.tick(Intent::forward());
        let snap = field.snapshot();
        assert!(!snap.background.is_empty());
        assert!(snap.sprites.len() <= 15);
        for sprite in &snap.sprites {
            assert!(sprite.rect.w.is_finite() && sprite.rect.w > 0.0);
            assert!(sprite.rect.h.is_finite() && sprite.rect.h > 0.0);
        }
        for seg in &snap.background {
            assert!(seg.source_w >= 0.0);
            assert!(seg.source_x >= 0.0);
        }
    }
    Ok(())
}
