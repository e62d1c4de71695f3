//! Particle field controller.
//!
//! Owns the particles, the depth ordering, the background mapper, and
//! the session state machine. One `tick` per rendered frame, driven by
//! the host loop; all work for a frame completes synchronously inside
//! the call.
//!
//! Determinism notes:
//! - The countdown is logical ticks, never wall clock.
//! - All randomness flows through the caller-supplied rng.
//! - Rotation deltas are precomputed once per session.

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WorldConfig;
use crate::intent::{Intent, Turn, Walk};
use crate::math::{Quat, Vec3};
use crate::particle::{self, Particle};
use crate::projection::{ProjectionModel, Projector};
use crate::snapshot::{RenderSnapshot, SpriteDraw};
use crate::sort::DepthOrder;
use crate::sphere::SphereBackground;

/// Session state machine.
///
/// `Won` and `TimedOut` are terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Spawning,
    Active,
    Won,
    TimedOut,
}

/// Precomputed per-intent rotation deltas.
#[derive(Debug, Clone, Copy)]
struct IntentDeltas {
    turn_left: Quat,
    turn_right: Quat,
    forward: Quat,
    back: Quat,
}

impl IntentDeltas {
    fn new(rotation_speed: f64, walk_speed: f64) -> Self {
        let vertical = Vec3::new(0.0, 1.0, 0.0);
        let horizontal = Vec3::new(1.0, 0.0, 0.0);
        Self {
            turn_left: Quat::from_angle_axis(rotation_speed, vertical),
            turn_right: Quat::from_angle_axis(-rotation_speed, vertical),
            forward: Quat::from_angle_axis(walk_speed, horizontal),
            back: Quat::from_angle_axis(-walk_speed, horizontal),
        }
    }
}

/// The orchestrator: rotates, re-sorts, touch-checks, and snapshots.
pub struct ParticleField {
    cfg: WorldConfig,
    particles: Vec<Particle>,
    order: DepthOrder,
    background: SphereBackground,
    projector: Projector,
    deltas: IntentDeltas,
    /// Horizontal background pan, in texels.
    background_offset: f64,
    /// Fixed character position: the sphere point nearest the camera.
    character: Vec3,
    remaining_ticks: u32,
    state: SessionState,
}

/// Depth key: the original game's `-z`.
///
/// Under `Telephoto` (larger z nearer) ascending key runs near-to-far,
/// so compositing iterates the order reversed; under `DollyOut` it runs
/// far-to-near and composites forward.
fn depth_key(particles: &[Particle]) -> impl Fn(usize) -> f64 + '_ {
    |slot| -particles[slot].pos.z
}

impl ParticleField {
    /// Scatters a fresh field and precomputes everything static.
    ///
    /// Fails only when minimum-separation placement is infeasible.
    pub fn new(cfg: WorldConfig, rng: &mut impl Rng) -> anyhow::Result<Self> {
        let particles = Self::scatter(&cfg, rng)?;
        let order = DepthOrder::new(particles.len(), depth_key(&particles));
        let background = SphereBackground::new(
            cfg.sphere_radius,
            cfg.segments_per_row,
            cfg.texture_size,
            &cfg.background_texture,
            cfg.viewport_center,
        );
        let projector = Projector {
            camera_distance: cfg.camera_distance,
            model: cfg.projection,
            viewport_center: cfg.viewport_center,
        };
        let character = match cfg.projection {
            ProjectionModel::Telephoto => Vec3::new(0.0, 0.0, cfg.sphere_radius),
            ProjectionModel::DollyOut => Vec3::new(0.0, 0.0, -cfg.sphere_radius),
        };
        let deltas = IntentDeltas::new(cfg.rotation_speed, cfg.walk_speed);

        info!(
            particles = particles.len(),
            segments = background.len(),
            projection = ?cfg.projection,
            "spawned particle field"
        );

        Ok(Self {
            remaining_ticks: cfg.countdown_ticks,
            cfg,
            particles,
            order,
            background,
            projector,
            deltas,
            background_offset: 0.0,
            character,
            state: SessionState::Spawning,
        })
    }

    fn scatter(cfg: &WorldConfig, rng: &mut impl Rng) -> anyhow::Result<Vec<Particle>> {
        match cfg.min_separation {
            Some(min_angle) => {
                particle::scatter_separated(rng, cfg.particle_count, cfg.sphere_radius, min_angle)
            }
            None => Ok(particle::scatter_uniform(
                rng,
                cfg.particle_count,
                cfg.sphere_radius,
            )),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn touched_count(&self) -> usize {
        self.particles.iter().filter(|p| p.touched).count()
    }

    /// Slot of the particle nearest the camera.
    pub fn nearest_slot(&self) -> Option<usize> {
        match self.cfg.projection {
            ProjectionModel::Telephoto => self.order.front(),
            ProjectionModel::DollyOut => self.order.back(),
        }
    }

    /// Advances one frame.
    ///
    /// In `Spawning` the field becomes active and the tick is otherwise a
    /// no-op; in terminal states ticks are ignored until `restart`.
    pub fn tick(&mut self, intent: Intent) -> SessionState {
        match self.state {
            SessionState::Spawning => {
                self.state = SessionState::Active;
                return self.state;
            }
            SessionState::Won | SessionState::TimedOut => return self.state,
            SessionState::Active => {}
        }

        if let Some(turn) = intent.turn {
            let (delta, pan) = match turn {
                Turn::Left => (self.deltas.turn_left, -1.0),
                Turn::Right => (self.deltas.turn_right, 1.0),
            };
            self.apply_delta(delta);
            // Keep the background pan in lockstep with the turn rate.
            self.background_offset = (self.background_offset
                + pan * self.cfg.rotation_speed / TAU * self.cfg.texture_size)
                .rem_euclid(self.cfg.texture_size);
        }
        if let Some(walk) = intent.walk {
            let delta = match walk {
                Walk::Forward => self.deltas.forward,
                Walk::Back => self.deltas.back,
            };
            self.apply_delta(delta);
        }

        self.check_touch();

        if self.particles.iter().all(|p| p.touched) {
            info!("all particles touched");
            self.state = SessionState::Won;
            return self.state;
        }

        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            info!(touched = self.touched_count(), "countdown expired");
            self.state = SessionState::TimedOut;
        }

        self.state
    }

    /// Rotates every particle, fixing its order position immediately.
    ///
    /// The per-particle rotate-then-fix sequence matters: the fix-up
    /// assumes the key moved only slightly since the previous fix, which
    /// a batch rotate of the whole field would violate.
    fn apply_delta(&mut self, delta: Quat) {
        for slot in 0..self.particles.len() {
            self.particles[slot].pos = delta.rotate(self.particles[slot].pos);
            let particles = &self.particles;
            self.order.fix_sort_order(slot, depth_key(particles));
        }
    }

    /// Marks the nearest particle touched when it is within reach of the
    /// fixed character position. Squared distance; no square root needed.
    fn check_touch(&mut self) {
        let Some(slot) = self.nearest_slot() else {
            return;
        };
        let p = &mut self.particles[slot];
        if !p.touched && p.pos.dist_sq(self.character) < self.cfg.touch_threshold_sq {
            p.touched = true;
            debug!(slot, "particle touched");
        }
    }

    /// Re-enters `Spawning` with a freshly scattered field.
    ///
    /// Nothing persists across restarts.
    pub fn restart(&mut self, rng: &mut impl Rng) -> anyhow::Result<()> {
        let particles = Self::scatter(&self.cfg, rng)?;
        self.order = DepthOrder::new(particles.len(), depth_key(&particles));
        self.particles = particles;
        self.background_offset = 0.0;
        self.remaining_ticks = self.cfg.countdown_ticks;
        self.state = SessionState::Spawning;
        info!("session restarted");
        Ok(())
    }

    /// Drawable state for the current frame, sprites back-to-front.
    pub fn snapshot(&self) -> RenderSnapshot {
        let sprites = |slot: usize| -> Option<SpriteDraw> {
            let p = &self.particles[slot];
            let rect = self.projector.footprint(p.pos, p.base_w, p.base_h)?;
            Some(SpriteDraw {
                rect,
                color: p.color,
                texture: self.cfg.particle_texture.clone(),
            })
        };

        let sprites: Vec<SpriteDraw> = match self.cfg.projection {
            ProjectionModel::Telephoto => self.order.iter_rev().filter_map(sprites).collect(),
            ProjectionModel::DollyOut => self.order.iter().filter_map(sprites).collect(),
        };

        RenderSnapshot {
            background: self.background.draw(self.background_offset),
            sprites,
        }
    }

    /// Full order scan; used by tests and debug assertions only.
    pub fn order_is_valid(&self) -> bool {
        self.order.is_sorted(depth_key(&self.particles))
    }
}
