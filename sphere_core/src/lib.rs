//! `sphere_core`
//!
//! Geometry and ordering core of the inside-the-sphere particle game:
//! quaternion-driven rotation of the particle cloud, an incrementally
//! maintained depth ordering, perspective footprints, and the static
//! spherical background mapping.
//!
//! Design goals:
//! - Deterministic: logical ticks, caller-supplied rng, no wall clock.
//! - Single-threaded frame-stepped simulation; no async, no locking.
//! - The host runtime owns IO, input polling, and drawing; the core
//!   exposes plain snapshot data and consumes per-frame intent.
//! - No `unsafe`.

pub mod config;
pub mod field;
pub mod intent;
pub mod math;
pub mod particle;
pub mod projection;
pub mod resources;
pub mod snapshot;
pub mod sort;
pub mod sphere;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::WorldConfig;
    pub use crate::field::{ParticleField, SessionState};
    pub use crate::intent::{HeldKeys, Intent, Turn, Walk};
    pub use crate::math::{Quat, Vec3};
    pub use crate::projection::{ProjectionModel, Projector};
    pub use crate::snapshot::RenderSnapshot;
    pub use crate::sort::DepthOrder;
}
