//! Configuration system.
//!
//! World constants fixed for the lifetime of a play session, loaded from
//! JSON strings/files (file IO left to the app). Everything that varied
//! across the game's iterations — notably the projection convention — is
//! an explicit value here rather than a constant baked into a type.

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionModel;
use crate::resources;

/// World and session constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Radius of the particle/background sphere.
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius: f64,
    /// Camera distance constant of the projection model.
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f64,
    /// Which depth/scale convention to project with.
    #[serde(default)]
    pub projection: ProjectionModel,
    /// Radians per tick for turn-left/turn-right.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f64,
    /// Radians per tick for forward/back.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f64,
    /// Number of particles to scatter.
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Minimum pairwise angular separation; `None` scatters uniformly.
    #[serde(default)]
    pub min_separation: Option<f64>,
    /// Session length in logical ticks.
    #[serde(default = "default_countdown_ticks")]
    pub countdown_ticks: u32,
    /// Squared touch distance between character and nearest particle.
    #[serde(default = "default_touch_threshold_sq")]
    pub touch_threshold_sq: f64,
    /// Screen point the raw particle (x, y) offsets are relative to.
    #[serde(default = "default_viewport_center")]
    pub viewport_center: (f64, f64),
    /// Edge length of the square background texture, in texels.
    #[serde(default = "default_texture_size")]
    pub texture_size: f64,
    /// Horizontal subdivision of each background row's chord.
    #[serde(default = "default_segments_per_row")]
    pub segments_per_row: usize,
    /// Particle sprite path, resolved by the host resource system.
    #[serde(default = "default_particle_texture")]
    pub particle_texture: String,
    /// Equirectangular background texture path.
    #[serde(default = "default_background_texture")]
    pub background_texture: String,
}

fn default_sphere_radius() -> f64 {
    300.0
}

fn default_camera_distance() -> f64 {
    1000.0
}

fn default_rotation_speed() -> f64 {
    0.01
}

fn default_walk_speed() -> f64 {
    0.02
}

fn default_particle_count() -> usize {
    200
}

fn default_countdown_ticks() -> u32 {
    3600
}

fn default_touch_threshold_sq() -> f64 {
    1000.0
}

fn default_viewport_center() -> (f64, f64) {
    (640.0, 360.0)
}

fn default_texture_size() -> f64 {
    512.0
}

fn default_segments_per_row() -> usize {
    16
}

fn default_particle_texture() -> String {
    resources::sprites::PARTICLE.path.to_string()
}

fn default_background_texture() -> String {
    resources::sprites::MARS.path.to_string()
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sphere_radius: default_sphere_radius(),
            camera_distance: default_camera_distance(),
            projection: ProjectionModel::default(),
            rotation_speed: default_rotation_speed(),
            walk_speed: default_walk_speed(),
            particle_count: default_particle_count(),
            min_separation: None,
            countdown_ticks: default_countdown_ticks(),
            touch_threshold_sq: default_touch_threshold_sq(),
            viewport_center: default_viewport_center(),
            texture_size: default_texture_size(),
            segments_per_row: default_segments_per_row(),
            particle_texture: default_particle_texture(),
            background_texture: default_background_texture(),
        }
    }
}

impl WorldConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
