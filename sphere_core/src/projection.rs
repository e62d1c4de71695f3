//! Perspective projection.
//!
//! Converts a particle's depth into a visual scale factor and a
//! visibility decision. The camera sits at the world origin looking
//! through the rotating particle cloud; this is not a general camera
//! system and is only valid under that convention.
//!
//! Two scale conventions survived the game's history. `Telephoto` is the
//! documented one; `DollyOut` is kept selectable so both can be driven
//! deterministically from configuration. They must never be mixed within
//! a session.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;
use crate::snapshot::ScreenRect;

/// Scale convention relating depth to on-screen footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionModel {
    /// `scale = d / (d - z)`; larger z is nearer; culled when scale < 1,
    /// i.e. on the far hemisphere (z < 0).
    #[default]
    Telephoto,
    /// `scale = (d - z) / d`; larger z is farther; culled when z > 0.
    DollyOut,
}

/// Fixed-convention projector; scale is continuous and monotonic in
/// depth with `scale(0) == 1` exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projector {
    pub camera_distance: f64,
    pub model: ProjectionModel,
    /// Screen-space origin the raw (x, y) offsets are relative to.
    pub viewport_center: (f64, f64),
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            camera_distance: 1000.0,
            model: ProjectionModel::Telephoto,
            viewport_center: (640.0, 360.0),
        }
    }
}

impl Projector {
    /// Scale factor for a given depth.
    pub fn scale(&self, z: f64) -> f64 {
        let d = self.camera_distance;
        match self.model {
            ProjectionModel::Telephoto => d / (d - z),
            ProjectionModel::DollyOut => (d - z) / d,
        }
    }

    /// Whether a particle at this depth is on the camera-facing hemisphere.
    pub fn visible(&self, z: f64) -> bool {
        match self.model {
            ProjectionModel::Telephoto => self.scale(z) >= 1.0,
            ProjectionModel::DollyOut => z <= 0.0,
        }
    }

    /// Screen footprint for a particle, or `None` when culled.
    ///
    /// Width and height are the base size times the depth scale; the
    /// position is the raw (x, y) offset from the viewport center minus
    /// half the scaled footprint, so scaling is anchored at the sprite's
    /// center.
    pub fn footprint(&self, pos: Vec3, base_w: f64, base_h: f64) -> Option<ScreenRect> {
        if !self.visible(pos.z) {
            return None;
        }
        let scale = self.scale(pos.z);
        let w = base_w * scale;
        let h = base_h * scale;
        let (cx, cy) = self.viewport_center;
        Some(ScreenRect {
            x: pos.x + cx - w * 0.5,
            y: pos.y + cy - h * 0.5,
            w,
            h,
        })
    }
}
