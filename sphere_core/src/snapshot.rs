//! Render snapshot types.
//!
//! Plain serializable data handed to the host renderer each frame. The
//! core never loads pixel data; textures are opaque path strings the
//! host's resource system resolves.

use serde::{Deserialize, Serialize};

/// Screen-space rectangle (pixels, f64 to keep sub-pixel motion smooth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// RGB color saturation applied to a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One particle sprite, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub rect: ScreenRect,
    pub color: Color,
    pub texture: String,
}

/// One background strip: destination rectangle plus the source rectangle
/// to sample from the equirectangular texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDraw {
    pub dest: ScreenRect,
    pub source_x: f64,
    pub source_y: f64,
    pub source_w: f64,
    pub source_h: f64,
    pub texture: String,
}

/// Everything the host needs to draw one frame.
///
/// `sprites` is ordered back-to-front (farthest first), so the host can
/// composite it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderSnapshot {
    pub background: Vec<SegmentDraw>,
    pub sprites: Vec<SpriteDraw>,
}
