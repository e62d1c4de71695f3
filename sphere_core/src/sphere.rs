//! Spherical background mapper.
//!
//! The planet texture is an equirectangular image sampled through
//! ray/sphere intersection: for each 1-pixel-tall screen strip inside the
//! sphere's silhouette, the strip's two x-extremes are projected onto the
//! sphere surface and converted to (u, v) texture coordinates. All of the
//! trigonometry runs once at construction; per-frame rendering only
//! offsets the cached source coordinates by the current pan.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::snapshot::{ScreenRect, SegmentDraw};

/// One static horizontal texture strip.
///
/// Created at sphere construction and immutable afterwards; the pan
/// offset is applied externally at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Destination rectangle on screen (height is one pixel).
    pub dest: ScreenRect,
    /// Cached texture sample position for the strip's left edge.
    pub source_x: f64,
    pub source_y: f64,
    /// Texture width covered by the strip, seam-adjusted.
    pub source_w: f64,
}

/// Unit-sphere surface point visible at screen offset (x, y), as the
/// forward ray/sphere intersection. The radicand is clamped at zero so
/// floating-point noise at the silhouette edge cannot leave `sqrt`'s
/// domain.
///
/// Seen from inside the sphere the horizontal axis mirrors, hence the
/// negated x: u then increases with screen x and wraps exactly once per
/// row, at the seam.
fn surface_point(x: f64, y: f64, radius: f64) -> (f64, f64, f64) {
    let radicand = (radius * radius - x * x - y * y).max(0.0);
    (-x / radius, y / radius, -radicand.sqrt() / radius)
}

/// Equirectangular (u, v) for a unit-sphere point; u wraps at the 0/1 seam.
fn equirectangular_uv(px: f64, py: f64, pz: f64) -> (f64, f64) {
    let u = 0.5 + px.atan2(pz) / (2.0 * PI);
    let v = 0.5 - py.asin() / PI;
    (u, v)
}

/// Strip width in texels between two u samples.
///
/// When the strip straddles the seam the right-edge u comes back smaller
/// than the left-edge u; adding one full wrap keeps the width the short
/// way around instead of negative.
pub fn seam_adjusted_width(u_left: f64, u_right: f64, texture_size: f64) -> f64 {
    let u_right = if u_right < u_left {
        u_right + 1.0
    } else {
        u_right
    };
    (u_right - u_left) * texture_size
}

/// Static strip set covering the sphere's screen silhouette.
pub struct SphereBackground {
    segments: Vec<Segment>,
    texture: String,
    texture_size: f64,
}

impl SphereBackground {
    /// Builds every strip once.
    ///
    /// Rows run in unit steps from -radius to +radius along the vertical
    /// screen axis; each row's circular chord is subdivided into
    /// `segments_per_row` strips.
    pub fn new(
        radius: f64,
        segments_per_row: usize,
        texture_size: f64,
        texture: &str,
        viewport_center: (f64, f64),
    ) -> Self {
        let (cx, cy) = viewport_center;
        let mut segments = Vec::new();

        let mut y = -radius;
        while y < radius {
            let half_chord = (radius * radius - y * y).max(0.0).sqrt();
            if half_chord >= 1.0 {
                let step = 2.0 * half_chord / segments_per_row as f64;
                // v depends only on the row's latitude.
                let (_, py, _) = surface_point(0.0, y, radius);
                let (_, v) = equirectangular_uv(0.0, py, -1.0);
                let source_y = v * texture_size;

                for i in 0..segments_per_row {
                    let x_left = -half_chord + i as f64 * step;
                    let x_right = x_left + step;

                    let (lpx, lpy, lpz) = surface_point(x_left, y, radius);
                    let (rpx, rpy, rpz) = surface_point(x_right, y, radius);
                    let (u_left, _) = equirectangular_uv(lpx, lpy, lpz);
                    let (u_right, _) = equirectangular_uv(rpx, rpy, rpz);

                    segments.push(Segment {
                        dest: ScreenRect {
                            x: cx + x_left,
                            y: cy + y,
                            w: step,
                            h: 1.0,
                        },
                        source_x: u_left * texture_size,
                        source_y,
                        source_w: seam_adjusted_width(u_left, u_right, texture_size),
                    });
                }
            }
            y += 1.0;
        }

        Self {
            segments,
            texture: texture.to_string(),
            texture_size,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Per-frame draw list: cached coordinates plus the horizontal pan
    /// offset, wrapped into the texture. No trigonometry here.
    pub fn draw(&self, offset: f64) -> Vec<SegmentDraw> {
        self.segments
            .iter()
            .map(|seg| SegmentDraw {
                dest: seg.dest,
                source_x: (seg.source_x + offset).rem_euclid(self.texture_size),
                source_y: seg.source_y,
                source_w: seg.source_w,
                source_h: 1.0,
                texture: self.texture.clone(),
            })
            .collect()
    }
}
