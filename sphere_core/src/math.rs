//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! It avoids SIMD/unsafe and focuses on stable semantics. Rotations are
//! applied incrementally every frame with small angles, so everything is
//! `f64` to keep drift negligible over long sessions.

use serde::{Deserialize, Serialize};

/// 3D point/vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on a sphere of the given radius at (polar, azimuth).
    pub fn from_polar(radius: f64, polar: f64, azimuth: f64) -> Self {
        let sin_polar = polar.sin();
        Self::new(
            radius * sin_polar * azimuth.cos(),
            radius * sin_polar * azimuth.sin(),
            radius * polar.cos(),
        )
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn len_sq(self) -> f64 {
        self.dot(self)
    }

    pub fn len(self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn dist_sq(self, rhs: Self) -> f64 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        let dz = self.z - rhs.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Angle between two non-zero vectors, in radians.
    ///
    /// The cosine is clamped so near-parallel vectors do not fall out of
    /// `acos`'s domain.
    pub fn angle_to(self, rhs: Self) -> f64 {
        let denom = self.len() * rhs.len();
        (self.dot(rhs) / denom).clamp(-1.0, 1.0).acos()
    }
}

/// Unit rotation quaternion.
///
/// Immutable once constructed; `rotate` never mutates the quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Builds a normalized rotation of `angle` radians about `axis`.
    ///
    /// The axis need not be pre-normalized. A zero-length axis is a
    /// caller contract violation.
    pub fn from_angle_axis(angle: f64, axis: Vec3) -> Self {
        let axis_len = axis.len();
        debug_assert!(axis_len > 0.0, "rotation axis must be non-zero");

        let half = angle * 0.5;
        let s = half.sin() / axis_len;
        Self {
            w: half.cos(),
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    pub fn norm(self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotates a point by conjugation: embed `v` as a pure quaternion,
    /// compute q·v·q⁻¹, and drop the scalar part.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let Quat { w, x, y, z } = self;

        // t = q * (0, v)
        let tw = -x * v.x - y * v.y - z * v.z;
        let tx = w * v.x + y * v.z - z * v.y;
        let ty = w * v.y + z * v.x - x * v.z;
        let tz = w * v.z + x * v.y - y * v.x;

        // t * conj(q); scalar part cancels for unit q.
        Vec3::new(
            -tw * x + tx * w - ty * z + tz * y,
            -tw * y + ty * w - tz * x + tx * z,
            -tw * z + tz * w - tx * y + ty * x,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn from_polar_lies_on_sphere() {
        let p = Vec3::from_polar(300.0, 1.1, 2.2);
        assert!((p.len() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = Quat::from_angle_axis(std::f64::consts::FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        let p = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_norm() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let angle = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
            let axis = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if axis.len_sq() < 1e-6 {
                continue;
            }
            let p = Vec3::new(
                rng.gen_range(-400.0..400.0),
                rng.gen_range(-400.0..400.0),
                rng.gen_range(-400.0..400.0),
            );
            let q = Quat::from_angle_axis(angle, axis);
            let rotated = q.rotate(p);
            assert!((rotated.len() - p.len()).abs() < 1e-9);
        }
    }

    #[test]
    fn unit_norm_after_construction_with_long_axis() {
        let q = Quat::from_angle_axis(0.03, Vec3::new(10.0, -20.0, 5.0));
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn small_angle_stays_close() {
        let q = Quat::from_angle_axis(0.03, Vec3::new(0.0, 1.0, 0.0));
        let p = Vec3::new(0.0, 0.0, 300.0);
        let rotated = q.rotate(p);
        assert!(rotated.dist_sq(p) < (0.03 * 300.0f64).powi(2));
    }
}
