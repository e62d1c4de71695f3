//! Particles and their placement on the sphere.

use std::f64::consts::PI;

use anyhow::bail;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::Vec3;
use crate::snapshot::Color;

/// One particle on the sphere surface.
///
/// Identity is the particle's slot index in the field; only the position
/// (and the scale derived from it) changes over a session, never the
/// slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub base_w: f64,
    pub base_h: f64,
    pub color: Color,
    pub touched: bool,
}

impl Particle {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            base_w: 64.0,
            base_h: 64.0,
            color: Color::WHITE,
            touched: false,
        }
    }
}

/// Attempts per particle before minimum-separation placement gives up.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

fn random_surface_point(rng: &mut impl Rng, radius: f64) -> Vec3 {
    let polar = rng.gen_range(0.0..PI);
    let azimuth = rng.gen_range(0.0..2.0 * PI);
    Vec3::from_polar(radius, polar, azimuth)
}

/// Scatters `n` particles uniformly in (polar, azimuth).
///
/// This keeps the original game's distribution, which clusters slightly
/// toward the poles; the game reads better with that than with
/// area-uniform sampling.
pub fn scatter_uniform(rng: &mut impl Rng, n: usize, radius: f64) -> Vec<Particle> {
    (0..n)
        .map(|_| Particle::new(random_surface_point(rng, radius)))
        .collect()
}

/// Scatters `n` particles with a minimum pairwise angular separation.
///
/// Rejection sampling: each candidate is redrawn until it clears
/// `min_angle` against every accepted particle. The loop is capped at
/// `MAX_PLACEMENT_ATTEMPTS` per particle; exhausting the cap means the
/// requested density does not fit on the sphere.
pub fn scatter_separated(
    rng: &mut impl Rng,
    n: usize,
    radius: f64,
    min_angle: f64,
) -> anyhow::Result<Vec<Particle>> {
    let mut accepted: Vec<Particle> = Vec::with_capacity(n);

    for index in 0..n {
        let mut attempts = 0;
        let pos = loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                bail!(
                    "placement infeasible: no spot for particle {index} with \
                     min separation {min_angle} after {MAX_PLACEMENT_ATTEMPTS} attempts"
                );
            }
            let candidate = random_surface_point(rng, radius);
            let clear = accepted
                .iter()
                .all(|p| p.pos.angle_to(candidate) >= min_angle);
            if clear {
                break candidate;
            }
        };
        debug!(index, attempts, "placed particle");
        accepted.push(Particle::new(pos));
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn uniform_scatter_lies_on_sphere() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter_uniform(&mut rng, 50, 300.0);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((p.pos.len() - 300.0).abs() < 1e-9);
            assert!(!p.touched);
        }
    }

    #[test]
    fn separated_scatter_respects_min_angle() {
        let mut rng = StdRng::seed_from_u64(11);
        let min_angle = PI / 9.0;
        let particles = scatter_separated(&mut rng, 20, 320.0, min_angle).unwrap();
        assert_eq!(particles.len(), 20);

        // Brute-force pairwise check.
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let angle = particles[i].pos.angle_to(particles[j].pos);
                assert!(
                    angle >= min_angle - 1e-9,
                    "pair ({i}, {j}) too close: {angle}"
                );
            }
        }
    }

    #[test]
    fn infeasible_density_surfaces_an_error() {
        let mut rng = StdRng::seed_from_u64(13);
        // Nothing can be 3 radians away from everything else 50 times over.
        let result = scatter_separated(&mut rng, 50, 300.0, 3.0);
        assert!(result.is_err());
    }
}
