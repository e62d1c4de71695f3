//! Resource references.
//!
//! The core only carries opaque paths and base dimensions; loading pixel
//! data is the host's job. Credits ride along so attribution survives
//! refactors.

/// A single sprite resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteResource {
    pub path: &'static str,
    pub w: f64,
    pub h: f64,
    pub author: &'static str,
    pub source: &'static str,
}

pub mod sprites {
    use super::SpriteResource;

    pub const PARTICLE: SpriteResource = SpriteResource {
        path: "resources/sprites/particle.png",
        w: 512.0,
        h: 512.0,
        author: "Kenney",
        source: "Assets 3/2D/Particles/circle_05",
    };

    pub const MARS: SpriteResource = SpriteResource {
        path: "resources/sprites/mars.png",
        w: 512.0,
        h: 512.0,
        author: "mafon2",
        source: "https://opengameart.org/content/seamless-space-rocks-textures-pack-512px",
    };
}
