//! Scene state
//!
//! Owns every entity plus the RNG that drives them. Nothing else holds a
//! reference to the collections.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::element::Element;
use super::particle::Particle;
use super::viewport::Viewport;
use crate::color::Rgba;
use crate::settings::Settings;

/// Complete animation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the RNG was created from
    pub seed: u64,
    pub viewport: Viewport,
    /// Floating particles, updated in index order
    pub particles: Vec<Particle>,
    /// Drifting flowers, updated in index order
    pub elements: Vec<Element>,
    /// Fill color shared by all particles
    pub particle_color: Rgba,
    pub(crate) rng: Pcg32,
}

impl Scene {
    /// Populate a scene from settings
    pub fn new(seed: u64, viewport: Viewport, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let palette = settings.palette();

        let particles = (0..settings.particle_count)
            .map(|_| Particle::spawn(viewport, &mut rng))
            .collect();
        let elements = (0..settings.element_count)
            .map(|_| Element::spawn(viewport, &palette, &mut rng))
            .collect();

        Self {
            seed,
            viewport,
            particles,
            elements,
            particle_color: settings.particle_fill(),
            rng,
        }
    }

    /// Rewrite the viewport; entities pick it up on their next update
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }
}
