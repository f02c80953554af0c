//! Frame driver
//!
//! One state only: running. Every frame clears the surface, then updates and
//! draws each particle followed by each flower, in collection order. Frame
//! scheduling belongs to the host (`requestAnimationFrame` on web).

use crate::renderer::{Surface, draw_element, draw_particle};
use crate::settings::Settings;
use crate::sim::{Scene, Viewport};

/// The running animation
#[derive(Debug, Clone)]
pub struct Animation {
    scene: Scene,
    /// Frames rendered since startup
    frames: u64,
}

impl Animation {
    pub fn new(seed: u64, viewport: Viewport, settings: &Settings) -> Self {
        Self {
            scene: Scene::new(seed, viewport, settings),
            frames: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Viewport changed; only the stored dimensions are rewritten
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scene.resize(width, height);
        log::debug!("Viewport resized to {}x{}", width, height);
    }

    /// Run one complete frame against the surface
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Scene {
            viewport,
            particles,
            elements,
            particle_color,
            rng,
            ..
        } = &mut self.scene;
        let viewport = *viewport;

        surface.clear_rect(0.0, 0.0, viewport.width(), viewport.height());

        for particle in particles.iter_mut() {
            particle.update(viewport, rng);
            draw_particle(surface, particle, *particle_color);
        }

        for element in elements.iter_mut() {
            element.update(viewport, rng);
            draw_element(surface, element);
        }

        self.frames += 1;
    }
}
