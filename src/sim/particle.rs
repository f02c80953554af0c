//! Floating particles
//!
//! A particle drifts in a straight line and respawns somewhere new as soon
//! as it leaves the viewport. It never wraps and is never removed.

use glam::Vec2;
use rand::Rng;

use super::viewport::Viewport;
use crate::consts::*;

/// A small drifting dot
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Circle radius
    pub size: f32,
    /// Opacity (0-1)
    pub alpha: f32,
}

impl Particle {
    /// Create a particle with fresh random attributes inside the viewport
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * viewport.width(),
            rng.random::<f32>() * viewport.height(),
        );
        let size = PARTICLE_MIN_SIZE + rng.random::<f32>() * PARTICLE_SIZE_SPAN;
        let alpha = PARTICLE_MIN_ALPHA + rng.random::<f32>() * PARTICLE_ALPHA_SPAN;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * PARTICLE_VELOCITY_SPAN,
            (rng.random::<f32>() - 0.5) * PARTICLE_VELOCITY_SPAN,
        );

        Self {
            pos,
            vel,
            size,
            alpha,
        }
    }

    /// Reinitialize every field in place
    pub fn respawn<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        *self = Self::spawn(viewport, rng);
    }

    /// Advance one frame. Returns true if the particle respawned.
    pub fn update<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        self.pos += self.vel;

        if !viewport.contains(self.pos) {
            self.respawn(viewport, rng);
            return true;
        }
        false
    }
}
