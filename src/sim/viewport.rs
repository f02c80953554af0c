//! Drawable area dimensions

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current size of the drawing surface, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Negative or NaN dimensions are coerced to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rewrite the dimensions (window resize)
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    /// Inclusive bounds check against `[0, width] x [0, height]`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        let vp = Viewport::new(-10.0, f32::NAN);
        assert_eq!(vp.width(), 0.0);
        assert_eq!(vp.height(), 0.0);
    }

    #[test]
    fn test_contains_edges() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(100.0, 50.0)));
        assert!(!vp.contains(Vec2::new(100.1, 10.0)));
        assert!(!vp.contains(Vec2::new(10.0, -0.1)));
    }
}
