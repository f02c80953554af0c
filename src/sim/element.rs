//! Drifting flowers
//!
//! A flower wanders along a slowly jittering heading, spins, wraps around
//! the viewport edges with a margin and leaves a short fading trail behind.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::viewport::Viewport;
use crate::color::Rgba;
use crate::consts::*;

/// Flower shape, fixed for the lifetime of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Single elongated ellipse (sakura petal)
    Petal,
    /// Five ellipses 72° apart around a white center
    FivePetal,
    /// Translucent disc (daisy puff)
    Daisy,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Petal, ShapeKind::FivePetal, ShapeKind::Daisy];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A recorded trail position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Opacity, decays every frame. Not clamped.
    pub alpha: f32,
}

/// A drifting, rotating flower
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub pos: Vec2,
    /// Direction of travel (radians)
    pub heading: f32,
    /// Distance travelled per frame
    pub speed: f32,
    /// Drawing rotation (radians), only ever increases
    pub rotation: f32,
    pub size: f32,
    pub shape: ShapeKind,
    pub color: Rgba,
    /// Recent positions, oldest first
    pub trail: VecDeque<TrailPoint>,
}

impl Element {
    /// Create a flower with random attributes. An empty palette falls back to
    /// the first default color.
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, palette: &[Rgba], rng: &mut R) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * viewport.width(),
            rng.random::<f32>() * viewport.height(),
        );
        let speed = ELEMENT_MIN_SPEED + rng.random::<f32>() * ELEMENT_SPEED_SPAN;
        let heading = rng.random::<f32>() * TAU;
        let rotation = rng.random::<f32>() * TAU;
        let size = ELEMENT_MIN_SIZE + rng.random::<f32>() * ELEMENT_SIZE_SPAN;
        let shape = ShapeKind::random(rng);
        let color = if palette.is_empty() {
            crate::color::DEFAULT_PALETTE[0]
        } else {
            palette[rng.random_range(0..palette.len())]
        };

        Self {
            pos,
            heading,
            speed,
            rotation,
            size,
            shape,
            color,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Advance one frame: drift, wrap, spin, then record the trail
    pub fn update<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        // Bounded random walk on the heading
        self.heading += (rng.random::<f32>() - 0.5) * HEADING_JITTER;
        self.pos += Vec2::new(self.heading.cos(), self.heading.sin()) * self.speed;

        self.pos.x = wrap_axis(self.pos.x, viewport.width());
        self.pos.y = wrap_axis(self.pos.y, viewport.height());

        self.rotation += ROTATION_STEP + rng.random::<f32>() * ROTATION_JITTER;

        self.record_trail();
    }

    /// Push the current position, evict the oldest past the cap, fade all
    pub fn record_trail(&mut self) {
        self.trail.push_back(TrailPoint {
            pos: self.pos,
            alpha: TRAIL_START_ALPHA,
        });
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
        for point in self.trail.iter_mut() {
            point.alpha -= TRAIL_FADE;
        }
    }
}

/// Teleport to the opposite edge once past `[-margin, extent + margin]`
fn wrap_axis(v: f32, extent: f32) -> f32 {
    let mut v = v;
    if v < -WRAP_MARGIN {
        v = extent + WRAP_MARGIN;
    }
    if v > extent + WRAP_MARGIN {
        v = -WRAP_MARGIN;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_PALETTE;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn element_at(pos: Vec2, heading: f32) -> Element {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut e = Element::spawn(viewport(), &DEFAULT_PALETTE, &mut rng);
        e.pos = pos;
        e.heading = heading;
        e.speed = 0.5;
        e
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let e = Element::spawn(viewport(), &DEFAULT_PALETTE, &mut rng);
            assert!(viewport().contains(e.pos));
            assert!((0.3..0.8).contains(&e.speed));
            assert!((10.0..30.0).contains(&e.size));
            assert!((0.0..TAU).contains(&e.heading));
            assert!(DEFAULT_PALETTE.contains(&e.color));
            assert!(e.trail.is_empty());
        }
    }

    #[test]
    fn test_spawn_covers_every_shape() {
        let mut rng = Pcg32::seed_from_u64(11);
        let shapes: Vec<ShapeKind> = (0..100)
            .map(|_| Element::spawn(viewport(), &DEFAULT_PALETTE, &mut rng).shape)
            .collect();
        for kind in ShapeKind::ALL {
            assert!(shapes.contains(&kind), "{kind:?} never spawned");
        }
    }

    #[test]
    fn test_wrap_right_to_left() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = element_at(Vec2::new(vp.width() + 51.0, 300.0), 0.0);

        e.update(vp, &mut rng);

        assert_eq!(e.pos.x, -WRAP_MARGIN);
        // Only heading jitter moves y, never the x-wrap
        assert!((e.pos.y - 300.0).abs() < 0.1);
    }

    #[test]
    fn test_wrap_each_edge() {
        let vp = viewport();
        assert_eq!(wrap_axis(-50.5, vp.width()), vp.width() + WRAP_MARGIN);
        assert_eq!(wrap_axis(vp.height() + 50.5, vp.height()), -WRAP_MARGIN);
        assert_eq!(wrap_axis(-50.0, vp.width()), -50.0);
        assert_eq!(wrap_axis(vp.width() + 50.0, vp.width()), vp.width() + 50.0);
    }

    #[test]
    fn test_wrap_bottom_keeps_x() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut e = element_at(Vec2::new(400.0, vp.height() + 50.9), std::f32::consts::FRAC_PI_2);

        e.update(vp, &mut rng);

        assert_eq!(e.pos.y, -WRAP_MARGIN);
        assert!((e.pos.x - 400.0).abs() < 0.1);
    }

    #[test]
    fn test_rotation_always_advances() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = element_at(Vec2::new(100.0, 100.0), 1.0);
        for _ in 0..100 {
            let before = e.rotation;
            e.update(viewport(), &mut rng);
            let step = e.rotation - before;
            assert!((0.01 - 1e-5..=0.02 + 1e-5).contains(&step), "step {step}");
        }
    }

    #[test]
    fn test_trail_is_capped_fifo() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut e = element_at(Vec2::new(100.0, 100.0), 0.0);

        for frame in 1..=25 {
            e.update(viewport(), &mut rng);
            assert_eq!(e.trail.len(), frame.min(TRAIL_LENGTH));
            assert_eq!(e.trail.back().map(|t| t.pos), Some(e.pos));
        }
    }

    #[test]
    fn test_trail_alpha_decays() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut e = element_at(Vec2::new(100.0, 100.0), 0.0);

        e.update(viewport(), &mut rng);
        assert!((e.trail[0].alpha - 0.23).abs() < 1e-6);

        for _ in 0..30 {
            let before: Vec<f32> = e.trail.iter().map(|t| t.alpha).collect();
            e.update(viewport(), &mut rng);
            // The survivors shifted one slot toward the front if one was evicted
            let offset = before.len() + 1 - e.trail.len();
            for (i, point) in e.trail.iter().take(before.len() - offset).enumerate() {
                assert!(point.alpha < before[i + offset]);
            }
        }

        // Oldest surviving point has faded ten times
        assert!((e.trail[0].alpha - 0.05).abs() < 1e-5);
        // Newest to oldest is monotonically dimmer
        assert!(e.trail.iter().zip(e.trail.iter().skip(1)).all(|(a, b)| a.alpha < b.alpha));
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut rng = Pcg32::seed_from_u64(6);
        let e = Element::spawn(viewport(), &[], &mut rng);
        assert_eq!(e.color, DEFAULT_PALETTE[0]);
    }

    proptest! {
        #[test]
        fn prop_trail_never_exceeds_cap(seed in any::<u64>(), frames in 0usize..300) {
            let vp = Viewport::new(320.0, 240.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut e = Element::spawn(vp, &DEFAULT_PALETTE, &mut rng);
            for _ in 0..frames {
                e.update(vp, &mut rng);
                prop_assert!(e.trail.len() <= TRAIL_LENGTH);
                prop_assert!(e.pos.x >= -WRAP_MARGIN && e.pos.x <= vp.width() + WRAP_MARGIN);
                prop_assert!(e.pos.y >= -WRAP_MARGIN && e.pos.y <= vp.height() + WRAP_MARGIN);
            }
        }
    }
}
