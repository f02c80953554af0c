//! Drawing for particles, flower trails and flower shapes

use glam::Vec2;
use std::f32::consts::TAU;

use super::Surface;
use crate::color::Rgba;
use crate::consts::{DAISY_ALPHA, TRAIL_DOT_RADIUS};
use crate::sim::{Element, Particle, ShapeKind, TrailPoint};

/// Draw a particle at its own opacity, then reset global alpha
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle, color: Rgba) {
    surface.set_global_alpha(particle.alpha.clamp(0.0, 1.0));
    surface.set_fill(color);
    surface.fill_circle(particle.pos, particle.size);
    surface.set_global_alpha(1.0);
}

/// Draw trail dots (oldest first), then reset global alpha
pub fn draw_trail<'a, S, I>(surface: &mut S, trail: I, color: Rgba)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a TrailPoint>,
{
    for point in trail {
        // Stored opacity is unclamped, the surface only gets valid values
        surface.set_global_alpha(point.alpha.clamp(0.0, 1.0));
        surface.set_fill(color);
        surface.fill_circle(point.pos, TRAIL_DOT_RADIUS);
    }
    surface.set_global_alpha(1.0);
}

/// Draw the trail, then the flower in its own translated/rotated frame
pub fn draw_element<S: Surface + ?Sized>(surface: &mut S, element: &Element) {
    draw_trail(surface, &element.trail, element.color);

    surface.save();
    surface.translate(element.pos);
    surface.rotate(element.rotation);

    match element.shape {
        ShapeKind::Petal => draw_petal(surface, element.size, element.color),
        ShapeKind::FivePetal => draw_five_petal(surface, element.size, element.color),
        ShapeKind::Daisy => draw_daisy(surface, element.size, element.color),
    }

    surface.restore();
}

/// Single ellipse, long along x
fn draw_petal<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Rgba) {
    surface.set_fill(color);
    surface.fill_ellipse(Vec2::ZERO, size * 1.3, size * 0.7);
}

/// Five ellipses, each after a further 72° turn, with a white center
fn draw_five_petal<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Rgba) {
    surface.set_fill(color);
    for _ in 0..5 {
        surface.rotate(TAU / 5.0);
        surface.fill_ellipse(Vec2::new(size, 0.0), size * 0.6, size * 1.2);
    }

    surface.set_fill(Rgba::WHITE);
    surface.fill_circle(Vec2::ZERO, size * 0.4);
}

/// Disc with translucency baked into the fill color
fn draw_daisy<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Rgba) {
    surface.set_fill(color.with_alpha(DAISY_ALPHA));
    surface.fill_circle(Vec2::ZERO, size);
}
