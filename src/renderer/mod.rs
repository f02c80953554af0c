//! 2D rendering module
//!
//! Everything is drawn through the [`Surface`] trait, an immediate-mode
//! subset of the HTML canvas 2D context. The browser implementation lives in
//! `canvas`; [`Recorder`] captures commands for tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod record;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use record::{DrawCommand, Recorder};
pub use shapes::{draw_element, draw_particle, draw_trail};

use glam::Vec2;

use crate::color::Rgba;

/// Immediate-mode 2D drawing target
pub trait Surface {
    /// Erase a rectangle to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Global compositing opacity applied to every fill
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_fill(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn fill_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32);
    /// Push the transform/style state
    fn save(&mut self);
    /// Pop the transform/style state
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
}
