//! Petal Drift - A decorative canvas background
//!
//! Core modules:
//! - `sim`: Seeded entity simulation (particles, drifting flowers, viewport)
//! - `renderer`: 2D drawing surface abstraction and shape drawing
//! - `driver`: Per-frame clear/update/draw orchestration
//! - `settings`: Data-driven animation settings

pub mod color;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Rgba;
pub use driver::Animation;
pub use error::{Error, Result};
pub use settings::Settings;

/// Animation constants
pub mod consts {
    /// Default number of floating particles
    pub const PARTICLE_COUNT: usize = 40;
    /// Default number of drifting flowers
    pub const ELEMENT_COUNT: usize = 15;

    /// Particle size range [min, min + span)
    pub const PARTICLE_MIN_SIZE: f32 = 1.0;
    pub const PARTICLE_SIZE_SPAN: f32 = 3.0;
    /// Particle opacity range [min, min + span)
    pub const PARTICLE_MIN_ALPHA: f32 = 0.1;
    pub const PARTICLE_ALPHA_SPAN: f32 = 0.18;
    /// Particle velocity range per axis (centered on zero)
    pub const PARTICLE_VELOCITY_SPAN: f32 = 0.3;

    /// Flower speed range [min, min + span)
    pub const ELEMENT_MIN_SPEED: f32 = 0.3;
    pub const ELEMENT_SPEED_SPAN: f32 = 0.5;
    /// Flower size range [min, min + span)
    pub const ELEMENT_MIN_SIZE: f32 = 10.0;
    pub const ELEMENT_SIZE_SPAN: f32 = 20.0;
    /// Max heading change per frame (centered on zero)
    pub const HEADING_JITTER: f32 = 0.1;
    /// Base rotation per frame plus random extra
    pub const ROTATION_STEP: f32 = 0.01;
    pub const ROTATION_JITTER: f32 = 0.01;
    /// Distance past the viewport edge before a flower wraps
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Trail length in frames
    pub const TRAIL_LENGTH: usize = 10;
    /// Opacity of a freshly recorded trail point
    pub const TRAIL_START_ALPHA: f32 = 0.25;
    /// Opacity lost by every trail point each frame
    pub const TRAIL_FADE: f32 = 0.02;
    /// Radius of a trail dot
    pub const TRAIL_DOT_RADIUS: f32 = 2.0;

    /// Alpha byte baked into the daisy fill color (0xaa)
    pub const DAISY_ALPHA: u8 = 0xaa;
    /// Seed used when nothing else provides one (native preview)
    pub const DEFAULT_SEED: u64 = 0x5eed_f10e;
}
