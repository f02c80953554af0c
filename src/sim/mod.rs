//! Seeded animation simulation
//!
//! All entity behavior lives here. This module has no drawing or platform
//! dependencies:
//! - Randomness comes from an injected RNG only
//! - Entities read the viewport, never the canvas
//! - Collections are updated in stable order

pub mod element;
pub mod particle;
pub mod state;
pub mod viewport;

pub use element::{Element, ShapeKind, TrailPoint};
pub use particle::Particle;
pub use state::Scene;
pub use viewport::Viewport;
