//! Recording surface
//!
//! Stores every draw call instead of rasterizing. Used by the native preview
//! and by tests that assert on drawing order and state.

use glam::Vec2;

use super::Surface;
use crate::color::Rgba;

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    GlobalAlpha(f32),
    Fill(Rgba),
    Circle { center: Vec2, radius: f32 },
    Ellipse { center: Vec2, radius_x: f32, radius_y: f32 },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

/// Surface that records commands and tracks the state a canvas would have
#[derive(Debug, Clone)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
    /// Current global alpha
    pub global_alpha: f32,
    /// Current save() nesting depth
    pub depth: usize,
    /// Deepest save() nesting seen
    pub max_depth: usize,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            global_alpha: 1.0,
            depth: 0,
            max_depth: 0,
        }
    }

    /// Drop recorded commands, keeping state
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled shapes (circles and ellipses)
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. } | DrawCommand::Ellipse { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha;
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn fill_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radius_x,
            radius_y,
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
