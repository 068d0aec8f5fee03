//! Renderer-agnostic draw commands

use glam::Vec2;

use crate::components::Color;
use crate::map::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled ellipse (the ball)
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    /// Filled rectangle (paddles)
    Rect { rect: Rect, color: Color },
    /// Text centered on `position` (the score)
    Text {
        text: String,
        position: Vec2,
        color: Color,
    },
}

/// One entity's draw command plus the bounding box it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub command: DrawCommand,
    pub bounds: Rect,
}
