pub mod draw;
pub mod headless;

use std::fmt;

use game_core::{Color, Rect};
use glam::Vec2;

pub use draw::draw_frame;
pub use headless::HeadlessRenderer;

/// Graphics failures reported by a renderer
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Device, factory or brush creation failed; the game cannot run
    Setup(String),
    /// Begin/present failed; only this frame is lost
    Frame(String),
    /// The back buffer could not follow a window resize
    Resize {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl RenderError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::Setup(_))
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Setup(reason) => write!(f, "renderer setup failed: {}", reason),
            RenderError::Frame(reason) => write!(f, "frame failed: {}", reason),
            RenderError::Resize {
                width,
                height,
                reason,
            } => write!(f, "resize to {}x{} failed: {}", width, height, reason),
        }
    }
}

impl std::error::Error for RenderError {}

/// Immediate-mode 2D drawing surface supplied by the host window
pub trait Renderer {
    fn begin_frame(&mut self) -> Result<(), RenderError>;
    fn clear(&mut self, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);
    fn end_frame(&mut self) -> Result<(), RenderError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError>;
}
