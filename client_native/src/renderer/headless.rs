use game_core::{Color, Rect};
use glam::Vec2;

use super::{RenderError, Renderer};

/// Renderer with no window behind it. Counts what it is asked to draw and
/// traces each finished frame.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub shapes: usize,
    pub last_text: Option<String>,
}

impl HeadlessRenderer {
    pub fn create(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Setup(format!(
                "invalid surface size {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.shapes = 0;
        Ok(())
    }

    fn clear(&mut self, _color: Color) {}

    fn fill_ellipse(&mut self, center: Vec2, _radii: Vec2, _color: Color) {
        self.shapes += 1;
        log::trace!("ball at ({:.1}, {:.1})", center.x, center.y);
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.shapes += 1;
    }

    fn stroke_rect(&mut self, _rect: Rect, _color: Color) {}

    fn draw_text(&mut self, text: &str, _position: Vec2, _color: Color) {
        self.shapes += 1;
        if self.last_text.as_deref() != Some(text) {
            log::info!("score {}", text);
            self.last_text = Some(text.to_string());
        }
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.frames += 1;
        log::trace!("frame {} presented, {} shapes", self.frames, self.shapes);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Resize {
                width,
                height,
                reason: "zero-sized surface".into(),
            });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }
}
