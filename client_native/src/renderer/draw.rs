use game_core::{Color, DrawCommand, DrawItem};

use super::{RenderError, Renderer};

/// Render one frame of draw items, optionally outlining each bounding box
pub fn draw_frame(
    renderer: &mut dyn Renderer,
    items: &[DrawItem],
    draw_bounds: bool,
) -> Result<(), RenderError> {
    renderer.begin_frame()?;
    renderer.clear(Color::BLACK);

    for item in items {
        match &item.command {
            DrawCommand::Ellipse {
                center,
                radii,
                color,
            } => renderer.fill_ellipse(*center, *radii, *color),
            DrawCommand::Rect { rect, color } => renderer.fill_rect(*rect, *color),
            DrawCommand::Text {
                text,
                position,
                color,
            } => renderer.draw_text(text, *position, *color),
        }

        if draw_bounds {
            renderer.stroke_rect(item.bounds, Color::RED);
        }
    }

    renderer.end_frame()
}
