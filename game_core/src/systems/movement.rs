use glam::Vec2;

use crate::components::Body;
use crate::{Config, GameMap};

/// Move a body along its velocity
pub fn integrate(body: &mut Body, dt: f32) {
    body.translate(body.velocity * dt);
}

/// Shift a paddle vertically, keeping it inside the window when configured
pub fn move_paddle(body: &mut Body, dy: f32, map: &GameMap, config: &Config) {
    body.translate(Vec2::new(0.0, dy));
    if config.clamp_paddles {
        clamp_paddle(body, map);
    }
}

pub fn clamp_paddle(body: &mut Body, map: &GameMap) {
    let y = map.clamp_y(body.position().y, body.size().y);
    body.set_position(Vec2::new(body.position().x, y));
}
