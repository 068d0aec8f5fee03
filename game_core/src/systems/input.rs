use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Body, Paddle};
use crate::input::{InputContext, InputListener, Key};
use crate::object::GameObject;

use super::move_paddle;

impl InputListener for Paddle {
    /// A held movement key nudges the paddle one step and sets the velocity hint
    fn on_key(&mut self, body: &mut Body, key: Key, ctx: &InputContext) {
        let Some(dir) = key.direction() else {
            return;
        };
        move_paddle(body, dir * ctx.config.paddle_step, ctx.map, ctx.config);
        body.velocity = Vec2::new(0.0, dir * ctx.config.paddle_velocity_hint);
    }

    fn on_key_up(&mut self, body: &mut Body, key: Key, _ctx: &InputContext) {
        if key.direction().is_some() {
            body.velocity = Vec2::ZERO;
        }
    }
}

/// Which notification a listener receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Held,
    Down,
    Up,
}

/// Deliver a key event to every registered listener
pub fn dispatch_key(
    world: &mut World,
    listeners: &[Entity],
    key: Key,
    event: KeyEvent,
    ctx: &InputContext,
) {
    for &entity in listeners {
        let Ok((body, object)) = world.query_one_mut::<(&mut Body, &mut GameObject)>(entity) else {
            continue;
        };
        let Some(listener) = object.as_listener_mut() else {
            continue;
        };
        match event {
            KeyEvent::Held => listener.on_key(body, key, ctx),
            KeyEvent::Down => listener.on_key_down(body, key, ctx),
            KeyEvent::Up => listener.on_key_up(body, key, ctx),
        }
    }
}
