use glam::Vec2;

use crate::components::Body;
use crate::map::{GameMap, Rect};
use crate::math::VecExt;
use crate::{Config, Events};

/// AABB overlap. Shared edges do not count.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Reflect the ball off the first paddle it overlaps while heading toward it.
///
/// Both velocity components are negated, then scaled by the speed-up factor,
/// and the result is capped at `ball_speed_max`. Returns true on a hit.
pub fn bounce_off_paddles(
    body: &mut Body,
    paddles: &[Rect],
    config: &Config,
    events: &mut Events,
) -> bool {
    let ball_box = body.bounding_box();

    for paddle in paddles {
        if !overlaps(&ball_box, paddle) {
            continue;
        }

        // Still inside after last tick's bounce: already heading away
        let heading_toward = (paddle.center().x - body.position().x) * body.velocity.x > 0.0;
        if !heading_toward {
            continue;
        }

        let reflected = -body.velocity * Vec2::splat(config.ball_speed_increase);
        body.velocity = reflected.clamp_length_max(config.ball_speed_max);
        events.ball_hit_paddle = true;
        log::trace!("ball hit paddle, velocity now {:?}", body.velocity);
        return true;
    }

    false
}

/// Bounce off the top and bottom edges of the window
pub fn bounce_off_walls(body: &mut Body, map: &GameMap, events: &mut Events) -> bool {
    let ball_box = body.bounding_box();
    let half_height = body.size().y;

    let normal = if ball_box.top <= 0.0 && body.velocity.y < 0.0 {
        Vec2::Y
    } else if ball_box.bottom >= map.height && body.velocity.y > 0.0 {
        Vec2::NEG_Y
    } else {
        return false;
    };

    body.velocity = body.velocity.reflect_about(normal);

    // Keep the ball off the wall so the next tick does not bounce it back
    let y = map.clamp_y(body.position().y, half_height);
    body.set_position(Vec2::new(body.position().x, y));

    events.ball_hit_wall = true;
    true
}
