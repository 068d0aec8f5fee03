use glam::Vec2;

use crate::components::{Body, Side};
use crate::{Config, GameMap};

use super::move_paddle;

/// Where an AI paddle wants to be.
///
/// While the ball approaches, project its y at the paddle's x (ignoring wall
/// bounces). Otherwise drift back to the middle to cover the most ground.
pub fn target_y(paddle: &Body, side: Side, ball: &Body, map: &GameMap) -> f32 {
    let ball_pos = ball.position();
    let ball_vel = ball.velocity;
    let approaching = match side {
        Side::Player => ball_vel.x < 0.0,
        Side::Opponent => ball_vel.x > 0.0,
    };

    if !approaching {
        return map.center().y;
    }

    let time_to_reach = ((paddle.position().x - ball_pos.x) / ball_vel.x).max(0.0);
    (ball_pos.y + ball_vel.y * time_to_reach).clamp(0.0, map.height)
}

/// Move an AI paddle toward its target at no more than `ai_paddle_speed`
pub fn track_ball(paddle: &mut Body, side: Side, ball: &Body, map: &GameMap, config: &Config, dt: f32) {
    let diff = target_y(paddle, side, ball, map) - paddle.position().y;

    if diff.abs() <= config.ai_deadzone {
        paddle.velocity = Vec2::ZERO;
        return;
    }

    let max_step = config.ai_paddle_speed * dt;
    move_paddle(paddle, diff.clamp(-max_step, max_step), map, config);
    paddle.velocity = Vec2::new(0.0, diff.signum() * config.ai_paddle_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Color;

    fn body(pos: Vec2, half: Vec2, vel: Vec2) -> Body {
        let mut body = Body::new(pos, half, Color::WHITE);
        body.velocity = vel;
        body
    }

    #[test]
    fn test_predicts_intercept_when_approaching() {
        let map = GameMap::new(1200.0, 900.0);
        let paddle = body(Vec2::new(1100.0, 450.0), Vec2::new(16.0, 200.0), Vec2::ZERO);
        let ball = body(Vec2::new(600.0, 300.0), Vec2::splat(16.0), Vec2::new(500.0, 100.0));

        // 500 px at 500 px/s is one second, 100 px of drift
        assert_eq!(target_y(&paddle, Side::Opponent, &ball, &map), 400.0);
    }

    #[test]
    fn test_returns_to_center_when_ball_leaves() {
        let map = GameMap::new(1200.0, 900.0);
        let paddle = body(Vec2::new(1100.0, 250.0), Vec2::new(16.0, 200.0), Vec2::ZERO);
        let ball = body(Vec2::new(600.0, 300.0), Vec2::splat(16.0), Vec2::new(-500.0, 0.0));

        assert_eq!(target_y(&paddle, Side::Opponent, &ball, &map), 450.0);
    }

    #[test]
    fn test_tracking_speed_is_limited() {
        let map = GameMap::new(1200.0, 900.0);
        let config = Config::new();
        let mut paddle = body(Vec2::new(1100.0, 450.0), Vec2::new(16.0, 200.0), Vec2::ZERO);
        let ball = body(Vec2::new(1000.0, 700.0), Vec2::splat(16.0), Vec2::new(300.0, 0.0));

        track_ball(&mut paddle, Side::Opponent, &ball, &map, &config, 0.1);

        assert!((paddle.position().y - 495.0).abs() < 1e-3, "450 + 450 px/s * 0.1 s");
        assert_eq!(paddle.velocity, Vec2::new(0.0, config.ai_paddle_speed));
    }

    #[test]
    fn test_holds_still_inside_deadzone() {
        let map = GameMap::new(1200.0, 900.0);
        let config = Config::new();
        let mut paddle = body(Vec2::new(1100.0, 450.0), Vec2::new(16.0, 200.0), Vec2::new(0.0, 450.0));
        let ball = body(Vec2::new(1000.0, 452.0), Vec2::splat(16.0), Vec2::new(300.0, 0.0));

        track_ball(&mut paddle, Side::Opponent, &ball, &map, &config, 0.1);

        assert_eq!(paddle.position().y, 450.0);
        assert_eq!(paddle.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_left_side_ai() {
        let map = GameMap::new(1200.0, 900.0);
        let paddle = body(Vec2::new(100.0, 450.0), Vec2::new(16.0, 200.0), Vec2::ZERO);
        let ball = body(Vec2::new(600.0, 450.0), Vec2::splat(16.0), Vec2::new(-250.0, -50.0));

        // 500 px at 250 px/s is two seconds, 100 px up
        assert_eq!(target_y(&paddle, Side::Player, &ball, &map), 350.0);
    }
}
