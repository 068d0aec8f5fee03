use crate::components::{Ball, Body};
use crate::map::Rect;
use crate::object::SceneContext;

use super::{bounce_off_paddles, bounce_off_walls, check_out_of_bounds, integrate};

/// One fixed physics step for the ball.
///
/// Order: bounding box, paddles, walls, side edges, then integration.
/// A step that scores leaves the ball resting on the serve spot.
pub fn ball_fixed_update(ball: &mut Ball, body: &mut Body, paddles: &[Rect], ctx: &mut SceneContext) {
    body.update_bounding_box();

    if bounce_off_paddles(body, paddles, ctx.config, ctx.events) {
        ball.speed = body.velocity.length();
    }
    bounce_off_walls(body, ctx.map, ctx.events);

    if check_out_of_bounds(ball, body, ctx).is_some() {
        return;
    }

    integrate(body, ctx.config.fixed_dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Color, Side};
    use crate::{Config, Events, GameMap, GameRng, GameState};
    use glam::Vec2;

    #[test]
    fn test_hit_then_move_away() {
        let map = GameMap::new(1200.0, 900.0);
        let config = Config::new();
        let mut state = GameState::new(10);
        let mut events = Events::new();
        let mut rng = GameRng::default();
        let mut ctx = SceneContext {
            map: &map,
            config: &config,
            state: &mut state,
            events: &mut events,
            rng: &mut rng,
        };

        let paddle = Rect::from_center_half_extents(Vec2::new(1100.0, 450.0), Vec2::new(16.0, 200.0));
        let mut ball = Ball::new(200.0);
        let mut body = Body::new(Vec2::new(1080.0, 450.0), Vec2::splat(16.0), Color::WHITE);
        body.velocity = Vec2::new(200.0, 0.0);

        ball_fixed_update(&mut ball, &mut body, &[paddle], &mut ctx);

        assert!((body.velocity.x - -210.0).abs() < 1e-3);
        assert!((ball.speed - 210.0).abs() < 1e-3);
        assert!(body.position().x < 1080.0, "Integrated after the bounce");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_scoring_step_skips_integration() {
        let map = GameMap::new(1200.0, 900.0);
        let config = Config::new();
        let mut state = GameState::new(10);
        let mut events = Events::new();
        let mut rng = GameRng::default();
        let mut ctx = SceneContext {
            map: &map,
            config: &config,
            state: &mut state,
            events: &mut events,
            rng: &mut rng,
        };

        let mut ball = Ball::new(300.0);
        let mut body = Body::new(Vec2::new(-1.0, 450.0), Vec2::splat(16.0), Color::WHITE);
        body.velocity = Vec2::new(-300.0, 0.0);

        ball_fixed_update(&mut ball, &mut body, &[], &mut ctx);

        assert_eq!(body.position(), Vec2::new(600.0, 450.0));
        assert_eq!(ball.last_scorer, Some(Side::Opponent));
        assert_eq!(state.opponent_score, 1);
    }
}
