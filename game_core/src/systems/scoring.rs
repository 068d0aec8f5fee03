use crate::components::{Ball, Body, Side};
use crate::object::SceneContext;

/// Check if the ball left through a side edge and award the point.
///
/// The ball is served again toward the side that was scored on.
pub fn check_out_of_bounds(
    ball: &mut Ball,
    body: &mut Body,
    ctx: &mut SceneContext,
) -> Option<Side> {
    let x = body.position().x;
    let scorer = if x < 0.0 {
        Side::Opponent
    } else if x > ctx.map.width {
        Side::Player
    } else {
        return None;
    };

    ctx.state.award(scorer);
    ctx.events.record_score(scorer);
    ball.last_scorer = Some(scorer);
    ball.serve(body, ctx.map, ctx.config, ctx.rng);

    log::debug!(
        "{:?} scored, score is now {}",
        scorer,
        ctx.state.score_text()
    );
    Some(scorer)
}
