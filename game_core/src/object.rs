//! The entity sum type and its lifecycle hooks

use crate::components::{Ball, Body, Paddle, ScoreText};
use crate::draw::{DrawCommand, DrawItem};
use crate::input::InputListener;
use crate::map::{GameMap, Rect};
use crate::systems::{ai, physics};
use crate::{Config, Events, GameRng, GameState, Time};

/// Everything outside the entity that a lifecycle hook may read or write
pub struct SceneContext<'a> {
    pub map: &'a GameMap,
    pub config: &'a Config,
    pub state: &'a mut GameState,
    pub events: &'a mut Events,
    pub rng: &'a mut GameRng,
}

/// Entity variants. Stored alongside a [`Body`] in the world.
#[derive(Debug, Clone)]
pub enum GameObject {
    Ball(Ball),
    Paddle(Paddle),
    ScoreText(ScoreText),
}

impl GameObject {
    /// One-time setup when the session begins
    pub fn start(&mut self, body: &mut Body, ctx: &mut SceneContext) {
        self.reset(body, ctx);
    }

    /// Variable-rate behaviour, once per rendered frame.
    /// `ball` is a copy of the ball's body taken before the pass.
    pub fn update(&mut self, body: &mut Body, time: &Time, ball: Option<&Body>, ctx: &mut SceneContext) {
        match self {
            GameObject::Paddle(paddle) if !paddle.is_human() => {
                if let Some(ball) = ball {
                    ai::track_ball(body, paddle.side, ball, ctx.map, ctx.config, time.dt);
                }
            }
            GameObject::ScoreText(score_text) => {
                score_text.text = ctx.state.score_text();
            }
            _ => {}
        }
    }

    /// Fixed-rate physics. Only the ball does anything here.
    pub fn fixed_update(&mut self, body: &mut Body, paddles: &[Rect], ctx: &mut SceneContext) {
        if let GameObject::Ball(ball) = self {
            physics::ball_fixed_update(ball, body, paddles, ctx);
        }
    }

    /// Return to the start-of-round state in place
    pub fn reset(&mut self, body: &mut Body, ctx: &mut SceneContext) {
        match self {
            GameObject::Ball(ball) => ball.reset(body, ctx.map, ctx.config, ctx.rng),
            GameObject::Paddle(paddle) => paddle.reset(body, ctx.map, ctx.config),
            GameObject::ScoreText(score_text) => {
                score_text.text = ctx.state.score_text();
                body.set_position(ScoreText::anchor(ctx.map));
            }
        }
    }

    pub fn draw(&self, body: &Body) -> DrawItem {
        let command = match self {
            GameObject::Ball(_) => DrawCommand::Ellipse {
                center: body.position(),
                radii: body.size(),
                color: body.color,
            },
            GameObject::Paddle(_) => DrawCommand::Rect {
                rect: body.bounding_box(),
                color: body.color,
            },
            GameObject::ScoreText(score_text) => DrawCommand::Text {
                text: score_text.text.clone(),
                position: body.position(),
                color: body.color,
            },
        };
        DrawItem {
            command,
            bounds: body.bounding_box(),
        }
    }

    /// Human paddles listen to the keyboard; nothing else does
    pub fn as_listener_mut(&mut self) -> Option<&mut dyn InputListener> {
        match self {
            GameObject::Paddle(paddle) if paddle.is_human() => Some(paddle as &mut dyn InputListener),
            _ => None,
        }
    }

    pub fn as_paddle(&self) -> Option<&Paddle> {
        match self {
            GameObject::Paddle(paddle) => Some(paddle),
            _ => None,
        }
    }

    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            GameObject::Ball(ball) => Some(ball),
            _ => None,
        }
    }
}
