use glam::Vec2;
use rand::Rng;

use crate::map::{GameMap, Rect};
use crate::{Config, GameRng};

/// RGBA color, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Which half of the court an object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left
    Opponent, // right
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Shared entity state: placement, motion and appearance.
///
/// `position` and `size` are only reachable through setters so the bounding
/// box is always current before any collision test.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    position: Vec2, // center
    size: Vec2,     // half extents
    pub velocity: Vec2,
    pub color: Color,
    bounding_box: Rect,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            color,
            bounding_box: Rect::from_center_half_extents(position, size),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_bounding_box();
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.update_bounding_box();
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    pub fn update_bounding_box(&mut self) {
        self.bounding_box = Rect::from_center_half_extents(self.position, self.size);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, Default)]
pub struct Ball {
    pub speed: f32,
    pub last_scorer: Option<Side>,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            last_scorer: None,
        }
    }

    /// Horizontal serve direction: toward whoever was just scored against.
    /// Before the first point the ball goes to the opponent.
    pub fn serve_direction(&self) -> f32 {
        match self.last_scorer {
            Some(Side::Opponent) => -1.0,
            Some(Side::Player) | None => 1.0,
        }
    }

    /// Put the ball back in the middle and launch it at the initial speed
    pub fn serve(&mut self, body: &mut Body, map: &GameMap, config: &Config, rng: &mut GameRng) {
        self.speed = config.ball_speed_initial;
        body.set_position(map.ball_spawn());

        let angle = if config.serve_max_angle > 0.0 {
            rng.0
                .gen_range(-config.serve_max_angle..=config.serve_max_angle)
        } else {
            0.0
        };
        body.velocity =
            Vec2::new(self.serve_direction() * angle.cos(), angle.sin()) * self.speed;
    }

    /// Start-of-round state: nobody has scored yet
    pub fn reset(&mut self, body: &mut Body, map: &GameMap, config: &Config, rng: &mut GameRng) {
        self.last_scorer = None;
        self.serve(body, map, config, rng);
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
}

impl Paddle {
    pub fn new(side: Side, controller: Controller) -> Self {
        Self { side, controller }
    }

    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    /// Spawn position for this paddle in the given map
    pub fn spawn(&self, map: &GameMap, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(self.side, map.width), map.center().y)
    }

    pub fn reset(&self, body: &mut Body, map: &GameMap, config: &Config) {
        body.set_position(self.spawn(map, config));
        body.velocity = Vec2::ZERO;
    }
}

/// Score readout shown at the top of the window
#[derive(Debug, Clone, Default)]
pub struct ScoreText {
    pub text: String,
}

impl ScoreText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(map: &GameMap) -> Vec2 {
        Vec2::new(map.width / 2.0, crate::Params::SCORE_TEXT_TOP)
    }
}
