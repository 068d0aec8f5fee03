use crate::components::{Controller, Side};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    pub paddle_inset: f32,
    pub paddle_step: f32,
    pub paddle_velocity_hint: f32,
    pub ai_paddle_speed: f32,
    pub ai_deadzone: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub score_limit: u32,
    pub fixed_dt: f32,
    pub physics_interval_ms: u64,
    pub input_interval_ms: u64,
    pub max_dt: f32,
    /// Keep paddles fully inside the window.
    pub clamp_paddles: bool,
    /// Largest vertical serve angle in radians. Zero serves horizontally.
    pub serve_max_angle: f32,
    pub draw_bounding_boxes: bool,
    pub player_controller: Controller,
    pub opponent_controller: Controller,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_step: Params::PADDLE_STEP,
            paddle_velocity_hint: Params::PADDLE_VELOCITY_HINT,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ai_deadzone: Params::AI_DEADZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            score_limit: Params::SCORE_LIMIT,
            fixed_dt: Params::FIXED_DT,
            physics_interval_ms: Params::PHYSICS_INTERVAL_MS,
            input_interval_ms: Params::INPUT_INTERVAL_MS,
            max_dt: Params::MAX_DT,
            clamp_paddles: true,
            serve_max_angle: 0.0,
            draw_bounding_boxes: true,
            player_controller: Controller::Human,
            opponent_controller: Controller::Ai,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on its side and the current window width
    pub fn paddle_x(&self, side: Side, window_width: f32) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => window_width - self.paddle_inset,
        }
    }

    pub fn controller(&self, side: Side) -> Controller {
        match side {
            Side::Player => self.player_controller,
            Side::Opponent => self.opponent_controller,
        }
    }
}
