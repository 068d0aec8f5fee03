/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (pixels)
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 900.0;

    // Paddle
    pub const PADDLE_HALF_WIDTH: f32 = 16.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 200.0;
    pub const PADDLE_INSET: f32 = 100.0; // Distance from the side edge
    pub const PADDLE_STEP: f32 = 10.0; // Per input tick while a key is held
    pub const PADDLE_VELOCITY_HINT: f32 = 100.0;
    pub const AI_PADDLE_SPEED: f32 = 450.0; // pixels per second
    pub const AI_DEADZONE: f32 = 4.0;

    // Ball
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_SPEED_INITIAL: f32 = 300.0; // pixels per second
    pub const BALL_SPEED_MAX: f32 = 1200.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Per axis, on paddle hit

    // Score
    pub const SCORE_LIMIT: u32 = 10; // Total points per round
    pub const SCORE_TEXT_TOP: f32 = 40.0;

    // Timing
    pub const FIXED_DT: f32 = 0.001; // 1 ms physics step
    pub const PHYSICS_INTERVAL_MS: u64 = 1;
    pub const INPUT_INTERVAL_MS: u64 = 8; // ~125 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
