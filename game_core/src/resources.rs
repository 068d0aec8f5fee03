use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for the last update
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// How a finished round turned out, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    OpponentWin,
    PlayerWin,
}

impl Outcome {
    /// Text shown to the user when the round ends
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Tie => "Game ended in a tie!",
            Outcome::OpponentWin => "You lost.",
            Outcome::PlayerWin => "You won!",
        }
    }
}

/// Score counters for the current round
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub score_limit: u32,
}

impl GameState {
    pub fn new(score_limit: u32) -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            score_limit,
        }
    }

    pub fn total_score(&self) -> u32 {
        self.player_score + self.opponent_score
    }

    /// The round is over once the points played reach the limit
    pub fn is_over(&self) -> bool {
        self.total_score() >= self.score_limit
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
    }

    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.player_score.cmp(&self.opponent_score) {
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::OpponentWin,
            Ordering::Greater => Outcome::PlayerWin,
        }
    }

    /// Zero both scores, keeping the limit
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
    }

    /// Score readout, e.g. `"3 | 1"`
    pub fn score_text(&self) -> String {
        format!("{} | {}", self.player_score, self.opponent_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::Params::SCORE_LIMIT)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last fixed step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Player => self.player_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }
}
