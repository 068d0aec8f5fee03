//! Round State Machine
//!
//! A round runs until the score limit is reached, then waits for the outcome
//! to be acknowledged before the next one starts.

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InRound,
    RoundOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    ScoreLimitReached,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: RoundState,
    to_state: RoundState,
    action: RoundAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> RoundState {
        self.from_state
    }

    pub fn to_state(&self) -> RoundState {
        self.to_state
    }

    pub fn action(&self) -> RoundAction {
        self.action
    }
}

/// Round Finite State Machine
#[derive(Debug)]
pub struct RoundFsm {
    state: RoundState,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self {
            state: RoundState::InRound,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("round: {:?} -> {:?} on {:?}", from_state, next_state, action);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: RoundAction) -> Option<RoundState> {
        match (self.state, action) {
            (RoundState::InRound, RoundAction::ScoreLimitReached) => Some(RoundState::RoundOver),
            (RoundState::RoundOver, RoundAction::Restart) => Some(RoundState::InRound),
            _ => None,
        }
    }

    pub fn is_in_round(&self) -> bool {
        self.state == RoundState::InRound
    }
}

impl Default for RoundFsm {
    fn default() -> Self {
        Self::new()
    }
}
