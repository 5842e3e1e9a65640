//! Loop driver state machine.
//!
//! The match lifecycle has three states. `Idle` before the first start,
//! `Running` while frames are being scheduled, `Ended` once a terminal score
//! has been observed. External UI signals drive the transitions.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Start button pressed on the idle screen
    Start,
    /// The running loop observed a terminal score
    GameOver,
    /// Restart button pressed on the game-over screen
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
}

/// Match lifecycle state machine
#[derive(Debug, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Idle,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn is_ended(&self) -> bool {
        self.state == MatchState::Ended
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;
        if let Some(next) = self.next_state(action) {
            self.state = next;
            TransitionResult {
                success: true,
                from_state,
                to_state: next,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
            }
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Idle, MatchAction::Start) => Some(MatchState::Running),
            (MatchState::Running, MatchAction::GameOver) => Some(MatchState::Ended),
            (MatchState::Ended, MatchAction::Restart) => Some(MatchState::Running),
            _ => None,
        }
    }
}
