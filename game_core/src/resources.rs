use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai += 1;
    }

    pub fn has_winner(&self, max_score: u32) -> Option<Side> {
        if self.player >= max_score {
            Some(Side::Player)
        } else if self.ai >= max_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub paddle_hit: bool,
    pub wall_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Latest keyboard intent for the player paddle.
///
/// Single writer (the key handlers), single reader (the simulation step,
/// which copies the value at the tick boundary). Key-down sets -1 or 1,
/// key-up resets to 0 regardless of which key was released.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    pub dir: i8,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dir(&mut self, dir: i8) {
        self.dir = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increments() {
        let mut score = Score::new();
        score.increment_player();
        score.increment_player();
        score.increment_ai();
        assert_eq!(score.player, 2);
        assert_eq!(score.ai, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment_ai();
        }
        assert_eq!(score.has_winner(10), Some(Side::Ai));
        assert_eq!(score.has_winner(11), None);
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..9 {
            score.increment_player();
        }
        assert_eq!(score.has_winner(10), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.paddle_hit = true;
        events.wall_bounce = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.ai_scored);
        assert!(!events.paddle_hit);
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_input_queue_keeps_latest() {
        let mut queue = InputQueue::new();
        queue.set_dir(-1);
        queue.set_dir(1);
        assert_eq!(queue.dir, 1);
        queue.set_dir(0);
        assert_eq!(queue.dir, 0);
    }
}
