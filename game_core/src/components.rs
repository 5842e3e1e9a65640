use glam::Vec2;

/// Which side of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // left, keyboard-controlled
    Ai,     // right, policy-controlled
}

/// Paddle component. `y` is the top edge; X is fixed per side (see Config).
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn centre_y(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// The pong ball. `pos` is the centre.
///
/// `speed` is a tracked scalar, separate from `vel`: it grows by a fixed
/// increment on every paddle hit and snaps back to the base value when a
/// point is scored. It never feeds back into `vel`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self { pos, vel, speed }
    }

    /// Reset after a point: recentre, mirror the horizontal direction,
    /// restore base speed. Vertical velocity carries over.
    pub fn reset(&mut self, spawn: Vec2, base_speed: f32) {
        self.pos = spawn;
        self.vel.x = -self.vel.x;
        self.speed = base_speed;
    }
}

/// Movement intent for the keyboard-controlled paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
