use crate::params::Params;
use crate::Side;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_speed: f32,
    pub ai_paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_increment: f32,
    pub max_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_score: Params::MAX_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle (top-left corner)
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => Params::PLAYER_PADDLE_X,
            Side::Ai => Params::AI_PADDLE_X,
        }
    }

    /// Clamp a paddle's top-left Y to the board
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.board_height - self.paddle_height)
    }

    /// Where the ball respawns after a point (board centre)
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.board_width / 2.0, self.board_height / 2.0)
    }
}
