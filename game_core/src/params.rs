/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    pub const AI_PADDLE_X: f32 = Self::BOARD_WIDTH - 20.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 5.0; // units per tick
    pub const AI_PADDLE_SPEED: f32 = 4.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_BASE_SPEED: f32 = 4.0; // restored after every point
    pub const BALL_SPEED_INCREMENT: f32 = 0.5; // added on paddle hit

    // Score
    pub const MAX_SCORE: u32 = 10; // first to 10 ends the match
}
