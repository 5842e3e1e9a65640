use hecs::World;

use crate::{Ball, Config, Paddle, PaddleIntent};

/// Move the player paddle by its current intent, clamped to the board
pub fn move_player_paddle(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir as f32 * config.player_paddle_speed;
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Advance the ball by its per-tick velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
