use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side};

/// Reflect the ball off the top and bottom walls.
///
/// Flips `vel.y` whenever the ball's edge is across a wall. No position
/// correction is applied, so the ball may overlap the wall by up to one
/// tick's travel before the reflected velocity carries it back out.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - config.ball_radius < 0.0
            || ball.pos.y + config.ball_radius > config.board_height
        {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Bounce the ball off a paddle.
///
/// The check is a one-sided edge crossing plus a strict vertical-span test on
/// the ball's centre. No moving-toward-paddle check, no re-trigger guard, no
/// push-out: while the ball overlaps a paddle the flip and the speed
/// increment repeat every tick.
pub fn paddle_hit(world: &mut World, config: &Config, side: Side, events: &mut Events) {
    let paddle_y = {
        let mut query = world.query::<&Paddle>();
        match query.iter().find(|(_e, p)| p.side == side) {
            Some((_e, paddle)) => paddle.y,
            None => return,
        }
    };
    let paddle_x = config.paddle_x(side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let crossed = match side {
            Side::Player => ball.pos.x - config.ball_radius < paddle_x + config.paddle_width,
            Side::Ai => ball.pos.x + config.ball_radius > paddle_x,
        };
        let in_span = ball.pos.y > paddle_y && ball.pos.y < paddle_y + config.paddle_height;

        if crossed && in_span {
            ball.vel.x = -ball.vel.x;
            ball.speed += config.ball_speed_increment;
            events.paddle_hit = true;
        }
    }
}
