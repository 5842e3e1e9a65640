use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Opponent policy: chase the ball's current Y.
///
/// Returns -1 (up) when the ball is above the paddle's centre, otherwise 1.
/// The paddle never idles: it moves every tick. No prediction, no reaction
/// delay, no randomness.
pub fn chase_dir(ball_y: f32, paddle_y: f32, paddle_height: f32) -> i8 {
    if ball_y < paddle_y + paddle_height / 2.0 {
        -1
    } else {
        1
    }
}

/// Apply the chase policy to the AI paddle, clamped to the board
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let dir = chase_dir(ball_y, paddle.y, config.paddle_height);
        paddle.y += dir as f32 * config.ai_paddle_speed;
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    #[test]
    fn test_chase_moves_up_when_ball_above_centre() {
        // Paddle at y=200 with height 100 has its centre at 250
        assert_eq!(chase_dir(50.0, 200.0, 100.0), -1);
    }

    #[test]
    fn test_chase_moves_down_when_ball_below_centre() {
        assert_eq!(chase_dir(350.0, 200.0, 100.0), 1);
    }

    #[test]
    fn test_chase_moves_down_when_ball_at_centre() {
        // The comparison is strict, so "at centre" falls through to the
        // down branch
        assert_eq!(chase_dir(250.0, 200.0, 100.0), 1);
    }

    #[test]
    fn test_ai_paddle_tracks_ball() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Ai, 200.0);
        create_ball(
            &mut world,
            glam::Vec2::new(400.0, 50.0),
            glam::Vec2::new(4.0, 4.0),
            4.0,
        );

        move_ai_paddle(&mut world, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 200.0 - config.ai_paddle_speed);
    }

    #[test]
    fn test_ai_paddle_stays_in_bounds() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Ai, 1.0);
        create_ball(
            &mut world,
            glam::Vec2::new(400.0, 0.0),
            glam::Vec2::new(4.0, 4.0),
            4.0,
        );

        for _ in 0..50 {
            move_ai_paddle(&mut world, &config);
        }

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 0.0, "Paddle pinned at the top edge");
    }
}
