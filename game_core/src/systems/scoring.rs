use hecs::World;

use crate::{Ball, Config, Events, Score};

/// Award a point when the ball has fully left the board, then reset it.
///
/// "Fully" means the whole ball: trailing edge past the board edge. The reset
/// recentres the ball, mirrors its horizontal direction and restores the base
/// speed; scores only ever move up here.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_radius < 0.0 {
            score.increment_ai();
            events.ai_scored = true;
            ball.reset(config.ball_spawn(), config.ball_base_speed);
        } else if ball.pos.x - config.ball_radius > config.board_width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(config.ball_spawn(), config.ball_base_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup();
        let entity = create_ball(
            &mut world,
            Vec2::new(config.board_width + config.ball_radius + 1.0, 200.0),
            Vec2::new(4.0, 4.0),
            5.5,
        );

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.player, 1);
        assert_eq!(score.ai, 0);
        assert!(events.player_scored);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0), "Ball recentred");
        assert_eq!(ball.vel.x, -4.0, "Horizontal direction mirrored");
        assert_eq!(ball.vel.y, 4.0, "Vertical velocity carried over");
        assert_eq!(ball.speed, 4.0, "Speed restored to base");
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup();
        create_ball(
            &mut world,
            Vec2::new(-config.ball_radius - 1.0, 200.0),
            Vec2::new(-4.0, -4.0),
            4.0,
        );

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.ai, 1);
        assert_eq!(score.player, 0);
        assert!(events.ai_scored);
    }

    #[test]
    fn test_no_score_while_ball_straddles_edge() {
        // Trailing edge still inside the board: play continues
        let (mut world, config, mut score, mut events) = setup();
        create_ball(
            &mut world,
            Vec2::new(config.board_width + config.ball_radius - 1.0, 200.0),
            Vec2::new(4.0, 4.0),
            4.0,
        );

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.player, 0);
        assert_eq!(score.ai, 0);
        assert!(!events.player_scored && !events.ai_scored);
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup();
        let entity = create_ball(
            &mut world,
            Vec2::new(config.board_width + config.ball_radius + 1.0, 200.0),
            Vec2::new(4.0, 4.0),
            4.0,
        );

        check_scoring(&mut world, &config, &mut score, &mut events);

        // Push the ball back out and score again
        world.get::<&mut Ball>(entity).unwrap().pos.x =
            config.board_width + config.ball_radius + 1.0;
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.player, 2);
    }
}
