use hecs::World;

use crate::{create_ball, create_paddle, step, Ball, Config, Events, InputQueue, Score, Side};

/// Plain-float view of one frame, handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub player_paddle_y: f32,
    pub ai_paddle_y: f32,
    pub player_score: u32,
    pub ai_score: u32,
}

/// What the loop driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Render this snapshot, taken just before this frame's tick ran
    Continue(FrameSnapshot),
    /// Terminal score reached; render nothing further
    Ended { player_score: u32, ai_score: u32 },
}

/// A single-player match: the world, its resources and the intent channel
pub struct GameSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
}

impl GameSession {
    pub fn new() -> Self {
        let config = Config::new();
        let mut world = World::new();

        // Both paddles start centred; the ball serves from the middle,
        // heading toward the AI side
        let paddle_y = (config.board_height - config.paddle_height) / 2.0;
        create_paddle(&mut world, Side::Player, paddle_y);
        create_paddle(&mut world, Side::Ai, paddle_y);
        create_ball(
            &mut world,
            config.ball_spawn(),
            glam::Vec2::splat(config.ball_base_speed),
            config.ball_base_speed,
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
        }
    }

    /// Record the latest keyboard intent; read by the next tick
    pub fn set_player_dir(&mut self, dir: i8) {
        self.input.set_dir(dir);
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &self.input,
        );
    }

    /// Derived match state: true once either side holds the terminal score
    pub fn is_over(&self) -> bool {
        self.score.has_winner(self.config.max_score).is_some()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot {
            ball_x: 0.0,
            ball_y: 0.0,
            player_paddle_y: 0.0,
            ai_paddle_y: 0.0,
            player_score: self.score.player,
            ai_score: self.score.ai,
        };
        for (_e, ball) in self.world.query::<&Ball>().iter() {
            snapshot.ball_x = ball.pos.x;
            snapshot.ball_y = ball.pos.y;
        }
        for (_e, paddle) in self.world.query::<&crate::Paddle>().iter() {
            match paddle.side {
                Side::Player => snapshot.player_paddle_y = paddle.y,
                Side::Ai => snapshot.ai_paddle_y = paddle.y,
            }
        }
        snapshot
    }

    /// One pass of the running loop: terminal check first, then a snapshot
    /// for rendering, then the tick.
    ///
    /// Because the check precedes the tick, the frame that reaches the
    /// terminal score still renders and plays out; only the following frame
    /// reports `Ended`.
    pub fn frame(&mut self) -> FrameOutcome {
        if self.is_over() {
            return FrameOutcome::Ended {
                player_score: self.score.player,
                ai_score: self.score.ai,
            };
        }
        let snapshot = self.snapshot();
        self.step();
        FrameOutcome::Continue(snapshot)
    }

    /// Restart semantics: zero the scores and reset the ball exactly as a
    /// scored point does. Paddles keep their positions.
    pub fn reset_match(&mut self) {
        self.score = Score::new();
        self.events.clear();
        let spawn = self.config.ball_spawn();
        let base_speed = self.config.ball_base_speed;
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(spawn, base_speed);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
