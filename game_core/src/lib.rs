pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick.
///
/// One tick is one display frame; velocities and speeds are per-tick. The
/// sub-step order is fixed, and every rule that matches in a tick applies:
/// a ball can bounce off a wall and a paddle in the same tick.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Latch keyboard intent for this tick
    ingest_input(world, input);

    // 2. Move the player paddle by its intent
    move_player_paddle(world, config);

    // 3. Move the AI paddle (chase policy)
    move_ai_paddle(world, config);

    // 4. Move ball
    move_ball(world);

    // 5. Reflect off top/bottom walls
    bounce_walls(world, config, events);

    // 6. Paddle bounces, player side then AI side
    paddle_hit(world, config, Side::Player, events);
    paddle_hit(world, config, Side::Ai, events);

    // 7. Award points for balls fully past an edge
    check_scoring(world, config, score, events);
}

/// Helper to create a paddle entity. Only the player paddle carries an
/// intent component; the AI paddle is driven by the chase policy.
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    match side {
        Side::Player => world.spawn((Paddle::new(side, y), PaddleIntent::new())),
        Side::Ai => world.spawn((Paddle::new(side, y),)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, speed: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, speed),))
}
