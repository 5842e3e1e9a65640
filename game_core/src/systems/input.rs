use hecs::World;

use crate::{InputQueue, PaddleIntent};

/// Copy the latest keyboard intent onto the player paddle.
///
/// Runs first in the step so the whole tick observes one consistent intent
/// even though key events arrive between ticks.
pub fn ingest_input(world: &mut World, input: &InputQueue) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = input.dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Side};

    #[test]
    fn test_ingest_copies_latest_intent() {
        let mut world = World::new();
        let entity = create_paddle(&mut world, Side::Player, 150.0);

        let mut input = InputQueue::new();
        input.set_dir(-1);
        ingest_input(&mut world, &input);
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, -1);

        input.set_dir(0);
        ingest_input(&mut world, &input);
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, 0);
    }
}
