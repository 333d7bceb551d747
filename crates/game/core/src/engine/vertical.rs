use super::{TerrainMover, VerticalOutcome};
use crate::env::OpacityGrid;
use crate::state::{CreatureState, Facing};

impl<G> TerrainMover<'_, G>
where
    G: OpacityGrid + ?Sized,
{
    /// Translates the worm by `(dx, dy)` in one jump.
    ///
    /// Facing follows the sign of `dx` even when the move is rejected. A target
    /// that collides or lies outside the coordinate range leaves the position
    /// untouched; there is no partial move.
    pub fn move_vertical(&self, creature: &mut CreatureState, dx: i32, dy: i32) -> VerticalOutcome {
        if let Some(facing) = Facing::from_dx(dx) {
            creature.facing = facing;
        }

        let Some(target) = creature.position.checked_offset(dx, dy) else {
            return VerticalOutcome::Rejected;
        };
        if self.collides_at(target) {
            return VerticalOutcome::Rejected;
        }

        creature.position = target;
        VerticalOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{block_worm, dot_worm, level};
    use super::*;
    use crate::config::GameConfig;
    use crate::state::Point;

    #[test]
    fn rejected_move_keeps_position_but_turns() {
        let level = level(&[
            "......", //
            "......",
            "....##",
            "....##",
        ]);
        let hitbox = block_worm();
        let config = GameConfig::default();
        let mover = TerrainMover::new(&level, &hitbox, &config);
        let mut worm = CreatureState::new(Point::new(1, 2)).with_facing(Facing::Left);
        let before = worm;

        assert_eq!(mover.move_vertical(&mut worm, 2, 0), VerticalOutcome::Rejected);

        assert_eq!(worm.position, before.position);
        assert_eq!(worm.on_ground, before.on_ground);
        assert_eq!(worm.fall_speed, before.fall_speed);
        assert_eq!(worm.facing, Facing::Right);
    }

    #[test]
    fn rejection_is_independent_of_direction() {
        let level = level(&[
            "###", //
            "#.#",
            "###",
        ]);
        let hitbox = dot_worm();
        let config = GameConfig::default();
        let mover = TerrainMover::new(&level, &hitbox, &config);

        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1), (1, 1), (-1, -1)] {
            let mut worm = CreatureState::new(Point::new(1, 1));
            assert_eq!(mover.move_vertical(&mut worm, dx, dy), VerticalOutcome::Rejected);
            assert_eq!(worm.position, Point::new(1, 1));
        }
    }

    #[test]
    fn free_target_is_committed_and_may_jump_over_terrain() {
        let level = level(&[
            "......", //
            "..#...",
            "......",
        ]);
        let hitbox = block_worm();
        let config = GameConfig::default();
        let mover = TerrainMover::new(&level, &hitbox, &config);
        let mut worm = CreatureState::new(Point::new(0, 1)).grounded();

        assert_eq!(mover.move_vertical(&mut worm, 3, 0), VerticalOutcome::Moved);

        assert_eq!(worm.position, Point::new(3, 1));
        assert_eq!(worm.facing, Facing::Right);
        assert!(worm.on_ground);
    }

    #[test]
    fn translation_past_the_coordinate_range_is_rejected() {
        let level = level(&["....", "....", "####"]);
        let hitbox = block_worm();
        let config = GameConfig::default();
        let mover = TerrainMover::new(&level, &hitbox, &config);
        let mut worm = CreatureState::new(Point::new(1, 0))
            .with_facing(Facing::Left)
            .grounded();

        assert_eq!(mover.move_vertical(&mut worm, i32::MAX, 0), VerticalOutcome::Rejected);
        assert_eq!(worm.position, Point::new(1, 0));
        assert_eq!(worm.facing, Facing::Right);

        worm.position = Point::new(1, -1);
        assert_eq!(mover.move_vertical(&mut worm, 0, i32::MIN), VerticalOutcome::Rejected);
        assert_eq!(worm.position, Point::new(1, -1));
    }

    #[test]
    fn pure_vertical_move_keeps_facing() {
        let level = level(&["...", "...", "..."]);
        let hitbox = block_worm();
        let config = GameConfig::default();
        let mover = TerrainMover::new(&level, &hitbox, &config);
        let mut worm = CreatureState::new(Point::new(0, 1)).with_facing(Facing::Left);

        mover.move_vertical(&mut worm, 0, -1);

        assert_eq!(worm.position, Point::new(0, 0));
        assert_eq!(worm.facing, Facing::Left);
    }
}
