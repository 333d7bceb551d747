use super::{DropOutcome, TerrainMover};
use crate::env::OpacityGrid;
use crate::state::CreatureState;

impl<G> TerrainMover<'_, G>
where
    G: OpacityGrid + ?Sized,
{
    /// Places a freshly spawned worm on the terrain.
    ///
    /// If the spawn point is embedded in terrain the worm is first raised one
    /// pixel at a time until it is free or has risen a full sprite height above
    /// the level. It is then lowered until the next pixel would collide or it
    /// leaves the bottom edge, backed off by one pixel, and marked grounded.
    pub fn drop_to_ground(&self, creature: &mut CreatureState) -> DropOutcome {
        let top = -self.hitbox.sprite_height();
        let bottom = self.level_height();

        let mut position = creature.position;
        let mut raised = 0;
        while position.y > top && self.collides_at(position) {
            position.y -= 1;
            raised += 1;
        }

        let free = position;
        while position.y < bottom && !self.collides_at(position) {
            position.y += 1;
        }
        let found_ground = position.y < bottom;
        position.y -= 1;

        creature.position = position;
        creature.on_ground = true;

        DropOutcome {
            raised,
            descent: position.y - free.y,
            found_ground,
        }
    }

    /// Starts a fall if the ground under a grounded worm has disappeared.
    ///
    /// Returns true when the worm was released.
    pub fn release_if_unsupported(&self, creature: &mut CreatureState) -> bool {
        if !creature.on_ground || self.is_supported(creature) {
            return false;
        }
        creature.on_ground = false;
        creature.fall_speed = 0;
        true
    }
}
