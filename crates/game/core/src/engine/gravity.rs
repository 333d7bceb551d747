use super::{FallOutcome, TerrainMover};
use crate::env::OpacityGrid;
use crate::state::CreatureState;

impl<G> TerrainMover<'_, G>
where
    G: OpacityGrid + ?Sized,
{
    /// Advances the worm by one simulation tick of gravity.
    ///
    /// An airborne worm gains one pixel per tick of fall speed. The worm then
    /// moves down up to `fall_speed` pixels, one at a time, and becomes grounded
    /// as soon as the next pixel would collide. The outcome reports the pixels
    /// actually moved: any movement that ends on ground is a landing, and
    /// movement that does not is a fall, even for a worm that started the tick
    /// grounded. Fall speed is not reset on landing.
    pub fn gravity_tick(&self, creature: &mut CreatureState) -> FallOutcome {
        let was_airborne = !creature.on_ground;
        if was_airborne {
            creature.fall_speed = creature.fall_speed.saturating_add(1);
        }

        let speed = creature.fall_speed.max(0);
        let floor = self.level_height();
        let top = self.hitbox.iter().map(|offset| offset.y).min().unwrap_or(0);
        let mut distance = 0;
        while distance < speed {
            if creature.position.y.saturating_add(top) >= floor {
                // Nothing below the bottom edge can collide.
                creature.position = creature.position.offset(0, speed - distance);
                distance = speed;
                break;
            }
            let below = creature.position.offset(0, 1);
            if self.collides_at(below) {
                creature.on_ground = true;
                return if was_airborne || distance > 0 {
                    FallOutcome::Landed { distance }
                } else {
                    FallOutcome::Resting
                };
            }
            creature.position = below;
            distance += 1;
        }

        if distance == 0 {
            FallOutcome::Resting
        } else {
            creature.on_ground = false;
            FallOutcome::Falling { distance }
        }
    }
}
