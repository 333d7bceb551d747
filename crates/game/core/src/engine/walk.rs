use super::{HorizontalOutcome, TerrainMover};
use crate::env::OpacityGrid;
use crate::state::{CreatureState, Facing, Point};

impl<G> TerrainMover<'_, G>
where
    G: OpacityGrid + ?Sized,
{
    /// Walks a grounded worm `dx` pixels along the terrain.
    ///
    /// The worm advances one pixel at a time. A blocked pixel is climbed if
    /// rising at most `max_climb` pixels frees it; otherwise the walk stops in
    /// front of the wall. A free pixel is followed down onto ground at most
    /// `max_descent` pixels below; with no ground in reach the worm keeps the
    /// step, starts falling and the rest of `dx` is dropped.
    ///
    /// The walk also stops once the squared distance from the starting point
    /// reaches `dx²`, so climbing never makes the worm faster than walking on
    /// flat ground.
    pub fn move_horizontal(&self, creature: &mut CreatureState, dx: i32) -> HorizontalOutcome {
        if dx == 0 || !creature.on_ground {
            return HorizontalOutcome::Ignored;
        }
        if let Some(facing) = Facing::from_dx(dx) {
            creature.facing = facing;
        }

        let budget = i64::from(dx) * i64::from(dx);
        let step = dx.signum();
        let start = creature.position;
        let mut position = start;
        let mut steps = 0;

        for _ in 0..dx.unsigned_abs() {
            let ahead = position.offset(step, 0);

            if self.collides_at(ahead) {
                match self.climb(ahead) {
                    Some(raised) => position = raised,
                    None => {
                        creature.position = position;
                        return HorizontalOutcome::Blocked { steps };
                    }
                }
            } else {
                match self.ground_beneath(ahead) {
                    Some(landing) => position = landing,
                    None => {
                        creature.position = ahead;
                        creature.on_ground = false;
                        creature.fall_speed = 0;
                        return HorizontalOutcome::WalkedOffLedge { steps: steps + 1 };
                    }
                }
            }

            steps += 1;
            if position.distance_squared(start) >= budget {
                break;
            }
        }

        creature.position = position;
        HorizontalOutcome::Walked { steps }
    }

    /// Lowest position up to `max_climb` pixels above `blocked` that is free.
    fn climb(&self, blocked: Point) -> Option<Point> {
        (1..=i32::from(self.config.max_climb))
            .map(|rise| blocked.offset(0, -rise))
            .find(|&candidate| !self.collides_at(candidate))
    }

    /// Resting position at most `max_descent` pixels below the free `ahead`.
    fn ground_beneath(&self, ahead: Point) -> Option<Point> {
        (0..=i32::from(self.config.max_descent))
            .map(|drop| ahead.offset(0, drop))
            .find(|&candidate| self.collides_at(candidate.offset(0, 1)))
    }
}
