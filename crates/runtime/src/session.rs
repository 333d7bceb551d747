//! Single-worm play session.
//!
//! [`Session`] owns the level mask, the worm outline and the worm itself, and
//! sequences engine calls: intents and terrain hits between ticks, gravity on
//! each tick. The engine borrows the pieces it needs for the duration of one
//! call, so terrain damage is visible on the very next move.
use game_content::LoadedScenario;
use game_core::{
    AlphaMask, CreatureSnapshot, CreatureState, FallOutcome, GameConfig, Hitbox,
    HorizontalOutcome, MoveIntent, MoveOutcome, OpacityGrid, Point, TerrainMover,
    VerticalOutcome,
};
use serde::{Deserialize, Serialize};

use crate::api::{Result, SessionError};
use crate::script::{Command, Script};

/// Per-frame view handed to renderers and printed by the headless driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub creature: CreatureSnapshot,
}

/// Tallies of what a script run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub intents: u64,
    /// Intents that left the worm where it was.
    pub blocked: u64,
    pub ticks: u64,
    pub craters: u64,
}

#[derive(Clone, Debug)]
pub struct Session {
    level: AlphaMask,
    hitbox: Hitbox,
    config: GameConfig,
    creature: CreatureState,
    tick: u64,
}

impl Session {
    /// Spawns the worm at `config.spawn` and drops it onto the terrain.
    pub fn new(level: AlphaMask, hitbox: Hitbox, config: GameConfig) -> Result<Self> {
        let dimensions = level.dimensions();
        if dimensions.is_empty() {
            return Err(SessionError::EmptyLevel {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let mut creature = CreatureState::new(config.spawn);
        let drop = TerrainMover::new(&level, &hitbox, &config).drop_to_ground(&mut creature);

        if drop.found_ground {
            tracing::info!(
                spawn = %config.spawn,
                position = %creature.position,
                raised = drop.raised,
                "worm placed on terrain"
            );
        } else {
            tracing::warn!(
                spawn = %config.spawn,
                position = %creature.position,
                "no ground below spawn point; worm rests on the bottom edge"
            );
        }

        Ok(Self {
            level,
            hitbox,
            config,
            creature,
            tick: 0,
        })
    }

    pub fn from_loaded(loaded: LoadedScenario) -> Result<Self> {
        Self::new(loaded.level, loaded.hitbox, loaded.config)
    }

    /// Applies one input intent.
    pub fn apply(&mut self, intent: MoveIntent) -> MoveOutcome {
        let mover = TerrainMover::new(&self.level, &self.hitbox, &self.config);
        let outcome = mover.apply(&mut self.creature, intent);

        match outcome {
            MoveOutcome::Horizontal(HorizontalOutcome::Blocked { steps }) => {
                tracing::debug!(
                    ?intent,
                    steps,
                    position = %self.creature.position,
                    "walk blocked by wall"
                );
            }
            MoveOutcome::Horizontal(HorizontalOutcome::WalkedOffLedge { steps }) => {
                tracing::debug!(
                    ?intent,
                    steps,
                    position = %self.creature.position,
                    "walked off ledge"
                );
            }
            MoveOutcome::Vertical(VerticalOutcome::Rejected) => {
                tracing::trace!(?intent, position = %self.creature.position, "move rejected");
            }
            _ => {
                tracing::trace!(?intent, ?outcome, position = %self.creature.position, "moved");
            }
        }

        outcome
    }

    /// Advances the simulation by one gravity tick.
    pub fn tick(&mut self) -> FallOutcome {
        let mover = TerrainMover::new(&self.level, &self.hitbox, &self.config);
        let outcome = mover.gravity_tick(&mut self.creature);
        self.tick += 1;

        if let FallOutcome::Landed { distance } = outcome {
            tracing::debug!(
                tick = self.tick,
                distance,
                speed = self.creature.fall_speed,
                position = %self.creature.position,
                "worm landed"
            );
        }

        outcome
    }

    /// Carves a crater centered on `center` and releases the worm if the
    /// ground under it was removed. Returns the number of pixels touched.
    pub fn damage_terrain(&mut self, center: Point) -> usize {
        let (radius, depth) = (self.config.crater_radius, self.config.crater_depth);
        let touched = self.level.erode_disc(center, radius, depth);

        let mover = TerrainMover::new(&self.level, &self.hitbox, &self.config);
        let released = mover.release_if_unsupported(&mut self.creature);

        tracing::debug!(%center, touched, released, "terrain damaged");
        touched
    }

    /// Level pixel just below the middle of the worm's sprite.
    pub fn feet(&self) -> Point {
        let size = self.hitbox.dimensions();
        let half_width = i32::try_from(size.width / 2).unwrap_or(i32::MAX);
        self.creature
            .position
            .offset(half_width, self.hitbox.sprite_height())
    }

    /// Runs every command of `script` in order.
    pub fn run_script(&mut self, script: &Script) -> ScriptSummary {
        let mut summary = ScriptSummary::default();

        for command in script.commands() {
            match command {
                Command::Intent(intent) => {
                    summary.intents += 1;
                    let before = self.creature.position;
                    self.apply(intent);
                    if self.creature.position == before {
                        summary.blocked += 1;
                    }
                }
                Command::Tick => {
                    self.tick();
                    summary.ticks += 1;
                }
                Command::Dig(target) => {
                    let center = target.unwrap_or_else(|| self.feet());
                    self.damage_terrain(center);
                    summary.craters += 1;
                }
            }
        }

        tracing::info!(
            intents = summary.intents,
            blocked = summary.blocked,
            ticks = summary.ticks,
            craters = summary.craters,
            "script finished"
        );
        summary
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tick: self.tick,
            creature: self.creature.snapshot(),
        }
    }

    pub fn creature(&self) -> &CreatureState {
        &self.creature
    }

    pub fn level(&self) -> &AlphaMask {
        &self.level
    }

    pub fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ticks elapsed since the session started.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// True when the worm's outline overlaps solid terrain at its position.
    pub fn is_embedded(&self) -> bool {
        TerrainMover::new(&self.level, &self.hitbox, &self.config)
            .collides_at(self.creature.position)
    }
}
