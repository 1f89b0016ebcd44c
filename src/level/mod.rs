//! Level domain: the side-scrolling level — spawning, pickups, rescues and
//! the progression gate deciding whether the exit may fire.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    BookHint, Checkpoint, Collectible, CollectibleKind, Companion, LevelEntity,
};
pub use systems::exit_permitted;

use bevy::prelude::*;

use crate::core::{GameState, SimSet};

/// Vertical kill bound and width of whatever arena is currently live.
/// The level and the boss arena each insert their own on entry.
#[derive(Resource, Debug, Clone)]
pub struct ArenaBounds {
    pub kill_y: f32,
    pub width: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            kill_y: -150.0,
            width: 1.0,
        }
    }
}

/// Exit-gate thresholds. Configuration, not invariants: product may retune.
#[derive(Resource, Debug, Clone)]
pub struct ProgressionTuning {
    pub required_answers: u32,
    pub required_rescues: u32,
    pub rescues_per_life: u32,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            required_answers: 2,
            required_rescues: 5,
            rescues_per_life: 3,
        }
    }
}

/// Fraction of the level crossed, read by presentation.
#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    pub fraction: f32,
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaBounds>()
            .init_resource::<ProgressionTuning>()
            .init_resource::<LevelProgress>()
            .add_systems(OnEnter(GameState::Run), spawn::spawn_level)
            .add_systems(OnExit(GameState::Run), spawn::cleanup_level)
            .add_systems(
                FixedUpdate,
                (
                    systems::handle_pickups,
                    systems::handle_rescues,
                    systems::handle_exit_reached,
                    systems::update_progress.run_if(in_state(GameState::Run)),
                )
                    .chain()
                    .in_set(SimSet::Machines),
            );
    }
}
