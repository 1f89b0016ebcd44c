//! Core domain: run states, shared resources, outcome routing and the
//! fixed-tick simulation order.

mod components;
mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use components::Doomed;
pub use events::{LevelClearedEvent, RunFailedEvent, RunVictoryEvent};
pub use resources::{
    GameplayPaused, PlayerIdentity, RespawnPoint, RunClock, RunConfig, RunTally, gameplay_active,
    sim_active,
};
pub use state::GameState;

use bevy::prelude::*;

/// Per-tick simulation order. The sets are chained so the dispatcher's
/// determinism guarantees hold: intents write velocities, platforms carry
/// riders, bodies integrate, solids resolve (setting `grounded`), gameplay
/// pairs fire in fixed order, state machines react, and the sweep removes
/// doomed actors.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Intent,
    Platforms,
    Integrate,
    Resolve,
    Contacts,
    Machines,
    Sweep,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<RunConfig>()
            .init_resource::<RunClock>()
            .init_resource::<RunTally>()
            .init_resource::<RespawnPoint>()
            .init_resource::<PlayerIdentity>()
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_message::<RunFailedEvent>()
            .add_message::<LevelClearedEvent>()
            .add_message::<RunVictoryEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Intent.run_if(sim_active),
                    SimSet::Platforms.run_if(sim_active),
                    SimSet::Integrate.run_if(sim_active),
                    SimSet::Resolve.run_if(sim_active),
                    SimSet::Contacts.run_if(sim_active),
                    SimSet::Machines.run_if(sim_active),
                    SimSet::Sweep.run_if(sim_active),
                )
                    .chain(),
            )
            .add_systems(OnEnter(GameState::Run), systems::reset_run)
            .add_systems(Update, systems::tick_run_clock.run_if(sim_active))
            .add_systems(
                Update,
                (
                    systems::handle_level_cleared,
                    systems::handle_run_failed,
                    systems::handle_run_victory,
                ),
            )
            .add_systems(FixedUpdate, systems::sweep_doomed.in_set(SimSet::Sweep));
    }
}
