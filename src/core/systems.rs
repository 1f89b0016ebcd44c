//! Core domain: run clock, outcome routing and the end-of-tick sweep.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::components::Doomed;
use crate::core::events::{LevelClearedEvent, RunFailedEvent, RunVictoryEvent};
use crate::core::resources::{GameplayPaused, RunClock, RunTally};
use crate::core::state::GameState;

pub(crate) fn reset_run(
    mut clock: ResMut<RunClock>,
    mut tally: ResMut<RunTally>,
    mut paused: ResMut<GameplayPaused>,
) {
    clock.reset();
    tally.reset();
    paused.sources.clear();
    info!("Run started");
}

pub(crate) fn tick_run_clock(time: Res<Time>, mut clock: ResMut<RunClock>) {
    clock.elapsed += time.delta_secs();
}

pub(crate) fn handle_level_cleared(
    mut cleared_events: MessageReader<LevelClearedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _ in cleared_events.read() {
        info!("Exit gate open: leaving the level for the boss arena");
        next_state.set(GameState::Boss);
    }
}

pub(crate) fn handle_run_failed(
    mut failed_events: MessageReader<RunFailedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _ in failed_events.read() {
        info!("Run failed: out of lives");
        next_state.set(GameState::GameOver);
    }
}

pub(crate) fn handle_run_victory(
    mut victory_events: MessageReader<RunVictoryEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in victory_events.read() {
        info!("Run won with final score {}", event.final_score);
        next_state.set(GameState::Victory);
    }
}

/// End-of-tick sweep for actors disabled earlier in the same tick.
pub(crate) fn sweep_doomed(mut commands: Commands, doomed: Query<Entity, With<Doomed>>) {
    for entity in &doomed {
        commands.entity(entity).despawn();
    }
}
