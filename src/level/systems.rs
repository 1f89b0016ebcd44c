//! Level domain: pickup/rescue reactions, the progression gate and the exit
//! trigger.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::contacts::{ExitReachedEvent, PickupEvent, RescueEvent};
use crate::core::{Doomed, LevelClearedEvent, RunTally};
use crate::level::components::{BookHint, CollectibleKind};
use crate::level::{ArenaBounds, LevelProgress, ProgressionTuning};
use crate::player::{Player, Vitality};

/// The gate is a pure predicate over the two counters; it keeps no state of
/// its own.
pub fn exit_permitted(tally: &RunTally, tuning: &ProgressionTuning) -> bool {
    tally.correct_answers >= tuning.required_answers && tally.rescues >= tuning.required_rescues
}

pub(crate) fn handle_pickups(
    mut commands: Commands,
    mut pickup_events: MessageReader<PickupEvent>,
    mut tally: ResMut<RunTally>,
    hints: Query<&BookHint>,
) {
    for event in pickup_events.read() {
        match event.kind {
            CollectibleKind::Coin => {
                tally.coins += 1;
                tally.score += event.value;
            }
            CollectibleKind::Book => {
                tally.books_value += event.value;
                tally.score += event.value;
                if let Ok(hint) = hints.get(event.collectible) {
                    info!("[{}] {}", hint.topic, hint.text);
                }
            }
        }
        commands.entity(event.collectible).insert(Doomed);
    }
}

pub(crate) fn handle_rescues(
    mut commands: Commands,
    mut rescue_events: MessageReader<RescueEvent>,
    tuning: Res<ProgressionTuning>,
    mut tally: ResMut<RunTally>,
    mut players: Query<&mut Vitality, With<Player>>,
) {
    for event in rescue_events.read() {
        tally.rescues += 1;
        commands.entity(event.companion).insert(Doomed);

        // Every Nth cumulative rescue grants a life, capped by the player.
        if tally.rescues % tuning.rescues_per_life == 0 {
            for mut vitality in &mut players {
                if vitality.grant_life() {
                    info!("Life granted: {} companions rescued", tally.rescues);
                }
            }
        }

        let remaining = tuning.required_rescues.saturating_sub(tally.rescues);
        if remaining == 0 {
            info!("Rescue quota met ({} rescued)", tally.rescues);
        } else {
            info!(
                "Companion rescued ({}/{} toward the exit)",
                tally.rescues, tuning.required_rescues
            );
        }
    }
}

pub(crate) fn handle_exit_reached(
    mut exit_events: MessageReader<ExitReachedEvent>,
    mut cleared_events: MessageWriter<LevelClearedEvent>,
    tuning: Res<ProgressionTuning>,
    tally: Res<RunTally>,
) {
    let mut fired = false;
    for _ in exit_events.read() {
        if fired {
            continue;
        }
        if exit_permitted(&tally, &tuning) {
            cleared_events.write(LevelClearedEvent);
            fired = true;
        } else {
            let missing_answers = tuning.required_answers.saturating_sub(tally.correct_answers);
            let missing_rescues = tuning.required_rescues.saturating_sub(tally.rescues);
            info!(
                "Exit refused: missing {} answer(s), {} rescue(s)",
                missing_answers, missing_rescues
            );
        }
    }
}

/// Read-only fraction of the level crossed, for presentation.
pub(crate) fn update_progress(
    bounds: Res<ArenaBounds>,
    mut progress: ResMut<LevelProgress>,
    players: Query<&Transform, With<Player>>,
) {
    for transform in &players {
        progress.fraction = (transform.translation.x / bounds.width).clamp(0.0, 1.0);
    }
}
