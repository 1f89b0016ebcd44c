//! Quiz domain: session open/close and answer handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::contacts::CheckpointEnteredEvent;
use crate::core::{GameplayPaused, RespawnPoint, RunFailedEvent, RunTally};
use crate::level::{Checkpoint, ProgressionTuning};
use crate::player::{DamageOutcome, Invincibility, Player, PlayerTuning, Vitality};
use crate::quiz::{ActiveQuiz, QuizAnsweredEvent, QuizRequestedEvent, QUIZ_PAUSE_SOURCE};
use crate::score::ScoreValues;

/// The respawn point moves a little short of the checkpoint so a hazard fall
/// after the quiz does not drop the player straight back onto the trigger.
const RESPAWN_BACKOFF: f32 = 40.0;

pub(crate) fn open_quiz(
    mut commands: Commands,
    mut entered_events: MessageReader<CheckpointEnteredEvent>,
    mut requested_events: MessageWriter<QuizRequestedEvent>,
    mut paused: ResMut<GameplayPaused>,
    mut respawn: ResMut<RespawnPoint>,
    active: Option<Res<ActiveQuiz>>,
    checkpoints: Query<&Transform, With<Checkpoint>>,
) {
    let mut session_open = active.is_some();

    for event in entered_events.read() {
        if session_open {
            continue;
        }
        session_open = true;

        if let Ok(transform) = checkpoints.get(event.checkpoint) {
            respawn.position = Vec2::new(
                transform.translation.x - RESPAWN_BACKOFF,
                transform.translation.y + 10.0,
            );
        }

        paused.pause(QUIZ_PAUSE_SOURCE);
        commands.insert_resource(ActiveQuiz {
            checkpoint: event.checkpoint,
            topic_id: event.topic_id,
        });
        requested_events.write(QuizRequestedEvent {
            checkpoint: event.checkpoint,
            topic_id: event.topic_id,
        });
        info!("Quiz opened for topic {}", event.topic_id);
    }
}

pub(crate) fn handle_quiz_answers(
    mut commands: Commands,
    mut answer_events: MessageReader<QuizAnsweredEvent>,
    mut failed_events: MessageWriter<RunFailedEvent>,
    active: Option<Res<ActiveQuiz>>,
    mut paused: ResMut<GameplayPaused>,
    values: Res<ScoreValues>,
    progression: Res<ProgressionTuning>,
    player_tuning: Res<PlayerTuning>,
    mut tally: ResMut<RunTally>,
    mut checkpoints: Query<&mut Checkpoint>,
    mut players: Query<(&mut Vitality, &mut Invincibility), With<Player>>,
) {
    let Some(active) = active else {
        // Answers with no open session are absorbed.
        for _ in answer_events.read() {}
        return;
    };

    for event in answer_events.read() {
        if event.correct {
            // Completed checkpoints are never re-askable.
            if let Ok(mut checkpoint) = checkpoints.get_mut(active.checkpoint) {
                checkpoint.completed = true;
            }
            tally.correct_answers += 1;
            tally.score += values.correct_answer;

            let remaining = progression
                .required_answers
                .saturating_sub(tally.correct_answers);
            if remaining == 0 {
                info!("Answer quota met: the exit gate half is open");
            } else {
                info!("Correct answer; {} more needed for the exit", remaining);
            }

            paused.unpause(QUIZ_PAUSE_SOURCE);
            commands.remove_resource::<ActiveQuiz>();
            break;
        }

        // Wrong answer: costs a life, then the same question may be retried.
        let mut fatal = false;
        for (mut vitality, mut invincibility) in &mut players {
            match vitality.take_damage(&mut invincibility, player_tuning.invincibility_seconds) {
                DamageOutcome::Fatal => fatal = true,
                DamageOutcome::Survived | DamageOutcome::Ignored => {
                    info!("Wrong answer; retry allowed");
                }
            }
        }
        if fatal {
            failed_events.write(RunFailedEvent);
            paused.unpause(QUIZ_PAUSE_SOURCE);
            commands.remove_resource::<ActiveQuiz>();
            break;
        }
    }
}

pub(crate) fn close_quiz(mut commands: Commands, mut paused: ResMut<GameplayPaused>) {
    paused.unpause(QUIZ_PAUSE_SOURCE);
    commands.remove_resource::<ActiveQuiz>();
}
