//! Quiz domain: the request/response channel between the simulation and the
//! external quiz collaborator.
//!
//! Touching an unanswered checkpoint pauses the simulation and publishes a
//! `QuizRequestedEvent`. The collaborator (the quiz overlay in the full app,
//! the test harness in tests) answers with a `QuizAnsweredEvent`; the
//! simulation resumes when the session closes. No named string events, no
//! implicit scene-pause side effects.

mod systems;


use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{GameState, SimSet};

pub const QUIZ_PAUSE_SOURCE: &str = "quiz";

/// The checkpoint currently awaiting an answer. Present iff a quiz session
/// is open.
#[derive(Resource, Debug)]
pub struct ActiveQuiz {
    pub checkpoint: Entity,
    pub topic_id: u32,
}

/// Ask the collaborator the question for this topic.
#[derive(Debug)]
pub struct QuizRequestedEvent {
    pub checkpoint: Entity,
    pub topic_id: u32,
}

impl Message for QuizRequestedEvent {}

/// The collaborator's verdict for the open session.
#[derive(Debug)]
pub struct QuizAnsweredEvent {
    pub correct: bool,
}

impl Message for QuizAnsweredEvent {}

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<QuizRequestedEvent>()
            .add_message::<QuizAnsweredEvent>()
            .add_systems(FixedUpdate, systems::open_quiz.in_set(SimSet::Machines))
            .add_systems(
                Update,
                systems::handle_quiz_answers.run_if(in_state(GameState::Run)),
            )
            .add_systems(OnExit(GameState::Run), systems::close_quiz);
    }
}
