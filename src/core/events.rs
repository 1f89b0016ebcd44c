//! Core domain: events for run flow outcomes.

use bevy::ecs::message::Message;

/// Event fired when the player reaches a terminal failure (out of lives).
#[derive(Debug)]
pub struct RunFailedEvent;

impl Message for RunFailedEvent {}

/// Event fired when the exit trigger fires with the progression gate open.
#[derive(Debug)]
pub struct LevelClearedEvent;

impl Message for LevelClearedEvent {}

/// Event fired when the boss encounter ends in victory.
#[derive(Debug)]
pub struct RunVictoryEvent {
    pub final_score: u32,
}

impl Message for RunVictoryEvent {}
