//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading; nothing simulates yet.
    #[default]
    Boot,
    /// The side-scrolling level.
    Run,
    /// The boss arena.
    Boss,
    /// Terminal failure: the player ran out of lives.
    GameOver,
    /// Terminal success: the boss was defeated.
    Victory,
}
