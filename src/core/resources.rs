//! Core domain: shared resources for run configuration and progression.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

use crate::core::state::GameState;

/// Tracks whether the simulation should tick. Any registered source (the
/// quiz overlay, a cutscene) keeps it paused until released.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Run condition: the simulation only advances while a run is live and unpaused.
pub fn sim_active(paused: Res<GameplayPaused>, state: Res<State<GameState>>) -> bool {
    !paused.is_paused() && matches!(state.get(), GameState::Run | GameState::Boss)
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Wall-clock seconds of active play. Only advances while gameplay is live,
/// so time spent in the quiz overlay does not count against the time bonus.
#[derive(Resource, Debug, Default)]
pub struct RunClock {
    pub elapsed: f32,
}

impl RunClock {
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed as u32
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Run-scoped counters mutated by pickups, kills, rescues and quiz answers.
/// `score` is the running display score; the leaderboard score is recomputed
/// from the counters by the final-score formula.
#[derive(Resource, Debug, Default)]
pub struct RunTally {
    pub coins: u32,
    pub books_value: u32,
    pub enemies_defeated: u32,
    pub correct_answers: u32,
    pub rescues: u32,
    pub score: u32,
    pub boss_defeated: bool,
}

impl RunTally {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Where the player reappears after a non-fatal hazard fall.
/// Updated when a checkpoint is touched; the boss arena sets its own.
#[derive(Resource, Debug, Default)]
pub struct RespawnPoint {
    pub position: Vec2,
}

/// Identity captured by the outer application's registration flow.
/// The simulation only forwards it to the score service.
#[derive(Resource, Debug, Clone)]
pub struct PlayerIdentity {
    pub name: String,
    pub contact: String,
}

impl Default for PlayerIdentity {
    fn default() -> Self {
        Self {
            name: "???".to_string(),
            contact: String::new(),
        }
    }
}
