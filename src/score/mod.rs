//! Score domain: the final-score formula and the persistence boundary.

mod leaderboard;


pub use leaderboard::{
    JsonLeaderboard, LeaderboardError, RemoteScoreSink, RunRecord, ScoreEntry, ScoreRepository,
};

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Point values credited immediately on pickups, kills and answers.
#[derive(Resource, Debug, Clone)]
pub struct ScoreValues {
    pub coin: u32,
    pub book: u32,
    pub enemy: u32,
    pub correct_answer: u32,
}

impl Default for ScoreValues {
    fn default() -> Self {
        Self {
            coin: 10,
            book: 25,
            enemy: 50,
            correct_answer: 100,
        }
    }
}

/// The final-score formula. Evaluated identically at the level exit and at
/// boss victory; both call sites must agree bit-exactly.
pub fn final_score(correct_answers: u32, enemies_defeated: u32, coins: u32, elapsed_seconds: u32) -> u32 {
    let time_bonus = 1000u32.saturating_sub(elapsed_seconds.saturating_mul(2));
    correct_answers * 100 + enemies_defeated * 50 + coins * 10 + time_bonus
}

/// Queue a finished run for persistence.
#[derive(Debug)]
pub struct SubmitScoreEvent {
    pub final_score: u32,
}

impl Message for SubmitScoreEvent {}

/// Submission front-end: remote first, local JSON fallback on failure.
#[derive(Resource)]
pub struct ScoreService {
    remote: Option<Box<dyn RemoteScoreSink>>,
    local: JsonLeaderboard,
}

impl Default for ScoreService {
    fn default() -> Self {
        Self {
            remote: None,
            local: JsonLeaderboard::new("leaderboard.json"),
        }
    }
}

impl ScoreService {
    pub fn new(local: JsonLeaderboard, remote: Option<Box<dyn RemoteScoreSink>>) -> Self {
        Self { remote, local }
    }

    /// Returns whether the remote sink accepted the record. The local
    /// leaderboard is always written so the run survives a dead remote.
    pub fn submit(&self, name: &str, contact: &str, record: &RunRecord) -> bool {
        let accepted = self
            .remote
            .as_ref()
            .map(|remote| remote.submit(name, contact, record))
            .unwrap_or(false);

        if let Err(error) = self.local.save(ScoreEntry {
            name: name.to_string(),
            score: record.score,
        }) {
            warn!("{}", error);
        }

        accepted
    }

    pub fn top(&self, n: usize) -> Vec<ScoreEntry> {
        match &self.remote {
            Some(remote) => {
                let scores = remote.top_scores(n);
                if scores.is_empty() {
                    self.local.top(n)
                } else {
                    scores
                }
            }
            None => self.local.top(n),
        }
    }
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreValues>()
            .init_resource::<ScoreService>()
            .add_message::<SubmitScoreEvent>();
    }
}
