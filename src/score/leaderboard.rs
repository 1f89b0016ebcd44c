//! Score domain: run records and the local leaderboard repository.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only snapshot of a finished run, handed to the persistence
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub correct_answers: u32,
    pub enemies_defeated: u32,
    pub coins: u32,
    pub elapsed_seconds: u32,
    pub boss_defeated: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Error type for leaderboard persistence failures.
#[derive(Debug)]
pub struct LeaderboardError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leaderboard {} failed: {}", self.path, self.message)
    }
}

/// Abstract persistence boundary; the outer application owns the lifecycle
/// and may swap in a remote-backed implementation.
pub trait ScoreRepository {
    fn save(&self, entry: ScoreEntry) -> Result<(), LeaderboardError>;
    fn top(&self, n: usize) -> Vec<ScoreEntry>;
}

/// Remote persistence collaborator. Fire-and-forget: a `false` return routes
/// the record to the local fallback.
pub trait RemoteScoreSink: Send + Sync {
    fn submit(&self, name: &str, contact: &str, record: &RunRecord) -> bool;
    fn top_scores(&self, n: usize) -> Vec<ScoreEntry>;
}

/// JSON-file leaderboard keeping the top entries, sorted descending by
/// score. The localStorage replacement.
#[derive(Debug, Clone)]
pub struct JsonLeaderboard {
    path: PathBuf,
    capacity: usize,
}

impl JsonLeaderboard {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Vec<ScoreEntry> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    fn write_entries(&self, entries: &[ScoreEntry]) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| LeaderboardError {
            path: self.path.display().to_string(),
            message: format!("Serialize error: {}", e),
        })?;
        fs::write(&self.path, json).map_err(|e| LeaderboardError {
            path: self.path.display().to_string(),
            message: format!("IO error: {}", e),
        })
    }
}

impl ScoreRepository for JsonLeaderboard {
    fn save(&self, entry: ScoreEntry) -> Result<(), LeaderboardError> {
        let mut entries = self.read_entries();
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(self.capacity);
        self.write_entries(&entries)
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        let mut entries = self.read_entries();
        entries.truncate(n);
        entries
    }
}
