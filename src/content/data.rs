//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

/// Common wrapper for RON files with schema_version and items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Centre position in world units (pixels, y-up).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

/// Centre position plus full extents.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AxisDef {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovingPlatformDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub axis: AxisDef,
    pub amplitude: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemySpawnDef {
    pub x: f32,
    pub y: f32,
    pub patrol_radius: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckpointSpawnDef {
    pub x: f32,
    pub y: f32,
    pub topic_id: u32,
}

/// The side-scrolling level (level.ron, single struct).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub kill_y: f32,
    pub player_spawn: PointDef,
    pub platforms: Vec<RectDef>,
    pub moving_platforms: Vec<MovingPlatformDef>,
    pub enemies: Vec<EnemySpawnDef>,
    pub coins: Vec<PointDef>,
    pub books: Vec<PointDef>,
    pub companions: Vec<PointDef>,
    pub checkpoints: Vec<CheckpointSpawnDef>,
    pub exit: PointDef,
}

/// The boss arena (boss_arena.ron, single struct).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArenaDef {
    pub id: String,
    pub name: String,
    pub kill_y: f32,
    pub player_spawn: PointDef,
    pub platforms: Vec<RectDef>,
    pub boss_spawn: PointDef,
    pub patrol_min: f32,
    pub patrol_max: f32,
}

/// A checkpoint quiz question (questions.ron).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionDef {
    pub topic_id: u32,
    pub place: String,
    pub topic: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub hint: String,
}

/// A generic hint phrase shown by books not tied to a question (phrases.ron).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhraseDef {
    pub text: String,
}
