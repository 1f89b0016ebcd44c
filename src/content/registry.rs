//! Content registry resource: lookup for the loaded level, arena, questions
//! and hint phrases.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{
    ArenaDef, CheckpointSpawnDef, EnemySpawnDef, LevelDef, PhraseDef, PointDef, QuestionDef,
    RectDef,
};

#[derive(Resource, Debug, Clone)]
pub struct ContentRegistry {
    pub level: LevelDef,
    pub arena: ArenaDef,
    pub questions: HashMap<u32, QuestionDef>,
    pub phrases: Vec<PhraseDef>,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self {
            level: fallback_level(),
            arena: fallback_arena(),
            questions: HashMap::new(),
            phrases: Vec::new(),
        }
    }
}

impl ContentRegistry {
    pub fn question(&self, topic_id: u32) -> Option<&QuestionDef> {
        self.questions.get(&topic_id)
    }
}

/// Minimal playable level used when assets/data/level.ron cannot be loaded.
fn fallback_level() -> LevelDef {
    LevelDef {
        id: "fallback_level".to_string(),
        name: "Fallback Strip".to_string(),
        width: 2000.0,
        kill_y: -150.0,
        player_spawn: PointDef { x: 80.0, y: 60.0 },
        platforms: vec![RectDef {
            x: 1000.0,
            y: 0.0,
            w: 2000.0,
            h: 32.0,
        }],
        moving_platforms: Vec::new(),
        enemies: vec![EnemySpawnDef {
            x: 600.0,
            y: 40.0,
            patrol_radius: 80.0,
        }],
        coins: Vec::new(),
        books: Vec::new(),
        companions: Vec::new(),
        checkpoints: vec![CheckpointSpawnDef {
            x: 400.0,
            y: 50.0,
            topic_id: 1,
        }],
        exit: PointDef { x: 1900.0, y: 60.0 },
    }
}

/// Minimal boss arena used when assets/data/boss_arena.ron cannot be loaded.
fn fallback_arena() -> ArenaDef {
    ArenaDef {
        id: "fallback_arena".to_string(),
        name: "Fallback Arena".to_string(),
        kill_y: -150.0,
        player_spawn: PointDef { x: 60.0, y: 60.0 },
        platforms: vec![RectDef {
            x: 195.0,
            y: 0.0,
            w: 390.0,
            h: 32.0,
        }],
        boss_spawn: PointDef { x: 195.0, y: 70.0 },
        patrol_min: 45.0,
        patrol_max: 345.0,
    }
}
