//! Content domain: RON data definitions, loader and registry.

mod data;
mod loader;
mod registry;


pub use data::{
    ArenaDef, AxisDef, CheckpointSpawnDef, DataFile, EnemySpawnDef, LevelDef, MovingPlatformDef,
    PhraseDef, PointDef, QuestionDef, RectDef,
};
pub use loader::{load_all_content, ContentLoadError};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content)
            .add_systems(Update, leave_boot.run_if(in_state(GameState::Boot)));
    }
}

fn load_content(mut commands: Commands) {
    match load_all_content(Path::new("assets/data")) {
        Ok(registry) => {
            info!(
                "Content loaded: level '{}', {} questions, {} phrases",
                registry.level.name,
                registry.questions.len(),
                registry.phrases.len()
            );
            commands.insert_resource(registry);
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            error!("Falling back to built-in content");
            commands.insert_resource(ContentRegistry::default());
        }
    }
}

fn leave_boot(
    registry: Option<Res<ContentRegistry>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if registry.is_some() {
        next_state.set(GameState::Run);
    }
}
