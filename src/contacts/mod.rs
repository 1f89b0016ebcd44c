//! Contacts domain: the collision/event dispatcher. Pairwise overlap tests
//! run once per tick after body resolution, in a fixed order, and resolve
//! into typed events consumed by the owning domains.

mod events;
mod systems;


pub use events::{
    BossStompedEvent, CheckpointEnteredEvent, EnemyStompedEvent, ExitReachedEvent, PickupEvent,
    PlayerStruckEvent, RescueEvent,
};

use bevy::prelude::*;

use crate::core::SimSet;

#[derive(Resource, Debug, Clone)]
pub struct ContactTuning {
    /// How far above a target's top edge the player's bottom edge may sit
    /// for an overlap to still count as a stomp.
    pub stomp_margin: f32,
    /// Minimum downward speed for a stomp on regular enemies.
    pub stomp_epsilon: f32,
}

impl Default for ContactTuning {
    fn default() -> Self {
        Self {
            stomp_margin: 12.0,
            stomp_epsilon: 1.0,
        }
    }
}

pub struct ContactsPlugin;

impl Plugin for ContactsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContactTuning>()
            .add_message::<EnemyStompedEvent>()
            .add_message::<BossStompedEvent>()
            .add_message::<PlayerStruckEvent>()
            .add_message::<PickupEvent>()
            .add_message::<RescueEvent>()
            .add_message::<CheckpointEnteredEvent>()
            .add_message::<ExitReachedEvent>()
            .add_systems(
                FixedUpdate,
                (
                    systems::player_vs_enemies,
                    systems::player_vs_collectibles,
                    systems::player_vs_companions,
                    systems::player_vs_checkpoints,
                    systems::player_vs_boss,
                )
                    .chain()
                    .in_set(SimSet::Contacts),
            );
    }
}
