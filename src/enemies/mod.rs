//! Enemies domain: patrol AI walking between two bounds, defeated by stomps.

mod components;
mod systems;


pub use components::{Enemy, Patrol};

use bevy::prelude::*;

use crate::core::SimSet;

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    pub patrol_speed: f32,
    pub stomp_bounce: f32,
    pub knockback_speed: f32,
    pub size: Vec2,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            patrol_speed: 80.0,
            stomp_bounce: 350.0,
            knockback_speed: 200.0,
            size: Vec2::new(26.0, 38.0),
        }
    }
}

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(FixedUpdate, systems::update_patrols.in_set(SimSet::Intent))
            .add_systems(
                FixedUpdate,
                systems::handle_enemy_stomped.in_set(SimSet::Machines),
            );
    }
}
