//! Boss domain: the multi-phase encounter layered on the same body and
//! collision primitives as the level.

mod components;
mod spawn;
mod systems;


pub use components::{ArenaEntity, Boss, BossMachine, BossState};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{GameState, SimSet};

/// The boss ran out of hit points.
#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
}

impl Message for BossDefeatedEvent {}

#[derive(Resource, Debug, Clone)]
pub struct BossTuning {
    pub max_hp: u32,
    pub base_speed: f32,
    pub escalation_factor: f32,
    pub entry_seconds: f32,
    pub hit_invincibility_seconds: f32,
    pub stomp_min_fall_speed: f32,
    pub stomp_bounce: f32,
    pub knockback_x: f32,
    pub knockback_y: f32,
    pub victory_bonus: u32,
    pub encounter_lives: u32,
    pub gravity_scale: f32,
    pub size: Vec2,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_hp: 4,
            base_speed: 85.0,
            escalation_factor: 2.0,
            entry_seconds: 1.05,
            hit_invincibility_seconds: 0.65,
            stomp_min_fall_speed: 60.0,
            stomp_bounce: 520.0,
            knockback_x: 280.0,
            knockback_y: 210.0,
            victory_bonus: 500,
            encounter_lives: 3,
            gravity_scale: 1.5,
            size: Vec2::new(56.0, 72.0),
        }
    }
}

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossTuning>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(OnEnter(GameState::Boss), spawn::spawn_arena)
            .add_systems(OnExit(GameState::Boss), spawn::cleanup_arena)
            .add_systems(
                FixedUpdate,
                systems::update_boss_machine.in_set(SimSet::Intent),
            )
            .add_systems(
                FixedUpdate,
                (systems::handle_boss_stomped, systems::handle_boss_defeated)
                    .chain()
                    .in_set(SimSet::Machines),
            )
            .add_systems(
                Update,
                (
                    systems::submit_on_arena_defeat.run_if(in_state(GameState::Boss)),
                    systems::submit_scores,
                )
                    .chain(),
            );
    }
}
