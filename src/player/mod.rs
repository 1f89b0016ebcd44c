//! Player domain: the controller owning movement, double jump, lives and
//! damage reactions.

mod components;
mod systems;


pub use components::{
    DamageOutcome, Facing, Heading, Invincibility, JumpState, KnockbackLock, Player, Vitality,
    JUMP_CHARGES, LIFE_CAP,
};

use bevy::prelude::*;

use crate::core::SimSet;

#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    pub run_speed: f32,
    pub jump_impulse: f32,
    pub invincibility_seconds: f32,
    pub knockback_lock_seconds: f32,
    pub starting_lives: u32,
    pub size: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            run_speed: 220.0,
            jump_impulse: 500.0,
            invincibility_seconds: 1.5,
            knockback_lock_seconds: 0.25,
            starting_lives: 2,
            size: Vec2::new(26.0, 44.0),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis_x: f32,
    pub jump_requested: bool,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Update, systems::read_player_input)
            .add_systems(
                FixedUpdate,
                (
                    systems::update_timers,
                    systems::apply_horizontal_movement,
                    systems::apply_jump,
                )
                    .chain()
                    .in_set(SimSet::Intent),
            )
            .add_systems(
                FixedUpdate,
                (systems::handle_player_struck, systems::check_fall_out)
                    .chain()
                    .in_set(SimSet::Machines),
            );
    }
}
