//! Physics domain: plain-data kinematic bodies advanced once per fixed tick
//! and resolved against static and kinematic obstacles.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{aabb_overlap, Body, MovingPlatform, PlatformAxis, Solid, TerrainCollider};

use bevy::prelude::*;

use crate::core::SimSet;

#[derive(Resource, Debug, Clone)]
pub struct PhysicsTuning {
    pub gravity: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self { gravity: 800.0 }
    }
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsTuning>()
            .add_systems(
                FixedUpdate,
                systems::drive_moving_platforms.in_set(SimSet::Platforms),
            )
            .add_systems(FixedUpdate, systems::integrate_bodies.in_set(SimSet::Integrate))
            .add_systems(
                FixedUpdate,
                systems::resolve_solid_collisions.in_set(SimSet::Resolve),
            );
    }
}
