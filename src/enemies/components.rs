//! Enemies domain: patrol components and the defeat transition.

use bevy::prelude::*;

use crate::physics::Body;

#[derive(Component, Debug)]
pub struct Enemy {
    pub alive: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self { alive: true }
    }
}

impl Enemy {
    /// One-shot `Alive → Defeated` transition. Disables the body so a
    /// defeated enemy never re-collides; idempotent on repeat calls.
    pub fn defeat(&mut self, body: &mut Body) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        body.enabled = false;
        true
    }
}

/// Walks between `home_x ± radius`, reversing on bound contact.
#[derive(Component, Debug)]
pub struct Patrol {
    pub home_x: f32,
    pub radius: f32,
    pub direction: f32,
}

impl Patrol {
    pub fn new(home_x: f32, radius: f32) -> Self {
        Self {
            home_x,
            radius,
            direction: 1.0,
        }
    }
}
