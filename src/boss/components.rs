//! Boss domain: encounter components and the phase machine.

use bevy::prelude::*;

/// Everything spawned for the boss arena, removed on state exit.
#[derive(Component, Debug)]
pub struct ArenaEntity;

#[derive(Component, Debug)]
pub struct Boss {
    pub hp: u32,
    pub max_hp: u32,
    pub speed: f32,
    pub direction: f32,
    pub patrol_min: f32,
    pub patrol_max: f32,
}

impl Boss {
    pub fn new(max_hp: u32, speed: f32, patrol_min: f32, patrol_max: f32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            speed,
            direction: -1.0,
            patrol_min,
            patrol_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossState {
    /// Fading in; the boss is frozen until the entry completes.
    Entering,
    /// Patrolling between the arena bounds.
    Active,
    /// Briefly invincible and halted after a scoring stomp.
    HitReacting,
    /// Out of hit points; the body is disabled.
    Defeated,
}

#[derive(Component, Debug)]
pub struct BossMachine {
    pub state: BossState,
    pub state_timer: f32,
}

impl Default for BossMachine {
    fn default() -> Self {
        Self {
            state: BossState::Entering,
            state_timer: 0.0,
        }
    }
}
