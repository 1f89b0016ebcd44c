//! Player domain: controller components for movement, jumps and lives.

use bevy::prelude::*;

pub const LIFE_CAP: u32 = 5;
pub const JUMP_CHARGES: u8 = 2;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Outcome of a damage attempt, returned so callers can route the failure
/// path without exceptions crossing component boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Absorbed: the player was invincible or already dead.
    Ignored,
    /// A life was lost and an invincibility window started.
    Survived,
    /// The last life was lost; the run is over.
    Fatal,
}

/// Lives and the terminal death state. `lives == 0` implies `!alive`.
#[derive(Component, Debug)]
pub struct Vitality {
    pub lives: u32,
    pub alive: bool,
}

impl Vitality {
    pub fn new(lives: u32) -> Self {
        Self { lives, alive: true }
    }

    /// Zero lives is terminal for the run; respawn is only for hazard falls.
    pub fn can_respawn(&self) -> bool {
        self.lives > 0
    }

    /// Lose a life unless invincible or already dead. Fatal damage does not
    /// start an invincibility window; the actor is already terminal.
    pub fn take_damage(&mut self, invincibility: &mut Invincibility, window: f32) -> DamageOutcome {
        if invincibility.is_active() || !self.alive {
            return DamageOutcome::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.alive = false;
            return DamageOutcome::Fatal;
        }

        invincibility.timer = window;
        DamageOutcome::Survived
    }

    /// Gain a life, capped. Returns whether a life was actually granted.
    pub fn grant_life(&mut self) -> bool {
        if self.lives >= LIFE_CAP {
            return false;
        }
        self.lives += 1;
        true
    }
}

/// Double-jump bookkeeping. Charges reset exactly when the body lands, so
/// the first jump is only available from ground contact and the second
/// mid-air.
#[derive(Component, Debug)]
pub struct JumpState {
    pub charges: u8,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            charges: JUMP_CHARGES,
        }
    }
}

impl JumpState {
    pub fn reset(&mut self) {
        self.charges = JUMP_CHARGES;
    }

    /// Consume a charge if one is available.
    pub fn try_jump(&mut self) -> bool {
        if self.charges == 0 {
            return false;
        }
        self.charges -= 1;
        true
    }
}

/// Post-damage invincibility window, ticked down each update.
#[derive(Component, Debug, Default)]
pub struct Invincibility {
    pub timer: f32,
}

/// Timer blocking horizontal control while a knockback plays out.
#[derive(Component, Debug, Default)]
pub struct KnockbackLock(pub f32);

impl Invincibility {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}

/// The player's heading, mirrored by presentation.
#[derive(Component, Debug, Default)]
pub struct Heading {
    pub facing: Facing,
}
