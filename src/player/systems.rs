//! Player domain: input, locomotion, damage reactions and hazard falls.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::contacts::PlayerStruckEvent;
use crate::core::{RespawnPoint, RunFailedEvent};
use crate::level::ArenaBounds;
use crate::physics::Body;
use crate::player::components::{
    DamageOutcome, Facing, Heading, Invincibility, JumpState, KnockbackLock, Player, Vitality,
};
use crate::player::{PlayerInput, PlayerTuning};

pub(crate) fn read_player_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<PlayerInput>,
) {
    // Headless runs have no input plugin.
    let Some(keyboard) = keyboard else {
        return;
    };
    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    input.axis_x = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };

    // Latched until a fixed tick consumes it, so a press between ticks is
    // never dropped.
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::ArrowUp) {
        input.jump_requested = true;
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Body, &mut Heading, &KnockbackLock, &Vitality), With<Player>>,
) {
    for (mut body, mut heading, lock, vitality) in &mut query {
        if !vitality.alive || !body.enabled {
            continue;
        }
        // No horizontal control while a knockback plays out.
        if lock.0 > 0.0 {
            continue;
        }
        body.velocity.x = input.axis_x * tuning.run_speed;
        if input.axis_x < 0.0 {
            heading.facing = Facing::Left;
        } else if input.axis_x > 0.0 {
            heading.facing = Facing::Right;
        }
    }
}

pub(crate) fn apply_jump(
    mut input: ResMut<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Body, &mut JumpState, &Vitality), With<Player>>,
) {
    for (mut body, mut jump, vitality) in &mut query {
        // Charges come back exactly on ground contact.
        if body.grounded {
            jump.reset();
        }

        if !input.jump_requested {
            continue;
        }
        input.jump_requested = false;

        if !vitality.alive || !body.enabled {
            continue;
        }
        if jump.try_jump() {
            body.velocity.y = tuning.jump_impulse;
        }
    }
}

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut Invincibility, &mut KnockbackLock)>,
) {
    let dt = time.delta_secs();
    for (mut invincibility, mut lock) in &mut query {
        if invincibility.timer > 0.0 {
            invincibility.timer -= dt;
        }
        if lock.0 > 0.0 {
            lock.0 -= dt;
        }
    }
}

/// React to lateral hits resolved by the dispatcher: lose a life and, on
/// survival, knock the player away from the attacker.
pub(crate) fn handle_player_struck(
    mut struck_events: MessageReader<PlayerStruckEvent>,
    mut failed_events: MessageWriter<RunFailedEvent>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Body, &mut Vitality, &mut Invincibility, &mut KnockbackLock), With<Player>>,
) {
    for event in struck_events.read() {
        for (mut body, mut vitality, mut invincibility, mut lock) in &mut query {
            match vitality.take_damage(&mut invincibility, tuning.invincibility_seconds) {
                DamageOutcome::Survived => {
                    body.velocity.x = event.knockback.x;
                    if event.knockback.y != 0.0 {
                        body.velocity.y = event.knockback.y;
                    }
                    lock.0 = tuning.knockback_lock_seconds;
                }
                DamageOutcome::Fatal => {
                    failed_events.write(RunFailedEvent);
                }
                DamageOutcome::Ignored => {}
            }
        }
    }
}

/// Fall-through-world check, evaluated every tick regardless of what else is
/// happening. Takes the same damage path as a lateral hit; a surviving (or
/// invincible) player is put back at the respawn point.
pub(crate) fn check_fall_out(
    bounds: Res<ArenaBounds>,
    respawn: Res<RespawnPoint>,
    tuning: Res<PlayerTuning>,
    mut failed_events: MessageWriter<RunFailedEvent>,
    mut query: Query<(&mut Transform, &mut Body, &mut Vitality, &mut Invincibility), With<Player>>,
) {
    for (mut transform, mut body, mut vitality, mut invincibility) in &mut query {
        if !vitality.alive || transform.translation.y > bounds.kill_y {
            continue;
        }

        match vitality.take_damage(&mut invincibility, tuning.invincibility_seconds) {
            DamageOutcome::Fatal => {
                failed_events.write(RunFailedEvent);
            }
            DamageOutcome::Survived | DamageOutcome::Ignored => {
                respawn_player(&mut transform, &mut body, &vitality, respawn.position);
            }
        }
    }
}

/// Teleport back to a safe position after a non-fatal hazard. Refused once
/// the run is terminally dead.
pub(crate) fn respawn_player(
    transform: &mut Transform,
    body: &mut Body,
    vitality: &Vitality,
    position: Vec2,
) {
    if !vitality.can_respawn() {
        return;
    }
    transform.translation.x = position.x;
    transform.translation.y = position.y;
    body.velocity = Vec2::ZERO;
}
