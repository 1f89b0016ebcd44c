//! Contacts domain: pairwise overlap tests run once per tick in a fixed
//! order, resolving into typed events.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::boss::{Boss, BossMachine, BossState, BossTuning};
use crate::contacts::events::{
    BossStompedEvent, CheckpointEnteredEvent, EnemyStompedEvent, ExitReachedEvent, PickupEvent,
    PlayerStruckEvent, RescueEvent,
};
use crate::contacts::ContactTuning;
use crate::enemies::{Enemy, EnemyTuning};
use crate::level::{Checkpoint, Collectible, Companion};
use crate::physics::{aabb_overlap, Body};
use crate::player::{Invincibility, Player, Vitality};
use crate::quiz::ActiveQuiz;

/// Stomp iff the attacker is moving downward faster than `min_fall_speed`
/// and its bottom edge is within `margin` above the target's top edge.
pub(crate) fn is_stomp(
    player_pos: Vec2,
    player_size: Vec2,
    player_vy: f32,
    target_pos: Vec2,
    target_size: Vec2,
    margin: f32,
    min_fall_speed: f32,
) -> bool {
    let player_bottom = player_pos.y - player_size.y * 0.5;
    let target_top = target_pos.y + target_size.y * 0.5;
    player_vy < -min_fall_speed && player_bottom >= target_top - margin
}

pub(crate) fn player_vs_enemies(
    tuning: Res<ContactTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut stomp_events: MessageWriter<EnemyStompedEvent>,
    mut struck_events: MessageWriter<PlayerStruckEvent>,
    players: Query<(&Transform, &Body, &Vitality, &Invincibility), With<Player>>,
    enemies: Query<(Entity, &Transform, &Body, &Enemy), Without<Player>>,
) {
    let Some((player_tf, player_body, vitality, invincibility)) = players.iter().next() else {
        return;
    };
    if !vitality.alive || !player_body.enabled {
        return;
    }
    let player_pos = player_tf.translation.truncate();

    for (entity, enemy_tf, enemy_body, enemy) in &enemies {
        if !enemy.alive || !enemy_body.enabled {
            continue;
        }
        let enemy_pos = enemy_tf.translation.truncate();
        if !aabb_overlap(player_pos, player_body.size, enemy_pos, enemy_body.size) {
            continue;
        }

        if is_stomp(
            player_pos,
            player_body.size,
            player_body.velocity.y,
            enemy_pos,
            enemy_body.size,
            tuning.stomp_margin,
            tuning.stomp_epsilon,
        ) {
            stomp_events.write(EnemyStompedEvent { enemy: entity });
        } else if !invincibility.is_active() {
            let direction = if player_pos.x < enemy_pos.x { -1.0 } else { 1.0 };
            struck_events.write(PlayerStruckEvent {
                knockback: Vec2::new(direction * enemy_tuning.knockback_speed, 0.0),
            });
            // One lateral hit per tick; the invincibility window absorbs the rest.
            break;
        }
    }
}

pub(crate) fn player_vs_collectibles(
    mut pickup_events: MessageWriter<PickupEvent>,
    players: Query<(&Transform, &Body, &Vitality), With<Player>>,
    mut collectibles: Query<(Entity, &Transform, &mut Body, &Collectible), Without<Player>>,
) {
    let Some((player_tf, player_body, vitality)) = players.iter().next() else {
        return;
    };
    if !vitality.alive || !player_body.enabled {
        return;
    }
    let player_pos = player_tf.translation.truncate();

    for (entity, item_tf, mut item_body, collectible) in &mut collectibles {
        if !item_body.enabled {
            continue;
        }
        let item_pos = item_tf.translation.truncate();
        if !aabb_overlap(player_pos, player_body.size, item_pos, item_body.size) {
            continue;
        }

        // Disabled on first overlap so a second resolution is a no-op.
        item_body.enabled = false;
        pickup_events.write(PickupEvent {
            collectible: entity,
            kind: collectible.kind,
            value: collectible.value,
        });
    }
}

pub(crate) fn player_vs_companions(
    mut rescue_events: MessageWriter<RescueEvent>,
    players: Query<(&Transform, &Body, &Vitality), With<Player>>,
    mut companions: Query<(Entity, &Transform, &mut Body, &mut Companion), Without<Player>>,
) {
    let Some((player_tf, player_body, vitality)) = players.iter().next() else {
        return;
    };
    if !vitality.alive || !player_body.enabled {
        return;
    }
    let player_pos = player_tf.translation.truncate();

    for (entity, companion_tf, mut companion_body, mut companion) in &mut companions {
        if companion.rescued || !companion_body.enabled {
            continue;
        }
        let companion_pos = companion_tf.translation.truncate();
        if !aabb_overlap(player_pos, player_body.size, companion_pos, companion_body.size) {
            continue;
        }

        companion.rescued = true;
        companion_body.enabled = false;
        rescue_events.write(RescueEvent { companion: entity });
    }
}

pub(crate) fn player_vs_checkpoints(
    active_quiz: Option<Res<ActiveQuiz>>,
    mut checkpoint_events: MessageWriter<CheckpointEnteredEvent>,
    mut exit_events: MessageWriter<ExitReachedEvent>,
    players: Query<(&Transform, &Body, &Vitality), With<Player>>,
    checkpoints: Query<(Entity, &Transform, &Body, &Checkpoint), Without<Player>>,
) {
    let Some((player_tf, player_body, vitality)) = players.iter().next() else {
        return;
    };
    if !vitality.alive || !player_body.enabled {
        return;
    }
    let player_pos = player_tf.translation.truncate();

    for (entity, checkpoint_tf, checkpoint_body, checkpoint) in &checkpoints {
        if !checkpoint_body.enabled {
            continue;
        }
        let checkpoint_pos = checkpoint_tf.translation.truncate();
        if !aabb_overlap(
            player_pos,
            player_body.size,
            checkpoint_pos,
            checkpoint_body.size,
        ) {
            continue;
        }

        if checkpoint.is_exit {
            // Inert unless the gate opens; stays re-triggerable on renewed
            // overlap.
            exit_events.write(ExitReachedEvent);
        } else if !checkpoint.completed && active_quiz.is_none() {
            checkpoint_events.write(CheckpointEnteredEvent {
                checkpoint: entity,
                topic_id: checkpoint.topic_id,
            });
        }
    }
}

pub(crate) fn player_vs_boss(
    contact_tuning: Res<ContactTuning>,
    boss_tuning: Res<BossTuning>,
    mut stomp_events: MessageWriter<BossStompedEvent>,
    mut struck_events: MessageWriter<PlayerStruckEvent>,
    players: Query<(&Transform, &Body, &Vitality, &Invincibility), With<Player>>,
    bosses: Query<(Entity, &Transform, &Body, &BossMachine), (With<Boss>, Without<Player>)>,
) {
    let Some((player_tf, player_body, vitality, invincibility)) = players.iter().next() else {
        return;
    };
    if !vitality.alive || !player_body.enabled {
        return;
    }
    let player_pos = player_tf.translation.truncate();

    for (entity, boss_tf, boss_body, machine) in &bosses {
        if machine.state != BossState::Active || !boss_body.enabled {
            continue;
        }
        let boss_pos = boss_tf.translation.truncate();
        if !aabb_overlap(player_pos, player_body.size, boss_pos, boss_body.size) {
            continue;
        }

        if is_stomp(
            player_pos,
            player_body.size,
            player_body.velocity.y,
            boss_pos,
            boss_body.size,
            contact_tuning.stomp_margin,
            boss_tuning.stomp_min_fall_speed,
        ) {
            stomp_events.write(BossStompedEvent { boss: entity });
        } else if !invincibility.is_active() {
            let direction = if player_pos.x < boss_pos.x { -1.0 } else { 1.0 };
            struck_events.write(PlayerStruckEvent {
                knockback: Vec2::new(
                    direction * boss_tuning.knockback_x,
                    boss_tuning.knockback_y,
                ),
            });
        }
    }
}
