//! Boss domain: spawning the arena and resetting the player for the fight.

use bevy::prelude::*;

use crate::boss::components::{ArenaEntity, Boss, BossMachine};
use crate::boss::BossTuning;
use crate::content::ContentRegistry;
use crate::core::RespawnPoint;
use crate::level::ArenaBounds;
use crate::physics::{Body, Solid, TerrainCollider};
use crate::player::{
    Heading, Invincibility, JumpState, KnockbackLock, Player, PlayerTuning, Vitality,
};

pub(crate) fn spawn_arena(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    tuning: Res<BossTuning>,
    player_tuning: Res<PlayerTuning>,
    mut respawn: ResMut<RespawnPoint>,
) {
    let arena = &registry.arena;

    commands.insert_resource(ArenaBounds {
        kill_y: arena.kill_y,
        width: arena.patrol_max.max(arena.player_spawn.x),
    });
    respawn.position = Vec2::new(arena.player_spawn.x, arena.player_spawn.y + 30.0);

    for platform in &arena.platforms {
        commands.spawn((
            ArenaEntity,
            Solid {
                size: Vec2::new(platform.w, platform.h),
            },
            Sprite {
                color: Color::srgb(0.12, 0.1, 0.14),
                custom_size: Some(Vec2::new(platform.w, platform.h)),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
        ));
    }

    // The player enters the final fight with a fixed stock of lives,
    // whatever was left of the level.
    commands.spawn((
        ArenaEntity,
        Player,
        Heading::default(),
        Vitality::new(tuning.encounter_lives),
        JumpState::default(),
        Invincibility::default(),
        KnockbackLock::default(),
        Body::dynamic(player_tuning.size),
        TerrainCollider,
        Sprite {
            color: Color::srgb(0.25, 0.55, 0.95),
            custom_size: Some(player_tuning.size),
            ..default()
        },
        Transform::from_xyz(arena.player_spawn.x, arena.player_spawn.y, 1.0),
    ));

    // The boss body starts disabled: it is frozen until the entry completes.
    let mut boss_body =
        Body::dynamic(tuning.size).with_gravity_scale(tuning.gravity_scale);
    boss_body.enabled = false;

    commands.spawn((
        ArenaEntity,
        Boss::new(
            tuning.max_hp,
            tuning.base_speed,
            arena.patrol_min,
            arena.patrol_max,
        ),
        BossMachine::default(),
        boss_body,
        TerrainCollider,
        Sprite {
            color: Color::srgb(0.8, 0.1, 0.1),
            custom_size: Some(tuning.size),
            ..default()
        },
        Transform::from_xyz(arena.boss_spawn.x, arena.boss_spawn.y, 1.0),
    ));

    info!("Arena '{}' spawned; boss entering", arena.name);
}

pub(crate) fn cleanup_arena(mut commands: Commands, query: Query<Entity, With<ArenaEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
