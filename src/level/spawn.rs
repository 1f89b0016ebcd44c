//! Level domain: spawning the level from loaded content.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{AxisDef, ContentRegistry};
use crate::core::{RespawnPoint, RunConfig};
use crate::enemies::{Enemy, EnemyTuning, Patrol};
use crate::level::components::{
    BookHint, Checkpoint, Collectible, CollectibleKind, Companion, LevelEntity,
};
use crate::level::ArenaBounds;
use crate::physics::{Body, MovingPlatform, PlatformAxis, Solid, TerrainCollider};
use crate::player::{
    Heading, Invincibility, JumpState, KnockbackLock, Player, PlayerTuning, Vitality,
};
use crate::score::ScoreValues;

const COIN_SIZE: Vec2 = Vec2::new(14.0, 14.0);
const BOOK_SIZE: Vec2 = Vec2::new(20.0, 22.0);
const COMPANION_SIZE: Vec2 = Vec2::new(36.0, 36.0);
const CHECKPOINT_SIZE: Vec2 = Vec2::new(28.0, 60.0);

pub(crate) fn spawn_level(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    config: Res<RunConfig>,
    player_tuning: Res<PlayerTuning>,
    enemy_tuning: Res<EnemyTuning>,
    values: Res<ScoreValues>,
    mut respawn: ResMut<RespawnPoint>,
) {
    let level = &registry.level;

    commands.insert_resource(ArenaBounds {
        kill_y: level.kill_y,
        width: level.width,
    });
    respawn.position = Vec2::new(level.player_spawn.x, level.player_spawn.y);

    for platform in &level.platforms {
        commands.spawn((
            LevelEntity,
            Solid {
                size: Vec2::new(platform.w, platform.h),
            },
            Sprite {
                color: Color::srgb(0.18, 0.2, 0.28),
                custom_size: Some(Vec2::new(platform.w, platform.h)),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
        ));
    }

    for platform in &level.moving_platforms {
        let axis = match platform.axis {
            AxisDef::Horizontal => PlatformAxis::Horizontal,
            AxisDef::Vertical => PlatformAxis::Vertical,
        };
        commands.spawn((
            LevelEntity,
            Solid {
                size: Vec2::new(platform.w, platform.h),
            },
            MovingPlatform::new(
                Vec2::new(platform.x, platform.y),
                axis,
                platform.amplitude,
                platform.speed,
            ),
            Sprite {
                color: Color::srgb(0.3, 0.32, 0.45),
                custom_size: Some(Vec2::new(platform.w, platform.h)),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
        ));
    }

    commands.spawn((
        LevelEntity,
        Player,
        Heading::default(),
        Vitality::new(player_tuning.starting_lives),
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
        Transform::from_xyz(level.player_spawn.x, level.player_spawn.y, 1.0),
    ));

    for enemy in &level.enemies {
        commands.spawn((
            LevelEntity,
            Enemy::default(),
            Patrol::new(enemy.x, enemy.patrol_radius),
            Body::dynamic(enemy_tuning.size),
            TerrainCollider,
            Sprite {
                color: Color::srgb(0.85, 0.15, 0.15),
                custom_size: Some(enemy_tuning.size),
                ..default()
            },
            Transform::from_xyz(enemy.x, enemy.y, 1.0),
        ));
    }

    for coin in &level.coins {
        commands.spawn((
            LevelEntity,
            Collectible {
                kind: CollectibleKind::Coin,
                value: values.coin,
            },
            Body::trigger(COIN_SIZE),
            Sprite {
                color: Color::srgb(1.0, 0.84, 0.0),
                custom_size: Some(COIN_SIZE),
                ..default()
            },
            Transform::from_xyz(coin.x, coin.y, 1.0),
        ));
    }

    // Books cycle through the quiz topics; a book with no matching question
    // shows a generic phrase picked with the run's seed.
    let mut topic_ids: Vec<u32> = registry.questions.keys().copied().collect();
    topic_ids.sort_unstable();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    for (index, book) in level.books.iter().enumerate() {
        let hint = if topic_ids.is_empty() {
            pick_phrase(&registry, &mut rng)
        } else {
            let topic_id = topic_ids[index % topic_ids.len()];
            match registry.question(topic_id) {
                Some(question) => BookHint {
                    topic: question.topic.clone(),
                    text: question.hint.clone(),
                },
                None => pick_phrase(&registry, &mut rng),
            }
        };

        commands.spawn((
            LevelEntity,
            Collectible {
                kind: CollectibleKind::Book,
                value: values.book,
            },
            hint,
            Body::trigger(BOOK_SIZE),
            Sprite {
                color: Color::srgb(0.0, 0.9, 1.0),
                custom_size: Some(BOOK_SIZE),
                ..default()
            },
            Transform::from_xyz(book.x, book.y, 1.0),
        ));
    }

    for companion in &level.companions {
        commands.spawn((
            LevelEntity,
            Companion::default(),
            Body::trigger(COMPANION_SIZE),
            Sprite {
                color: Color::srgb(0.0, 1.0, 0.53),
                custom_size: Some(COMPANION_SIZE),
                ..default()
            },
            Transform::from_xyz(companion.x, companion.y, 1.0),
        ));
    }

    for checkpoint in &level.checkpoints {
        commands.spawn((
            LevelEntity,
            Checkpoint::quiz(checkpoint.topic_id),
            Body::trigger(CHECKPOINT_SIZE),
            Sprite {
                color: Color::srgb(1.0, 0.84, 0.0),
                custom_size: Some(CHECKPOINT_SIZE),
                ..default()
            },
            Transform::from_xyz(checkpoint.x, checkpoint.y, 0.5),
        ));
    }

    commands.spawn((
        LevelEntity,
        Checkpoint::exit(),
        Body::trigger(CHECKPOINT_SIZE),
        Sprite {
            color: Color::srgb(0.0, 1.0, 0.53),
            custom_size: Some(CHECKPOINT_SIZE),
            ..default()
        },
        Transform::from_xyz(level.exit.x, level.exit.y, 0.5),
    ));

    info!(
        "Level '{}' spawned: {} platforms, {} enemies, {} companions",
        level.name,
        level.platforms.len() + level.moving_platforms.len(),
        level.enemies.len(),
        level.companions.len()
    );
}

fn pick_phrase(registry: &ContentRegistry, rng: &mut ChaCha8Rng) -> BookHint {
    let text = if registry.phrases.is_empty() {
        "A good leader is always learning.".to_string()
    } else {
        registry.phrases[rng.random_range(0..registry.phrases.len())]
            .text
            .clone()
    };
    BookHint {
        topic: "HINT".to_string(),
        text,
    }
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
