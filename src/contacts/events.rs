//! Contacts domain: typed events produced by the overlap dispatcher.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::level::CollectibleKind;

/// A downward hit on an enemy classified as a stomp.
#[derive(Debug)]
pub struct EnemyStompedEvent {
    pub enemy: Entity,
}

impl Message for EnemyStompedEvent {}

/// A downward hit on the boss classified as a stomp.
#[derive(Debug)]
pub struct BossStompedEvent {
    pub boss: Entity,
}

impl Message for BossStompedEvent {}

/// A lateral hit on the player. The knockback points away from the attacker
/// and is only applied when the player survives.
#[derive(Debug)]
pub struct PlayerStruckEvent {
    pub knockback: Vec2,
}

impl Message for PlayerStruckEvent {}

/// First overlap with a collectible whose body was just disabled.
#[derive(Debug)]
pub struct PickupEvent {
    pub collectible: Entity,
    pub kind: CollectibleKind,
    pub value: u32,
}

impl Message for PickupEvent {}

/// First overlap with a captured companion.
#[derive(Debug)]
pub struct RescueEvent {
    pub companion: Entity,
}

impl Message for RescueEvent {}

/// First overlap with an unanswered, non-exit checkpoint.
#[derive(Debug)]
pub struct CheckpointEnteredEvent {
    pub checkpoint: Entity,
    pub topic_id: u32,
}

impl Message for CheckpointEnteredEvent {}

/// Overlap with the level-exit trigger. The progression gate decides whether
/// it actually fires.
#[derive(Debug)]
pub struct ExitReachedEvent;

impl Message for ExitReachedEvent {}
