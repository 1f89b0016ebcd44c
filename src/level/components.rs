//! Level domain: components for pickups, companions and checkpoints.

use bevy::prelude::*;

/// Everything spawned for the side-scrolling level, removed on state exit.
#[derive(Component, Debug)]
pub struct LevelEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Coin,
    Book,
}

/// Consumed exactly once; the dispatcher disables the body on first overlap.
#[derive(Component, Debug)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub value: u32,
}

/// Hint shown when a book is picked up, tied to one of the quiz topics.
#[derive(Component, Debug)]
pub struct BookHint {
    pub topic: String,
    pub text: String,
}

/// A captured companion; one-shot `rescued` transition.
#[derive(Component, Debug, Default)]
pub struct Companion {
    pub rescued: bool,
}

/// Quiz trigger volume. The single exit trigger is a checkpoint with
/// `is_exit` set; it never asks a question.
#[derive(Component, Debug)]
pub struct Checkpoint {
    pub topic_id: u32,
    pub completed: bool,
    pub is_exit: bool,
}

impl Checkpoint {
    pub fn quiz(topic_id: u32) -> Self {
        Self {
            topic_id,
            completed: false,
            is_exit: false,
        }
    }

    pub fn exit() -> Self {
        Self {
            topic_id: 0,
            completed: false,
            is_exit: true,
        }
    }
}
