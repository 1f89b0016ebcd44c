//! Runbound: the deterministic simulation core of a side-scrolling
//! platformer — fixed-tick bodies, an ordered collision dispatcher, patrol
//! and boss state machines, and a quiz-gated progression flow.
//!
//! Integration tests in `tests/` are compiled as separate crates; this
//! library gives them a stable surface plus a headless configuration.

pub mod boss;
pub mod contacts;
pub mod content;
pub mod core;
pub mod enemies;
pub mod level;
pub mod physics;
pub mod player;
pub mod quiz;
pub mod score;

use bevy::prelude::*;

/// Simulation-only wiring shared by the full app and headless tests.
pub fn configure_sim(app: &mut App) {
    app.add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        physics::PhysicsPlugin,
        player::PlayerPlugin,
        enemies::EnemiesPlugin,
        level::LevelPlugin,
        contacts::ContactsPlugin,
        quiz::QuizPlugin,
        boss::BossPlugin,
        score::ScorePlugin,
    ));
}

/// Full configuration for `cargo run`: window and renderer on top of the
/// simulation.
pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Runbound".to_string(),
            resolution: bevy::window::WindowResolution::new(390, 700),
            resizable: true,
            ..default()
        }),
        ..default()
    }));
    configure_sim(app);
}
