//! Headless run-flow integration tests.
//!
//! Keep integration tests headless: `MinimalPlugins` provides the core ECS
//! runtime, `StatesPlugin` the state machinery, and
//! `runbound::configure_sim` installs the gameplay plugins. The fixed-tick
//! simulation is driven by running the `FixedUpdate` schedule directly, so
//! the assertions do not depend on wall-clock time.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use runbound::boss::{Boss, BossMachine};
use runbound::core::{GameState, RunTally};
use runbound::enemies::Enemy;
use runbound::level::Checkpoint;
use runbound::physics::Body;
use runbound::player::{Player, Vitality};

fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    runbound::configure_sim(&mut app);

    // Startup (content load), then the Boot -> Run transition and the
    // level spawn.
    app.update();
    app.update();
    app
}

fn game_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

fn player_entity(app: &mut App) -> Entity {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Player>>();
    query.iter(world).next().expect("player must exist")
}

fn place_player(app: &mut App, position: Vec3) {
    let player = player_entity(app);
    let world = app.world_mut();
    world.get_mut::<Transform>(player).unwrap().translation = position;
    world.get_mut::<Body>(player).unwrap().velocity = Vec2::ZERO;
}

#[test]
fn boot_reaches_the_level_with_a_live_player() {
    let mut app = app_headless();

    assert_eq!(game_state(&app), GameState::Run);

    let player = player_entity(&mut app);
    let vitality = app.world().get::<Vitality>(player).unwrap();
    assert_eq!(vitality.lives, 2);
    assert!(vitality.alive);
}

#[test]
fn fatal_lateral_hit_fails_the_run_exactly_once() {
    let mut app = app_headless();
    let player = player_entity(&mut app);

    // One life left, standing inside a patrolling enemy, not falling.
    app.world_mut().get_mut::<Vitality>(player).unwrap().lives = 1;
    let enemy_pos = {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Enemy>>();
        query
            .iter(world)
            .next()
            .expect("enemy must exist")
            .translation
    };
    place_player(&mut app, enemy_pos + Vec3::new(-10.0, 0.0, 0.0));

    // One simulation tick resolves the contact and the damage reaction.
    app.world_mut().run_schedule(FixedUpdate);
    {
        let vitality = app.world().get::<Vitality>(player).unwrap();
        assert_eq!(vitality.lives, 0);
        assert!(!vitality.alive);
    }

    // A second tick over the same overlap must not decrement anything
    // further: the terminal state absorbs it.
    app.world_mut().run_schedule(FixedUpdate);
    assert_eq!(app.world().get::<Vitality>(player).unwrap().lives, 0);

    // The outcome routes to the failure screen.
    app.update();
    app.update();
    assert_eq!(game_state(&app), GameState::GameOver);
}

#[test]
fn open_gate_routes_the_exit_to_the_boss_arena() {
    let mut app = app_headless();

    let exit_pos = {
        let world = app.world_mut();
        let mut query = world.query::<(&Transform, &Checkpoint)>();
        query
            .iter(world)
            .find(|(_, checkpoint)| checkpoint.is_exit)
            .map(|(transform, _)| transform.translation)
            .expect("exit trigger must exist")
    };

    // Gate halves not yet met: standing on the exit is inert.
    place_player(&mut app, exit_pos);
    app.world_mut().run_schedule(FixedUpdate);
    app.update();
    app.update();
    assert_eq!(game_state(&app), GameState::Run);

    // Meet both thresholds and renew the overlap: the exit fires.
    {
        let mut tally = app.world_mut().resource_mut::<RunTally>();
        tally.correct_answers = 2;
        tally.rescues = 5;
    }
    place_player(&mut app, exit_pos);
    app.world_mut().run_schedule(FixedUpdate);
    app.update();
    app.update();
    assert_eq!(game_state(&app), GameState::Boss);

    // The arena spawned a fresh player and an entering boss.
    let world = app.world_mut();
    let boss_count = world.query::<(&Boss, &BossMachine)>().iter(world).count();
    assert_eq!(boss_count, 1);
    let mut players = world.query_filtered::<&Vitality, With<Player>>();
    let vitality = players.iter(world).next().expect("arena player must exist");
    assert_eq!(vitality.lives, 3);
}
