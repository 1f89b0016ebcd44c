//! Level domain: tests for the progression gate, pickups and rescues.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::components::{BookHint, Checkpoint, Collectible, CollectibleKind, Companion};
use super::systems::{self, exit_permitted};
use super::ProgressionTuning;
use crate::contacts::{ExitReachedEvent, PickupEvent, RescueEvent};
use crate::core::{Doomed, LevelClearedEvent, RunTally};
use crate::physics::Body;
use crate::player::{Player, Vitality, LIFE_CAP};

fn level_world() -> World {
    let mut world = World::new();
    world.init_resource::<RunTally>();
    world.insert_resource(ProgressionTuning::default());
    world.init_resource::<Messages<PickupEvent>>();
    world.init_resource::<Messages<RescueEvent>>();
    world.init_resource::<Messages<ExitReachedEvent>>();
    world.init_resource::<Messages<LevelClearedEvent>>();
    world
}

fn run<M>(world: &mut World, system: impl IntoSystem<(), (), M>) {
    world.run_system_once(system).expect("system run failed");
    world.flush();
}

// -----------------------------------------------------------------------------
// Progression gate tests
// -----------------------------------------------------------------------------

#[test]
fn test_gate_requires_both_thresholds() {
    let tuning = ProgressionTuning::default();
    let mut tally = RunTally::default();

    tally.correct_answers = 1;
    tally.rescues = 5;
    assert!(!exit_permitted(&tally, &tuning));

    tally.correct_answers = 2;
    tally.rescues = 4;
    assert!(!exit_permitted(&tally, &tuning));

    tally.rescues = 5;
    assert!(exit_permitted(&tally, &tuning));
}

#[test]
fn test_gate_accepts_overshoot() {
    let tuning = ProgressionTuning::default();
    let tally = RunTally {
        correct_answers: 3,
        rescues: 9,
        ..RunTally::default()
    };
    assert!(exit_permitted(&tally, &tuning));
}

#[test]
fn test_exit_trigger_inert_until_gate_opens() {
    let mut world = level_world();
    world.resource_mut::<RunTally>().correct_answers = 1;
    world.resource_mut::<RunTally>().rescues = 5;
    world.write_message(ExitReachedEvent);

    run(&mut world, systems::handle_exit_reached);

    let cleared: Vec<LevelClearedEvent> = world
        .resource_mut::<Messages<LevelClearedEvent>>()
        .drain()
        .collect();
    assert!(cleared.is_empty());

    // The trigger stays re-triggerable: crossing the thresholds later fires.
    world.resource_mut::<RunTally>().correct_answers = 2;
    world.write_message(ExitReachedEvent);
    run(&mut world, systems::handle_exit_reached);

    let cleared: Vec<LevelClearedEvent> = world
        .resource_mut::<Messages<LevelClearedEvent>>()
        .drain()
        .collect();
    assert_eq!(cleared.len(), 1);
}

// -----------------------------------------------------------------------------
// Pickup reaction tests
// -----------------------------------------------------------------------------

#[test]
fn test_coin_pickup_credits_exactly_once() {
    let mut world = level_world();
    let coin = world
        .spawn((
            Collectible {
                kind: CollectibleKind::Coin,
                value: 10,
            },
            Body::trigger(Vec2::new(14.0, 14.0)),
        ))
        .id();
    world.write_message(PickupEvent {
        collectible: coin,
        kind: CollectibleKind::Coin,
        value: 10,
    });

    run(&mut world, systems::handle_pickups);

    let tally = world.resource::<RunTally>();
    assert_eq!(tally.coins, 1);
    assert_eq!(tally.score, 10);
    assert!(world.get::<Doomed>(coin).is_some());
}

#[test]
fn test_book_pickup_credits_value_not_coin_count() {
    let mut world = level_world();
    let book = world
        .spawn((
            Collectible {
                kind: CollectibleKind::Book,
                value: 25,
            },
            BookHint {
                topic: "ECONOMICS - Adam Smith".to_string(),
                text: "Division of labour.".to_string(),
            },
            Body::trigger(Vec2::new(20.0, 22.0)),
        ))
        .id();
    world.write_message(PickupEvent {
        collectible: book,
        kind: CollectibleKind::Book,
        value: 25,
    });

    run(&mut world, systems::handle_pickups);

    let tally = world.resource::<RunTally>();
    assert_eq!(tally.coins, 0);
    assert_eq!(tally.books_value, 25);
    assert_eq!(tally.score, 25);
}

// -----------------------------------------------------------------------------
// Rescue reaction tests
// -----------------------------------------------------------------------------

fn rescue_one(world: &mut World) {
    let companion = world.spawn(Companion { rescued: true }).id();
    world.write_message(RescueEvent { companion });
    run(world, systems::handle_rescues);
    // `run` rebuilds the system via `run_system_once`, which resets the
    // `MessageReader` cursor each call. Drain the queue between invocations so a
    // subsequent `rescue_one` does not re-read already-processed events — this
    // mirrors Bevy's per-frame `Messages::update` in a normal schedule.
    world.resource_mut::<Messages<RescueEvent>>().clear();
}

#[test]
fn test_every_third_rescue_grants_a_life() {
    let mut world = level_world();
    let player = world.spawn((Player, Vitality::new(2))).id();

    rescue_one(&mut world);
    rescue_one(&mut world);
    assert_eq!(world.get::<Vitality>(player).unwrap().lives, 2);

    rescue_one(&mut world);
    assert_eq!(world.get::<Vitality>(player).unwrap().lives, 3);
    assert_eq!(world.resource::<RunTally>().rescues, 3);
}

#[test]
fn test_rescue_life_grant_respects_cap() {
    let mut world = level_world();
    let player = world.spawn((Player, Vitality::new(LIFE_CAP))).id();

    for _ in 0..3 {
        rescue_one(&mut world);
    }

    assert_eq!(world.get::<Vitality>(player).unwrap().lives, LIFE_CAP);
    assert_eq!(world.resource::<RunTally>().rescues, 3);
}

// -----------------------------------------------------------------------------
// Checkpoint component tests
// -----------------------------------------------------------------------------

#[test]
fn test_checkpoint_constructors() {
    let quiz = Checkpoint::quiz(3);
    assert_eq!(quiz.topic_id, 3);
    assert!(!quiz.completed);
    assert!(!quiz.is_exit);

    let exit = Checkpoint::exit();
    assert!(exit.is_exit);
    assert!(!exit.completed);
}
