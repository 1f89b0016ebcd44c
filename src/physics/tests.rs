//! Physics domain: tests for body integration, platform oscillation and
//! solid resolution.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use std::time::Duration;

use super::components::{aabb_overlap, Body, MovingPlatform, PlatformAxis, Solid, TerrainCollider};
use super::{systems, PhysicsTuning};

const DT: f32 = 1.0 / 60.0;

fn world_with_time(dt: f32) -> World {
    let mut world = World::new();
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(dt));
    world.insert_resource(time);
    world.insert_resource(PhysicsTuning::default());
    world
}

fn run<M>(world: &mut World, system: impl IntoSystem<(), (), M>) {
    world.run_system_once(system).expect("system run failed");
    world.flush();
}

// -----------------------------------------------------------------------------
// AABB tests
// -----------------------------------------------------------------------------

#[test]
fn test_aabb_overlap_detects_intersection() {
    assert!(aabb_overlap(
        Vec2::ZERO,
        Vec2::new(10.0, 10.0),
        Vec2::new(8.0, 0.0),
        Vec2::new(10.0, 10.0),
    ));
}

#[test]
fn test_aabb_overlap_rejects_touching_edges() {
    assert!(!aabb_overlap(
        Vec2::ZERO,
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
    ));
}

// -----------------------------------------------------------------------------
// Moving platform tests
// -----------------------------------------------------------------------------

#[test]
fn test_platform_phase_advances_toward_extreme() {
    let mut platform = MovingPlatform::new(Vec2::ZERO, PlatformAxis::Horizontal, 80.0, 60.0);
    platform.advance(DT);

    assert!(platform.phase > 0.0);
    assert_eq!(platform.direction, 1.0);
    assert_eq!(platform.position().y, 0.0);
}

#[test]
fn test_platform_phase_reflects_and_clamps_at_extremes() {
    let mut platform = MovingPlatform::new(Vec2::ZERO, PlatformAxis::Vertical, 50.0, 60.0);
    platform.phase = 0.999;
    platform.advance(DT);

    assert_eq!(platform.phase, 1.0);
    assert_eq!(platform.direction, -1.0);
    assert_eq!(platform.position(), Vec2::new(0.0, 50.0));

    // The next tick moves back toward the origin.
    platform.advance(DT);
    assert!(platform.phase < 1.0);
}

#[test]
fn test_platform_never_exceeds_amplitude() {
    let mut platform = MovingPlatform::new(Vec2::new(100.0, 0.0), PlatformAxis::Horizontal, 40.0, 200.0);
    for _ in 0..600 {
        platform.advance(DT);
        assert!(platform.phase.abs() <= 1.0);
        assert!((platform.position().x - 100.0).abs() <= 40.0 + 1e-3);
    }
}

#[test]
fn test_rider_receives_platform_displacement() {
    let mut world = world_with_time(DT);

    world.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Solid { size: Vec2::new(80.0, 14.0) },
        MovingPlatform::new(Vec2::ZERO, PlatformAxis::Horizontal, 60.0, 60.0),
    ));
    // Rider standing exactly on the platform's top edge.
    let rider = world
        .spawn((
            Transform::from_xyz(0.0, 7.0 + 22.0, 0.0),
            Body::dynamic(Vec2::new(26.0, 44.0)),
            TerrainCollider,
        ))
        .id();

    run(&mut world, systems::drive_moving_platforms);

    let platform_x = world
        .query::<(&Transform, &MovingPlatform)>()
        .iter(&world)
        .next()
        .unwrap()
        .0
        .translation
        .x;
    let rider_x = world.get::<Transform>(rider).unwrap().translation.x;

    assert!(platform_x > 0.0);
    assert_eq!(rider_x, platform_x);
}

#[test]
fn test_non_rider_is_not_carried() {
    let mut world = world_with_time(DT);

    world.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Solid { size: Vec2::new(80.0, 14.0) },
        MovingPlatform::new(Vec2::ZERO, PlatformAxis::Horizontal, 60.0, 60.0),
    ));
    // Far above the platform: not resting on it.
    let bystander = world
        .spawn((
            Transform::from_xyz(0.0, 200.0, 0.0),
            Body::dynamic(Vec2::new(26.0, 44.0)),
            TerrainCollider,
        ))
        .id();

    run(&mut world, systems::drive_moving_platforms);

    assert_eq!(world.get::<Transform>(bystander).unwrap().translation.x, 0.0);
}

// -----------------------------------------------------------------------------
// Integration tests
// -----------------------------------------------------------------------------

#[test]
fn test_integrate_applies_gravity_and_velocity() {
    let mut world = world_with_time(1.0);

    let entity = world
        .spawn((
            Transform::from_xyz(0.0, 100.0, 0.0),
            Body {
                velocity: Vec2::new(220.0, 0.0),
                ..Body::dynamic(Vec2::new(26.0, 44.0))
            },
        ))
        .id();

    run(&mut world, systems::integrate_bodies);

    let body = world.get::<Body>(entity).unwrap();
    let transform = world.get::<Transform>(entity).unwrap();
    assert_eq!(body.velocity.y, -800.0);
    assert_eq!(transform.translation.x, 220.0);
    // Velocity was applied after the gravity step.
    assert_eq!(transform.translation.y, 100.0 - 800.0);
}

#[test]
fn test_disabled_body_does_not_integrate() {
    let mut world = world_with_time(1.0);

    let entity = world
        .spawn((Transform::from_xyz(0.0, 100.0, 0.0), {
            let mut body = Body::dynamic(Vec2::new(26.0, 44.0));
            body.enabled = false;
            body
        }))
        .id();

    run(&mut world, systems::integrate_bodies);

    assert_eq!(world.get::<Transform>(entity).unwrap().translation.y, 100.0);
}

// -----------------------------------------------------------------------------
// Resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_resolver_lands_falling_body_and_sets_grounded() {
    let mut world = world_with_time(DT);

    world.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Solid { size: Vec2::new(400.0, 32.0) },
    ));
    // Overlapping the floor from above while falling.
    let entity = world
        .spawn((
            Transform::from_xyz(0.0, 30.0, 0.0),
            Body {
                velocity: Vec2::new(0.0, -120.0),
                ..Body::dynamic(Vec2::new(26.0, 44.0))
            },
            TerrainCollider,
        ))
        .id();

    run(&mut world, systems::resolve_solid_collisions);

    let body = world.get::<Body>(entity).unwrap();
    let transform = world.get::<Transform>(entity).unwrap();
    assert!(body.grounded);
    assert_eq!(body.velocity.y, 0.0);
    // Pushed up so the bottom edge rests on the solid's top edge.
    assert_eq!(transform.translation.y, 16.0 + 22.0);
}

#[test]
fn test_resolver_clears_grounded_when_airborne() {
    let mut world = world_with_time(DT);

    world.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Solid { size: Vec2::new(400.0, 32.0) },
    ));
    let entity = world
        .spawn((
            Transform::from_xyz(0.0, 300.0, 0.0),
            {
                let mut body = Body::dynamic(Vec2::new(26.0, 44.0));
                body.grounded = true;
                body
            },
            TerrainCollider,
        ))
        .id();

    run(&mut world, systems::resolve_solid_collisions);

    assert!(!world.get::<Body>(entity).unwrap().grounded);
}

#[test]
fn test_resolver_pushes_out_sideways_and_stops_horizontal_motion() {
    let mut world = world_with_time(DT);

    world.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Solid { size: Vec2::new(32.0, 200.0) },
    ));
    // Deep vertical overlap, shallow horizontal overlap: resolves along x.
    let entity = world
        .spawn((
            Transform::from_xyz(-27.0, 0.0, 0.0),
            Body {
                velocity: Vec2::new(220.0, 0.0),
                ..Body::dynamic(Vec2::new(26.0, 44.0))
            },
            TerrainCollider,
        ))
        .id();

    run(&mut world, systems::resolve_solid_collisions);

    let body = world.get::<Body>(entity).unwrap();
    let transform = world.get::<Transform>(entity).unwrap();
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(transform.translation.x, -29.0);
}
