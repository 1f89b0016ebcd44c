//! Physics domain: fixed-tick integration, platform driving and AABB
//! resolution against static geometry.

use bevy::prelude::*;

use crate::physics::components::{Body, MovingPlatform, Solid, TerrainCollider};
use crate::physics::PhysicsTuning;

/// How close a body's bottom edge must sit to a platform's top edge to count
/// as riding it.
const RIDE_EPSILON: f32 = 2.0;

/// Advance every platform's oscillation and carry its riders.
///
/// Riders are detected against the platform's position at tick start and get
/// the platform's displacement added to their own position before their own
/// integration and resolution run, so they are carried without inheriting
/// the platform's velocity term.
pub(crate) fn drive_moving_platforms(
    time: Res<Time>,
    mut platforms: Query<(&mut Transform, &mut MovingPlatform, &Solid), Without<Body>>,
    mut riders: Query<(&mut Transform, &Body), (With<TerrainCollider>, Without<MovingPlatform>)>,
) {
    let dt = time.delta_secs();

    for (mut platform_tf, mut platform, solid) in &mut platforms {
        let before = platform.position();
        platform.advance(dt);
        let after = platform.position();
        let displacement = after - before;

        platform_tf.translation.x = after.x;
        platform_tf.translation.y = after.y;

        if displacement == Vec2::ZERO {
            continue;
        }

        let platform_top = before.y + solid.size.y * 0.5;
        let platform_half_w = solid.size.x * 0.5;

        for (mut rider_tf, rider_body) in &mut riders {
            if !rider_body.enabled {
                continue;
            }
            let rider_pos = rider_tf.translation.truncate();
            let rider_bottom = rider_pos.y - rider_body.size.y * 0.5;
            let horizontal_overlap = (rider_pos.x - before.x).abs()
                < platform_half_w + rider_body.size.x * 0.5;

            if horizontal_overlap && (rider_bottom - platform_top).abs() <= RIDE_EPSILON {
                rider_tf.translation.x += displacement.x;
                rider_tf.translation.y += displacement.y;
            }
        }
    }
}

/// Apply gravity and velocity to every enabled body.
pub(crate) fn integrate_bodies(
    time: Res<Time>,
    tuning: Res<PhysicsTuning>,
    mut bodies: Query<(&mut Transform, &mut Body)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut body) in &mut bodies {
        if !body.enabled {
            continue;
        }
        body.velocity.y -= tuning.gravity * body.gravity_scale * dt;
        transform.translation.x += body.velocity.x * dt;
        transform.translation.y += body.velocity.y * dt;
    }
}

/// Push terrain-colliding bodies out of solids along the axis of least
/// penetration and maintain the `grounded` flag.
pub(crate) fn resolve_solid_collisions(
    solids: Query<(&Transform, &Solid), Without<Body>>,
    mut bodies: Query<(&mut Transform, &mut Body), With<TerrainCollider>>,
) {
    for (mut transform, mut body) in &mut bodies {
        if !body.enabled {
            continue;
        }
        let was_grounded = body.grounded;
        body.grounded = false;

        for (solid_tf, solid) in &solids {
            let body_pos = transform.translation.truncate();
            let solid_pos = solid_tf.translation.truncate();

            let half = (body.size + solid.size) * 0.5;
            let delta = body_pos - solid_pos;
            let overlap_x = half.x - delta.x.abs();
            let overlap_y = half.y - delta.y.abs();
            if overlap_x <= 0.0 || overlap_y <= 0.0 {
                continue;
            }

            if overlap_y <= overlap_x {
                if delta.y >= 0.0 {
                    // Landing on top of the solid.
                    transform.translation.y += overlap_y;
                    if body.velocity.y <= 0.0 {
                        body.velocity.y = 0.0;
                        body.grounded = true;
                    }
                } else {
                    // Bumping the underside.
                    transform.translation.y -= overlap_y;
                    if body.velocity.y > 0.0 {
                        body.velocity.y = 0.0;
                    }
                }
            } else {
                let push = if delta.x >= 0.0 { overlap_x } else { -overlap_x };
                transform.translation.x += push;
                body.velocity.x = 0.0;
            }
        }

        if body.grounded && !was_grounded {
            debug!("Body landed at x={:.1}", transform.translation.x);
        }
    }
}
