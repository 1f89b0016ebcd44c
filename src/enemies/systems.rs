//! Enemies domain: patrol movement and the stomp reaction.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::contacts::EnemyStompedEvent;
use crate::core::{Doomed, RunTally};
use crate::enemies::components::{Enemy, Patrol};
use crate::enemies::EnemyTuning;
use crate::physics::Body;
use crate::player::Player;
use crate::score::ScoreValues;

pub(crate) fn update_patrols(
    tuning: Res<EnemyTuning>,
    mut query: Query<(&mut Transform, &mut Body, &mut Patrol, &Enemy)>,
) {
    for (mut transform, mut body, mut patrol, enemy) in &mut query {
        if !enemy.alive {
            continue;
        }

        // Reverse on bound contact; clamp so the patrol invariant holds even
        // after an overshooting tick.
        if transform.translation.x >= patrol.home_x + patrol.radius {
            patrol.direction = -1.0;
            transform.translation.x = patrol.home_x + patrol.radius;
        } else if transform.translation.x <= patrol.home_x - patrol.radius {
            patrol.direction = 1.0;
            transform.translation.x = patrol.home_x - patrol.radius;
        }

        body.velocity.x = patrol.direction * tuning.patrol_speed;
    }
}

/// React to a stomp resolved by the dispatcher: defeat the enemy, credit the
/// run and bounce the player upward.
pub(crate) fn handle_enemy_stomped(
    mut commands: Commands,
    mut stomp_events: MessageReader<EnemyStompedEvent>,
    tuning: Res<EnemyTuning>,
    values: Res<ScoreValues>,
    mut tally: ResMut<RunTally>,
    mut enemies: Query<(&mut Enemy, &mut Body), Without<Player>>,
    mut players: Query<&mut Body, With<Player>>,
) {
    for event in stomp_events.read() {
        let Ok((mut enemy, mut body)) = enemies.get_mut(event.enemy) else {
            continue;
        };
        if !enemy.defeat(&mut body) {
            continue;
        }

        tally.enemies_defeated += 1;
        tally.score += values.enemy;
        commands.entity(event.enemy).insert(Doomed);

        for mut player_body in &mut players {
            player_body.velocity.y = tuning.stomp_bounce;
        }

        debug!(
            "Enemy {:?} stomped, total {}",
            event.enemy, tally.enemies_defeated
        );
    }
}
