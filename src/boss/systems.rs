//! Boss domain: the encounter state machine and its reactions.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::components::{Boss, BossMachine, BossState};
use crate::boss::{BossDefeatedEvent, BossTuning};
use crate::contacts::BossStompedEvent;
use crate::core::{PlayerIdentity, RunClock, RunFailedEvent, RunTally, RunVictoryEvent};
use crate::physics::Body;
use crate::player::Player;
use crate::score::{final_score, RunRecord, ScoreService, SubmitScoreEvent};

/// Advance the phase machine. The bound check runs in every live state so
/// the patrol direction stays consistent across hit-reactions.
pub(crate) fn update_boss_machine(
    time: Res<Time>,
    tuning: Res<BossTuning>,
    mut query: Query<(&mut Transform, &mut Body, &mut Boss, &mut BossMachine)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut body, mut boss, mut machine) in &mut query {
        machine.state_timer += dt;

        if machine.state != BossState::Defeated {
            if transform.translation.x >= boss.patrol_max {
                boss.direction = -1.0;
                transform.translation.x = boss.patrol_max;
            } else if transform.translation.x <= boss.patrol_min {
                boss.direction = 1.0;
                transform.translation.x = boss.patrol_min;
            }
        }

        match machine.state {
            BossState::Entering => {
                if machine.state_timer >= tuning.entry_seconds {
                    machine.state = BossState::Active;
                    machine.state_timer = 0.0;
                    body.enabled = true;
                    info!("Boss entry complete: combat begins");
                }
            }
            BossState::Active => {
                body.velocity.x = boss.speed * boss.direction;
            }
            BossState::HitReacting => {
                body.velocity.x = 0.0;
                if machine.state_timer >= tuning.hit_invincibility_seconds {
                    machine.state = BossState::Active;
                    machine.state_timer = 0.0;
                }
            }
            BossState::Defeated => {}
        }
    }
}

/// React to a scoring stomp: lose a hit point, halt, and escalate speed
/// while at least two hit points remain.
pub(crate) fn handle_boss_stomped(
    mut stomp_events: MessageReader<BossStompedEvent>,
    mut defeated_events: MessageWriter<BossDefeatedEvent>,
    tuning: Res<BossTuning>,
    mut bosses: Query<(&mut Body, &mut Boss, &mut BossMachine), Without<Player>>,
    mut players: Query<&mut Body, With<Player>>,
) {
    for event in stomp_events.read() {
        let Ok((mut body, mut boss, mut machine)) = bosses.get_mut(event.boss) else {
            continue;
        };
        if machine.state != BossState::Active {
            continue;
        }

        boss.hp = boss.hp.saturating_sub(1);
        body.velocity.x = 0.0;

        for mut player_body in &mut players {
            player_body.velocity.y = tuning.stomp_bounce;
        }

        if boss.hp == 0 {
            machine.state = BossState::Defeated;
            machine.state_timer = 0.0;
            body.enabled = false;
            defeated_events.write(BossDefeatedEvent { boss: event.boss });
            info!("Boss defeated");
            continue;
        }

        machine.state = BossState::HitReacting;
        machine.state_timer = 0.0;

        // Speed doubles on the hits that leave two or more hit points; the
        // ramp plateaus before the final hit.
        if boss.hp >= 2 {
            boss.speed *= tuning.escalation_factor;
            info!(
                "Boss hit: {}/{} hp, speed now {}",
                boss.hp, boss.max_hp, boss.speed
            );
        } else {
            info!("Boss hit: {}/{} hp", boss.hp, boss.max_hp);
        }
    }
}

/// Victory: snapshot the run, add the victory bonus, submit, and end the run.
pub(crate) fn handle_boss_defeated(
    mut defeated_events: MessageReader<BossDefeatedEvent>,
    mut victory_events: MessageWriter<RunVictoryEvent>,
    mut submit_events: MessageWriter<SubmitScoreEvent>,
    tuning: Res<BossTuning>,
    mut tally: ResMut<RunTally>,
    clock: Res<RunClock>,
) {
    for _ in defeated_events.read() {
        tally.boss_defeated = true;
        let score = final_score(
            tally.correct_answers,
            tally.enemies_defeated,
            tally.coins,
            clock.elapsed_seconds(),
        ) + tuning.victory_bonus;

        submit_events.write(SubmitScoreEvent { final_score: score });
        victory_events.write(RunVictoryEvent { final_score: score });
    }
}

/// A defeat inside the arena still records the run, without the bonus.
pub(crate) fn submit_on_arena_defeat(
    mut failed_events: MessageReader<RunFailedEvent>,
    mut submit_events: MessageWriter<SubmitScoreEvent>,
    tally: Res<RunTally>,
    clock: Res<RunClock>,
) {
    for _ in failed_events.read() {
        let score = final_score(
            tally.correct_answers,
            tally.enemies_defeated,
            tally.coins,
            clock.elapsed_seconds(),
        );
        submit_events.write(SubmitScoreEvent { final_score: score });
    }
}

/// Forward queued submissions to the score service. Failure is non-fatal:
/// the service falls back to the local leaderboard.
pub(crate) fn submit_scores(
    mut submit_events: MessageReader<SubmitScoreEvent>,
    service: Res<ScoreService>,
    identity: Res<PlayerIdentity>,
    tally: Res<RunTally>,
    clock: Res<RunClock>,
) {
    for event in submit_events.read() {
        let record = RunRecord {
            correct_answers: tally.correct_answers,
            enemies_defeated: tally.enemies_defeated,
            coins: tally.coins,
            elapsed_seconds: clock.elapsed_seconds(),
            boss_defeated: tally.boss_defeated,
            score: event.final_score,
        };
        if service.submit(&identity.name, &identity.contact, &record) {
            info!("Score {} submitted for {}", record.score, identity.name);
        } else {
            warn!("Score submission failed; local fallback only");
        }
    }
}
