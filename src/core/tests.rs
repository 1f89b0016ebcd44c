//! Core domain: tests for pause bookkeeping and the run tally.

use super::resources::{GameplayPaused, RunClock, RunTally};

// -----------------------------------------------------------------------------
// GameplayPaused tests
// -----------------------------------------------------------------------------

#[test]
fn test_paused_default_is_active() {
    let paused = GameplayPaused::default();
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_and_unpause_single_source() {
    let mut paused = GameplayPaused::default();
    paused.pause("quiz");
    assert!(paused.is_paused());

    paused.unpause("quiz");
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_stays_while_any_source_remains() {
    let mut paused = GameplayPaused::default();
    paused.pause("quiz");
    paused.pause("cutscene");

    paused.unpause("quiz");
    assert!(paused.is_paused());

    paused.unpause("cutscene");
    assert!(!paused.is_paused());
}

#[test]
fn test_unpause_unknown_source_is_noop() {
    let mut paused = GameplayPaused::default();
    paused.unpause("quiz");
    assert!(!paused.is_paused());
}

// -----------------------------------------------------------------------------
// RunClock tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_clock_floors_to_whole_seconds() {
    let clock = RunClock { elapsed: 49.93 };
    assert_eq!(clock.elapsed_seconds(), 49);
}

#[test]
fn test_run_clock_reset() {
    let mut clock = RunClock { elapsed: 12.5 };
    clock.reset();
    assert_eq!(clock.elapsed_seconds(), 0);
}

// -----------------------------------------------------------------------------
// RunTally tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_tally_reset_clears_all_counters() {
    let mut tally = RunTally {
        coins: 7,
        books_value: 50,
        enemies_defeated: 3,
        correct_answers: 2,
        rescues: 5,
        score: 940,
        boss_defeated: true,
    };
    tally.reset();

    assert_eq!(tally.coins, 0);
    assert_eq!(tally.enemies_defeated, 0);
    assert_eq!(tally.correct_answers, 0);
    assert_eq!(tally.rescues, 0);
    assert_eq!(tally.score, 0);
    assert!(!tally.boss_defeated);
}
