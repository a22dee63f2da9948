//! Integration tests for the tick loop: engine + timer collaborator + input
//! snapshot, driven the way the host binary drives them.

use blockfall::core::{GameState, StepOutcome};
use blockfall::timer::TimerSet;
use blockfall::types::{
    Direction, PressSnapshot, Shift, TimerKind, BASE_GRAVITY_TICKS, LOCK_GRACE_TICKS,
};

/// One host tick: engine first, then fired timers, then input reset.
fn host_tick(game: &mut GameState, input: &mut PressSnapshot, timers: &mut TimerSet) {
    game.tick(input, timers);
    for fired in timers.tick() {
        game.dispatch(fired, timers);
    }
    input.clear();
}

/// Descend while the next row is free, stopping just before the piece rests.
fn descend_to_rest(game: &mut GameState, timers: &mut TimerSet) {
    while game
        .board()
        .is_legal(game.active().unwrap().translated(Shift::Down).cells())
    {
        assert_eq!(game.step_down(timers), Some(StepOutcome::Moved));
    }
}

#[test]
fn start_spawns_exactly_one_piece_above_the_grid() {
    let mut game = GameState::new(12345);
    assert!(game.active().is_none());

    game.start();
    let piece = game.active().expect("start spawns a piece");
    assert!(piece.cells().iter().all(|&(_, y)| y < 0));

    // Above the visible grid, the composed snapshot is still empty.
    let snap = game.snapshot();
    let filled: u32 = snap.cells.iter().flatten().map(|&c| c as u32).sum();
    assert_eq!(filled, 0);
}

#[test]
fn gravity_moves_the_piece_down_after_the_interval() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let mut input = PressSnapshot::default();

    let y0 = game.active().unwrap().y;

    for _ in 0..BASE_GRAVITY_TICKS {
        host_tick(&mut game, &mut input, &mut timers);
    }
    assert_eq!(game.active().unwrap().y, y0 + 1);

    // And again: the interval restarts after each step.
    for _ in 0..BASE_GRAVITY_TICKS {
        host_tick(&mut game, &mut input, &mut timers);
    }
    assert_eq!(game.active().unwrap().y, y0 + 2);
}

#[test]
fn left_press_shifts_the_piece_one_column() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let mut input = PressSnapshot::default();

    let x0 = game.active().unwrap().x;

    input.press(Direction::Left);
    host_tick(&mut game, &mut input, &mut timers);

    assert_eq!(game.active().unwrap().x, x0 - 1);
    assert!(game.lock_delay(), "a lateral move raises lock-delay");
}

#[test]
fn press_is_consumed_by_exactly_one_tick() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let mut input = PressSnapshot::default();

    input.press(Direction::Right);
    let x0 = game.active().unwrap().x;
    host_tick(&mut game, &mut input, &mut timers);
    host_tick(&mut game, &mut input, &mut timers);

    assert_eq!(game.active().unwrap().x, x0 + 1, "second tick saw no press");
}

#[test]
fn down_press_descends_immediately_and_restarts_gravity() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let mut input = PressSnapshot::default();

    let y0 = game.active().unwrap().y;

    input.press(Direction::Down);
    host_tick(&mut game, &mut input, &mut timers);
    assert_eq!(game.active().unwrap().y, y0 + 1);

    // The manual step stopped gravity; the next tick re-arms a full interval.
    host_tick(&mut game, &mut input, &mut timers);
    assert_eq!(
        timers.remaining(TimerKind::Gravity),
        Some(BASE_GRAVITY_TICKS - 1)
    );
}

#[test]
fn up_press_rotates_clockwise() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let mut input = PressSnapshot::default();

    let r0 = game.active().unwrap().rotation;

    input.press(Direction::Up);
    host_tick(&mut game, &mut input, &mut timers);

    assert_eq!(game.active().unwrap().rotation, r0.rotate_cw());
}

#[test]
fn a_dropped_piece_locks_and_respawns() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();

    descend_to_rest(&mut game, &mut timers);

    // No move or rotation happened, so the blocked step locks immediately.
    assert_eq!(game.step_down(&mut timers), Some(StepOutcome::Locked));

    // The settled board gained four cells and a fresh piece spawned above.
    let snap = game.snapshot();
    let filled: u32 = snap.cells.iter().flatten().map(|&c| c as u32).sum();
    assert_eq!(filled, 4);
    assert!(game.active().unwrap().cells().iter().all(|&(_, y)| y < 0));
}

#[test]
fn grace_period_defers_the_lock_for_thirty_ticks() {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();

    descend_to_rest(&mut game, &mut timers);

    // A lateral move while resting raises lock-delay.
    let mut press = PressSnapshot::default();
    press.press(Direction::Left);
    game.tick(&press, &mut timers);
    assert!(game.lock_delay());

    // The blocked descent now defers and arms the grace timer.
    assert_eq!(game.step_down(&mut timers), Some(StepOutcome::Pending));
    assert_eq!(
        timers.remaining(TimerKind::LockGrace),
        Some(LOCK_GRACE_TICKS)
    );

    // Left alone, the grace expiry locks the piece through dispatch.
    let before = *game.active().unwrap();
    for _ in 0..LOCK_GRACE_TICKS {
        for fired in timers.tick() {
            game.dispatch(fired, &mut timers);
        }
    }
    assert_ne!(
        *game.active().unwrap(),
        before,
        "grace expiry locked and respawned"
    );
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let run = |seed: u32| {
        let mut game = GameState::new(seed);
        game.start();
        let mut timers = TimerSet::new();
        let mut input = PressSnapshot::default();

        for i in 0..240 {
            if i % 7 == 0 {
                input.press(Direction::Left);
            }
            if i % 11 == 0 {
                input.press(Direction::Up);
            }
            host_tick(&mut game, &mut input, &mut timers);
        }
        game.snapshot()
    };

    assert_eq!(run(99).cells, run(99).cells);
}
