//! Terminal runner (default binary).
//!
//! Owns the ~60 Hz tick loop and the process lifecycle. Per tick, in order:
//! engine tick (input snapshot + movement), render, timer tick with explicit
//! dispatch of fired timers, input reset. The engine itself never blocks or
//! counts wall-clock time.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{BoardSnapshot, GameState};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::timer::TimerSet;
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    game.start();

    let mut timers = TimerSet::new();
    let mut input = InputHandler::new();
    let view = GameView::default();
    let mut snapshot = BoardSnapshot::default();
    let mut fb = blockfall::term::FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat stands in for held keys.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    input.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            game.tick(input.snapshot(), &mut timers);

            game.snapshot_into(&mut snapshot);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;

            for fired in timers.tick() {
                game.dispatch(fired, &mut timers);
            }

            input.end_tick();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
