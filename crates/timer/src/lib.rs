//! Tick-counted timer scheduler.
//!
//! The engine models every delay (gravity interval, lock grace period) as a
//! named countdown owned by this collaborator. It never stores callbacks:
//! timers are keyed by the closed [`TimerKind`] vocabulary, and [`TimerSet::tick`]
//! reports which kinds fired so the host can dispatch them explicitly.
//!
//! Semantics follow the host loop contract: `tick()` decrements every armed
//! timer by one and fires (and disarms) those that reach zero. Arming an
//! already-armed kind restarts its countdown.

use arrayvec::ArrayVec;

use blockfall_types::TimerKind;

/// The set of armed countdowns, one optional slot per [`TimerKind`].
#[derive(Debug, Clone, Default)]
pub struct TimerSet {
    remaining: [Option<u32>; TimerKind::ALL.len()],
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is a countdown currently armed for this kind?
    pub fn has(&self, kind: TimerKind) -> bool {
        self.remaining[kind.index()].is_some()
    }

    /// Arm (or restart) a countdown.
    ///
    /// A duration of zero still takes one tick to fire.
    pub fn set(&mut self, kind: TimerKind, ticks: u32) {
        self.remaining[kind.index()] = Some(ticks);
    }

    /// Disarm a countdown. Disarming an absent kind is a no-op.
    pub fn stop(&mut self, kind: TimerKind) {
        self.remaining[kind.index()] = None;
    }

    /// Remaining ticks for an armed countdown.
    pub fn remaining(&self, kind: TimerKind) -> Option<u32> {
        self.remaining[kind.index()]
    }

    /// Advance all armed countdowns by one tick.
    ///
    /// Returns the kinds that fired this tick, in `TimerKind::ALL` order.
    /// Fired kinds are disarmed before this returns, so a handler may re-arm
    /// them without being clobbered.
    pub fn tick(&mut self) -> ArrayVec<TimerKind, 2> {
        let mut fired = ArrayVec::new();

        for kind in TimerKind::ALL {
            if let Some(remaining) = self.remaining[kind.index()].as_mut() {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    fired.push(kind);
                }
            }
        }

        for kind in &fired {
            self.remaining[kind.index()] = None;
        }

        fired
    }
}
