//! Cancellable one-shot timers.
//!
//! The picker owns at most one pending timer per [`TimerKind`]. Scheduling a
//! kind again replaces the previous deadline. Nothing fires by itself: the
//! host calls `poll(now)` (typically on every frame), and `now` is always
//! passed in so tests can drive time by hand.

use enum_map::{Enum, EnumMap};
use std::time::{Duration, Instant};

/// The kinds of deferred work the controller can have in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
pub enum TimerKind {
    /// Debounce after a drag ends, waiting to see if momentum follows.
    Settle,
    /// Deferred programmatic scroll (initial position, `scroll_to_index`).
    Reposition,
}

/// A scheduled callback: its deadline and the offset it carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    /// When this timer fires.
    pub due: Instant,
    /// Offset captured when the timer was scheduled.
    pub offset: f32,
}

/// One slot per timer kind.
#[derive(Debug, Default)]
pub struct Timers {
    slots: EnumMap<TimerKind, Option<Pending>>,
}

impl Timers {
    /// Creates an empty set of timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration, offset: f32) {
        let pending = Pending {
            due: now + delay,
            offset,
        };
        if let Some(previous) = self.slots[kind].replace(pending) {
            log::trace!("{kind:?} timer superseded (was due with offset {})", previous.offset);
        }
    }

    /// Cancels `kind`. Returns `true` if something was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let cancelled = self.slots[kind].take().is_some();
        if cancelled {
            log::trace!("{kind:?} timer cancelled");
        }
        cancelled
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = None;
        }
    }

    /// Returns `true` if `kind` is pending.
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.slots[kind].is_some()
    }

    /// Removes and returns `kind` if its deadline has passed.
    pub fn take_due(&mut self, kind: TimerKind, now: Instant) -> Option<Pending> {
        match self.slots[kind] {
            Some(pending) if pending.due <= now => self.slots[kind].take(),
            _ => None,
        }
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.values().flatten().map(|p| p.due).min()
    }
}
