//! Snap controller: turns scroll lifecycle events into a settled selection.
//!
//! The controller watches drags and momentum animations on the surface.
//! Once scrolling has stopped, it rounds the offset to the nearest row,
//! scrolls the surface onto the row boundary if needed, and reports the new
//! selection when it changed.
//!
//! "Stopped" means one of:
//!
//! * a momentum animation ended, or
//! * a drag ended and no momentum started within the debounce window.
//!
//! Time never advances on its own: every entry point takes `now`, and
//! pending timers only fire from [`SnapController::poll`].

use crate::config::WheelConfig;
use crate::event::ScrollEvent;
use crate::surface::{Platform, ScrollSurface};
use crate::timer::{TimerKind, Timers};
use std::time::{Duration, Instant};


/// Offsets closer than this to a row boundary are considered aligned.
const OFFSET_TOLERANCE: f32 = 1e-3;

/// Where the controller is in the scroll lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing is moving.
    #[default]
    Idle,
    /// The user is dragging the content.
    Dragging,
    /// The surface runs a momentum animation.
    Momentum,
    /// A drag ended; waiting out the debounce window.
    SettlePending,
    /// A corrective scroll is in flight and its momentum-end echo is expected.
    CorrectiveScroll,
}

/// State machine deciding when and where the wheel settles.
pub struct SnapController<S> {
    surface: S,

    item_height: f32,
    len: usize,
    debounce: Duration,
    platform: Platform,
    initial_index: usize,

    phase: Phase,
    selected: usize,
    last_offset: f32,
    timers: Timers,

    // Cleared on unmount: nothing reaches the surface afterwards.
    mounted: bool,
}

impl<S: ScrollSurface> SnapController<S> {
    /// Creates a controller for `len` rows.
    ///
    /// The configuration should have been validated.
    pub fn new(surface: S, config: &WheelConfig, len: usize) -> Self {
        let mut controller = SnapController {
            surface,
            item_height: config.get_item_height(),
            len,
            debounce: config.get_debounce(),
            platform: config.get_platform(),
            initial_index: 0,
            phase: Phase::Idle,
            selected: 0,
            last_offset: 0.0,
            timers: Timers::new(),
            mounted: false,
        };
        controller.initial_index = controller.clamp_index(config.get_selected_index());
        controller.selected = controller.initial_index;
        controller
    }

    /// Starts accepting events and positions the surface on the initial row.
    ///
    /// The scroll itself is deferred to the next [`poll`](Self::poll). No
    /// selection change is reported. Calling this again has no effect.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.selected = self.initial_index;

        let offset = self.offset_for_index(self.selected);
        log::debug!("mounted on row {} (offset {offset})", self.selected);
        self.timers
            .schedule(TimerKind::Reposition, now, Duration::ZERO, offset);
    }

    /// Stops the controller and cancels every pending timer.
    ///
    /// After this, events and polls are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        log::debug!("unmounted in {:?}", self.phase);
        self.mounted = false;
        self.timers.cancel_all();
        self.phase = Phase::Idle;
    }

    /// Feeds an event from the surface.
    ///
    /// Returns the new selected index if this event settled the wheel on a
    /// different row.
    pub fn handle(&mut self, event: ScrollEvent, now: Instant) -> Option<usize> {
        if !self.mounted {
            log::trace!("ignoring {event:?}: not mounted");
            return None;
        }
        log::trace!("{event:?} in {:?}", self.phase);

        if let Some(offset) = event.offset() {
            self.last_offset = offset;
        }

        match event {
            ScrollEvent::BeginDrag => {
                self.timers.cancel(TimerKind::Settle);
                self.set_phase(Phase::Dragging);
                None
            }
            ScrollEvent::Scroll { .. } => None,
            ScrollEvent::EndDrag { offset } => {
                self.timers
                    .schedule(TimerKind::Settle, now, self.debounce, offset);
                self.set_phase(Phase::SettlePending);
                None
            }
            ScrollEvent::MomentumBegin => {
                self.timers.cancel(TimerKind::Settle);
                self.set_phase(Phase::Momentum);
                None
            }
            ScrollEvent::MomentumEnd { offset } => match self.phase {
                Phase::CorrectiveScroll => {
                    log::debug!("swallowing momentum end caused by corrective scroll");
                    self.set_phase(Phase::Idle);
                    None
                }
                Phase::Dragging => None,
                _ => {
                    self.timers.cancel(TimerKind::Settle);
                    self.resolve(offset)
                }
            },
        }
    }

    /// Fires the timers whose deadline has passed.
    ///
    /// Returns the new selected index if the settle timer moved the selection.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if !self.mounted {
            return None;
        }

        if let Some(pending) = self.timers.take_due(TimerKind::Reposition, now) {
            self.command(pending.offset);
        }

        let pending = self.timers.take_due(TimerKind::Settle, now)?;
        match self.phase {
            Phase::Dragging | Phase::Momentum => {
                log::trace!("stale settle timer in {:?}", self.phase);
                None
            }
            _ => self.resolve(pending.offset),
        }
    }

    /// Selects `index` and schedules a scroll to it, without reporting it.
    ///
    /// Out-of-range indices are clamped. A pending settle is cancelled.
    pub fn scroll_to_index(&mut self, index: usize, now: Instant) {
        let index = self.clamp_index(index);
        self.selected = index;

        if self.timers.cancel(TimerKind::Settle) {
            self.set_phase(Phase::Idle);
        }

        if self.mounted {
            let offset = self.offset_for_index(index);
            self.timers
                .schedule(TimerKind::Reposition, now, Duration::ZERO, offset);
        } else {
            self.initial_index = index;
        }
    }

    /// Like [`scroll_to_index`](Self::scroll_to_index), but reports the
    /// selection if it changed.
    ///
    /// Used when the user taps a row.
    pub fn press(&mut self, index: usize, now: Instant) -> Option<usize> {
        if !self.mounted {
            return None;
        }

        let previous = self.selected;
        self.scroll_to_index(index, now);
        (self.selected != previous).then_some(self.selected)
    }

    /// Settle resolution: snaps `offset` to the nearest row.
    ///
    /// Issues a corrective scroll if `offset` is not on a row boundary, and
    /// returns the new index if the selection changed.
    pub fn resolve(&mut self, offset: f32) -> Option<usize> {
        let index = self.target_index(offset);
        let target = self.offset_for_index(index);

        let mut phase = Phase::Idle;
        if (target - offset).abs() > OFFSET_TOLERANCE {
            log::debug!("correcting offset {offset} to {target}");
            if self.command(target) && self.platform.echoes_programmatic_scroll() {
                phase = Phase::CorrectiveScroll;
            }
        }
        self.set_phase(phase);

        if index == self.selected {
            return None;
        }

        log::debug!("selection {} -> {index}", self.selected);
        self.selected = index;
        Some(index)
    }

    /// Row closest to the given offset, clamped to the data source.
    pub fn target_index(&self, offset: f32) -> usize {
        let raw = (offset / self.item_height).round();
        if raw < 0.0 {
            log::trace!("offset {offset} above the first row");
            return 0;
        }
        // `as` saturates, and maps NaN to 0.
        (raw as usize).min(self.len.saturating_sub(1))
    }

    /// Offset that puts `index` in the highlight band.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.item_height
    }

    /// Currently selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last known offset: reported by the surface, or sent to it.
    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// Returns `true` between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `true` if a timer of the given kind is pending.
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.is_pending(kind)
    }

    /// Earliest pending deadline. The host can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns the surface.
    pub fn get_surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable access to the surface.
    pub fn get_surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn clamp_index(&self, index: usize) -> usize {
        let last = self.len.saturating_sub(1);
        if index > last {
            log::warn!("index {index} out of range, clamping to {last}");
            last
        } else {
            index
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::trace!("{:?} -> {phase:?}", self.phase);
            self.phase = phase;
        }
    }

    /// Sends `scroll_to` if the surface is still there.
    fn command(&mut self, offset: f32) -> bool {
        if !self.surface.is_attached() {
            log::warn!("surface detached, dropping scroll to {offset}");
            return false;
        }
        self.surface.scroll_to(offset);
        self.last_offset = offset;
        true
    }
}
