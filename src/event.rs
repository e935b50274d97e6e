//! Scroll lifecycle events and their effects.
//!
//! * The host scroll surface reports what happens to it as [`ScrollEvent`]s.
//! * Each event is given to the picker through `WheelPicker::on_event`.
//!     * If the picker reacts to it, it may return a callback to be run
//!       (a value-change notification, or a pass-through lifecycle hook).
//!     * Callbacks are never run while the picker is borrowed: the host runs
//!       them with [`EventResult::process`].

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Something that happened to the scroll surface.
///
/// Offsets are vertical content offsets, in the same units as the item
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// The user put a finger down and started dragging.
    BeginDrag,

    /// The content offset changed.
    Scroll {
        /// Current content offset.
        offset: f32,
    },

    /// The user lifted their finger.
    EndDrag {
        /// Content offset when the drag ended.
        offset: f32,
    },

    /// The surface started a momentum (fling) animation.
    MomentumBegin,

    /// A momentum animation ended.
    ///
    /// Some surfaces also emit this after a programmatic `scroll_to`.
    MomentumEnd {
        /// Content offset when the animation stopped.
        offset: f32,
    },
}

impl ScrollEvent {
    /// Returns the offset carried by this event, if any.
    pub fn offset(&self) -> Option<f32> {
        match *self {
            ScrollEvent::Scroll { offset }
            | ScrollEvent::EndDrag { offset }
            | ScrollEvent::MomentumEnd { offset } => Some(offset),
            ScrollEvent::BeginDrag | ScrollEvent::MomentumBegin => None,
        }
    }
}

/// Callback is a function that can be triggered by an event.
///
/// It is meant to be stored in the picker and handed back to the host.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wraps the given function into a `Callback` object.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: 'static + Fn(),
    {
        Callback(Rc::new(f))
    }
}

impl Deref for Callback {
    type Target = dyn Fn() + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Answer to an event notification.
///
/// The event can be consumed or ignored.
#[derive(Debug)]
#[must_use]
pub enum EventResult {
    /// The event was ignored (nothing changed).
    Ignored,
    /// The event was consumed. An optional callback to run is attached.
    Consumed(Option<Callback>),
}

impl EventResult {
    /// Convenient method to create `Consumed(Some(f))`
    pub fn with_cb<F>(f: F) -> Self
    where
        F: 'static + Fn(),
    {
        EventResult::Consumed(Some(Callback::from_fn(f)))
    }

    /// Convenient method to create `Consumed(None)`
    pub fn consumed() -> Self {
        EventResult::Consumed(None)
    }

    /// Returns `true` if `self` is `EventResult::Consumed`.
    pub fn is_consumed(&self) -> bool {
        matches!(*self, EventResult::Consumed(_))
    }

    /// Returns `true` if `self` contains a callback.
    pub fn has_callback(&self) -> bool {
        matches!(*self, EventResult::Consumed(Some(_)))
    }

    /// Process this result if it is a callback.
    ///
    /// Does nothing otherwise.
    pub fn process(self) {
        if let EventResult::Consumed(Some(cb)) = self {
            cb();
        }
    }

    /// Returns an event result that combines `self` and `other`.
    ///
    /// Callbacks run in order: `self` first.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (EventResult::Ignored, result) | (result, EventResult::Ignored) => result,
            (EventResult::Consumed(None), EventResult::Consumed(cb))
            | (EventResult::Consumed(cb), EventResult::Consumed(None)) => {
                EventResult::Consumed(cb)
            }
            (EventResult::Consumed(Some(cb1)), EventResult::Consumed(Some(cb2))) => {
                EventResult::with_cb(move || {
                    (cb1)();
                    (cb2)();
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn and_runs_callbacks_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let calls = Rc::clone(&calls);
            EventResult::with_cb(move || calls.borrow_mut().push("a"))
        };
        let b = {
            let calls = Rc::clone(&calls);
            EventResult::with_cb(move || calls.borrow_mut().push("b"))
        };

        let result = EventResult::Ignored.and(a).and(EventResult::consumed()).and(b);
        assert!(result.has_callback());
        result.process();

        assert_eq!(*calls.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn ignored_stays_ignored() {
        let result = EventResult::Ignored.and(EventResult::Ignored);
        assert!(!result.is_consumed());
    }

    #[test]
    fn event_offsets() {
        assert_eq!(ScrollEvent::EndDrag { offset: 12.0 }.offset(), Some(12.0));
        assert_eq!(ScrollEvent::BeginDrag.offset(), None);
    }
}
