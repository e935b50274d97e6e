use crate::config::{ConfigError, WheelConfig};
use crate::controller::{Phase, SnapController};
use crate::event::{Callback, EventResult, ScrollEvent};
use crate::surface::ScrollSurface;
use crate::view::{LayoutShell, Row, RowStyle};
use crate::with::With;
use std::fmt::Display;
use std::ops::Range;
use std::rc::Rc;
use std::time::Instant;

/// Renders the label of a row: `(value, index, is_selected)`.
type RenderFn<T> = dyn Fn(&T, usize, bool) -> String;

/// Wheel-style picker over a list of values.
///
/// The picker sits between a host scroll surface and the application:
///
/// * the host forwards scroll lifecycle events to [`on_event`], and calls
///   [`poll`] regularly (or at [`next_deadline`]);
/// * the picker snaps the surface onto row boundaries through
///   [`ScrollSurface::scroll_to`];
/// * selection changes come back as callbacks inside the returned
///   [`EventResult`], to be run with [`EventResult::process`].
///
/// [`on_event`]: WheelPicker::on_event
/// [`poll`]: WheelPicker::poll
/// [`next_deadline`]: WheelPicker::next_deadline
///
/// # Examples
///
/// ```rust
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # use std::time::{Duration, Instant};
/// use wheel_picker::{ScrollEvent, WheelConfig, WheelPicker};
///
/// let offsets = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&offsets);
///
/// let config = WheelConfig::new().item_height(60.0).viewport((150.0, 180.0));
/// let mut picker = WheelPicker::new(
///     vec!["1", "2", "3", "4", "5", "6"],
///     config,
///     move |y: f32| sink.borrow_mut().push(y),
/// )
/// .unwrap()
/// .on_value_change(|value, index| println!("picked {value} at {index}"));
///
/// let t0 = Instant::now();
/// picker.mount(t0);
/// picker.on_event(ScrollEvent::BeginDrag, t0).process();
/// picker.on_event(ScrollEvent::EndDrag { offset: 125.0 }, t0).process();
/// picker.poll(t0 + Duration::from_millis(50)).process();
///
/// assert_eq!(picker.selected_index(), 2);
/// assert_eq!(offsets.borrow().last(), Some(&120.0));
/// ```
pub struct WheelPicker<T, S> {
    items: Rc<[T]>,
    config: WheelConfig,
    layout: LayoutShell,
    controller: SnapController<S>,

    render_item: Rc<RenderFn<T>>,
    on_value_change: Option<Rc<dyn Fn(&T, usize)>>,
    on_press: Option<Rc<dyn Fn(&T, usize)>>,
    on_scroll_end_drag: Option<Callback>,
    on_momentum_scroll_end: Option<Callback>,
}

impl<T: Display + 'static, S: ScrollSurface> WheelPicker<T, S> {
    /// Creates a picker labelling rows with their `Display` output.
    pub fn new(items: Vec<T>, config: WheelConfig, surface: S) -> Result<Self, ConfigError> {
        Self::with_render_item(items, config, surface, |value, _, _| value.to_string())
    }
}

impl<T: 'static, S: ScrollSurface> WheelPicker<T, S> {
    /// Creates a picker with a custom row renderer.
    ///
    /// Fails if the configuration is invalid or if `items` is empty.
    pub fn with_render_item<F>(
        items: Vec<T>,
        config: WheelConfig,
        surface: S,
        render_item: F,
    ) -> Result<Self, ConfigError>
    where
        F: 'static + Fn(&T, usize, bool) -> String,
    {
        config.validate()?;
        if items.is_empty() {
            return Err(ConfigError::EmptyDataSource);
        }

        let items: Rc<[T]> = items.into();
        let layout = LayoutShell::new(&config, items.len());
        let controller = SnapController::new(surface, &config, items.len());

        Ok(WheelPicker {
            items,
            config,
            layout,
            controller,
            render_item: Rc::new(render_item),
            on_value_change: None,
            on_press: None,
            on_scroll_end_drag: None,
            on_momentum_scroll_end: None,
        })
    }

    /// Sets the callback run when a settle changes the selection.
    ///
    /// It receives the newly selected value and its index.
    pub fn set_on_value_change<F>(&mut self, cb: F)
    where
        F: 'static + Fn(&T, usize),
    {
        self.on_value_change = Some(Rc::new(cb));
    }

    /// Sets the callback run when a settle changes the selection.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn on_value_change<F>(self, cb: F) -> Self
    where
        F: 'static + Fn(&T, usize),
    {
        self.with(|s| s.set_on_value_change(cb))
    }

    /// Sets the callback run when a row is tapped.
    ///
    /// It receives the tapped value and its index.
    pub fn set_on_press<F>(&mut self, cb: F)
    where
        F: 'static + Fn(&T, usize),
    {
        self.on_press = Some(Rc::new(cb));
    }

    /// Sets the callback run when a row is tapped.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn on_press<F>(self, cb: F) -> Self
    where
        F: 'static + Fn(&T, usize),
    {
        self.with(|s| s.set_on_press(cb))
    }

    /// Sets the callback run on every drag end.
    pub fn set_on_scroll_end_drag<F>(&mut self, cb: F)
    where
        F: 'static + Fn(),
    {
        self.on_scroll_end_drag = Some(Callback::from_fn(cb));
    }

    /// Sets the callback run on every drag end.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn on_scroll_end_drag<F>(self, cb: F) -> Self
    where
        F: 'static + Fn(),
    {
        self.with(|s| s.set_on_scroll_end_drag(cb))
    }

    /// Sets the callback run on every momentum end, including echoes of
    /// corrective scrolls.
    pub fn set_on_momentum_scroll_end<F>(&mut self, cb: F)
    where
        F: 'static + Fn(),
    {
        self.on_momentum_scroll_end = Some(Callback::from_fn(cb));
    }

    /// Sets the callback run on every momentum end.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn on_momentum_scroll_end<F>(self, cb: F) -> Self
    where
        F: 'static + Fn(),
    {
        self.with(|s| s.set_on_momentum_scroll_end(cb))
    }

    /// Replaces the row renderer.
    pub fn set_render_item<F>(&mut self, render_item: F)
    where
        F: 'static + Fn(&T, usize, bool) -> String,
    {
        self.render_item = Rc::new(render_item);
    }

    /// Starts the picker and schedules the scroll to the initial row.
    pub fn mount(&mut self, now: Instant) {
        self.controller.mount(now);
    }

    /// Stops the picker. Pending timers are dropped and nothing is sent to
    /// the surface afterwards.
    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    /// Handles an event from the surface.
    ///
    /// Pass-through notifications come first, then the value change.
    pub fn on_event(&mut self, event: ScrollEvent, now: Instant) -> EventResult {
        if !self.controller.is_mounted() {
            return EventResult::Ignored;
        }

        let passthrough = match event {
            ScrollEvent::EndDrag { .. } => self.on_scroll_end_drag.clone(),
            ScrollEvent::MomentumEnd { .. } => self.on_momentum_scroll_end.clone(),
            _ => None,
        };

        let settled = self.controller.handle(event, now);
        EventResult::Consumed(passthrough).and(self.notify(settled))
    }

    /// Fires due timers.
    pub fn poll(&mut self, now: Instant) -> EventResult {
        let settled = self.controller.poll(now);
        self.notify(settled)
    }

    /// Selects `index` and scrolls to it, without notification.
    ///
    /// Out-of-range indices are clamped.
    pub fn scroll_to_index(&mut self, index: usize, now: Instant) {
        self.controller.scroll_to_index(index, now);
    }

    /// Handles a tap on a row.
    ///
    /// The `on_press` callback runs first with the tapped value. The row is
    /// then selected and scrolled to, and a value change is reported if the
    /// selection moved.
    pub fn press(&mut self, index: usize, now: Instant) -> EventResult {
        if !self.controller.is_mounted() {
            return EventResult::Ignored;
        }

        let last = self.items.len().saturating_sub(1);
        if index > last {
            log::warn!("pressed row {index} out of range, clamping to {last}");
        }
        let index = index.min(last);

        let pressed = self.callback(&self.on_press, index);
        let settled = self.controller.press(index, now);
        pressed.and(self.notify(settled))
    }

    fn notify(&self, settled: Option<usize>) -> EventResult {
        match settled {
            Some(index) => self.callback(&self.on_value_change, index),
            None => EventResult::Ignored,
        }
    }

    /// Wraps `cb` for the value at `index`. Consumed even without a callback.
    fn callback(&self, cb: &Option<Rc<dyn Fn(&T, usize)>>, index: usize) -> EventResult {
        match cb.clone() {
            Some(cb) => {
                let items = Rc::clone(&self.items);
                EventResult::with_cb(move || cb(&items[index], index))
            }
            None => EventResult::consumed(),
        }
    }

    /// Index of the selected row.
    pub fn selected_index(&self) -> usize {
        self.controller.selected()
    }

    /// Value of the selected row.
    pub fn selection(&self) -> &T {
        &self.items[self.controller.selected()]
    }

    /// All values, in row order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The configuration this picker was built with.
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Geometry of the viewport, spacers and highlight band.
    pub fn layout(&self) -> &LayoutShell {
        &self.layout
    }

    /// Current scroll lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    /// Returns the surface.
    pub fn get_surface(&self) -> &S {
        self.controller.get_surface()
    }

    /// Returns a mutable access to the surface.
    pub fn get_surface_mut(&mut self) -> &mut S {
        self.controller.get_surface_mut()
    }

    /// Renders every row.
    pub fn rows(&self) -> Vec<Row> {
        self.rows_in(0..self.items.len())
    }

    /// Renders the rows visible at the last offset reported by the surface.
    pub fn visible_rows(&self) -> Vec<Row> {
        self.rows_in(self.layout.visible_rows(self.controller.last_offset()))
    }

    fn rows_in(&self, range: Range<usize>) -> Vec<Row> {
        let selected = self.controller.selected();
        let theme = self.config.get_theme();
        let emphasis = self.config.get_emphasis();

        self.items[range.clone()]
            .iter()
            .zip(range)
            .map(|(value, index)| {
                let style = RowStyle::for_distance(index.abs_diff(selected), emphasis, theme);
                Row {
                    key: index,
                    top: self.layout.row_top(index),
                    height: self.layout.item_height,
                    label: (self.render_item)(value, index, style.selected),
                    style,
                }
            })
            .collect()
    }
}
