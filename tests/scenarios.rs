//! End-to-end scroll scenarios driven through the public API.
//!
//! Each test builds a picker over six rows of 60 units in a 180-unit
//! viewport, records what the picker sends to the surface, and checks the
//! notifications seen by the application.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use wheel_picker::{Phase, Platform, ScrollEvent, WheelConfig, WheelPicker};

type Shared<T> = Rc<RefCell<Vec<T>>>;

struct Harness {
    picker: WheelPicker<&'static str, Box<dyn FnMut(f32)>>,
    scrolls: Shared<f32>,
    changes: Shared<(String, usize)>,
    t0: Instant,
}

impl Harness {
    fn new(config: WheelConfig) -> Self {
        let scrolls = Shared::<f32>::default();
        let changes = Shared::<(String, usize)>::default();

        let sink = Rc::clone(&scrolls);
        let surface: Box<dyn FnMut(f32)> = Box::new(move |y: f32| sink.borrow_mut().push(y));

        let log = Rc::clone(&changes);
        let picker = WheelPicker::new(vec!["1", "2", "3", "4", "5", "6"], config, surface)
            .unwrap()
            .on_value_change(move |value, index| {
                log.borrow_mut().push((value.to_string(), index))
            });

        Harness {
            picker,
            scrolls,
            changes,
            t0: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn send(&mut self, event: ScrollEvent, ms: u64) {
        let now = self.at(ms);
        self.picker.on_event(event, now).process();
    }

    fn poll(&mut self, ms: u64) {
        let now = self.at(ms);
        self.picker.poll(now).process();
    }

    fn scrolls(&self) -> Vec<f32> {
        self.scrolls.borrow().clone()
    }

    fn changes(&self) -> Vec<(String, usize)> {
        self.changes.borrow().clone()
    }
}

fn config() -> WheelConfig {
    WheelConfig::new().item_height(60.0).viewport((150.0, 180.0))
}

#[test]
fn drag_without_momentum_settles_after_debounce() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);
    assert_eq!(h.scrolls(), vec![0.0]);

    h.send(ScrollEvent::BeginDrag, 0);
    h.send(ScrollEvent::Scroll { offset: 90.0 }, 10);
    h.send(ScrollEvent::EndDrag { offset: 125.0 }, 20);

    h.poll(60);
    assert!(h.changes().is_empty());
    assert_eq!(h.picker.phase(), Phase::SettlePending);

    h.poll(70);
    assert_eq!(h.scrolls(), vec![0.0, 120.0]);
    assert_eq!(h.changes(), vec![("3".to_string(), 2)]);
    assert_eq!(h.picker.selected_index(), 2);
}

#[test]
fn fling_settles_once_on_momentum_end() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::BeginDrag, 0);
    h.send(ScrollEvent::EndDrag { offset: 40.0 }, 20);
    h.send(ScrollEvent::MomentumBegin, 30);

    // The debounce deadline passes while momentum runs.
    h.poll(100);
    assert!(h.changes().is_empty());

    h.send(ScrollEvent::MomentumEnd { offset: 240.0 }, 400);
    assert_eq!(h.changes(), vec![("5".to_string(), 4)]);
    // Already aligned: no corrective scroll.
    assert_eq!(h.scrolls(), vec![0.0]);
    assert_eq!(h.picker.next_deadline(), None);
}

#[test]
fn initial_selection_is_positioned_silently() {
    let mut h = Harness::new(config().selected_index(4));
    assert_eq!(h.picker.selected_index(), 4);

    h.picker.mount(h.t0);
    assert_eq!(h.picker.next_deadline(), Some(h.t0));
    h.poll(0);

    assert_eq!(h.scrolls(), vec![240.0]);
    assert!(h.changes().is_empty());
}

#[test]
fn out_of_range_initial_selection_is_clamped() {
    let mut h = Harness::new(config().selected_index(42));
    h.picker.mount(h.t0);
    h.poll(0);

    assert_eq!(h.picker.selected_index(), 5);
    assert_eq!(h.scrolls(), vec![300.0]);
}

#[test]
fn overscroll_clamps_to_the_edges() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::MomentumEnd { offset: 1000.0 }, 10);
    assert_eq!(h.picker.selected_index(), 5);
    assert_eq!(h.scrolls().last(), Some(&300.0));

    h.send(ScrollEvent::MomentumEnd { offset: -80.0 }, 20);
    assert_eq!(h.picker.selected_index(), 0);
    assert_eq!(h.scrolls().last(), Some(&0.0));

    assert_eq!(
        h.changes(),
        vec![("6".to_string(), 5), ("1".to_string(), 0)]
    );
}

#[test]
fn corrective_scroll_echo_is_swallowed_on_ios() {
    let mut h = Harness::new(config().platform(Platform::Ios));
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::MomentumBegin, 0);
    h.send(ScrollEvent::MomentumEnd { offset: 65.0 }, 200);
    assert_eq!(h.picker.phase(), Phase::CorrectiveScroll);
    assert_eq!(h.scrolls(), vec![0.0, 60.0]);

    // The platform reports the end of the programmatic scroll.
    h.send(ScrollEvent::MomentumEnd { offset: 60.0 }, 400);
    assert_eq!(h.picker.phase(), Phase::Idle);
    assert_eq!(h.scrolls(), vec![0.0, 60.0]);
    assert_eq!(h.changes(), vec![("2".to_string(), 1)]);
}

#[test]
fn settling_twice_on_the_same_offset_is_quiet() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::MomentumEnd { offset: 179.0 }, 10);
    h.send(ScrollEvent::MomentumEnd { offset: 179.0 }, 20);

    assert_eq!(h.changes(), vec![("4".to_string(), 3)]);
    assert_eq!(h.scrolls(), vec![0.0, 180.0, 180.0]);
}

#[test]
fn teardown_drops_pending_settle() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::BeginDrag, 0);
    h.send(ScrollEvent::EndDrag { offset: 125.0 }, 10);
    h.picker.unmount();

    h.poll(500);
    h.send(ScrollEvent::MomentumEnd { offset: 300.0 }, 600);

    assert_eq!(h.scrolls(), vec![0.0]);
    assert!(h.changes().is_empty());
    assert_eq!(h.picker.next_deadline(), None);
}

#[test]
fn programmatic_scroll_interrupts_pending_settle() {
    let mut h = Harness::new(config());
    h.picker.mount(h.t0);
    h.poll(0);

    h.send(ScrollEvent::BeginDrag, 0);
    h.send(ScrollEvent::EndDrag { offset: 125.0 }, 10);
    h.picker.scroll_to_index(1, h.at(20));
    h.poll(100);

    assert_eq!(h.picker.selected_index(), 1);
    assert_eq!(h.scrolls(), vec![0.0, 60.0]);
    assert!(h.changes().is_empty());
}

#[test]
fn config_loaded_from_toml_drives_the_picker() {
    let config = wheel_picker::config::load_toml(
        r##"
        item_height = 60
        viewport_height = 180
        selected_index = 2
        debounce_ms = 100
        platform = "ios"
        "##,
    )
    .unwrap();

    let mut h = Harness::new(config);
    h.picker.mount(h.t0);
    h.poll(0);
    assert_eq!(h.scrolls(), vec![120.0]);

    h.send(ScrollEvent::BeginDrag, 0);
    h.send(ScrollEvent::EndDrag { offset: 170.0 }, 0);
    h.poll(99);
    assert!(h.changes().is_empty());
    h.poll(100);

    assert_eq!(h.changes(), vec![("4".to_string(), 3)]);
    assert_eq!(h.picker.phase(), Phase::CorrectiveScroll);
}

#[test]
fn rendered_window_tracks_the_selected_row() {
    let mut h = Harness::new(config().selected_index(4));
    h.picker.mount(h.t0);
    h.poll(0);

    let visible: Vec<usize> = h.picker.visible_rows().iter().map(|r| r.key).collect();
    assert!(visible.contains(&4), "row 4 not in {visible:?}");

    // A corrective scroll moves the window too, with no echo on Generic.
    h.send(ScrollEvent::MomentumEnd { offset: 70.0 }, 10);
    let visible: Vec<usize> = h.picker.visible_rows().iter().map(|r| r.key).collect();
    assert_eq!(visible, vec![0, 1, 2]);
}

#[test]
fn tap_reports_the_tapped_value() {
    let taps = Shared::<(String, usize)>::default();
    let sink = Rc::clone(&taps);

    let mut h = Harness::new(config());
    h.picker.set_on_press(move |value, index| sink.borrow_mut().push((value.to_string(), index)));
    h.picker.mount(h.t0);
    h.poll(0);

    h.picker.press(3, h.at(10)).process();
    h.poll(10);

    assert_eq!(*taps.borrow(), vec![("4".to_string(), 3)]);
    assert_eq!(h.changes(), vec![("4".to_string(), 3)]);
    assert_eq!(h.scrolls(), vec![0.0, 180.0]);
}
