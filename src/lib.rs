//! # wheel_picker
//!
//! A headless "wheel" picker: a vertical list of fixed-height rows where the
//! row in the middle of the viewport is selected.
//!
//! The crate does not draw anything. It sits between a host scroll view and
//! the application:
//!
//! * the host reports drags and momentum animations as [`ScrollEvent`]s;
//! * once scrolling stops, the [`SnapController`] rounds the offset to the
//!   nearest row and tells the surface to [`scroll_to`] that row boundary;
//! * selection changes are reported through callbacks;
//! * the [`view`] module computes the layout (spacers, highlight band) and the
//!   style of each row, for the host to render.
//!
//! [`scroll_to`]: ScrollSurface::scroll_to
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use wheel_picker::{ScrollEvent, WheelConfig, WheelPicker};
//!
//! let config = WheelConfig::new().item_height(60.0).viewport((150.0, 180.0));
//! let mut picker = WheelPicker::new(
//!     vec!["Short", "Medium", "Long"],
//!     config,
//!     |offset: f32| println!("scroll to {offset}"),
//! )
//! .unwrap()
//! .on_value_change(|value, _| println!("You will wait for {value}"));
//!
//! let now = Instant::now();
//! picker.mount(now);
//!
//! // A fling that stops between the second and third rows.
//! picker.on_event(ScrollEvent::BeginDrag, now).process();
//! picker.on_event(ScrollEvent::EndDrag { offset: 40.0 }, now).process();
//! picker.on_event(ScrollEvent::MomentumBegin, now).process();
//! picker
//!     .on_event(ScrollEvent::MomentumEnd { offset: 80.0 }, now + Duration::from_millis(300))
//!     .process();
//!
//! assert_eq!(*picker.selection(), "Medium");
//! ```
#![deny(missing_docs)]

pub mod config;
pub mod controller;
pub mod event;
pub mod logger;
pub mod surface;
pub mod theme;
pub mod timer;
pub mod view;
pub mod views;

mod with;
mod xy;

pub use self::config::{ConfigError, WheelConfig};
pub use self::controller::{Phase, SnapController};
pub use self::event::{Callback, EventResult, ScrollEvent};
pub use self::surface::{Platform, ScrollSurface};
pub use self::views::WheelPicker;
pub use self::with::With;
pub use self::xy::{Size, XY};
