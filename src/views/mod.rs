//! Ready-to-use pickers.

mod wheel_picker;

pub use self::wheel_picker::WheelPicker;
