//! Presentation helpers: the layout shell and the per-row styles.
//!
//! Both are pure functions of the configuration and of the current
//! selection. The host draws them however it likes.

mod layout;
mod rows;

pub use self::layout::{Band, LayoutShell};
pub use self::rows::{Emphasis, Row, RowStyle};
