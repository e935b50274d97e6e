//! Boundary with the host scroll view.
//!
//! The picker only needs one command from the surface (`scroll_to`). Every
//! other signal travels the other way, as [`ScrollEvent`]s.
//!
//! [`ScrollEvent`]: crate::event::ScrollEvent

use std::str::FromStr;

/// A scrollable surface the picker can command.
///
/// Any `FnMut(f32)` is a surface that is always attached:
///
/// ```rust
/// # use wheel_picker::ScrollSurface;
/// let mut last = None;
/// let mut surface = |offset: f32| last = Some(offset);
/// surface.scroll_to(120.0);
/// assert_eq!(last, Some(120.0));
/// ```
pub trait ScrollSurface {
    /// Scrolls the content so that `offset` is at the top of the viewport.
    fn scroll_to(&mut self, offset: f32);

    /// Returns `false` once the underlying view is gone.
    ///
    /// Deferred commands are dropped when this returns `false`.
    fn is_attached(&self) -> bool {
        true
    }
}

impl<F> ScrollSurface for F
where
    F: FnMut(f32),
{
    fn scroll_to(&mut self, offset: f32) {
        self(offset)
    }
}

/// Host platform, as far as scroll behavior is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Programmatic scrolls are followed by a momentum-end event.
    Ios,
    /// Programmatic scrolls do not emit lifecycle events.
    Android,
    /// Any other surface; behaves like `Android`.
    #[default]
    Generic,
}

impl Platform {
    /// Returns `true` if a programmatic `scroll_to` makes the surface emit
    /// a `MomentumEnd` event of its own.
    pub fn echoes_programmatic_scroll(self) -> bool {
        matches!(self, Platform::Ios)
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ios" | "iOS" | "Ios" => Platform::Ios,
            "android" | "Android" => Platform::Android,
            "generic" | "Generic" => Platform::Generic,
            _ => return Err(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ios_echoes() {
        assert!(Platform::Ios.echoes_programmatic_scroll());
        assert!(!Platform::Android.echoes_programmatic_scroll());
        assert!(!Platform::default().echoes_programmatic_scroll());
    }

    #[test]
    fn parse_platform() {
        assert_eq!("iOS".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!("symbian".parse::<Platform>(), Err(()));
    }
}
