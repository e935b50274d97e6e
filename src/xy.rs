/// A value for each axis.
///
/// Used for viewport metrics, which the picker receives from its host
/// rather than looking them up itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY<T> {
    /// Horizontal value (width).
    pub x: T,
    /// Vertical value (height).
    pub y: T,
}

impl<T> XY<T> {
    /// Creates a new `XY` from the given values.
    pub fn new(x: T, y: T) -> Self {
        XY { x, y }
    }

    /// Creates a new `XY` by applying `f` to x and y.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wheel_picker::XY;
    /// let size = XY::new(150.0f32, 180.0);
    /// assert_eq!(size.map(|v| v / 2.0), XY::new(75.0, 90.0));
    /// ```
    pub fn map<U, F>(self, f: F) -> XY<U>
    where
        F: Fn(T) -> U,
    {
        XY::new(f(self.x), f(self.y))
    }

    /// Returns a new `XY` by calling `f` on `self` and `other` for each axis.
    pub fn zip_map<U, V, F>(self, other: XY<U>, f: F) -> XY<V>
    where
        F: Fn(T, U) -> V,
    {
        XY::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Destructure into `(x, y)`.
    pub fn pair(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl XY<bool> {
    /// Returns `true` if both `x` and `y` are `true`.
    pub fn both(self) -> bool {
        self.x && self.y
    }
}

impl<T> From<(T, T)> for XY<T> {
    fn from((x, y): (T, T)) -> Self {
        XY::new(x, y)
    }
}

/// Viewport dimensions in host layout units.
pub type Size = XY<f32>;

impl Size {
    /// Returns `true` if both dimensions are finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.map(|v| v.is_finite() && v > 0.0).both()
    }
}

#[cfg(test)]
mod tests {
    use super::{Size, XY};

    #[test]
    fn from_tuple() {
        let size: Size = (150.0, 300.0).into();
        assert_eq!(size.pair(), (150.0, 300.0));
    }

    #[test]
    fn positive_sizes() {
        assert!(Size::new(1.0, 1.0).is_positive());
        assert!(!Size::new(0.0, 1.0).is_positive());
        assert!(!Size::new(10.0, f32::NAN).is_positive());
        assert!(!Size::new(f32::INFINITY, 10.0).is_positive());
    }

    #[test]
    fn zip_map_combines_axes() {
        let a = XY::new(1, 2);
        let b = XY::new(10, 20);
        assert_eq!(a.zip_map(b, |a, b| a + b), XY::new(11, 22));
    }
}
