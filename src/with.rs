/// Chainable configuration helper.
///
/// Lets `set_*` methods double as builder methods:
/// `WheelConfig::new().with(|c| c.set_debounce(d))`.
pub trait With: Sized {
    /// Calls the given closure on `self`.
    fn with<F: FnOnce(&mut Self)>(mut self, f: F) -> Self {
        f(&mut self);
        self
    }

    /// Calls the given fallible closure on `self`.
    fn try_with<E, F>(mut self, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        f(&mut self)?;
        Ok(self)
    }
}

impl<T: Sized> With for T {}
