//! Wall-clock time source

/// Wall-clock time in milliseconds since the Unix epoch.
///
/// On WASM this is `Date.now()`. Tests use [`crate::mock::FixedClock`].
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
