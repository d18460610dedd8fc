//! Blocking delay abstraction

/// Blocking millisecond delay
///
/// Used where the device needs time to settle after a register write and
/// no further bus access is allowed until it has.
pub trait DelayMs {
    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
