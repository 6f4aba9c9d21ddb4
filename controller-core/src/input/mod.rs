//! Input source trait, scan cadences and a GPIO button source.

mod gpio;

pub use gpio::GpioButtonInput;

use crate::types::RawInputState;

/// How often a class of inputs is sampled within a report cycle.
///
/// Slow and medium sources are scanned before waiting on the transport; fast
/// sources are scanned right before the report is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanSpeed {
    Slow,
    Medium,
    Fast,
}

/// Something that writes physical control state into a [`RawInputState`].
///
/// Sources only touch the fields they own and ignore cadences they are not
/// scanned at.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputSource {
    /// Refresh the fields this source owns if it is scanned at `speed`.
    fn scan(&mut self, speed: ScanSpeed, inputs: &mut RawInputState);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    #[inline]
    fn scan(&mut self, speed: ScanSpeed, inputs: &mut RawInputState) {
        (**self).scan(speed, inputs);
    }
}

impl<A: InputSource, B: InputSource> InputSource for (A, B) {
    #[inline]
    fn scan(&mut self, speed: ScanSpeed, inputs: &mut RawInputState) {
        self.0.scan(speed, inputs);
        self.1.scan(speed, inputs);
    }
}

impl<T: InputSource, const N: usize> InputSource for [T; N] {
    #[inline]
    fn scan(&mut self, speed: ScanSpeed, inputs: &mut RawInputState) {
        for source in self.iter_mut() {
            source.scan(speed, inputs);
        }
    }
}
