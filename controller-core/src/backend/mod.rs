//! Communication backends: console-specific report builders.
//!
//! A backend owns the raw input snapshot, the logical output state and the
//! console report, and drives one report per [`CommunicationBackend::send_report`]
//! call.

pub mod switch;

pub use switch::{SwitchBackend, SwitchReport};

use crate::transform::{apply_deadzone, apply_radius};
use crate::transport::TransportError;
use core::future::Future;

/// Strings and IDs presented at USB enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    pub manufacturer: &'static str,
    pub product: &'static str,
    pub serial_number: &'static str,
}

/// Accepts a HID report descriptor during device bring-up.
///
/// Implemented by whatever builds the USB device; the returned value is
/// typically the endpoint the backend will later write through. Consumed on
/// use, so a descriptor is registered at most once per registrar.
pub trait DescriptorRegistrar {
    type Registration;

    fn add_descriptor(self, descriptor: &'static [u8]) -> Self::Registration;
}

/// Per-axis calibration applied before an analog value is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogConfig {
    /// Offset from center treated as no movement.
    pub deadzone: u8,
    /// Stretch the remaining travel back to full scale.
    pub scale_deadzone: bool,
    /// Output radius; 128 leaves the range unchanged.
    pub radius: i32,
}

impl AnalogConfig {
    /// Deadzone removal followed by radius scaling.
    #[inline]
    #[must_use]
    pub fn apply(&self, value: u8) -> u8 {
        apply_radius(
            apply_deadzone(value, self.deadzone, self.scale_deadzone),
            self.radius,
        )
    }
}

/// A console target.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait CommunicationBackend {
    /// HID report descriptor the console expects, matching the reports
    /// [`send_report`](Self::send_report) writes.
    const REPORT_DESCRIPTOR: &'static [u8];

    /// Hand [`REPORT_DESCRIPTOR`](Self::REPORT_DESCRIPTOR) to the USB device
    /// builder.
    ///
    /// Call once during bring-up, before the transport is used.
    fn register_descriptor<R: DescriptorRegistrar>(registrar: R) -> R::Registration
    where
        Self: Sized,
    {
        registrar.add_descriptor(Self::REPORT_DESCRIPTOR)
    }

    /// Run one report cycle: scan, resolve, pack, write.
    ///
    /// Waits on the transport exactly once and writes exactly one report.
    fn send_report(&mut self) -> impl Future<Output = Result<(), TransportError>>;
}
