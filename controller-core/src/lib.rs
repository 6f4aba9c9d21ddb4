//! Platform-agnostic input modes, SOCD cleaning and console HID backends.
//!
//! This crate turns a raw snapshot of a controller's physical switches into a
//! console-specific USB HID report without any platform-specific
//! dependencies. It can be used both in embedded `no_std` environments and on
//! host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`RawInputState`], [`LogicalOutputState`], [`Buttons`])
//! - [`socd`]: Opposing-direction cleaning ([`SocdPair`], [`SocdType`], [`SocdResolver`])
//! - [`mode`]: Play-style mappings ([`InputMode`], [`FgcMode`])
//! - [`transform`]: Analog deadzone, radius and inversion
//! - [`hat`]: D-pad to hat switch ([`hat_position`])
//! - [`input`]: Input sources ([`InputSource`], [`ScanSpeed`], [`GpioButtonInput`])
//! - [`transport`]: HID endpoint trait ([`HidTransport`])
//! - [`backend`]: Console report builders ([`CommunicationBackend`], [`SwitchBackend`])
//!
//! # Report cycle
//!
//! Each [`CommunicationBackend::send_report`] call scans slow and medium
//! sources, waits for the transport, scans fast sources, lets the mode resolve
//! SOCD and derive outputs, then packs and writes one report.
//!
//! # Example
//!
//! ```rust
//! use controller_core::{FgcMode, InputMode, LogicalOutputState, RawButtons, RawInputState, Buttons};
//!
//! let mut mode = FgcMode::default();
//! let inputs = RawInputState {
//!     buttons: RawButtons::LEFT | RawButtons::RIGHT | RawButtons::MOD_X,
//!     ..RawInputState::neutral()
//! };
//! let mut outputs = LogicalOutputState::neutral();
//! mode.update_outputs(&inputs, &mut outputs);
//!
//! // Left+right cancels, mod_x is up.
//! assert_eq!(outputs.buttons, Buttons::DPAD_UP);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and cycle tracing (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod hat;
pub mod input;
pub mod mode;
pub mod socd;
pub mod transform;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use backend::{
    AnalogConfig, CommunicationBackend, DescriptorRegistrar, DeviceIdentity, SwitchBackend,
    SwitchReport,
};
pub use hat::{hat_position, Hat};
pub use input::{GpioButtonInput, InputSource, ScanSpeed};
pub use mode::{FgcMode, InputMode};
pub use socd::{SocdPair, SocdResolver, SocdType};
pub use transform::{apply_deadzone, apply_radius, invert_axis};
pub use transport::{HidTransport, TransportError};
pub use types::{AnalogStick, Buttons, LogicalOutputState, RawButtons, RawInputState, AXIS_CENTER};
