//! Leverless fight stick firmware for RP2040.
//!
//! This crate wires the platform-agnostic [`controller_core`] pieces to the
//! RP2040 peripherals: GPIO buttons in, USB HID out, presenting as a HORI
//! Pokken Controller so the Nintendo Switch accepts it without a handshake.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and, once per USB poll:
//! 1. Samples the button GPIOs (active-low, internal pull-ups)
//! 2. Resolves SOCD and maps buttons through the FGC mode
//! 3. Packs and sends the 8-byte Switch report
//!
//! # Hardware Configuration
//!
//! | Button      | GPIO | | Button      | GPIO |
//! |-------------|------|-|-------------|------|
//! | Left        | 2    | | B           | 10   |
//! | Down        | 3    | | X           | 11   |
//! | Right       | 4    | | Z           | 12   |
//! | Mod X (Up)  | 5    | | R           | 13   |
//! | Select      | 6    | | Y           | 14   |
//! | Start       | 7    | | L bumper    | 15   |
//! | Home        | 8    | | Lightshield | 16   |
//! | C-Up        | 9    | | Midshield   | 17   |
//! | A           | 18   | | C-Down      | 19   |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with two concurrent tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Main Task**: Runs the report loop and, joined with it, drains vendor
//!   output reports from the host
//!
//! # Modules
//!
//! - [`usb_output`]: USB HID transport and descriptor registration
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`socd-2ip`**, **`socd-2ip-no-reac`**, **`socd-dir1-priority`**,
//!   **`socd-dir2-priority`**: Left/right SOCD policy (neutral when none is set)

#![no_std]

use controller_core::SocdType;

// Ensure at most one SOCD policy is selected
const SOCD_FEATURES: usize = cfg!(feature = "socd-2ip") as usize
    + cfg!(feature = "socd-2ip-no-reac") as usize
    + cfg!(feature = "socd-dir1-priority") as usize
    + cfg!(feature = "socd-dir2-priority") as usize;
const _: () = assert!(
    SOCD_FEATURES <= 1,
    "Enable at most one `socd-*` feature - they select conflicting SOCD policies"
);

// Re-export core types for convenience
pub use controller_core::{
    backend::switch, CommunicationBackend, FgcMode, GpioButtonInput, RawButtons, SwitchBackend,
    TransportError,
};

pub mod usb_output;

pub use usb_output::{usb_config, UsbHidRegistrar, UsbHidTransport, VendorOutputHandler};

/// Left/right SOCD policy selected at build time.
pub const SOCD_TYPE: SocdType = if cfg!(feature = "socd-2ip") {
    SocdType::SecondInputPriority
} else if cfg!(feature = "socd-2ip-no-reac") {
    SocdType::SecondInputPriorityNoReactivation
} else if cfg!(feature = "socd-dir1-priority") {
    SocdType::Dir1Priority
} else if cfg!(feature = "socd-dir2-priority") {
    SocdType::Dir2Priority
} else {
    SocdType::Neutral
};

/// Number of wired buttons.
pub const BUTTON_COUNT: usize = 18;
