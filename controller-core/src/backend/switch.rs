//! Nintendo Switch backend (HORI Pokken Controller profile).
//!
//! The Switch accepts this wired controller without a handshake, so the
//! report is a plain 8-byte HID gamepad report:
//!
//! | Byte | Content |
//! |------|---------|
//! | 0-1  | Button bits, little-endian (Y B A X L R ZL ZR - + L3 R3 Home Capture, 2 reserved) |
//! | 2    | Hat switch in the low nibble, high nibble reserved |
//! | 3-6  | LX, LY, RX, RY (0-255, 128 centered, Y down-positive) |
//! | 7    | Vendor byte (always 0) |

use super::{AnalogConfig, CommunicationBackend, DeviceIdentity};
use crate::hat::{hat_position, Hat};
use crate::input::{InputSource, ScanSpeed};
use crate::mode::InputMode;
use crate::transform::invert_axis;
use crate::transport::{HidTransport, TransportError};
use crate::types::{Buttons, LogicalOutputState, RawInputState, AXIS_CENTER};

/// Enumeration identity the console expects.
pub const IDENTITY: DeviceIdentity = DeviceIdentity {
    vendor_id: 0x0F0D,
    product_id: 0x0092,
    manufacturer: "HORI CO.,LTD.",
    product: "POKKEN CONTROLLER",
    serial_number: "1.0",
};

/// The descriptor declares no report IDs.
pub const REPORT_ID: u8 = 0;

/// Deadzone and radius applied to every stick axis.
pub const ANALOG_CONFIG: AnalogConfig = AnalogConfig {
    deadzone: 11,
    scale_deadzone: true,
    radius: 256,
};

/// HID report descriptor for the Pokken Controller layout.
///
/// A `static` so every registration hands out the same bytes.
pub static REPORT_DESCRIPTOR: [u8; 86] = [
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Buttons (16 buttons) ---
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x35, 0x00, //   Physical Minimum (0)
    0x45, 0x01, //   Physical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x10, //   Report Count (16)
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Hat switch (4 bits) ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x25, 0x07, //   Logical Maximum (7)
    0x46, 0x3B, 0x01, //   Physical Maximum (315)
    0x75, 0x04, //   Report Size (4)
    0x95, 0x01, //   Report Count (1)
    0x65, 0x14, //   Unit (Degrees)
    0x09, 0x39, //   Usage (Hat Switch)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    //
    // --- Padding (4 bits) ---
    0x65, 0x00, //   Unit (None)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant, Array, Absolute)
    //
    // --- Sticks (4 axes, 0-255) ---
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x46, 0xFF, 0x00, //   Physical Maximum (255)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Vendor input (1 byte) ---
    0x06, 0x00, 0xFF, //   Usage Page (Vendor Defined 0xFF00)
    0x09, 0x20, //   Usage (0x20)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Vendor output (8 bytes, host to device) ---
    0x0A, 0x21, 0x26, //   Usage (0x2621)
    0x95, 0x08, //   Report Count (8)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

/// Size of a vendor output report sent by the host.
pub const OUTPUT_REPORT_SIZE: usize = 8;

/// Logical button to Switch report bit.
const BUTTON_MAP: [(Buttons, u16); 14] = [
    (Buttons::Y, 1 << 0),
    (Buttons::B, 1 << 1),
    (Buttons::A, 1 << 2),
    (Buttons::X, 1 << 3),
    (Buttons::L, 1 << 4),
    (Buttons::R, 1 << 5),
    (Buttons::ZL, 1 << 6),
    (Buttons::ZR, 1 << 7),
    (Buttons::SELECT, 1 << 8), // Minus
    (Buttons::START, 1 << 9),  // Plus
    (Buttons::LS, 1 << 10),
    (Buttons::RS, 1 << 11),
    (Buttons::HOME, 1 << 12),
    (Buttons::CAPTURE, 1 << 13),
];

/// Switch input report.
///
/// Matches [`REPORT_DESCRIPTOR`] byte for byte once serialized with
/// [`as_bytes`](Self::as_bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchReport {
    /// Button bitfield, bit 0 = Y.
    pub buttons: u16,
    pub hat: Hat,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
    pub vendor: u8,
}

impl SwitchReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 8;

    /// Nothing pressed, sticks centered.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: 0,
            hat: Hat::Centered,
            lx: AXIS_CENTER,
            ly: AXIS_CENTER,
            rx: AXIS_CENTER,
            ry: AXIS_CENTER,
            vendor: 0,
        }
    }

    /// Overwrite every field from a logical output state.
    pub fn update(&mut self, outputs: &LogicalOutputState, analog: &AnalogConfig) {
        let mut buttons = 0u16;
        for &(logical, bit) in &BUTTON_MAP {
            if outputs.buttons.is_pressed(logical) {
                buttons |= bit;
            }
        }

        *self = Self {
            buttons,
            hat: hat_position(
                outputs.buttons.is_pressed(Buttons::DPAD_LEFT),
                outputs.buttons.is_pressed(Buttons::DPAD_RIGHT),
                outputs.buttons.is_pressed(Buttons::DPAD_DOWN),
                outputs.buttons.is_pressed(Buttons::DPAD_UP),
            ),
            lx: analog.apply(outputs.left_stick.x),
            // Switch Y axes grow downward.
            ly: invert_axis(analog.apply(outputs.left_stick.y)),
            rx: analog.apply(outputs.right_stick.x),
            ry: invert_axis(analog.apply(outputs.right_stick.y)),
            vendor: 0,
        };
    }

    /// Serialize to the wire layout.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let buttons_bytes = self.buttons.to_le_bytes();
        [
            buttons_bytes[0],
            buttons_bytes[1],
            self.hat.code() & 0x0F,
            self.lx,
            self.ly,
            self.rx,
            self.ry,
            self.vendor,
        ]
    }
}

impl Default for SwitchReport {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Switch backend.
///
/// Owns the active mode `M`, the input sources `S` and the HID transport `T`,
/// plus the state reused across cycles.
pub struct SwitchBackend<M, S, T> {
    mode: M,
    sources: S,
    transport: T,
    analog: AnalogConfig,
    inputs: RawInputState,
    outputs: LogicalOutputState,
    report: SwitchReport,
}

impl<M: InputMode, S: InputSource, T: HidTransport> SwitchBackend<M, S, T> {
    /// Create a backend with the default Switch analog calibration.
    pub fn new(mode: M, sources: S, transport: T) -> Self {
        Self {
            mode,
            sources,
            transport,
            analog: ANALOG_CONFIG,
            inputs: RawInputState::neutral(),
            outputs: LogicalOutputState::neutral(),
            report: SwitchReport::neutral(),
        }
    }

    /// Replace the stick calibration.
    #[must_use]
    pub fn with_analog_config(mut self, analog: AnalogConfig) -> Self {
        self.analog = analog;
        self
    }

    #[inline]
    fn scan_inputs(&mut self, speed: ScanSpeed) {
        self.sources.scan(speed, &mut self.inputs);
    }

    /// Latest raw snapshot.
    pub fn inputs(&self) -> &RawInputState {
        &self.inputs
    }

    /// Output state of the last cycle.
    pub fn outputs(&self) -> &LogicalOutputState {
        &self.outputs
    }

    /// Report sent in the last cycle.
    pub fn report(&self) -> &SwitchReport {
        &self.report
    }

    pub fn analog_config(&self) -> &AnalogConfig {
        &self.analog
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Decompose the backend into its mode, sources and transport.
    pub fn into_parts(self) -> (M, S, T) {
        (self.mode, self.sources, self.transport)
    }
}

impl<M: InputMode, S: InputSource, T: HidTransport> CommunicationBackend
    for SwitchBackend<M, S, T>
{
    const REPORT_DESCRIPTOR: &'static [u8] = &REPORT_DESCRIPTOR;

    async fn send_report(&mut self) -> Result<(), TransportError> {
        self.scan_inputs(ScanSpeed::Slow);
        self.scan_inputs(ScanSpeed::Medium);

        self.transport.ready().await;

        // Sampled as late as possible.
        self.scan_inputs(ScanSpeed::Fast);

        self.mode.update_outputs(&self.inputs, &mut self.outputs);
        self.report.update(&self.outputs, &self.analog);

        #[cfg(feature = "defmt")]
        defmt::trace!("Switch report: {:?}", self.report);

        let result = self
            .transport
            .send_report(REPORT_ID, &self.report.as_bytes())
            .await;

        #[cfg(feature = "defmt")]
        if let Err(e) = result {
            defmt::warn!("Switch report not sent: {:?}", e);
        }

        result
    }
}
