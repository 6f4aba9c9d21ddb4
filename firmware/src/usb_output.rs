//! USB HID transport for the console backends.

use controller_core::backend::switch::OUTPUT_REPORT_SIZE;
use controller_core::{DescriptorRegistrar, DeviceIdentity, HidTransport, TransportError};
use defmt::{debug, info};
use embassy_usb::class::hid::{
    HidBootProtocol, HidReaderWriter, HidSubclass, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use heapless::Vec;

/// RP2040 USB driver.
pub type UsbDriver<'d> = embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>;

/// Full-speed interrupt endpoint size; also the largest report we frame.
pub const MAX_PACKET_SIZE: usize = 64;

/// HID endpoint pair created when the descriptor is registered.
pub type HidEndpoints<'d> = HidReaderWriter<'d, UsbDriver<'d>, OUTPUT_REPORT_SIZE, MAX_PACKET_SIZE>;

/// Device configuration carrying the backend's enumeration identity.
#[must_use]
pub fn usb_config(identity: &DeviceIdentity) -> embassy_usb::Config<'static> {
    let mut config = embassy_usb::Config::new(identity.vendor_id, identity.product_id);
    config.manufacturer = Some(identity.manufacturer);
    config.product = Some(identity.product);
    config.serial_number = Some(identity.serial_number);
    config.max_power = 100;
    config.max_packet_size_0 = 64;
    config
}

/// Registers a report descriptor as a HID interface on the USB builder.
pub struct UsbHidRegistrar<'a, 'd> {
    builder: &'a mut Builder<'d, UsbDriver<'d>>,
    state: &'d mut State<'d>,
}

impl<'a, 'd> UsbHidRegistrar<'a, 'd> {
    pub fn new(builder: &'a mut Builder<'d, UsbDriver<'d>>, state: &'d mut State<'d>) -> Self {
        Self { builder, state }
    }
}

impl<'d> DescriptorRegistrar for UsbHidRegistrar<'_, 'd> {
    type Registration = HidEndpoints<'d>;

    fn add_descriptor(self, descriptor: &'static [u8]) -> Self::Registration {
        let config = embassy_usb::class::hid::Config {
            report_descriptor: descriptor,
            request_handler: None,
            poll_ms: 1,
            max_packet_size: MAX_PACKET_SIZE as u16,
            hid_subclass: HidSubclass::No,
            hid_boot_protocol: HidBootProtocol::None,
        };

        debug!("Registering HID descriptor ({} bytes)", descriptor.len());
        HidReaderWriter::new(self.builder, self.state, config)
    }
}

/// USB HID interrupt IN endpoint.
///
/// Wraps an embassy-usb HID writer to send console reports.
pub struct UsbHidTransport<'d> {
    writer: HidWriter<'d, UsbDriver<'d>, MAX_PACKET_SIZE>,
}

impl<'d> UsbHidTransport<'d> {
    /// Create a new transport from the given HID writer.
    #[must_use]
    pub fn new(writer: HidWriter<'d, UsbDriver<'d>, MAX_PACKET_SIZE>) -> Self {
        Self { writer }
    }
}

/// Convert endpoint errors to [`TransportError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `EndpointError` and `TransportError` are defined in external crates).
#[inline]
fn endpoint_error_to_transport_error(e: EndpointError) -> TransportError {
    match e {
        EndpointError::BufferOverflow => TransportError::BufferOverflow,
        _ => TransportError::Disabled,
    }
}

impl HidTransport for UsbHidTransport<'_> {
    async fn ready(&mut self) {
        self.writer.ready().await;
    }

    async fn send_report(&mut self, report_id: u8, report: &[u8]) -> Result<(), TransportError> {
        if report_id == 0 {
            return self
                .writer
                .write(report)
                .await
                .map_err(endpoint_error_to_transport_error);
        }

        let mut framed: Vec<u8, MAX_PACKET_SIZE> = Vec::new();
        framed
            .push(report_id)
            .map_err(|_| TransportError::BufferOverflow)?;
        framed
            .extend_from_slice(report)
            .map_err(|_| TransportError::BufferOverflow)?;
        self.writer
            .write(&framed)
            .await
            .map_err(endpoint_error_to_transport_error)
    }
}

/// HID request handler for the vendor output report.
///
/// The host's output reports are accepted and logged; nothing consumes them.
pub struct VendorOutputHandler;

impl RequestHandler for VendorOutputHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        info!("Host output report {:?}: {=[u8]:02x}", id, data);
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}
