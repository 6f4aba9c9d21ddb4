//! HID transport trait and error types.

use core::future::Future;

/// Error type for transport operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Endpoint disabled (e.g., USB not configured or unplugged).
    Disabled,
    /// Report larger than the endpoint accepts.
    BufferOverflow,
}

/// The USB HID interrupt endpoint a backend writes reports to.
///
/// Single-buffered: a report may only be written once [`ready`](Self::ready)
/// has completed.
pub trait HidTransport {
    /// Wait until the transport can accept a report.
    ///
    /// Has no timeout: if the host never polls, this never completes.
    fn ready(&mut self) -> impl Future<Output = ()>;

    /// Write one complete report.
    ///
    /// `report_id` 0 means the descriptor declares no report IDs and no
    /// prefix byte is sent.
    fn send_report(
        &mut self,
        report_id: u8,
        report: &[u8],
    ) -> impl Future<Output = Result<(), TransportError>>;
}
