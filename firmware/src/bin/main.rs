#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::State;
use embassy_usb::Builder;
use static_cell::StaticCell;
use switch_fightstick::{
    switch, usb_config, CommunicationBackend, FgcMode, GpioButtonInput, RawButtons, SwitchBackend,
    UsbHidRegistrar, UsbHidTransport, VendorOutputHandler, BUTTON_COUNT, SOCD_TYPE,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

type Backend = SwitchBackend<
    FgcMode,
    GpioButtonInput<Input<'static>, BUTTON_COUNT>,
    UsbHidTransport<'static>,
>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Switch fight stick starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Buttons (active-low, internal pull-ups) ---
    let buttons = GpioButtonInput::new([
        (RawButtons::LEFT, Input::new(p.PIN_2, Pull::Up)),
        (RawButtons::DOWN, Input::new(p.PIN_3, Pull::Up)),
        (RawButtons::RIGHT, Input::new(p.PIN_4, Pull::Up)),
        (RawButtons::MOD_X, Input::new(p.PIN_5, Pull::Up)),
        (RawButtons::SELECT, Input::new(p.PIN_6, Pull::Up)),
        (RawButtons::START, Input::new(p.PIN_7, Pull::Up)),
        (RawButtons::HOME, Input::new(p.PIN_8, Pull::Up)),
        (RawButtons::C_UP, Input::new(p.PIN_9, Pull::Up)),
        (RawButtons::B, Input::new(p.PIN_10, Pull::Up)),
        (RawButtons::X, Input::new(p.PIN_11, Pull::Up)),
        (RawButtons::Z, Input::new(p.PIN_12, Pull::Up)),
        (RawButtons::R, Input::new(p.PIN_13, Pull::Up)),
        (RawButtons::Y, Input::new(p.PIN_14, Pull::Up)),
        (RawButtons::LBUMPER, Input::new(p.PIN_15, Pull::Up)),
        (RawButtons::LIGHTSHIELD, Input::new(p.PIN_16, Pull::Up)),
        (RawButtons::MIDSHIELD, Input::new(p.PIN_17, Pull::Up)),
        (RawButtons::A, Input::new(p.PIN_18, Pull::Up)),
        (RawButtons::C_DOWN, Input::new(p.PIN_19, Pull::Up)),
    ]);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);
    let usb_config = usb_config(&switch::IDENTITY);

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Register the console descriptor as the HID interface
    let hid_state = HID_STATE.init(State::new());
    let hid = Backend::register_descriptor(UsbHidRegistrar::new(&mut builder, hid_state));

    // Build the USB device
    let usb_device = builder.build();
    let (reader, writer) = hid.split();

    let mut backend: Backend = SwitchBackend::new(
        FgcMode::new(SOCD_TYPE),
        buttons,
        UsbHidTransport::new(writer),
    );
    info!("SOCD policy: {:?}", SOCD_TYPE);

    spawner.spawn(usb_task(usb_device).unwrap());

    let mut vendor_handler = VendorOutputHandler;
    join(
        report_loop(&mut backend),
        reader.run(false, &mut vendor_handler),
    )
    .await;
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Report loop - one Switch report per host poll.
async fn report_loop(backend: &mut Backend) -> ! {
    info!("USB HID configured, sending reports...");

    loop {
        if let Err(e) = backend.send_report().await {
            error!("Report error: {:?}", e);
        }
    }
}
