//! Digital buttons wired straight to GPIO pins.

use super::{InputSource, ScanSpeed};
use crate::types::{RawButtons, RawInputState};
use embedded_hal::digital::InputPin;

/// Buttons read from active-low GPIO pins (pressed pulls the pin to ground).
///
/// Scanned at [`ScanSpeed::Fast`]: switches are cheap to read and the most
/// latency-sensitive inputs. A pin that fails to read is reported released.
pub struct GpioButtonInput<P, const N: usize> {
    pins: [(RawButtons, P); N],
}

impl<P: InputPin, const N: usize> GpioButtonInput<P, N> {
    /// Create a source from a pin map.
    #[must_use]
    pub fn new(pins: [(RawButtons, P); N]) -> Self {
        Self { pins }
    }

    /// Flags this source owns.
    #[must_use]
    pub fn mapped_buttons(&self) -> RawButtons {
        self.pins
            .iter()
            .fold(RawButtons::NONE, |acc, (button, _)| acc | *button)
    }
}

impl<P: InputPin, const N: usize> InputSource for GpioButtonInput<P, N> {
    fn scan(&mut self, speed: ScanSpeed, inputs: &mut RawInputState) {
        if speed != ScanSpeed::Fast {
            return;
        }

        for (button, pin) in self.pins.iter_mut() {
            let pressed = match pin.is_low() {
                Ok(low) => low,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Failed to read pin for {:?}", button);
                    false
                }
            };
            inputs.buttons.set(*button, pressed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct MockPin(bool);

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_low_pins_are_pressed() {
        let mut source = GpioButtonInput::new([
            (RawButtons::LEFT, MockPin(false)),
            (RawButtons::RIGHT, MockPin(true)),
            (RawButtons::B, MockPin(false)),
        ]);
        let mut inputs = RawInputState::neutral();
        source.scan(ScanSpeed::Fast, &mut inputs);
        assert_eq!(inputs.buttons, RawButtons::LEFT | RawButtons::B);
    }

    #[test]
    fn test_other_cadences_are_ignored() {
        let mut source = GpioButtonInput::new([(RawButtons::A, MockPin(false))]);
        let mut inputs = RawInputState::neutral();
        source.scan(ScanSpeed::Slow, &mut inputs);
        source.scan(ScanSpeed::Medium, &mut inputs);
        assert!(inputs.buttons.is_empty());
    }

    #[test]
    fn test_release_clears_only_owned_flags() {
        let mut source = GpioButtonInput::new([(RawButtons::A, MockPin(true))]);
        let mut inputs = RawInputState {
            buttons: RawButtons::A | RawButtons::HOME,
            ..RawInputState::neutral()
        };
        source.scan(ScanSpeed::Fast, &mut inputs);
        assert_eq!(inputs.buttons, RawButtons::HOME);
        assert_eq!(source.mapped_buttons(), RawButtons::A);
    }

    #[test]
    fn test_read_errors_report_released() {
        let mut source = GpioButtonInput::new([(RawButtons::START, BrokenPin)]);
        let mut inputs = RawInputState {
            buttons: RawButtons::START,
            ..RawInputState::neutral()
        };
        source.scan(ScanSpeed::Fast, &mut inputs);
        assert!(inputs.buttons.is_empty());
    }
}
