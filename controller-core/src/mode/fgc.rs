//! Fighting-game layout (PlayStation-style button positions).

use super::InputMode;
use crate::socd::{SocdPair, SocdResolver, SocdType};
use crate::types::{AnalogStick, Buttons, LogicalOutputState, RawButtons, RawInputState};

const SOCD_PAIRS: [SocdPair; 1] = [SocdPair::new(RawButtons::LEFT, RawButtons::RIGHT)];

/// Raw flag to logical button, one entry per mapped output.
const DIGITAL_MAP: [(RawButtons, Buttons); 17] = [
    // Directions; mod_x is the up button.
    (RawButtons::LEFT, Buttons::DPAD_LEFT),
    (RawButtons::RIGHT, Buttons::DPAD_RIGHT),
    (RawButtons::DOWN, Buttons::DPAD_DOWN),
    (RawButtons::MOD_X, Buttons::DPAD_UP),
    // Menu
    (RawButtons::START, Buttons::START),
    (RawButtons::SELECT, Buttons::SELECT),
    (RawButtons::HOME, Buttons::HOME),
    // Right hand bottom row
    (RawButtons::B, Buttons::B),
    (RawButtons::X, Buttons::A),
    (RawButtons::Z, Buttons::ZR),
    (RawButtons::R, Buttons::ZL),
    // Right hand top row
    (RawButtons::LBUMPER, Buttons::Y),
    (RawButtons::Y, Buttons::X),
    (RawButtons::LIGHTSHIELD, Buttons::R),
    (RawButtons::MIDSHIELD, Buttons::L),
    // Right thumb cluster
    (RawButtons::A, Buttons::RS),
    (RawButtons::C_DOWN, Buttons::LS),
];

/// Leverless fighting-game mode.
///
/// Left/right is cleaned with the configured [`SocdType`]. Down yields to
/// up (`mod_x`) and to `c_up`, which gives up-over-down priority on the
/// vertical axis. No analog sticks: all axes report center.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FgcMode {
    socd: SocdResolver<1>,
}

impl FgcMode {
    #[must_use]
    pub const fn new(socd_type: SocdType) -> Self {
        Self {
            socd: SocdResolver::new(socd_type, SOCD_PAIRS),
        }
    }

    #[inline]
    #[must_use]
    pub fn socd_pairs(&self) -> &[SocdPair] {
        self.socd.pairs()
    }
}

impl Default for FgcMode {
    fn default() -> Self {
        Self::new(SocdType::Neutral)
    }
}

impl InputMode for FgcMode {
    fn handle_socd(&mut self, inputs: &mut RawInputState) {
        if inputs.is_pressed(RawButtons::DOWN)
            && (inputs.is_pressed(RawButtons::MOD_X) || inputs.is_pressed(RawButtons::C_UP))
        {
            inputs.buttons.set(RawButtons::DOWN, false);
        }
        self.socd.resolve(inputs);
    }

    fn update_digital_outputs(&self, inputs: &RawInputState, outputs: &mut LogicalOutputState) {
        let mut buttons = Buttons::NONE;
        for &(raw, logical) in &DIGITAL_MAP {
            buttons.set(logical, inputs.is_pressed(raw));
        }
        outputs.buttons = buttons;
    }

    fn update_analog_outputs(&self, _inputs: &RawInputState, outputs: &mut LogicalOutputState) {
        outputs.left_stick = AnalogStick::CENTERED;
        outputs.right_stick = AnalogStick::CENTERED;
        outputs.left_trigger = 0;
        outputs.right_trigger = 0;
    }
}
