//! Core controller types: RawButtons, RawInputState, Buttons, AnalogStick,
//! LogicalOutputState.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Centered value for every 8-bit stick axis.
pub const AXIS_CENTER: u8 = 128;

/// Generates a `u32` bitfield newtype with the usual set operations.
macro_rules! button_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$flag_meta:meta])* const $flag:ident = $bit:expr; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name(pub u32);

        impl $name {
            $( $(#[$flag_meta])* pub const $flag: Self = Self(1 << $bit); )*

            /// No buttons pressed.
            pub const NONE: Self = Self(0);

            /// Check if the given button(s) are pressed.
            #[inline]
            #[must_use]
            pub const fn contains(self, button: Self) -> bool {
                (self.0 & button.0) == button.0
            }

            /// Check if the given button is pressed (alias for contains).
            #[inline]
            #[must_use]
            pub const fn is_pressed(self, button: Self) -> bool {
                self.contains(button)
            }

            /// Set or clear button(s).
            #[inline]
            pub fn set(&mut self, button: Self, pressed: bool) {
                if pressed {
                    self.0 |= button.0;
                } else {
                    self.0 &= !button.0;
                }
            }

            /// Get the raw bit value.
            #[inline]
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if no buttons are pressed.
            #[inline]
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }
    };
}

button_set! {
    /// Physical button state as sampled from the controller hardware.
    ///
    /// One flag per physical switch. Input sources set these; modes read them.
    ///
    /// # Example
    ///
    /// ```
    /// use controller_core::RawButtons;
    ///
    /// let held = RawButtons::LEFT | RawButtons::MOD_X;
    /// assert!(held.contains(RawButtons::LEFT));
    /// assert!(!held.contains(RawButtons::RIGHT));
    /// ```
    pub struct RawButtons {
        // Left hand
        const L = 0;
        const LEFT = 1;
        const DOWN = 2;
        const RIGHT = 3;
        const MOD_X = 4;
        const MOD_Y = 5;
        // Menu
        const SELECT = 6;
        const START = 7;
        const HOME = 8;
        // Right hand
        const R = 9;
        const Y = 10;
        const LBUMPER = 11;
        const LIGHTSHIELD = 12;
        const B = 13;
        const X = 14;
        const Z = 15;
        const RBUMPER = 16;
        const MIDSHIELD = 17;
        const UP = 18;
        const A = 19;
        // Right thumb C-stick cluster
        const C_LEFT = 20;
        const C_UP = 21;
        const C_DOWN = 22;
        const C_RIGHT = 23;
    }
}

button_set! {
    /// Logical output buttons, independent of any console's bit order.
    pub struct Buttons {
        const A = 0;
        const B = 1;
        const X = 2;
        const Y = 3;
        /// Left shoulder.
        const L = 4;
        /// Right shoulder.
        const R = 5;
        /// Left trigger, digital.
        const ZL = 6;
        /// Right trigger, digital.
        const ZR = 7;
        const SELECT = 8;
        const START = 9;
        const HOME = 10;
        const CAPTURE = 11;
        /// Left stick press.
        const LS = 12;
        /// Right stick press.
        const RS = 13;
        const DPAD_UP = 14;
        const DPAD_DOWN = 15;
        const DPAD_LEFT = 16;
        const DPAD_RIGHT = 17;
    }
}

/// Analog stick with X/Y axes.
///
/// Range: 0-255, centered at [`AXIS_CENTER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogStick {
    pub x: u8,
    pub y: u8,
}

impl AnalogStick {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub const CENTERED: Self = Self {
        x: AXIS_CENTER,
        y: AXIS_CENTER,
    };
}

impl Default for AnalogStick {
    fn default() -> Self {
        Self::CENTERED
    }
}

/// Snapshot of every physical control.
///
/// Overwritten in place by [`InputSource`](crate::InputSource)s each scan;
/// no history is kept.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawInputState {
    pub buttons: RawButtons,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
    pub left_trigger: u8,
    pub right_trigger: u8,
}

impl RawInputState {
    /// Nothing held, sticks centered, triggers released.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: RawButtons::NONE,
            left_stick: AnalogStick::CENTERED,
            right_stick: AnalogStick::CENTERED,
            left_trigger: 0,
            right_trigger: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_pressed(&self, button: RawButtons) -> bool {
        self.buttons.is_pressed(button)
    }
}

/// What the controller is doing, after the active mode has resolved it.
///
/// Written only by an [`InputMode`](crate::InputMode), fully overwritten every
/// cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogicalOutputState {
    pub buttons: Buttons,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
    pub left_trigger: u8,
    pub right_trigger: u8,
}

impl LogicalOutputState {
    /// No buttons, sticks centered, triggers released.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::NONE,
            left_stick: AnalogStick::CENTERED,
            right_stick: AnalogStick::CENTERED,
            left_trigger: 0,
            right_trigger: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_buttons_bitwise_or() {
        let buttons = RawButtons::LEFT | RawButtons::DOWN;
        assert!(buttons.contains(RawButtons::LEFT));
        assert!(buttons.contains(RawButtons::DOWN));
        assert!(!buttons.contains(RawButtons::RIGHT));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::A, true);
        assert!(buttons.is_pressed(Buttons::A));
        buttons.set(Buttons::A, false);
        assert!(!buttons.is_pressed(Buttons::A));
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_raw_flags_are_distinct() {
        let all = [
            RawButtons::L,
            RawButtons::LEFT,
            RawButtons::DOWN,
            RawButtons::RIGHT,
            RawButtons::MOD_X,
            RawButtons::MOD_Y,
            RawButtons::SELECT,
            RawButtons::START,
            RawButtons::HOME,
            RawButtons::R,
            RawButtons::Y,
            RawButtons::LBUMPER,
            RawButtons::LIGHTSHIELD,
            RawButtons::B,
            RawButtons::X,
            RawButtons::Z,
            RawButtons::RBUMPER,
            RawButtons::MIDSHIELD,
            RawButtons::UP,
            RawButtons::A,
            RawButtons::C_LEFT,
            RawButtons::C_UP,
            RawButtons::C_DOWN,
            RawButtons::C_RIGHT,
        ];
        let mut seen = RawButtons::NONE;
        for flag in all {
            assert!((seen & flag).is_empty());
            seen |= flag;
        }
        assert_eq!(seen.raw().count_ones() as usize, all.len());
    }

    #[test]
    fn test_neutral_states_are_centered() {
        let raw = RawInputState::neutral();
        assert!(raw.buttons.is_empty());
        assert_eq!(raw.left_stick, AnalogStick::CENTERED);
        assert_eq!(RawInputState::default(), raw);

        let out = LogicalOutputState::neutral();
        assert_eq!(out.right_stick, AnalogStick::new(128, 128));
        assert_eq!(LogicalOutputState::default(), out);
    }
}
