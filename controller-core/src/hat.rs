//! D-pad to HID hat switch resolution.

/// HID hat switch position.
///
/// Values follow the HID convention: north is 0, increasing clockwise, with
/// [`Hat::Centered`] as the out-of-range null state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    #[default]
    Centered = 8,
}

impl Hat {
    /// Wire value of this position (low nibble of the hat byte).
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Resolve four directional flags into a hat position.
///
/// Opposing directions held together cancel: left+right contributes no
/// horizontal component and up+down no vertical one. Diagonals only come from
/// exactly one horizontal plus exactly one vertical direction.
///
/// ```
/// use controller_core::{hat_position, Hat};
///
/// assert_eq!(hat_position(false, true, false, true), Hat::UpRight);
/// assert_eq!(hat_position(true, true, true, false), Hat::Down);
/// ```
#[must_use]
pub const fn hat_position(left: bool, right: bool, down: bool, up: bool) -> Hat {
    let horizontal = right as i8 - left as i8;
    let vertical = up as i8 - down as i8;

    match (horizontal, vertical) {
        (0, 0) => Hat::Centered,
        (0, 1) => Hat::Up,
        (1, 1) => Hat::UpRight,
        (1, 0) => Hat::Right,
        (1, -1) => Hat::DownRight,
        (0, -1) => Hat::Down,
        (-1, -1) => Hat::DownLeft,
        (-1, 0) => Hat::Left,
        _ => Hat::UpLeft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinals() {
        assert_eq!(hat_position(false, true, false, false), Hat::Right);
        assert_eq!(hat_position(true, false, false, false), Hat::Left);
        assert_eq!(hat_position(false, false, true, false), Hat::Down);
        assert_eq!(hat_position(false, false, false, true), Hat::Up);
        assert_eq!(hat_position(false, false, false, false), Hat::Centered);
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(hat_position(false, true, false, true), Hat::UpRight);
        assert_eq!(hat_position(false, true, true, false), Hat::DownRight);
        assert_eq!(hat_position(true, false, true, false), Hat::DownLeft);
        assert_eq!(hat_position(true, false, false, true), Hat::UpLeft);
    }

    #[test]
    fn test_opposing_directions_cancel() {
        assert_eq!(hat_position(true, true, false, false), Hat::Centered);
        assert_eq!(hat_position(true, true, false, true), Hat::Up);
        assert_eq!(hat_position(true, true, true, false), Hat::Down);
        assert_eq!(hat_position(false, false, true, true), Hat::Centered);
        assert_eq!(hat_position(false, true, true, true), Hat::Right);
        assert_eq!(hat_position(true, false, true, true), Hat::Left);
        assert_eq!(hat_position(true, true, true, true), Hat::Centered);
    }

    #[test]
    fn test_codes_fit_in_a_nibble() {
        for bits in 0..16u8 {
            let hat = hat_position(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            assert!(hat.code() <= 8);
        }
        assert_eq!(Hat::Centered.code(), 8);
        assert_eq!(Hat::UpLeft.code(), 7);
    }
}
