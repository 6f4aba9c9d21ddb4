//! Analog axis transforms: deadzone removal, radius scaling and inversion.
//!
//! Every function here operates on an 8-bit axis centered at
//! [`AXIS_CENTER`](crate::AXIS_CENTER) and runs once per axis per report, so
//! they stay allocation-free and branch-light.

use crate::types::AXIS_CENTER;
use fixed::types::I16F16;
use fixed_macro::fixed;

/// Largest signed offset an axis may carry after any transform.
pub const MAX_OFFSET: i16 = 127;

/// Full half-travel of an axis (offset of value 0).
const HALF_TRAVEL: I16F16 = fixed!(128: I16F16);

#[inline]
const fn offset(value: u8) -> i16 {
    value as i16 - AXIS_CENTER as i16
}

#[inline]
const fn recenter(offset: i16) -> u8 {
    let clamped = if offset > MAX_OFFSET {
        MAX_OFFSET
    } else if offset < -MAX_OFFSET {
        -MAX_OFFSET
    } else {
        offset
    };
    (clamped + AXIS_CENTER as i16) as u8
}

/// Remove a symmetric deadzone around center.
///
/// Offsets within `deadzone` of center collapse to exactly
/// [`AXIS_CENTER`](crate::AXIS_CENTER). Outside it the deadzone is subtracted
/// so movement starts right past center instead of jumping by `deadzone`.
///
/// With `scale` set, the remaining travel is stretched by
/// `128 / (128 - deadzone)` so the rim still reaches full deflection, and the
/// result is clamped to [`MAX_OFFSET`]. Without it nothing is clamped.
///
/// ```
/// use controller_core::transform::apply_deadzone;
///
/// assert_eq!(apply_deadzone(133, 11, false), 128);
/// assert_eq!(apply_deadzone(150, 11, false), 139);
/// assert_eq!(apply_deadzone(255, 11, true), 255);
/// ```
#[must_use]
pub fn apply_deadzone(value: u8, deadzone: u8, scale: bool) -> u8 {
    let offset = offset(value);
    let deadzone = i16::from(deadzone);

    if offset.abs() <= deadzone {
        return AXIS_CENTER;
    }

    let post_deadzone = offset - deadzone * offset.signum();
    if !scale {
        // |post_deadzone| < |offset|, so this stays within 0..=255.
        return (post_deadzone + AXIS_CENTER as i16) as u8;
    }

    // deadzone < |offset| <= 128 here, so the divisor is at least 1.
    let factor = HALF_TRAVEL / I16F16::from_num(128 - deadzone);
    let scaled = (I16F16::from_num(post_deadzone) * factor)
        .round()
        .to_num::<i16>();
    recenter(scaled)
}

/// Rescale a centered value by `radius / 128`.
///
/// The magnitude is truncated toward zero and clamped to [`MAX_OFFSET`]; the
/// sign of the input offset is kept.
#[must_use]
pub fn apply_radius(value: u8, radius: i32) -> u8 {
    let offset = i32::from(offset(value));
    let magnitude = (offset.saturating_mul(radius) / 128)
        .unsigned_abs()
        .min(MAX_OFFSET as u32) as i16;
    recenter(magnitude * offset.signum() as i16)
}

/// Mirror a centered value about [`AXIS_CENTER`](crate::AXIS_CENTER).
///
/// Flips the sign convention of an axis; center stays center.
#[inline]
#[must_use]
pub const fn invert_axis(value: u8) -> u8 {
    recenter(-offset(value))
}
