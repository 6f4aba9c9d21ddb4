//! Input modes: play-style mappings from raw inputs to logical outputs.

mod fgc;

pub use fgc::FgcMode;

use crate::types::{LogicalOutputState, RawInputState};

/// A play-style mapping.
///
/// Implementations own their SOCD pairs and mapping tables, fixed at
/// construction.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputMode {
    /// Apply mode-specific suppression rules, then clean every opposing pair.
    fn handle_socd(&mut self, inputs: &mut RawInputState);

    /// Overwrite every digital field of `outputs` from the cleaned inputs.
    fn update_digital_outputs(&self, inputs: &RawInputState, outputs: &mut LogicalOutputState);

    /// Overwrite every analog field of `outputs` from the cleaned inputs.
    fn update_analog_outputs(&self, inputs: &RawInputState, outputs: &mut LogicalOutputState);

    /// Derive `outputs` from a raw snapshot.
    ///
    /// SOCD cleaning runs exactly once, on a copy, so `inputs` is left as the
    /// sources wrote it.
    fn update_outputs(&mut self, inputs: &RawInputState, outputs: &mut LogicalOutputState) {
        let mut cleaned = *inputs;
        self.handle_socd(&mut cleaned);
        self.update_digital_outputs(&cleaned, outputs);
        self.update_analog_outputs(&cleaned, outputs);
    }
}
