//! Simultaneous opposing cardinal direction (SOCD) cleaning.
//!
//! A mode declares which raw flags oppose each other as [`SocdPair`]s and a
//! [`SocdType`] policy. [`SocdResolver`] applies the policy to every pair once
//! per cycle.

use crate::types::{RawButtons, RawInputState};

/// How a pair resolves while both directions are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocdType {
    /// Neither direction is output.
    #[default]
    Neutral,
    /// The most recently pressed direction wins; releasing it gives control
    /// back to the one still held.
    SecondInputPriority,
    /// Like [`SocdType::SecondInputPriority`], but the overridden direction
    /// stays suppressed until it is physically released.
    SecondInputPriorityNoReactivation,
    /// `dir1` always wins.
    Dir1Priority,
    /// `dir2` always wins.
    Dir2Priority,
}

/// Two raw flags that must never be output together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocdPair {
    pub dir1: RawButtons,
    pub dir2: RawButtons,
}

impl SocdPair {
    #[must_use]
    pub const fn new(dir1: RawButtons, dir2: RawButtons) -> Self {
        Self { dir1, dir2 }
    }

    /// A usable pair names exactly one flag per side, and they differ.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.dir1.raw().count_ones() == 1
            && self.dir2.raw().count_ones() == 1
            && self.dir1.raw() != self.dir2.raw()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Direction {
    Dir1,
    Dir2,
}

/// History kept per pair for the priority policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocdState {
    /// Direction that was held alone most recently.
    held_alone: Option<Direction>,
    /// Direction suppressed until released.
    locked_out: Option<Direction>,
}

/// Resolves a fixed list of opposing pairs under one policy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocdResolver<const N: usize> {
    socd_type: SocdType,
    pairs: [SocdPair; N],
    states: [SocdState; N],
}

impl<const N: usize> SocdResolver<N> {
    #[must_use]
    pub const fn new(socd_type: SocdType, pairs: [SocdPair; N]) -> Self {
        Self {
            socd_type,
            pairs,
            states: [SocdState {
                held_alone: None,
                locked_out: None,
            }; N],
        }
    }

    #[inline]
    #[must_use]
    pub const fn socd_type(&self) -> SocdType {
        self.socd_type
    }

    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[SocdPair] {
        &self.pairs
    }

    /// Clean every declared pair in `inputs`, in declaration order.
    pub fn resolve(&mut self, inputs: &mut RawInputState) {
        for (pair, state) in self.pairs.iter().zip(self.states.iter_mut()) {
            let dir1 = inputs.buttons.is_pressed(pair.dir1);
            let dir2 = inputs.buttons.is_pressed(pair.dir2);
            let (out1, out2) = resolve_pair(self.socd_type, dir1, dir2, state);
            inputs.buttons.set(pair.dir1, out1);
            inputs.buttons.set(pair.dir2, out2);
        }
    }
}

fn resolve_pair(socd_type: SocdType, dir1: bool, dir2: bool, state: &mut SocdState) -> (bool, bool) {
    match socd_type {
        SocdType::Neutral => (dir1 && !dir2, dir2 && !dir1),
        SocdType::Dir1Priority => (dir1, dir2 && !dir1),
        SocdType::Dir2Priority => (dir1 && !dir2, dir2),
        SocdType::SecondInputPriority => second_input_priority(dir1, dir2, state),
        SocdType::SecondInputPriorityNoReactivation => {
            // Release clears the lockout on that side.
            match state.locked_out {
                Some(Direction::Dir1) if !dir1 => state.locked_out = None,
                Some(Direction::Dir2) if !dir2 => state.locked_out = None,
                _ => {}
            }

            let (out1, out2) = second_input_priority(dir1, dir2, state);
            if dir1 && dir2 {
                state.locked_out = match (out1, out2) {
                    (false, true) => Some(Direction::Dir1),
                    (true, false) => Some(Direction::Dir2),
                    _ => state.locked_out,
                };
            }

            match state.locked_out {
                Some(Direction::Dir1) => (false, out2),
                Some(Direction::Dir2) => (out1, false),
                None => (out1, out2),
            }
        }
    }
}

fn second_input_priority(dir1: bool, dir2: bool, state: &mut SocdState) -> (bool, bool) {
    match (dir1, dir2) {
        (false, false) => {
            state.held_alone = None;
            (false, false)
        }
        (true, false) => {
            state.held_alone = Some(Direction::Dir1);
            (true, false)
        }
        (false, true) => {
            state.held_alone = Some(Direction::Dir2);
            (false, true)
        }
        (true, true) => match state.held_alone {
            Some(Direction::Dir1) => (false, true),
            Some(Direction::Dir2) => (true, false),
            // Both landed in the same scan.
            None => (false, false),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LR: SocdPair = SocdPair::new(RawButtons::LEFT, RawButtons::RIGHT);
    const DU: SocdPair = SocdPair::new(RawButtons::DOWN, RawButtons::UP);

    fn held(buttons: RawButtons) -> RawInputState {
        RawInputState {
            buttons,
            ..RawInputState::neutral()
        }
    }

    fn step<const N: usize>(resolver: &mut SocdResolver<N>, buttons: RawButtons) -> RawButtons {
        let mut inputs = held(buttons);
        resolver.resolve(&mut inputs);
        inputs.buttons
    }

    #[test]
    fn test_neutral_cancels_both() {
        let mut resolver = SocdResolver::new(SocdType::Neutral, [LR, DU]);
        let out = step(&mut resolver, RawButtons::LEFT | RawButtons::RIGHT | RawButtons::A);
        assert_eq!(out, RawButtons::A);

        let out = step(&mut resolver, RawButtons::UP | RawButtons::DOWN | RawButtons::LEFT);
        assert_eq!(out, RawButtons::LEFT);
    }

    #[test]
    fn test_single_direction_passes_through() {
        for socd_type in [
            SocdType::Neutral,
            SocdType::SecondInputPriority,
            SocdType::SecondInputPriorityNoReactivation,
            SocdType::Dir1Priority,
            SocdType::Dir2Priority,
        ] {
            let mut resolver = SocdResolver::new(socd_type, [LR]);
            assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);
            assert_eq!(step(&mut resolver, RawButtons::NONE), RawButtons::NONE);
            assert_eq!(step(&mut resolver, RawButtons::RIGHT), RawButtons::RIGHT);
        }
    }

    #[test]
    fn test_fixed_priority() {
        let both = RawButtons::LEFT | RawButtons::RIGHT;
        let mut resolver = SocdResolver::new(SocdType::Dir1Priority, [LR]);
        assert_eq!(step(&mut resolver, both), RawButtons::LEFT);
        let mut resolver = SocdResolver::new(SocdType::Dir2Priority, [LR]);
        assert_eq!(step(&mut resolver, both), RawButtons::RIGHT);
    }

    #[test]
    fn test_second_input_priority_reactivates() {
        let both = RawButtons::LEFT | RawButtons::RIGHT;
        let mut resolver = SocdResolver::new(SocdType::SecondInputPriority, [LR]);

        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);
        assert_eq!(step(&mut resolver, both), RawButtons::RIGHT);
        // Still both: the second press keeps winning.
        assert_eq!(step(&mut resolver, both), RawButtons::RIGHT);
        // Releasing right hands control back to left.
        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);
    }

    #[test]
    fn test_second_input_priority_simultaneous_press_is_neutral() {
        let mut resolver = SocdResolver::new(SocdType::SecondInputPriority, [LR]);
        assert_eq!(
            step(&mut resolver, RawButtons::LEFT | RawButtons::RIGHT),
            RawButtons::NONE
        );
    }

    #[test]
    fn test_no_reactivation_locks_out_until_release() {
        let both = RawButtons::LEFT | RawButtons::RIGHT;
        let mut resolver = SocdResolver::new(SocdType::SecondInputPriorityNoReactivation, [LR]);

        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);
        assert_eq!(step(&mut resolver, both), RawButtons::RIGHT);
        // Right released while left is still held: left stays off.
        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::NONE);
        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::NONE);
        // Release and press again.
        assert_eq!(step(&mut resolver, RawButtons::NONE), RawButtons::NONE);
        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);
    }

    #[test]
    fn test_history_forks_only_on_explicit_clone() {
        // Resolves to `()` only when `T: !Copy`; a `Copy` type makes the
        // call ambiguous and fails to compile.
        trait AmbiguousIfCopy<A> {
            fn check() {}
        }
        impl<T: ?Sized> AmbiguousIfCopy<()> for T {}
        impl<T: ?Sized + Copy> AmbiguousIfCopy<u8> for T {}
        <SocdResolver<1> as AmbiguousIfCopy<_>>::check();
        <crate::mode::FgcMode as AmbiguousIfCopy<_>>::check();

        let both = RawButtons::LEFT | RawButtons::RIGHT;
        let mut resolver = SocdResolver::new(SocdType::SecondInputPriority, [LR]);
        assert_eq!(step(&mut resolver, RawButtons::LEFT), RawButtons::LEFT);

        let mut forked = resolver.clone();
        assert_eq!(step(&mut forked, both), RawButtons::RIGHT);
        assert_eq!(step(&mut resolver, both), RawButtons::RIGHT);
    }

    #[test]
    fn test_pairs_are_independent() {
        let mut resolver = SocdResolver::new(SocdType::SecondInputPriority, [LR, DU]);
        assert_eq!(
            step(&mut resolver, RawButtons::LEFT | RawButtons::DOWN),
            RawButtons::LEFT | RawButtons::DOWN
        );
        assert_eq!(
            step(&mut resolver, RawButtons::LEFT | RawButtons::RIGHT | RawButtons::DOWN),
            RawButtons::RIGHT | RawButtons::DOWN
        );
    }

    #[test]
    fn test_well_formed_pairs() {
        assert!(LR.is_well_formed());
        assert!(!SocdPair::new(RawButtons::LEFT, RawButtons::LEFT).is_well_formed());
        assert!(!SocdPair::new(RawButtons::LEFT | RawButtons::UP, RawButtons::RIGHT).is_well_formed());
        assert!(!SocdPair::new(RawButtons::NONE, RawButtons::RIGHT).is_well_formed());
    }
}
