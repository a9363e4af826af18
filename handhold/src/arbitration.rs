// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which recognizers may run together.

use handhold_gesture::{GestureKind, ManipulationType};

/// Returns `true` if recognizers `a` and `b` may recognize at the same time.
///
/// Pan, pinch and rotate combine freely so a two-finger gesture can move,
/// zoom and turn at once. Taps never run alongside another recognizer.
///
/// ```
/// use handhold::should_recognize_simultaneously;
/// use handhold_gesture::GestureKind;
///
/// assert!(should_recognize_simultaneously(GestureKind::Pinch, GestureKind::Rotate));
/// assert!(!should_recognize_simultaneously(GestureKind::Tap, GestureKind::Pan));
/// ```
#[must_use]
pub fn should_recognize_simultaneously(a: GestureKind, b: GestureKind) -> bool {
    a.is_continuous() && b.is_continuous()
}

/// `(waiting, required)` pairs where `waiting` may only succeed after
/// `required` has failed, for the recognizers in `mask`.
///
/// A single tap waits for the double tap to fail, so the first tap of a
/// double tap is never reported on its own.
pub fn failure_requirements(
    mask: ManipulationType,
) -> impl Iterator<Item = (GestureKind, GestureKind)> {
    mask.contains(ManipulationType::TAPS)
        .then_some((GestureKind::Tap, GestureKind::DoubleTap))
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_pairs_are_simultaneous() {
        for a in GestureKind::ALL {
            for b in GestureKind::ALL {
                let expected = a.is_continuous() && b.is_continuous();
                assert_eq!(
                    should_recognize_simultaneously(a, b),
                    expected,
                    "{a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    fn tap_waits_for_double_tap_only_when_both_installed() {
        let both = failure_requirements(ManipulationType::TAPS).collect::<alloc::vec::Vec<_>>();
        assert_eq!(both, [(GestureKind::Tap, GestureKind::DoubleTap)]);
        assert_eq!(failure_requirements(ManipulationType::TAP).count(), 0);
        assert_eq!(failure_requirements(ManipulationType::DOUBLE_TAP).count(), 0);
        assert_eq!(failure_requirements(ManipulationType::CONTINUOUS).count(), 0);
    }
}
