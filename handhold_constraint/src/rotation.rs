// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::policy::{BoundPolicy, Interval};

/// Shapes rotation contributions, in radians.
///
/// `current` is the cumulative rotation before the contribution and
/// `proposed` the additive delta. The returned delta is what gets committed.
pub trait RotationConstraint {
    /// Returns the allowed part of `proposed`.
    fn apply(&self, current: f64, proposed: f64) -> f64;

    /// Delta to commit when a rotate gesture ends. Defaults to no change.
    fn settle(&self, current: f64) -> f64 {
        let _ = current;
        0.0
    }

    /// The rotation to commit after an allowed delta or a settle moved it
    /// from `previous` to `next`.
    ///
    /// Ranges snap a result that ran past a bound by rounding onto the bound.
    /// Defaults to `next`.
    fn bound(&self, previous: f64, next: f64) -> f64 {
        let _ = previous;
        next
    }
}

/// Positions within this many detent steps count as resting on the detent.
const DETENT_EPSILON: f64 = 1e-9;

/// Keeps the cumulative rotation inside `[min, max]`, with optional detents.
///
/// When `detent` is set, a contribution that crosses a multiple of the detent
/// step stops exactly on it. The next contribution starts from the detent and
/// moves freely, so detents never trap a slow gesture.
///
/// ```
/// use core::f64::consts::FRAC_PI_4;
/// use handhold_constraint::{AngleRange, BoundPolicy, RotationConstraint};
///
/// let range = AngleRange::new(-FRAC_PI_4, FRAC_PI_4).with_policy(BoundPolicy::Clamp);
/// let allowed = range.apply(0.5, 1.0);
/// assert!((0.5 + allowed - FRAC_PI_4).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    range: Interval,
    policy: BoundPolicy,
    detent: Option<f64>,
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl AngleRange {
    /// Rotation limited to `[min, max]` radians, clamped.
    ///
    /// Reversed bounds are swapped.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            range: Interval::new(min, max),
            policy: BoundPolicy::Clamp,
            detent: None,
        }
    }

    /// No range limit; useful together with [`Self::with_detent`].
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            range: Interval::FULL,
            policy: BoundPolicy::Clamp,
            detent: None,
        }
    }

    /// Replaces the bound policy.
    #[must_use]
    pub fn with_policy(mut self, policy: BoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stops rotations on every multiple of `step` radians they cross.
    ///
    /// Non-positive or non-finite steps disable detents.
    #[must_use]
    pub fn with_detent(mut self, step: f64) -> Self {
        self.detent = (step.is_finite() && step > 0.0).then_some(step);
        self
    }

    /// Lower bound in radians.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.range.min
    }

    /// Upper bound in radians.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.range.max
    }

    /// The configured policy.
    #[must_use]
    pub fn policy(&self) -> BoundPolicy {
        self.policy
    }

    /// The detent step, if any.
    #[must_use]
    pub fn detent(&self) -> Option<f64> {
        self.detent
    }
}

impl RotationConstraint for AngleRange {
    fn apply(&self, current: f64, proposed: f64) -> f64 {
        let allowed = self.range.constrain(current, proposed, self.policy);
        match self.detent {
            Some(step) => stop_at_detent(current, allowed, step),
            None => allowed,
        }
    }

    fn settle(&self, current: f64) -> f64 {
        self.range.settle(current, self.policy)
    }

    fn bound(&self, previous: f64, next: f64) -> f64 {
        self.range.pin(previous, next, self.policy)
    }
}

fn stop_at_detent(current: f64, delta: f64, step: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let position = current / step;
    let nearest = position.round();
    let on_detent = (position - nearest).abs() < DETENT_EPSILON;
    let next = if delta > 0.0 {
        if on_detent { nearest + 1.0 } else { position.ceil() }
    } else if on_detent {
        nearest - 1.0
    } else {
        position.floor()
    };
    let next = next * step;
    let target = current + delta;
    let crossed = if delta > 0.0 {
        target >= next
    } else {
        target <= next
    };
    if crossed { next - current } else { delta }
}
