// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::policy::{BoundPolicy, Interval};

/// Shapes scale contributions.
///
/// `current` is the cumulative (strictly positive) scale factor and
/// `proposed` the multiplicative ratio. The returned ratio is what gets
/// committed; `1.0` means no change.
pub trait ScaleConstraint {
    /// Returns the allowed ratio.
    fn apply(&self, current: f64, proposed: f64) -> f64;

    /// Ratio to commit when a pinch gesture ends. Defaults to no change.
    fn settle(&self, current: f64) -> f64 {
        let _ = current;
        1.0
    }

    /// The scale to commit after an allowed ratio or a settle moved it from
    /// `previous` to `next`.
    ///
    /// Ranges snap a result that ran past a bound by rounding onto the bound.
    /// Defaults to `next`.
    fn bound(&self, previous: f64, next: f64) -> f64 {
        let _ = previous;
        next
    }
}

/// Keeps the cumulative scale inside `[min, max]`.
///
/// Bounds are evaluated on `ln(scale)`, so the rubber band limit is a log
/// distance and a pinch out followed by the reverse pinch in lands on the
/// same scale.
///
/// ```
/// use handhold_constraint::{BoundPolicy, ScaleConstraint, ScaleRange};
///
/// let range = ScaleRange::new(0.5, 3.0);
/// // A pinch that would reach 5.0 from 2.0 is clamped to 3.0.
/// let ratio = range.apply(2.0, 2.5);
/// assert_eq!(range.bound(2.0, 2.0 * ratio), 3.0);
///
/// let strict = range.with_policy(BoundPolicy::Reject);
/// assert_eq!(strict.apply(2.0, 2.5), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    min: f64,
    max: f64,
    policy: BoundPolicy,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::new(1e-3, 1e3)
    }
}

impl ScaleRange {
    /// Scale limited to `[min, max]`, clamped.
    ///
    /// Reversed bounds are swapped; non-positive or NaN bounds are treated as
    /// open on that side.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let positive = |v: f64, open: f64| if v > 0.0 { v } else { open };
        let (min, max) = (positive(min, 0.0), positive(max, f64::INFINITY));
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            policy: BoundPolicy::Clamp,
        }
    }

    /// Replaces the bound policy.
    #[must_use]
    pub fn with_policy(mut self, policy: BoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The configured policy.
    #[must_use]
    pub fn policy(&self) -> BoundPolicy {
        self.policy
    }

    fn log_range(&self) -> Interval {
        // ln(0) is -inf and ln(inf) is inf, which is the open interval we want.
        Interval::new(self.min.ln(), self.max.ln())
    }
}

impl ScaleConstraint for ScaleRange {
    fn apply(&self, current: f64, proposed: f64) -> f64 {
        if current <= 0.0 || proposed <= 0.0 {
            return 1.0;
        }
        let log = proposed.ln();
        let allowed = self.log_range().constrain(current.ln(), log, self.policy);
        if allowed == log {
            proposed
        } else if allowed == 0.0 {
            1.0
        } else {
            allowed.exp()
        }
    }

    fn settle(&self, current: f64) -> f64 {
        if current <= 0.0 {
            return 1.0;
        }
        self.log_range().settle(current.ln(), self.policy).exp()
    }

    fn bound(&self, previous: f64, next: f64) -> f64 {
        Interval::new(self.min, self.max).pin(previous, next, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_reaches_upper_bound_exactly() {
        let range = ScaleRange::new(0.5, 3.0);
        let ratio = range.apply(1.0, 5.0);
        assert!((ratio - 3.0).abs() < 1e-12, "ratio = {ratio}");
    }

    #[test]
    fn clamp_reaches_lower_bound() {
        let range = ScaleRange::new(0.5, 3.0);
        let ratio = range.apply(1.0, 0.1);
        assert!((ratio - 0.5).abs() < 1e-12, "ratio = {ratio}");
    }

    #[test]
    fn clamped_scale_lands_exactly_on_bound() {
        let range = ScaleRange::new(0.5, 3.0);
        for i in 1..=400 {
            let start = 0.5 + f64::from(i) * 0.00625;
            let end = range.bound(start, start * range.apply(start, 5.0));
            assert_eq!(end, 3.0, "start = {start}");
            let end = range.bound(start, start * range.apply(start, 0.01));
            assert_eq!(end, 0.5, "start = {start}");
        }
    }

    #[test]
    fn accepted_ratio_is_passed_through_unchanged() {
        let range = ScaleRange::new(0.5, 3.0).with_policy(BoundPolicy::Reject);
        assert_eq!(range.apply(1.0, 2.0), 2.0);
        assert_eq!(range.apply(1.0, 1.1), 1.1);
    }

    #[test]
    fn reject_keeps_prior_scale() {
        let range = ScaleRange::new(0.5, 3.0).with_policy(BoundPolicy::Reject);
        assert_eq!(range.apply(1.0, 5.0), 1.0);
        let ratio = range.apply(1.0, 2.0);
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_and_degenerate_bounds() {
        let range = ScaleRange::new(3.0, 0.5);
        assert_eq!((range.min(), range.max()), (0.5, 3.0));
        let open = ScaleRange::new(-1.0, 0.0);
        assert_eq!(open.min(), 0.0);
        assert_eq!(open.max(), f64::INFINITY);
        let ratio = open.apply(1.0, 100.0);
        assert!((ratio - 100.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_inputs_produce_identity() {
        let range = ScaleRange::new(0.5, 3.0);
        assert_eq!(range.apply(1.0, 0.0), 1.0);
        assert_eq!(range.apply(1.0, -2.0), 1.0);
        assert_eq!(range.apply(0.0, 2.0), 1.0);
    }

    #[test]
    fn rubber_band_settles_to_max() {
        let range = ScaleRange::new(0.5, 2.0).with_policy(BoundPolicy::rubber_band(0.5));
        let shown = 1.5 * range.apply(1.5, 4.0);
        assert!(shown > 2.0);
        let settled = range.bound(shown, shown * range.settle(shown));
        assert_eq!(settled, 2.0);
    }
}
