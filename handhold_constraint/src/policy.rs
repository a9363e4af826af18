// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a constraint treats a contribution that would leave its allowed range.
///
/// The policy is shared by [`crate::AngleRange`], [`crate::ScaleRange`] and
/// [`crate::TranslationBounds`]. Every policy is evaluated on a single scalar
/// coordinate (radians, log-scale, or one translation component).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum BoundPolicy {
    /// Cap the resulting value at the nearest bound.
    #[default]
    Clamp,
    /// Drop the whole contribution when the result would leave the range.
    Reject,
    /// Let the value travel past a bound with progressively stronger damping.
    ///
    /// The overshoot `x` past a bound is displayed as
    /// `limit * coefficient * x / (coefficient * x + limit)`, which starts with
    /// slope `coefficient` and never reaches `limit`. The curve is inverted
    /// before each contribution is added, so reversing a gesture retraces the
    /// same values.
    RubberBand {
        /// Asymptotic maximum overshoot, in the coordinate of the constrained axis.
        limit: f64,
        /// Initial damping slope; `0.55` matches common platform scroll views.
        coefficient: f64,
    },
}

impl BoundPolicy {
    /// Rubber band with the conventional `0.55` coefficient.
    #[must_use]
    pub fn rubber_band(limit: f64) -> Self {
        Self::RubberBand {
            limit,
            coefficient: 0.55,
        }
    }
}

/// A closed scalar interval with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Interval {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Interval {
    /// Unbounded interval.
    pub(crate) const FULL: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Builds an interval, swapping the ends when given in reverse and
    /// replacing NaN ends with the matching infinity.
    pub(crate) fn new(a: f64, b: f64) -> Self {
        let a = if a.is_nan() { f64::NEG_INFINITY } else { a };
        let b = if b.is_nan() { f64::INFINITY } else { b };
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Distance from `value` to the interval (zero inside).
    fn excess(self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }

    /// Returns the part of `delta` allowed under `policy`, starting at `current`.
    ///
    /// A value that already lies outside the interval is never pushed further
    /// out and never pulled back in by a contribution.
    pub(crate) fn constrain(self, current: f64, delta: f64, policy: BoundPolicy) -> f64 {
        if !delta.is_finite() || !current.is_finite() {
            return 0.0;
        }
        if delta == 0.0 {
            return 0.0;
        }
        let target = current + delta;
        match policy {
            BoundPolicy::Clamp => {
                let lo = self.min.min(current);
                let hi = self.max.max(current);
                target.max(lo).min(hi) - current
            }
            BoundPolicy::Reject => {
                let excess = self.excess(target);
                if excess == 0.0 || excess < self.excess(current) {
                    delta
                } else {
                    0.0
                }
            }
            BoundPolicy::RubberBand { limit, coefficient } => {
                let band = Band::new(limit, coefficient);
                let raw = self.unband(current, band) + delta;
                self.band(raw, band) - current
            }
        }
    }

    /// Delta that brings a value resting outside the interval back to it.
    ///
    /// Only the rubber band policy rests outside its range, the others settle
    /// in place.
    pub(crate) fn settle(self, current: f64, policy: BoundPolicy) -> f64 {
        match policy {
            BoundPolicy::RubberBand { .. } if current.is_finite() => {
                current.max(self.min).min(self.max) - current
            }
            _ => 0.0,
        }
    }

    /// Snaps `next` onto a bound it ran past by rounding.
    ///
    /// Under clamp and reject a value that moved from inside the interval to
    /// beyond a bound lands exactly on it. Under every policy a value within
    /// rounding distance of a bound is snapped onto it, so a rubber band settles
    /// exactly on its bound.
    pub(crate) fn pin(self, previous: f64, next: f64, policy: BoundPolicy) -> f64 {
        if !next.is_finite() {
            return next;
        }
        let capped = !matches!(policy, BoundPolicy::RubberBand { .. });
        if near(next, self.max) || (capped && previous <= self.max && next > self.max) {
            self.max
        } else if near(next, self.min) || (capped && previous >= self.min && next < self.min) {
            self.min
        } else {
            next
        }
    }

    fn band(self, raw: f64, band: Band) -> f64 {
        if raw > self.max {
            self.max + band.damp(raw - self.max)
        } else if raw < self.min {
            self.min - band.damp(self.min - raw)
        } else {
            raw
        }
    }

    fn unband(self, value: f64, band: Band) -> f64 {
        if value > self.max {
            self.max + band.undamp(value - self.max)
        } else if value < self.min {
            self.min - band.undamp(self.min - value)
        } else {
            value
        }
    }
}

/// Relative distance, in units of `f64::EPSILON`, treated as rounding error.
const SNAP_ULPS: f64 = 64.0;

/// Whether `value` is within rounding distance of a finite `bound`.
fn near(value: f64, bound: f64) -> bool {
    bound.is_finite() && (value - bound).abs() <= SNAP_ULPS * f64::EPSILON * bound.abs()
}

#[derive(Clone, Copy, Debug)]
struct Band {
    limit: f64,
    coefficient: f64,
}

impl Band {
    fn new(limit: f64, coefficient: f64) -> Self {
        let limit = if limit.is_finite() && limit > 0.0 {
            limit
        } else {
            f64::MIN_POSITIVE
        };
        let coefficient = if coefficient.is_finite() && coefficient > 0.0 {
            coefficient
        } else {
            0.55
        };
        Self { limit, coefficient }
    }

    fn damp(self, overshoot: f64) -> f64 {
        let scaled = self.coefficient * overshoot;
        self.limit * scaled / (scaled + self.limit)
    }

    fn undamp(self, shown: f64) -> f64 {
        // Values at or past the asymptote come from a policy swap; pin them
        // just inside so the inverse stays finite.
        let shown = shown.min(self.limit * (1.0 - 1e-9));
        shown * self.limit / (self.coefficient * (self.limit - shown))
    }
}
