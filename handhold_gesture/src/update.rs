// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use kurbo::{Point, Vec2};

use crate::kind::{GestureKind, GesturePhase};

/// The incremental change carried by a gesture update.
///
/// Deltas are always relative to the previous update of the same gesture,
/// never cumulative since the gesture began.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureDelta {
    /// No change; used by taps and by `Began`/`Ended`/`Cancelled` phases.
    #[default]
    None,
    /// Additive rotation in radians.
    Angle(f64),
    /// Multiplicative scale ratio; `1.0` is no change.
    Ratio(f64),
    /// Additive translation in surface coordinates.
    Vector(Vec2),
}

impl GestureDelta {
    /// Returns `true` if committing this delta would not change anything.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        match *self {
            Self::None => true,
            Self::Angle(a) => a == 0.0,
            Self::Ratio(r) => r == 1.0,
            Self::Vector(v) => v == Vec2::ZERO,
        }
    }

    /// Returns `true` if every component is finite and ratios are positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::None => true,
            Self::Angle(a) => a.is_finite(),
            Self::Ratio(r) => r.is_finite() && r > 0.0,
            Self::Vector(v) => v.is_finite(),
        }
    }

    /// Applies a sensitivity factor.
    ///
    /// Additive deltas are multiplied; ratios are raised to the power of
    /// `factor`, so a factor of `0.5` halves the zoom in log space and a
    /// pinch followed by its inverse still cancels out.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::None => Self::None,
            Self::Angle(a) => Self::Angle(a * factor),
            Self::Ratio(r) => Self::Ratio(r.powf(factor)),
            Self::Vector(v) => Self::Vector(v * factor),
        }
    }
}

/// One normalized event in a gesture's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureUpdate {
    /// Which recognizer produced the update.
    pub kind: GestureKind,
    /// Lifecycle stage.
    pub phase: GesturePhase,
    /// Incremental change since the previous update of this gesture.
    pub delta: GestureDelta,
    /// Number of touches involved.
    pub touch_count: usize,
    /// Centroid of the touches in surface coordinates.
    pub location: Point,
    /// Host timestamp in milliseconds.
    pub timestamp: u64,
}

impl GestureUpdate {
    /// Creates an update with the conventional touch count for `kind`
    /// (two for pinch and rotate, one otherwise), located at the origin.
    #[must_use]
    pub fn new(kind: GestureKind, phase: GesturePhase, delta: GestureDelta) -> Self {
        let touch_count = match kind {
            GestureKind::Pinch | GestureKind::Rotate => 2,
            _ => 1,
        };
        Self {
            kind,
            phase,
            delta,
            touch_count,
            location: Point::ZERO,
            timestamp: 0,
        }
    }

    /// A `Began` update with no delta.
    #[must_use]
    pub fn began(kind: GestureKind) -> Self {
        Self::new(kind, GesturePhase::Began, GestureDelta::None)
    }

    /// A `Changed` update carrying `delta`.
    #[must_use]
    pub fn changed(kind: GestureKind, delta: GestureDelta) -> Self {
        Self::new(kind, GesturePhase::Changed, delta)
    }

    /// An `Ended` update with no delta.
    #[must_use]
    pub fn ended(kind: GestureKind) -> Self {
        Self::new(kind, GesturePhase::Ended, GestureDelta::None)
    }

    /// A `Cancelled` update with no delta.
    #[must_use]
    pub fn cancelled(kind: GestureKind) -> Self {
        Self::new(kind, GesturePhase::Cancelled, GestureDelta::None)
    }

    /// Replaces the touch count.
    #[must_use]
    pub fn with_touches(mut self, touch_count: usize) -> Self {
        self.touch_count = touch_count;
        self
    }

    /// Replaces the location.
    #[must_use]
    pub fn at(mut self, location: Point) -> Self {
        self.location = location;
        self
    }

    /// Replaces the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_deltas() {
        assert!(GestureDelta::None.is_identity());
        assert!(GestureDelta::Ratio(1.0).is_identity());
        assert!(GestureDelta::Angle(0.0).is_identity());
        assert!(GestureDelta::Vector(Vec2::ZERO).is_identity());
        assert!(!GestureDelta::Ratio(1.1).is_identity());
    }

    #[test]
    fn validity_rejects_non_finite_and_non_positive_ratios() {
        assert!(!GestureDelta::Angle(f64::NAN).is_valid());
        assert!(!GestureDelta::Ratio(0.0).is_valid());
        assert!(!GestureDelta::Ratio(-1.0).is_valid());
        assert!(!GestureDelta::Vector(Vec2::new(f64::INFINITY, 0.0)).is_valid());
        assert!(GestureDelta::Ratio(0.5).is_valid());
    }

    #[test]
    fn scaling_is_linear_for_additive_and_power_for_ratio() {
        assert_eq!(GestureDelta::Angle(0.4).scaled(0.5), GestureDelta::Angle(0.2));
        assert_eq!(
            GestureDelta::Vector(Vec2::new(2.0, 4.0)).scaled(0.5),
            GestureDelta::Vector(Vec2::new(1.0, 2.0))
        );
        let GestureDelta::Ratio(r) = GestureDelta::Ratio(4.0).scaled(0.5) else {
            panic!("ratio expected");
        };
        assert!((r - 2.0).abs() < 1e-12, "r = {r}");
    }

    #[test]
    fn constructors_pick_conventional_touch_counts() {
        assert_eq!(GestureUpdate::began(GestureKind::Pinch).touch_count, 2);
        assert_eq!(GestureUpdate::began(GestureKind::Pan).touch_count, 1);
        let u = GestureUpdate::ended(GestureKind::Tap)
            .with_touches(2)
            .at(Point::new(3.0, 4.0))
            .with_timestamp(9);
        assert_eq!(u.touch_count, 2);
        assert_eq!(u.location, Point::new(3.0, 4.0));
        assert_eq!(u.timestamp, 9);
    }
}
