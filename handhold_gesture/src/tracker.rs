// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delta tracker: turn cumulative recognizer values into incremental deltas.
//!
//! Some hosts report a gesture's value relative to where it began (total
//! translation, total scale, total rotation). The composer wants the change
//! since the previous callback instead.
//!
//! ## Usage
//!
//! 1) Call [`DeltaTracker::begin`] when the recognizer reports `Began`.
//! 2) On each `Changed`, pass the cumulative value to [`DeltaTracker::update`]
//!    and forward the returned incremental delta.
//! 3) [`DeltaTracker::total`] reports the cumulative value last seen.
//! 4) Call [`DeltaTracker::end`] on `Ended` or `Cancelled`.
//!
//! ## Minimal example
//!
//! ```
//! use handhold_gesture::{DeltaTracker, GestureDelta};
//!
//! let mut pinch = DeltaTracker::default();
//! pinch.begin(GestureDelta::Ratio(1.0));
//! assert!(pinch.is_tracking());
//!
//! // Host reports 1.5x, then 3.0x since the pinch began.
//! assert_eq!(pinch.update(GestureDelta::Ratio(1.5)), Some(GestureDelta::Ratio(1.5)));
//! assert_eq!(pinch.update(GestureDelta::Ratio(3.0)), Some(GestureDelta::Ratio(2.0)));
//! assert_eq!(pinch.total(), Some(GestureDelta::Ratio(3.0)));
//!
//! pinch.end();
//! assert!(!pinch.is_tracking());
//! ```

use crate::update::GestureDelta;

/// Tracks one gesture's cumulative value between callbacks.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DeltaTracker {
    /// Value at the start of the gesture.
    pub start: Option<GestureDelta>,
    /// Last cumulative value seen.
    pub last: Option<GestureDelta>,
}

impl DeltaTracker {
    /// Start tracking from `origin`, the cumulative value at `Began`.
    ///
    /// Hosts usually report identity here: `Ratio(1.0)`, `Angle(0.0)` or
    /// `Vector(Vec2::ZERO)`.
    pub fn begin(&mut self, origin: GestureDelta) {
        self.start = Some(origin);
        self.last = Some(origin);
    }

    /// Record a new cumulative value and return the change since the last one.
    ///
    /// Returns `None` when not tracking, or when `total` is a different
    /// variant than the values seen so far. A non-positive ratio on either
    /// side also yields `None`.
    pub fn update(&mut self, total: GestureDelta) -> Option<GestureDelta> {
        self.start?;
        let last = self.last?;
        let delta = difference(total, last)?;
        self.last = Some(total);
        Some(delta)
    }

    /// The cumulative value last recorded, if tracking.
    #[must_use]
    pub fn total(&self) -> Option<GestureDelta> {
        self.start.and(self.last)
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` between [`Self::begin`] and [`Self::end`].
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

fn difference(now: GestureDelta, before: GestureDelta) -> Option<GestureDelta> {
    match (now, before) {
        (GestureDelta::None, GestureDelta::None) => Some(GestureDelta::None),
        (GestureDelta::Angle(a), GestureDelta::Angle(b)) => Some(GestureDelta::Angle(a - b)),
        (GestureDelta::Vector(a), GestureDelta::Vector(b)) => Some(GestureDelta::Vector(a - b)),
        (GestureDelta::Ratio(a), GestureDelta::Ratio(b)) if a > 0.0 && b > 0.0 => {
            Some(GestureDelta::Ratio(a / b))
        }
        _ => None,
    }
}
