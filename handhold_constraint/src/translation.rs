// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

use crate::policy::{BoundPolicy, Interval};

/// Shapes translation contributions.
///
/// `current` is the cumulative translation of the target and `proposed` the
/// additive delta, both in the target's parent coordinate space.
pub trait TranslationConstraint {
    /// Returns the allowed part of `proposed`.
    fn apply(&self, current: Vec2, proposed: Vec2) -> Vec2;

    /// Delta to commit when a pan gesture ends. Defaults to no change.
    fn settle(&self, current: Vec2) -> Vec2 {
        let _ = current;
        Vec2::ZERO
    }

    /// The translation to commit after an allowed delta or a settle moved it
    /// from `previous` to `next`.
    ///
    /// Bounds snap a component that ran past an edge by rounding onto the
    /// edge. Defaults to `next`.
    fn bound(&self, previous: Vec2, next: Vec2) -> Vec2 {
        let _ = previous;
        next
    }
}

/// Restricts translation to a subset of axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// Both axes move.
    #[default]
    Free,
    /// Only the X component moves.
    Horizontal,
    /// Only the Y component moves.
    Vertical,
}

impl AxisLock {
    fn mask(self, v: Vec2) -> Vec2 {
        match self {
            Self::Free => v,
            Self::Horizontal => Vec2::new(v.x, 0.0),
            Self::Vertical => Vec2::new(0.0, v.y),
        }
    }
}

/// Keeps the cumulative translation inside an optional rectangle.
///
/// Each axis is constrained independently with the same policy, so clamping
/// against a corner slides along the free edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TranslationBounds {
    bounds: Option<Rect>,
    policy: BoundPolicy,
    lock: AxisLock,
}

impl TranslationBounds {
    /// Translation kept inside `bounds` (normalized with [`Rect::abs`]), clamped.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds.abs()),
            policy: BoundPolicy::Clamp,
            lock: AxisLock::Free,
        }
    }

    /// No bounding rectangle; combine with [`Self::with_lock`] for rail movement.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Replaces the bound policy.
    #[must_use]
    pub fn with_policy(mut self, policy: BoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the axis lock.
    #[must_use]
    pub fn with_lock(mut self, lock: AxisLock) -> Self {
        self.lock = lock;
        self
    }

    /// The bounding rectangle, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The configured policy.
    #[must_use]
    pub fn policy(&self) -> BoundPolicy {
        self.policy
    }

    /// The configured axis lock.
    #[must_use]
    pub fn lock(&self) -> AxisLock {
        self.lock
    }

    fn axes(&self) -> (Interval, Interval) {
        match self.bounds {
            Some(r) => (Interval::new(r.x0, r.x1), Interval::new(r.y0, r.y1)),
            None => (Interval::FULL, Interval::FULL),
        }
    }
}

impl TranslationConstraint for TranslationBounds {
    fn apply(&self, current: Vec2, proposed: Vec2) -> Vec2 {
        let proposed = self.lock.mask(proposed);
        let (x, y) = self.axes();
        Vec2::new(
            x.constrain(current.x, proposed.x, self.policy),
            y.constrain(current.y, proposed.y, self.policy),
        )
    }

    fn settle(&self, current: Vec2) -> Vec2 {
        let (x, y) = self.axes();
        Vec2::new(
            x.settle(current.x, self.policy),
            y.settle(current.y, self.policy),
        )
    }

    fn bound(&self, previous: Vec2, next: Vec2) -> Vec2 {
        let (x, y) = self.axes();
        Vec2::new(
            x.pin(previous.x, next.x, self.policy),
            y.pin(previous.y, next.y, self.policy),
        )
    }
}
