// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handhold_constraint --heading-base-level=0

//! Handhold Constraint: per-axis shaping of manipulation deltas.
//!
//! A constraint maps a proposed contribution plus the current cumulative
//! value to the contribution that is actually committed. There is one trait
//! per manipulation axis:
//!
//! - [`RotationConstraint`]: additive radians.
//! - [`ScaleConstraint`]: multiplicative ratios (`1.0` is no change).
//! - [`TranslationConstraint`]: additive [`kurbo::Vec2`] offsets.
//!
//! Constraints are pure: `apply` takes `&self`, holds no mutable state and
//! returns the same result for the same inputs. That lets a manipulator share
//! them behind `Rc` and swap them between contributions.
//!
//! Adding the allowed contribution to the current value can overshoot a
//! bound by a rounding error, so the committed value goes through `bound`,
//! which snaps it exactly onto the bound it reached.
//!
//! ## Provided constraints
//!
//! - [`AngleRange`]: rotation range with optional detents.
//! - [`ScaleRange`]: minimum / maximum scale, evaluated in log space.
//! - [`TranslationBounds`]: bounding rectangle with optional [`AxisLock`].
//!
//! Each one takes a [`BoundPolicy`]: clamp at the bound, reject the whole
//! contribution, or rubber-band past it with damping. Rubber-banded values
//! are brought back by `settle` when the gesture ends.
//!
//! ```rust
//! use handhold_constraint::{BoundPolicy, ScaleConstraint, ScaleRange};
//!
//! let zoom = ScaleRange::new(0.5, 3.0).with_policy(BoundPolicy::Clamp);
//! let mut scale = 1.0;
//! for ratio in [2.0, 2.0, 2.0] {
//!     scale = zoom.bound(scale, scale * zoom.apply(scale, ratio));
//! }
//! assert_eq!(scale, 3.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod policy;
mod rotation;
mod scale;
mod translation;

pub use policy::BoundPolicy;
pub use rotation::{AngleRange, RotationConstraint};
pub use scale::{ScaleConstraint, ScaleRange};
pub use translation::{AxisLock, TranslationBounds, TranslationConstraint};
