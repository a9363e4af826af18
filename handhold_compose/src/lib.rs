// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handhold_compose --heading-base-level=0

//! Handhold Compose: fold gesture updates into one constrained transform.
//!
//! [`TransformComposer`] takes [`GestureUpdate`](handhold_gesture::GestureUpdate)s
//! from pan, pinch and rotate recognizers and maintains a
//! [`CumulativeTransform`] (rotation, uniform scale, translation).
//!
//! Each tick:
//!
//! 1. Incoming deltas are scaled by their [`AxisFactors`] and staged.
//! 2. Staged deltas are merged in the order scale, rotate, translate. Each
//!    axis passes through its optional constraint from [`Constraints`].
//! 3. The new transform is committed to a [`TransformTarget`] exactly once.
//!
//! Pan vectors are interpreted in the target's own frame by default
//! ([`TranslationFrame::Local`]), so panning after a rotation moves along the
//! rotated axes. Gestures therefore do not commute across axes, while deltas
//! on one axis always do.
//!
//! ```rust
//! use handhold_compose::{Constraints, CumulativeTransform, TransformComposer};
//! use handhold_constraint::ScaleRange;
//! use handhold_gesture::{GestureDelta, GestureKind, GestureUpdate};
//! use kurbo::Affine;
//!
//! let mut composer = TransformComposer::default()
//!     .with_constraints(Constraints::none().with_scale(ScaleRange::new(0.5, 3.0)));
//! let mut view = Affine::IDENTITY;
//!
//! composer.process(GestureUpdate::began(GestureKind::Pinch), &mut view);
//! for _ in 0..4 {
//!     composer.process(
//!         GestureUpdate::changed(GestureKind::Pinch, GestureDelta::Ratio(1.5)),
//!         &mut view,
//!     );
//! }
//! composer.process(GestureUpdate::ended(GestureKind::Pinch), &mut view);
//!
//! assert_eq!(composer.transform().scale, 3.0);
//! assert_eq!(view, composer.transform().to_affine());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod composer;
mod config;
mod transform;

pub use composer::{ComposerState, TransformComposer};
pub use config::{AxisFactors, ComposerConfig, Constraints, TranslationFrame};
pub use transform::{CumulativeTransform, TransformTarget};
