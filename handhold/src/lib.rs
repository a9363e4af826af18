// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handhold --heading-base-level=0

//! Handhold: gesture-driven manipulation of a visual element.
//!
//! A [`Manipulator`] turns multi-touch recognizer callbacks into one composed
//! 2D transform on a *target* element, while the touches land on a separate
//! *surface* element. It ties together the other Handhold crates:
//!
//! - `handhold_gesture` normalizes raw recognizer callbacks.
//! - `handhold_compose` folds pan, pinch and rotate deltas into a
//!   [`CumulativeTransform`](handhold_compose::CumulativeTransform) and
//!   commits it to a [`TransformTarget`](handhold_compose::TransformTarget).
//! - `handhold_constraint` shapes each axis with clamping, detents or
//!   rubber banding.
//!
//! Taps are reported to an optional [`ManipulatorDelegate`].
//!
//! ## Example
//!
//! ```rust
//! use handhold::{Manipulator, ManipulatorDelegate, TapEvent};
//! use handhold_compose::Constraints;
//! use handhold_constraint::ScaleRange;
//! use handhold_gesture::{ManipulationType, RecognizerEvent, RecognizerState, TouchInfo};
//! use kurbo::{Affine, Point};
//!
//! struct Zoomer;
//! impl ManipulatorDelegate<Affine, &'static str> for Zoomer {
//!     fn on_double_tap(&mut self, event: &TapEvent<'_, Affine, &'static str>) {
//!         assert_eq!(*event.surface, "canvas");
//!     }
//! }
//!
//! let mask = ManipulationType::SCALE | ManipulationType::DOUBLE_TAP;
//! let mut m = Manipulator::new(mask, Affine::IDENTITY, "canvas")
//!     .with_constraints(Constraints::none().with_scale(ScaleRange::new(0.5, 3.0)))
//!     .with_delegate(Zoomer);
//!
//! let touch = TouchInfo::new(2, Point::new(100.0, 100.0));
//! m.handle(&RecognizerEvent::Pinch { scale: 1.0, state: RecognizerState::Began, touch });
//! m.handle(&RecognizerEvent::Pinch { scale: 5.0, state: RecognizerState::Changed, touch });
//! m.handle(&RecognizerEvent::Pinch { scale: 1.0, state: RecognizerState::Ended, touch });
//! assert_eq!(m.transform().scale, 3.0);
//!
//! m.handle(&RecognizerEvent::tap(2, TouchInfo::new(1, Point::ZERO)));
//! ```
//!
//! ## Recognizer arbitration
//!
//! Pan, pinch and rotate recognize simultaneously; taps never run alongside
//! another recognizer ([`should_recognize_simultaneously`]). Hosts with
//! require-to-fail wiring use [`Manipulator::failure_requirements`] so a
//! single tap waits for the double tap to fail. Hosts without it feed raw
//! taps to [`Manipulator::handle_raw_tap`] and drive [`Manipulator::poll`]
//! from a timer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arbitration;
mod config;
mod delegate;
mod manipulator;

pub use arbitration::{failure_requirements, should_recognize_simultaneously};
pub use config::ManipulatorConfig;
pub use delegate::{ManipulatorDelegate, TapEvent};
pub use manipulator::Manipulator;
