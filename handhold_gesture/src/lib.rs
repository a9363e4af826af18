// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handhold_gesture --heading-base-level=0

//! Handhold Gesture: uniform gesture updates from platform recognizers.
//!
//! Host platforms expose tap, pan, pinch and rotation recognizers with their
//! own callback shapes. This crate normalizes them:
//!
//! - [`RecognizerEvent`] models one raw callback with incremental values.
//! - [`normalize`] turns it into a [`GestureUpdate`], or drops it when the
//!   recognizer is disabled, the touch count is wrong, or the value is not
//!   usable.
//! - [`ManipulationType`] selects which recognizers are installed.
//!
//! Helpers for hosts that need more glue:
//!
//! - [`DeltaTracker`] converts cumulative recognizer values into increments.
//! - [`TapDisambiguator`] separates single from double taps with a timer.
//! - With the `ui_events_adapter` feature, `from_pointer_gesture` maps
//!   `ui-events` pinch and rotate gestures.
//!
//! ```rust
//! use handhold_gesture::{
//!     normalize, AdapterConfig, GestureDelta, GesturePhase, ManipulationType,
//!     RecognizerEvent, RecognizerState, TouchInfo,
//! };
//! use kurbo::{Point, Vec2};
//!
//! let config = AdapterConfig::new(ManipulationType::TRANSLATE | ManipulationType::SCALE);
//! let event = RecognizerEvent::Pan {
//!     translation: Vec2::new(4.0, 0.0),
//!     state: RecognizerState::Changed,
//!     touch: TouchInfo::new(1, Point::new(20.0, 30.0)),
//! };
//! let update = normalize(&event, &config).unwrap();
//! assert_eq!(update.phase, GesturePhase::Changed);
//! assert_eq!(update.delta, GestureDelta::Vector(Vec2::new(4.0, 0.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod adapter;
mod kind;
mod recognizer;
mod tap;
mod tracker;
mod update;

#[cfg(feature = "ui_events_adapter")]
mod pointer;

pub use adapter::{AdapterConfig, TouchRequirements, normalize};
pub use kind::{GestureKind, GesturePhase, ManipulationType};
pub use recognizer::{RecognizerEvent, RecognizerState, TouchInfo};
pub use tap::{TapConfig, TapDisambiguator};
pub use tracker::DeltaTracker;
pub use update::{GestureDelta, GestureUpdate};

#[cfg(feature = "ui_events_adapter")]
pub use pointer::from_pointer_gesture;
