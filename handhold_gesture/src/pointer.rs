// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from `ui-events` pointer gestures to recognizer events.
//!
//! Platform pinch and rotate gestures delivered through
//! [`ui_events::pointer::PointerEvent::Gesture`] already report incremental
//! values, so they map directly onto `Changed` recognizer events.
//!
//! These events carry no begin or end, so each one is a complete gesture.
//! Consumers feed the `Changed` event followed by the same event in the
//! `Ended` state in one tick (see
//! [`RecognizerEvent::with_state`]); otherwise the kind would stay active.
//! `handhold::Manipulator::handle_pointer_event` does this.

use ui_events::pointer::{PointerEvent, PointerGesture};

use crate::recognizer::{RecognizerEvent, RecognizerState, TouchInfo};

/// Maps a pointer gesture to a recognizer event.
///
/// Pinch deltas are additive zoom amounts and become the ratio `1 + delta`.
/// Rotate deltas are radians. Both are reported as two-touch `Changed`
/// events at the gesture location. Any other pointer event yields `None`.
#[must_use]
pub fn from_pointer_gesture(event: &PointerEvent, timestamp: u64) -> Option<RecognizerEvent> {
    let PointerEvent::Gesture(gesture_event) = event else {
        return None;
    };
    let touch = TouchInfo::new(2, gesture_event.state.logical_point()).with_timestamp(timestamp);
    let state = RecognizerState::Changed;
    match &gesture_event.gesture {
        PointerGesture::Pinch(delta) => Some(RecognizerEvent::Pinch {
            scale: 1.0 + f64::from(*delta),
            state,
            touch,
        }),
        PointerGesture::Rotate(delta) => Some(RecognizerEvent::Rotation {
            rotation: f64::from(*delta),
            state,
            touch,
        }),
        #[allow(unreachable_patterns, reason = "PointerGesture may grow variants")]
        _ => None,
    }
}
