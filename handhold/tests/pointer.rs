// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `ui-events` pointer gestures driving a `Manipulator`.

#![cfg(feature = "ui_events_adapter")]

use std::rc::Rc;

use handhold::{Manipulator, ManipulatorConfig};
use handhold_compose::{ComposerState, CumulativeTransform};
use handhold_constraint::{BoundPolicy, ScaleRange};
use handhold_gesture::{ManipulationType, RecognizerEvent, RecognizerState, TouchInfo};
use kurbo::Point;
use ui_events::pointer::{
    PointerEvent, PointerGesture, PointerGestureEvent, PointerInfo, PointerState, PointerType,
};

fn gesture(gesture: PointerGesture) -> PointerEvent {
    PointerEvent::Gesture(PointerGestureEvent {
        pointer: PointerInfo {
            pointer_id: None,
            persistent_device_id: None,
            pointer_type: PointerType::Touch,
        },
        gesture,
        state: PointerState::default(),
    })
}

#[test]
fn pointer_gestures_are_complete_ticks() {
    let mut m = Manipulator::new(ManipulationType::all(), CumulativeTransform::IDENTITY, ());
    assert!(m.handle_pointer_event(&gesture(PointerGesture::Pinch(1.0)), 0));
    assert!(m.handle_pointer_event(&gesture(PointerGesture::Pinch(0.5)), 16));
    assert_eq!(m.state(), ComposerState::Idle);
    assert_eq!(m.target().scale, 3.0);

    assert!(m.handle_pointer_event(&gesture(PointerGesture::Rotate(0.25)), 32));
    assert_eq!(m.state(), ComposerState::Idle);
    assert_eq!(m.target().rotation, 0.25);
}

#[test]
fn config_change_after_pointer_gesture_is_applied() {
    let mut m = Manipulator::new(ManipulationType::all(), CumulativeTransform::IDENTITY, ());
    m.handle_pointer_event(&gesture(PointerGesture::Pinch(0.25)), 0);
    m.handle_pointer_event(&gesture(PointerGesture::Pinch(0.25)), 16);
    m.set_manipulation_type(ManipulationType::TRANSLATE);
    assert_eq!(m.state(), ComposerState::Idle);
    assert_eq!(m.queued_config(), None);
    assert_eq!(m.manipulation_type(), ManipulationType::TRANSLATE);
    // Scale is no longer installed.
    assert!(!m.handle_pointer_event(&gesture(PointerGesture::Pinch(0.25)), 32));
}

#[test]
fn pointer_pinch_settles_rubber_band() {
    let range = ScaleRange::new(0.5, 2.0).with_policy(BoundPolicy::rubber_band(0.5));
    let mut m = Manipulator::new(ManipulationType::SCALE, CumulativeTransform::IDENTITY, ());
    m.set_scale_constraint(Some(Rc::new(range)));
    assert!(m.handle_pointer_event(&gesture(PointerGesture::Pinch(3.0)), 0));
    assert_eq!(m.target().scale, 2.0);
}

#[test]
fn pointer_delta_joins_recognizer_gesture_in_progress() {
    let mut m = Manipulator::with_config(
        ManipulatorConfig::new(ManipulationType::SCALE),
        CumulativeTransform::IDENTITY,
        (),
    );
    let touch = TouchInfo::new(2, Point::ZERO);
    m.handle(&RecognizerEvent::Pinch {
        scale: 1.0,
        state: RecognizerState::Began,
        touch,
    });
    assert!(m.handle_pointer_event(&gesture(PointerGesture::Pinch(1.0)), 0));
    assert_eq!(m.state(), ComposerState::Composing);
    assert_eq!(m.target().scale, 2.0);
}

#[test]
fn non_gesture_pointer_events_are_ignored() {
    let mut m = Manipulator::new(ManipulationType::all(), CumulativeTransform::IDENTITY, ());
    let cancel = PointerEvent::Cancel(PointerInfo {
        pointer_id: None,
        persistent_device_id: None,
        pointer_type: PointerType::Touch,
    });
    assert!(!m.handle_pointer_event(&cancel, 0));
    assert!(m.target().is_identity());
}
