// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use handhold_compose::CumulativeTransform;
use handhold_gesture::GestureUpdate;

/// A completed tap, with the manipulator's view of the world at that moment.
#[derive(Debug)]
pub struct TapEvent<'a, T, S> {
    /// The tap update; its phase is always `Ended`.
    pub update: GestureUpdate,
    /// The element that received the touches.
    pub surface: &'a S,
    /// The element being manipulated.
    pub target: &'a T,
    /// The current cumulative transform of the target.
    pub transform: &'a CumulativeTransform,
}

/// Receives tap notifications from a [`Manipulator`](crate::Manipulator).
///
/// Both methods default to doing nothing, so implementors pick the ones they
/// care about. Each completed tap is reported exactly once, synchronously.
pub trait ManipulatorDelegate<T, S> {
    /// A single tap completed.
    fn on_tap(&mut self, event: &TapEvent<'_, T, S>) {
        let _ = event;
    }

    /// A double tap completed.
    fn on_double_tap(&mut self, event: &TapEvent<'_, T, S>) {
        let _ = event;
    }
}

/// Lets the host keep a handle to the delegate it installed.
impl<T, S, D: ManipulatorDelegate<T, S> + ?Sized> ManipulatorDelegate<T, S> for Rc<RefCell<D>> {
    fn on_tap(&mut self, event: &TapEvent<'_, T, S>) {
        self.borrow_mut().on_tap(event);
    }

    fn on_double_tap(&mut self, event: &TapEvent<'_, T, S>) {
        self.borrow_mut().on_double_tap(event);
    }
}
