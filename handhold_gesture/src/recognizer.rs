// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::kind::{GestureKind, GesturePhase};

/// State reported by a host recognizer callback.
///
/// This is a superset of [`GesturePhase`]: recognizers also report states
/// that never reach the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecognizerState {
    /// Touches are down but the gesture is not recognized yet.
    Possible,
    /// The gesture was recognized.
    Began,
    /// The gesture moved.
    Changed,
    /// The gesture ended; discrete recognizers report this once recognized.
    Ended,
    /// The gesture was cancelled by the host.
    Cancelled,
    /// The recognizer gave up on the touch sequence.
    Failed,
}

impl RecognizerState {
    /// The corresponding gesture phase, if this state produces updates.
    #[must_use]
    pub const fn phase(self) -> Option<GesturePhase> {
        match self {
            Self::Began => Some(GesturePhase::Began),
            Self::Changed => Some(GesturePhase::Changed),
            Self::Ended => Some(GesturePhase::Ended),
            Self::Cancelled => Some(GesturePhase::Cancelled),
            Self::Possible | Self::Failed => None,
        }
    }
}

/// Touch information shared by every recognizer callback.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchInfo {
    /// Number of touches currently involved.
    pub count: usize,
    /// Centroid of the touches in surface coordinates.
    pub location: Point,
    /// Host timestamp in milliseconds.
    pub timestamp: u64,
}

impl TouchInfo {
    /// Touch info for `count` touches at `location`, time zero.
    #[must_use]
    pub fn new(count: usize, location: Point) -> Self {
        Self {
            count,
            location,
            timestamp: 0,
        }
    }

    /// Replaces the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A raw callback from a host gesture recognizer.
///
/// Values are incremental: translation, scale and rotation are relative to
/// the previous callback of the same recognizer. Hosts whose recognizers
/// report cumulative values convert them with
/// [`DeltaTracker`](crate::DeltaTracker) first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecognizerEvent {
    /// A tap recognizer fired. `taps` is `1` for a single and `2` for a double tap.
    Tap {
        /// Number of taps recognized.
        taps: u8,
        /// Recognizer state.
        state: RecognizerState,
        /// Touch information.
        touch: TouchInfo,
    },
    /// A pan recognizer moved.
    Pan {
        /// Translation since the previous callback.
        translation: Vec2,
        /// Recognizer state.
        state: RecognizerState,
        /// Touch information.
        touch: TouchInfo,
    },
    /// A pinch recognizer moved.
    Pinch {
        /// Scale ratio since the previous callback.
        scale: f64,
        /// Recognizer state.
        state: RecognizerState,
        /// Touch information.
        touch: TouchInfo,
    },
    /// A rotation recognizer moved.
    Rotation {
        /// Rotation in radians since the previous callback.
        rotation: f64,
        /// Recognizer state.
        state: RecognizerState,
        /// Touch information.
        touch: TouchInfo,
    },
}

impl RecognizerEvent {
    /// The recognizer kind, or `None` for taps with an unsupported count.
    #[must_use]
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Tap { taps: 1, .. } => Some(GestureKind::Tap),
            Self::Tap { taps: 2, .. } => Some(GestureKind::DoubleTap),
            Self::Tap { .. } => None,
            Self::Pan { .. } => Some(GestureKind::Pan),
            Self::Pinch { .. } => Some(GestureKind::Pinch),
            Self::Rotation { .. } => Some(GestureKind::Rotate),
        }
    }

    /// The recognizer state.
    #[must_use]
    pub fn state(&self) -> RecognizerState {
        match self {
            Self::Tap { state, .. }
            | Self::Pan { state, .. }
            | Self::Pinch { state, .. }
            | Self::Rotation { state, .. } => *state,
        }
    }

    /// The touch information.
    #[must_use]
    pub fn touch(&self) -> TouchInfo {
        match self {
            Self::Tap { touch, .. }
            | Self::Pan { touch, .. }
            | Self::Pinch { touch, .. }
            | Self::Rotation { touch, .. } => *touch,
        }
    }

    /// The same event with its state replaced.
    #[must_use]
    pub fn with_state(mut self, new_state: RecognizerState) -> Self {
        match &mut self {
            Self::Tap { state, .. }
            | Self::Pan { state, .. }
            | Self::Pinch { state, .. }
            | Self::Rotation { state, .. } => *state = new_state,
        }
        self
    }

    /// A recognized single (`taps == 1`) or double (`taps == 2`) tap.
    #[must_use]
    pub fn tap(taps: u8, touch: TouchInfo) -> Self {
        Self::Tap {
            taps,
            state: RecognizerState::Ended,
            touch,
        }
    }
}
