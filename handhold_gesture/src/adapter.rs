// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping of recognizer callbacks onto [`GestureUpdate`]s.

use kurbo::Vec2;

use crate::kind::{GestureKind, GesturePhase, ManipulationType};
use crate::recognizer::{RecognizerEvent, RecognizerState, TouchInfo};
use crate::update::{GestureDelta, GestureUpdate};

/// Touch counts each recognizer accepts.
///
/// Values are normalized on construction and by [`Self::normalized`]: a
/// requirement of zero is raised to one and a reversed pan range is swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchRequirements {
    tap: usize,
    double_tap: usize,
    pan_min: usize,
    pan_max: usize,
}

impl Default for TouchRequirements {
    fn default() -> Self {
        Self {
            tap: 1,
            double_tap: 1,
            pan_min: 1,
            pan_max: usize::MAX,
        }
    }
}

impl TouchRequirements {
    /// Exact touch count for single taps.
    #[must_use]
    pub fn with_tap(mut self, touches: usize) -> Self {
        self.tap = touches;
        self.normalized()
    }

    /// Exact touch count for double taps.
    #[must_use]
    pub fn with_double_tap(mut self, touches: usize) -> Self {
        self.double_tap = touches;
        self.normalized()
    }

    /// Accepted touch count range for pans, inclusive.
    #[must_use]
    pub fn with_pan(mut self, min: usize, max: usize) -> Self {
        self.pan_min = min;
        self.pan_max = max;
        self.normalized()
    }

    /// Returns a copy with zero counts raised to one and the pan range ordered.
    #[must_use]
    pub fn normalized(self) -> Self {
        let tap = self.tap.max(1);
        let double_tap = self.double_tap.max(1);
        let (lo, hi) = if self.pan_min <= self.pan_max {
            (self.pan_min, self.pan_max)
        } else {
            (self.pan_max, self.pan_min)
        };
        Self {
            tap,
            double_tap,
            pan_min: lo.max(1),
            pan_max: hi.max(1),
        }
    }

    /// Touch count required for single taps.
    #[must_use]
    pub fn tap(&self) -> usize {
        self.tap
    }

    /// Touch count required for double taps.
    #[must_use]
    pub fn double_tap(&self) -> usize {
        self.double_tap
    }

    /// Minimum touch count for pans.
    #[must_use]
    pub fn pan_min(&self) -> usize {
        self.pan_min
    }

    /// Maximum touch count for pans.
    #[must_use]
    pub fn pan_max(&self) -> usize {
        self.pan_max
    }

    /// Returns `true` if `count` touches satisfy the requirement for `kind`.
    ///
    /// Pinch and rotate accept any count.
    #[must_use]
    pub fn accepts(&self, kind: GestureKind, count: usize) -> bool {
        match kind {
            GestureKind::Tap => count == self.tap,
            GestureKind::DoubleTap => count == self.double_tap,
            GestureKind::Pan => (self.pan_min..=self.pan_max).contains(&count),
            GestureKind::Pinch | GestureKind::Rotate => true,
        }
    }
}

/// Everything [`normalize`] needs to decide whether an event passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
    /// When `false`, every event is dropped.
    pub enabled: bool,
    /// Recognizers that are installed.
    pub mask: ManipulationType,
    /// Touch count requirements.
    pub touches: TouchRequirements,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mask: ManipulationType::all(),
            touches: TouchRequirements::default(),
        }
    }
}

impl AdapterConfig {
    /// Config accepting the recognizers in `mask` with default touch counts.
    #[must_use]
    pub fn new(mask: ManipulationType) -> Self {
        Self {
            mask,
            ..Self::default()
        }
    }

    /// Replaces the touch requirements.
    #[must_use]
    pub fn with_touches(mut self, touches: TouchRequirements) -> Self {
        self.touches = touches.normalized();
        self
    }
}

/// Why an event did not produce an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DropReason {
    Disabled,
    Masked,
    NoPhase,
    TapCount,
    TapNotEnded,
    Touches,
    InvalidDelta,
}

/// Maps one recognizer callback to a gesture update.
///
/// Returns `None` when the event must be ignored: the adapter is disabled,
/// the recognizer is not in the mask, the state carries no phase
/// (`Possible`, `Failed`), the touch count does not meet the requirement, a
/// tap is not `Ended`, or the delta is not finite (or a non-positive
/// pinch ratio).
///
/// ```
/// use handhold_gesture::{
///     normalize, AdapterConfig, GestureDelta, GestureKind, ManipulationType,
///     RecognizerEvent, RecognizerState, TouchInfo,
/// };
/// use kurbo::Point;
///
/// let config = AdapterConfig::new(ManipulationType::SCALE);
/// let pinch = RecognizerEvent::Pinch {
///     scale: 1.25,
///     state: RecognizerState::Changed,
///     touch: TouchInfo::new(2, Point::new(50.0, 50.0)),
/// };
/// let update = normalize(&pinch, &config).unwrap();
/// assert_eq!(update.kind, GestureKind::Pinch);
/// assert_eq!(update.delta, GestureDelta::Ratio(1.25));
///
/// // Rotation is not in the mask.
/// let rotate = RecognizerEvent::Rotation {
///     rotation: 0.1,
///     state: RecognizerState::Changed,
///     touch: TouchInfo::new(2, Point::ZERO),
/// };
/// assert!(normalize(&rotate, &config).is_none());
/// ```
#[must_use]
pub fn normalize(event: &RecognizerEvent, config: &AdapterConfig) -> Option<GestureUpdate> {
    let result = match *event {
        RecognizerEvent::Tap { taps, state, touch } => normalize_tap(taps, state, touch, config),
        RecognizerEvent::Pan {
            translation,
            state,
            touch,
        } => normalize_pan(translation, state, touch, config),
        RecognizerEvent::Pinch {
            scale,
            state,
            touch,
        } => normalize_pinch(scale, state, touch, config),
        RecognizerEvent::Rotation {
            rotation,
            state,
            touch,
        } => normalize_rotation(rotation, state, touch, config),
    };
    match result {
        Ok(update) => Some(update),
        #[cfg(feature = "tracing")]
        Err(reason) => {
            tracing::trace!(?reason, kind = ?event.kind(), "recognizer event dropped");
            None
        }
        #[cfg(not(feature = "tracing"))]
        Err(_) => None,
    }
}

fn gate(kind: GestureKind, config: &AdapterConfig) -> Result<(), DropReason> {
    if !config.enabled {
        return Err(DropReason::Disabled);
    }
    if !config.mask.has(kind) {
        return Err(DropReason::Masked);
    }
    Ok(())
}

fn phase_of(state: RecognizerState) -> Result<GesturePhase, DropReason> {
    state.phase().ok_or(DropReason::NoPhase)
}

fn build(kind: GestureKind, phase: GesturePhase, delta: GestureDelta, touch: TouchInfo) -> GestureUpdate {
    // Only `Changed` carries a delta.
    let delta = if phase == GesturePhase::Changed {
        delta
    } else {
        GestureDelta::None
    };
    GestureUpdate {
        kind,
        phase,
        delta,
        touch_count: touch.count,
        location: touch.location,
        timestamp: touch.timestamp,
    }
}

fn normalize_tap(
    taps: u8,
    state: RecognizerState,
    touch: TouchInfo,
    config: &AdapterConfig,
) -> Result<GestureUpdate, DropReason> {
    let kind = match taps {
        1 => GestureKind::Tap,
        2 => GestureKind::DoubleTap,
        _ => return Err(DropReason::TapCount),
    };
    gate(kind, config)?;
    if state != RecognizerState::Ended {
        return Err(DropReason::TapNotEnded);
    }
    if !config.touches.accepts(kind, touch.count) {
        return Err(DropReason::Touches);
    }
    Ok(build(kind, GesturePhase::Ended, GestureDelta::None, touch))
}

fn normalize_pan(
    translation: Vec2,
    state: RecognizerState,
    touch: TouchInfo,
    config: &AdapterConfig,
) -> Result<GestureUpdate, DropReason> {
    gate(GestureKind::Pan, config)?;
    let phase = phase_of(state)?;
    // Ending and cancelling must get through even if a finger already lifted.
    if !phase.is_terminal() && !config.touches.accepts(GestureKind::Pan, touch.count) {
        return Err(DropReason::Touches);
    }
    continuous(GestureKind::Pan, phase, GestureDelta::Vector(translation), touch)
}

fn normalize_pinch(
    scale: f64,
    state: RecognizerState,
    touch: TouchInfo,
    config: &AdapterConfig,
) -> Result<GestureUpdate, DropReason> {
    gate(GestureKind::Pinch, config)?;
    let phase = phase_of(state)?;
    continuous(GestureKind::Pinch, phase, GestureDelta::Ratio(scale), touch)
}

fn normalize_rotation(
    rotation: f64,
    state: RecognizerState,
    touch: TouchInfo,
    config: &AdapterConfig,
) -> Result<GestureUpdate, DropReason> {
    gate(GestureKind::Rotate, config)?;
    let phase = phase_of(state)?;
    continuous(GestureKind::Rotate, phase, GestureDelta::Angle(rotation), touch)
}

fn continuous(
    kind: GestureKind,
    phase: GesturePhase,
    delta: GestureDelta,
    touch: TouchInfo,
) -> Result<GestureUpdate, DropReason> {
    if phase == GesturePhase::Changed && !delta.is_valid() {
        return Err(DropReason::InvalidDelta);
    }
    Ok(build(kind, phase, delta, touch))
}
