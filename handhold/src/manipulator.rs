// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use handhold_compose::{
    ComposerState, Constraints, CumulativeTransform, TransformComposer, TransformTarget,
};
use handhold_constraint::{RotationConstraint, ScaleConstraint, TranslationConstraint};
use handhold_gesture::{
    GestureKind, GestureUpdate, ManipulationType, RecognizerEvent, TapConfig, TapDisambiguator,
    TouchInfo, normalize,
};

use crate::arbitration;
use crate::config::ManipulatorConfig;
use crate::delegate::{ManipulatorDelegate, TapEvent};

/// Attaches tap, pan, pinch and rotate manipulation to a target.
///
/// The manipulator owns the element being transformed (`T`), the element
/// receiving touches (`S`), one [`TransformComposer`], optional per-axis
/// constraints and an optional delegate for taps.
///
/// Recognizer callbacks enter through [`Self::handle`] (one tick per event)
/// or [`Self::handle_frame`] (one tick for concurrent events). Continuous
/// gestures update the target's transform; taps notify the delegate.
///
/// A target must not be shared by two manipulators: each one keeps its own
/// cumulative transform and commits it whole.
///
/// ```
/// use handhold::Manipulator;
/// use handhold_gesture::{ManipulationType, RecognizerEvent, RecognizerState, TouchInfo};
/// use kurbo::{Affine, Point, Vec2};
///
/// let mut m = Manipulator::new(ManipulationType::TRANSLATE, Affine::IDENTITY, ());
/// let touch = TouchInfo::new(1, Point::new(10.0, 10.0));
/// for state in [RecognizerState::Began, RecognizerState::Changed, RecognizerState::Ended] {
///     m.handle(&RecognizerEvent::Pan { translation: Vec2::new(3.0, 4.0), state, touch });
/// }
/// assert_eq!(*m.target(), Affine::translate((3.0, 4.0)));
/// ```
pub struct Manipulator<T, S> {
    target: T,
    surface: S,
    enabled: bool,
    config: ManipulatorConfig,
    queued: Option<ManipulatorConfig>,
    composer: TransformComposer,
    delegate: Option<Box<dyn ManipulatorDelegate<T, S>>>,
    taps: TapDisambiguator,
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for Manipulator<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manipulator")
            .field("target", &self.target)
            .field("surface", &self.surface)
            .field("enabled", &self.enabled)
            .field("config", &self.config)
            .field("queued", &self.queued)
            .field("composer", &self.composer)
            .field("delegate", &self.delegate.is_some())
            .field("taps", &self.taps)
            .finish()
    }
}

impl<T: TransformTarget, S> Manipulator<T, S> {
    /// Creates an enabled manipulator installing the recognizers in `mask`.
    ///
    /// The target starts at the identity transform; nothing is committed
    /// until the first gesture.
    pub fn new(mask: ManipulationType, target: T, surface: S) -> Self {
        Self::with_config(ManipulatorConfig::new(mask), target, surface)
    }

    /// Creates an enabled manipulator from a full configuration.
    pub fn with_config(config: ManipulatorConfig, target: T, surface: S) -> Self {
        Self {
            target,
            surface,
            enabled: true,
            config,
            queued: None,
            composer: TransformComposer::new(config.composer()),
            delegate: None,
            taps: TapDisambiguator::default(),
        }
    }

    /// Installs a delegate.
    #[must_use]
    pub fn with_delegate(mut self, delegate: impl ManipulatorDelegate<T, S> + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Installs constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.composer.set_constraints(constraints);
        self
    }

    /// Replaces the thresholds used by [`Self::handle_raw_tap`].
    #[must_use]
    pub fn with_tap_config(mut self, config: TapConfig) -> Self {
        self.taps = TapDisambiguator::new(config);
        self
    }

    // --- Input ---

    /// Handles one recognizer callback as its own tick.
    ///
    /// Returns `true` if the event was accepted.
    pub fn handle(&mut self, event: &RecognizerEvent) -> bool {
        let Some(update) = normalize(event, &self.config.adapter(self.enabled)) else {
            return false;
        };
        if update.kind.is_continuous() {
            self.composer.process(update, &mut self.target);
            self.apply_queued();
        } else {
            self.notify(&update);
        }
        true
    }

    /// Handles concurrent recognizer callbacks as one tick.
    ///
    /// Continuous updates are merged and committed once, then taps are
    /// reported in order. Returns the number of accepted events.
    pub fn handle_frame(&mut self, events: &[RecognizerEvent]) -> usize {
        let adapter = self.config.adapter(self.enabled);
        let updates: Vec<GestureUpdate> = events
            .iter()
            .filter_map(|event| normalize(event, &adapter))
            .collect();
        if updates.is_empty() {
            return 0;
        }
        self.composer.process_frame(&updates, &mut self.target);
        for update in updates.iter().filter(|u| !u.kind.is_continuous()) {
            self.notify(update);
        }
        self.apply_queued();
        updates.len()
    }

    /// Handles a raw tap from a host without single / double tap arbitration.
    ///
    /// With the double tap recognizer installed the tap is held back by a
    /// [`TapDisambiguator`]; call [`Self::poll`] when [`Self::tap_deadline`]
    /// passes to release a pending single tap. Otherwise the tap is reported
    /// as a single tap right away.
    ///
    /// Returns `true` if a tap was reported to the delegate.
    pub fn handle_raw_tap(&mut self, touch: TouchInfo) -> bool {
        if !self.enabled {
            return false;
        }
        if !self.config.manipulation_type().contains(ManipulationType::DOUBLE_TAP) {
            return self.handle(&RecognizerEvent::tap(1, touch));
        }
        match self.taps.on_tap(touch) {
            Some(event) => self.handle(&event),
            None => false,
        }
    }

    /// Releases a held-back single tap once its window has passed.
    ///
    /// Returns `true` if a tap was reported to the delegate.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.taps.poll(now) {
            Some(event) => self.handle(&event),
            None => false,
        }
    }

    /// When [`Self::poll`] should next be called, if a tap is held back.
    #[must_use]
    pub fn tap_deadline(&self) -> Option<u64> {
        self.taps.deadline()
    }

    /// Handles a `ui-events` pinch or rotate gesture as its own tick.
    ///
    /// Pointer gestures have no begin or end, so each one is committed as a
    /// complete gesture: its delta is applied and the kind ends in the same
    /// tick, settling its constraint and releasing queued configuration.
    /// When a recognizer already has the same kind in progress, the delta
    /// joins that gesture instead.
    ///
    /// Returns `true` if the event was accepted.
    #[cfg(feature = "ui_events_adapter")]
    pub fn handle_pointer_event(
        &mut self,
        event: &ui_events::pointer::PointerEvent,
        timestamp: u64,
    ) -> bool {
        let Some(changed) = handhold_gesture::from_pointer_gesture(event, timestamp) else {
            return false;
        };
        if changed.kind().is_some_and(|kind| self.composer.is_active(kind)) {
            return self.handle(&changed);
        }
        let ended = changed.with_state(handhold_gesture::RecognizerState::Ended);
        self.handle_frame(&[changed, ended]) == 2
    }

    // --- Recognizer policy ---

    /// Recognizers installed by the active mask, in recognizer order.
    pub fn installed_recognizers(&self) -> impl Iterator<Item = GestureKind> {
        self.config.manipulation_type().kinds()
    }

    /// See [`arbitration::should_recognize_simultaneously`].
    #[must_use]
    pub fn should_recognize_simultaneously(&self, a: GestureKind, b: GestureKind) -> bool {
        arbitration::should_recognize_simultaneously(a, b)
    }

    /// Require-to-fail pairs among the installed recognizers.
    ///
    /// See [`arbitration::failure_requirements`].
    pub fn failure_requirements(
        &self,
    ) -> impl Iterator<Item = (GestureKind, GestureKind)> {
        arbitration::failure_requirements(self.config.manipulation_type())
    }

    // --- State ---

    /// Whether updates are accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the manipulator.
    ///
    /// Disabling takes effect immediately: in-flight gestures and held-back
    /// taps are dropped, and the transform stays where it is, even past a
    /// rubber-band bound. The next gesture on that axis settles it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(enabled, "manipulator enabled changed");
        self.enabled = enabled;
        if !enabled {
            self.composer.cancel_all();
            self.taps.clear();
            self.apply_queued();
        }
    }

    /// Whether a continuous gesture is in progress.
    #[must_use]
    pub fn state(&self) -> ComposerState {
        self.composer.state()
    }

    /// The current cumulative transform.
    #[must_use]
    pub fn transform(&self) -> &CumulativeTransform {
        self.composer.transform()
    }

    /// Sets the transform directly and commits it to the target.
    pub fn set_transform(&mut self, transform: CumulativeTransform) {
        self.composer.set_transform(transform, &mut self.target);
    }

    /// Returns the target to the identity transform, cancelling gestures.
    pub fn reset(&mut self) {
        self.composer.reset(&mut self.target);
        self.apply_queued();
    }

    // --- Configuration ---

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// A configuration waiting for the current gesture to end.
    #[must_use]
    pub fn queued_config(&self) -> Option<&ManipulatorConfig> {
        self.queued.as_ref()
    }

    /// Replaces the configuration.
    ///
    /// Applied immediately when no gesture is in progress; otherwise queued
    /// until every gesture has ended. A later call replaces a queued one.
    pub fn set_config(&mut self, config: ManipulatorConfig) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            queued = self.composer.state() == ComposerState::Composing,
            "config change requested"
        );
        self.queued = Some(config);
        self.apply_queued();
    }

    /// Installed recognizers.
    #[must_use]
    pub fn manipulation_type(&self) -> ManipulationType {
        self.config.manipulation_type()
    }

    /// Installs and removes recognizers. Queued while a gesture is in progress.
    pub fn set_manipulation_type(&mut self, mask: ManipulationType) {
        let base = self.queued.unwrap_or(self.config);
        self.set_config(base.with_manipulation_type(mask));
    }

    /// The constraints in effect.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        self.composer.constraints()
    }

    /// Replaces all constraints. The next contribution uses them.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.composer.set_constraints(constraints);
    }

    /// Replaces the rotation constraint.
    pub fn set_rotation_constraint(&mut self, constraint: Option<Rc<dyn RotationConstraint>>) {
        let mut constraints = self.composer.constraints().clone();
        constraints.rotation = constraint;
        self.composer.set_constraints(constraints);
    }

    /// Replaces the scale constraint.
    pub fn set_scale_constraint(&mut self, constraint: Option<Rc<dyn ScaleConstraint>>) {
        let mut constraints = self.composer.constraints().clone();
        constraints.scale = constraint;
        self.composer.set_constraints(constraints);
    }

    /// Replaces the translation constraint.
    pub fn set_translation_constraint(
        &mut self,
        constraint: Option<Rc<dyn TranslationConstraint>>,
    ) {
        let mut constraints = self.composer.constraints().clone();
        constraints.translation = constraint;
        self.composer.set_constraints(constraints);
    }

    // --- Collaborators ---

    /// The element being manipulated.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Replaces the target and commits the current transform to it.
    ///
    /// Returns the previous target.
    pub fn set_target(&mut self, mut target: T) -> T {
        target.commit(self.composer.transform());
        core::mem::replace(&mut self.target, target)
    }

    /// The element receiving touches.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replaces the surface and returns the previous one.
    pub fn set_surface(&mut self, surface: S) -> S {
        core::mem::replace(&mut self.surface, surface)
    }

    /// Whether a delegate is installed.
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Installs or removes the delegate, returning the previous one.
    pub fn set_delegate(
        &mut self,
        delegate: Option<Box<dyn ManipulatorDelegate<T, S>>>,
    ) -> Option<Box<dyn ManipulatorDelegate<T, S>>> {
        core::mem::replace(&mut self.delegate, delegate)
    }

    /// Splits the manipulator into its target and surface.
    pub fn into_parts(self) -> (T, S) {
        (self.target, self.surface)
    }

    fn notify(&mut self, update: &GestureUpdate) {
        let Some(delegate) = self.delegate.as_mut() else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?update.kind, x = update.location.x, y = update.location.y, "tap");
        let event = TapEvent {
            update: *update,
            surface: &self.surface,
            target: &self.target,
            transform: self.composer.transform(),
        };
        match update.kind {
            GestureKind::Tap => delegate.on_tap(&event),
            GestureKind::DoubleTap => delegate.on_double_tap(&event),
            GestureKind::Pan | GestureKind::Pinch | GestureKind::Rotate => {}
        }
    }

    fn apply_queued(&mut self) {
        if self.composer.state() != ComposerState::Idle {
            return;
        }
        let Some(config) = self.queued.take() else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(mask = ?config.manipulation_type(), "config applied");
        self.composer.set_config(config.composer());
        if !config.manipulation_type().contains(ManipulationType::DOUBLE_TAP) {
            self.taps.clear();
        }
        self.config = config;
    }
}
