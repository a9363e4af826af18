// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Vec2;

use handhold_gesture::{GestureDelta, GestureKind, GesturePhase, GestureUpdate, ManipulationType};

use crate::config::{ComposerConfig, Constraints, TranslationFrame};
use crate::transform::{CumulativeTransform, TransformTarget, wrap_angle};

/// Whether a gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ComposerState {
    /// No continuous gesture is active.
    #[default]
    Idle,
    /// At least one of pan, pinch or rotate is active.
    Composing,
}

/// Deltas received since the last commit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Staged {
    scale: Option<f64>,
    rotation: Option<f64>,
    translation: Option<Vec2>,
    /// Axes whose gesture ended and need a `settle` pass.
    settle: ManipulationType,
}

impl Staged {
    fn is_empty(&self) -> bool {
        self.scale.is_none()
            && self.rotation.is_none()
            && self.translation.is_none()
            && self.settle.is_empty()
    }

    fn discard(&mut self, kind: GestureKind) {
        match kind {
            GestureKind::Pinch => self.scale = None,
            GestureKind::Rotate => self.rotation = None,
            GestureKind::Pan => self.translation = None,
            GestureKind::Tap | GestureKind::DoubleTap => {}
        }
    }
}

/// Folds gesture updates into one [`CumulativeTransform`].
///
/// Updates are staged and then committed. A commit merges staged deltas in
/// the fixed order scale, rotate, translate; each passes through its axis
/// constraint against the value produced by the previous step, and the
/// result reaches the target through a single
/// [`TransformTarget::commit`].
///
/// [`Self::process`] and [`Self::process_frame`] stage and commit in one
/// call. [`Self::stage`] and [`Self::flush`] split the two for hosts that
/// collect updates themselves.
///
/// ```
/// use handhold_compose::{CumulativeTransform, TransformComposer};
/// use handhold_gesture::{GestureDelta, GestureKind, GestureUpdate};
/// use kurbo::Vec2;
///
/// let mut composer = TransformComposer::default();
/// let mut target = CumulativeTransform::IDENTITY;
///
/// composer.process(GestureUpdate::began(GestureKind::Pinch), &mut target);
/// composer.process(
///     GestureUpdate::changed(GestureKind::Pinch, GestureDelta::Ratio(2.0)),
///     &mut target,
/// );
/// composer.process(
///     GestureUpdate::changed(GestureKind::Pan, GestureDelta::Vector(Vec2::new(5.0, 0.0))),
///     &mut target,
/// );
/// // The pan is in the target's scaled frame.
/// assert_eq!(target.scale, 2.0);
/// assert_eq!(target.translation, Vec2::new(10.0, 0.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransformComposer {
    config: ComposerConfig,
    constraints: Constraints,
    transform: CumulativeTransform,
    active: ManipulationType,
    staged: Staged,
}

impl TransformComposer {
    /// Creates an idle composer at the identity transform.
    #[must_use]
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config: config.normalized(),
            ..Self::default()
        }
    }

    /// Sets the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ComposerState {
        if self.active.is_empty() {
            ComposerState::Idle
        } else {
            ComposerState::Composing
        }
    }

    /// Continuous kinds currently active, as manipulation flags.
    #[must_use]
    pub fn active(&self) -> ManipulationType {
        self.active
    }

    /// Returns `true` if `kind` is active.
    #[must_use]
    pub fn is_active(&self, kind: GestureKind) -> bool {
        self.active.has(kind)
    }

    /// The last committed transform.
    #[must_use]
    pub fn transform(&self) -> &CumulativeTransform {
        &self.transform
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Returns `false` and leaves the configuration unchanged while
    /// composing; callers queue the change until [`ComposerState::Idle`].
    pub fn set_config(&mut self, config: ComposerConfig) -> bool {
        if self.state() == ComposerState::Composing {
            return false;
        }
        self.config = config.normalized();
        true
    }

    /// The constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Replaces the constraints. The next contribution uses them.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// One tick with a single update. Returns `true` if a transform was committed.
    pub fn process<T: TransformTarget + ?Sized>(
        &mut self,
        update: GestureUpdate,
        target: &mut T,
    ) -> bool {
        self.stage(update);
        self.flush(target)
    }

    /// One tick with concurrent updates.
    ///
    /// Updates are staged in [`GestureKind::priority`] order (pinch, rotate,
    /// pan, then taps), stable within a kind, and committed once.
    pub fn process_frame<T: TransformTarget + ?Sized>(
        &mut self,
        updates: &[GestureUpdate],
        target: &mut T,
    ) -> bool {
        let mut ordered: Vec<&GestureUpdate> = updates.iter().collect();
        ordered.sort_by_key(|u| u.kind.priority());
        for update in ordered {
            self.stage(*update);
        }
        self.flush(target)
    }

    /// Stages one update without committing.
    ///
    /// `Ended` and `Cancelled` both schedule the kind's constraint `settle`
    /// for the next commit; `Cancelled` also drops its staged delta.
    ///
    /// Returns `true` if the update changed composer state. Taps, deltas of
    /// the wrong variant and invalid deltas are ignored.
    pub fn stage(&mut self, update: GestureUpdate) -> bool {
        let kind = update.kind;
        if !kind.is_continuous() {
            return false;
        }
        match update.phase {
            GesturePhase::Began => {
                self.activate(kind);
                true
            }
            GesturePhase::Changed => {
                let Some(delta) = self.scaled(kind, update.delta) else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?kind, delta = ?update.delta, "delta ignored");
                    return false;
                };
                self.activate(kind);
                match delta {
                    GestureDelta::Ratio(r) => {
                        self.staged.scale = Some(self.staged.scale.unwrap_or(1.0) * r);
                    }
                    GestureDelta::Angle(a) => {
                        self.staged.rotation = Some(self.staged.rotation.unwrap_or(0.0) + a);
                    }
                    GestureDelta::Vector(v) => {
                        self.staged.translation =
                            Some(self.staged.translation.unwrap_or(Vec2::ZERO) + v);
                    }
                    GestureDelta::None => {}
                }
                true
            }
            GesturePhase::Ended => {
                if !self.is_active(kind) {
                    return false;
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(?kind, "gesture ended");
                self.deactivate(kind);
                true
            }
            GesturePhase::Cancelled => {
                self.staged.discard(kind);
                if !self.is_active(kind) {
                    return false;
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(?kind, "gesture cancelled");
                self.deactivate(kind);
                true
            }
        }
    }

    /// Commits everything staged since the last commit.
    ///
    /// Returns `false` without touching the target when nothing is staged.
    pub fn flush<T: TransformTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if self.staged.is_empty() {
            return false;
        }
        let staged = core::mem::take(&mut self.staged);
        let next = self.merge(staged);
        self.transform = next;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rotation = next.rotation,
            scale = next.scale,
            tx = next.translation.x,
            ty = next.translation.y,
            "transform committed"
        );
        target.commit(&next);
        true
    }

    /// Drops staged deltas and active gestures. The transform is kept.
    ///
    /// No settle runs, so a rubber-banded value stays past its bound until
    /// the next gesture on that axis ends.
    pub fn cancel_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(active = ?self.active, "all gestures cancelled");
        self.active = ManipulationType::NONE;
        self.staged = Staged::default();
    }

    /// Returns to the identity transform and commits it.
    ///
    /// Active gestures are cancelled first.
    pub fn reset<T: TransformTarget + ?Sized>(&mut self, target: &mut T) {
        self.cancel_all();
        self.transform = CumulativeTransform::IDENTITY;
        target.commit(&self.transform);
    }

    /// Replaces the transform without constraints and commits it.
    ///
    /// Active gestures continue from the new value.
    pub fn set_transform<T: TransformTarget + ?Sized>(
        &mut self,
        transform: CumulativeTransform,
        target: &mut T,
    ) {
        self.transform = CumulativeTransform::new(
            transform.rotation,
            transform.scale,
            transform.translation,
        );
        target.commit(&self.transform);
    }

    fn activate(&mut self, kind: GestureKind) {
        if self.is_active(kind) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?kind, idle = self.active.is_empty(), "gesture began");
        self.active |= kind.manipulation();
    }

    /// Ends `kind` and schedules its axis to settle on the next commit.
    fn deactivate(&mut self, kind: GestureKind) {
        self.active -= kind.manipulation();
        self.staged.settle |= kind.manipulation();
    }

    /// Applies the axis factor, checking that the delta fits the kind.
    fn scaled(&self, kind: GestureKind, delta: GestureDelta) -> Option<GestureDelta> {
        let factors = self.config.factors;
        let scaled = match (kind, delta) {
            (GestureKind::Pinch, GestureDelta::Ratio(_)) => delta.scaled(factors.scale),
            (GestureKind::Rotate, GestureDelta::Angle(_)) => delta.scaled(factors.rotation),
            (GestureKind::Pan, GestureDelta::Vector(_)) => delta.scaled(factors.translation),
            _ => return None,
        };
        scaled.is_valid().then_some(scaled)
    }

    fn merge(&self, staged: Staged) -> CumulativeTransform {
        let mut next = self.transform;

        if let Some(ratio) = staged.scale {
            let prev = next.scale;
            next.scale = match &self.constraints.scale {
                Some(c) => {
                    let scaled = checked_scale(prev, c.apply(prev, ratio));
                    valid_scale(c.bound(prev, scaled), prev)
                }
                None => checked_scale(prev, ratio),
            };
        }
        if staged.settle.contains(ManipulationType::SCALE)
            && let Some(c) = &self.constraints.scale
        {
            let prev = next.scale;
            let settled = checked_scale(prev, c.settle(prev));
            next.scale = valid_scale(c.bound(prev, settled), prev);
        }

        if let Some(angle) = staged.rotation {
            let allowed = match &self.constraints.rotation {
                Some(c) => c.apply(next.rotation, angle),
                None => angle,
            };
            if allowed.is_finite() {
                let prev = next.rotation;
                next.rotation = match &self.constraints.rotation {
                    Some(c) => c.bound(prev, prev + allowed),
                    None => prev + allowed,
                };
            }
        }
        if staged.settle.contains(ManipulationType::ROTATE)
            && let Some(c) = &self.constraints.rotation
        {
            let settle = c.settle(next.rotation);
            if settle.is_finite() {
                next.rotation = c.bound(next.rotation, next.rotation + settle);
            }
        }
        if self.config.normalize_rotation {
            next.rotation = wrap_angle(next.rotation);
        }

        if let Some(v) = staged.translation {
            let v = match self.config.frame {
                TranslationFrame::Local => next.local_to_parent(v),
                TranslationFrame::Surface => v,
            };
            let allowed = match &self.constraints.translation {
                Some(c) => c.apply(next.translation, v),
                None => v,
            };
            if allowed.is_finite() {
                let prev = next.translation;
                next.translation = match &self.constraints.translation {
                    Some(c) => c.bound(prev, prev + allowed),
                    None => prev + allowed,
                };
            }
        }
        if staged.settle.contains(ManipulationType::TRANSLATE)
            && let Some(c) = &self.constraints.translation
        {
            let settle = c.settle(next.translation);
            if settle.is_finite() {
                next.translation = c.bound(next.translation, next.translation + settle);
            }
        }

        next
    }
}

/// Multiplies `scale` by `ratio`, keeping the old value if the result is not
/// a positive finite number.
fn checked_scale(scale: f64, ratio: f64) -> f64 {
    valid_scale(scale * ratio, scale)
}

fn valid_scale(scale: f64, fallback: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisFactors;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use handhold_constraint::{AngleRange, BoundPolicy, ScaleRange, TranslationBounds};
    use kurbo::Rect;

    fn pan(x: f64, y: f64) -> GestureUpdate {
        GestureUpdate::changed(GestureKind::Pan, GestureDelta::Vector(Vec2::new(x, y)))
    }

    fn pinch(r: f64) -> GestureUpdate {
        GestureUpdate::changed(GestureKind::Pinch, GestureDelta::Ratio(r))
    }

    fn rotate(a: f64) -> GestureUpdate {
        GestureUpdate::changed(GestureKind::Rotate, GestureDelta::Angle(a))
    }

    #[test]
    fn began_enters_composing_and_ended_returns_to_idle() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        assert_eq!(c.state(), ComposerState::Idle);
        c.process(GestureUpdate::began(GestureKind::Pan), &mut t);
        assert_eq!(c.state(), ComposerState::Composing);
        c.process(GestureUpdate::began(GestureKind::Pinch), &mut t);
        c.process(GestureUpdate::ended(GestureKind::Pan), &mut t);
        assert_eq!(c.state(), ComposerState::Composing);
        c.process(GestureUpdate::cancelled(GestureKind::Pinch), &mut t);
        assert_eq!(c.state(), ComposerState::Idle);
    }

    #[test]
    fn changed_without_began_begins_implicitly() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        assert!(c.process(pan(1.0, 2.0), &mut t));
        assert!(c.is_active(GestureKind::Pan));
        assert_eq!(t.translation, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn began_alone_commits_nothing() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::new(0.0, 3.0, Vec2::ZERO);
        assert!(!c.process(GestureUpdate::began(GestureKind::Rotate), &mut t));
        // Target untouched.
        assert_eq!(t.scale, 3.0);
    }

    #[test]
    fn taps_are_ignored() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        assert!(!c.process(GestureUpdate::ended(GestureKind::Tap), &mut t));
        assert_eq!(c.state(), ComposerState::Idle);
    }

    #[test]
    fn wrong_delta_variant_is_ignored() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        let bad = GestureUpdate::changed(GestureKind::Pan, GestureDelta::Ratio(2.0));
        assert!(!c.process(bad, &mut t));
        assert!(t.is_identity());
    }

    #[test]
    fn factors_scale_deltas() {
        let config = ComposerConfig::default().with_factors(
            AxisFactors::default()
                .with_rotation(0.5)
                .with_scale(0.5)
                .with_translation(2.0),
        );
        let mut c = TransformComposer::new(config.with_frame(TranslationFrame::Surface));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(rotate(0.4), &mut t);
        c.process(pinch(4.0), &mut t);
        c.process(pan(1.0, 1.0), &mut t);
        assert!((t.rotation - 0.2).abs() < 1e-12);
        assert!((t.scale - 2.0).abs() < 1e-12);
        assert_eq!(t.translation, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn local_frame_rotates_pan() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        c.process(rotate(FRAC_PI_2), &mut t);
        c.process(pan(10.0, 0.0), &mut t);
        assert!((t.translation - Vec2::new(0.0, 10.0)).hypot() < 1e-9);
    }

    #[test]
    fn surface_frame_keeps_pan() {
        let mut c =
            TransformComposer::new(ComposerConfig::default().with_frame(TranslationFrame::Surface));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(rotate(FRAC_PI_2), &mut t);
        c.process(pinch(2.0), &mut t);
        c.process(pan(10.0, 0.0), &mut t);
        assert_eq!(t.translation, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn frame_merges_scale_then_rotate_then_translate() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        // Pan listed first still sees the frame's scale and rotation.
        let committed = c.process_frame(&[pan(1.0, 0.0), rotate(FRAC_PI_2), pinch(3.0)], &mut t);
        assert!(committed);
        assert!((t.scale - 3.0).abs() < 1e-12);
        assert!((t.rotation - FRAC_PI_2).abs() < 1e-12);
        assert!((t.translation - Vec2::new(0.0, 3.0)).hypot() < 1e-9);
    }

    #[test]
    fn frame_commits_once() {
        struct Counting(usize, CumulativeTransform);
        impl TransformTarget for Counting {
            fn commit(&mut self, transform: &CumulativeTransform) {
                self.0 += 1;
                self.1 = *transform;
            }
        }
        let mut c = TransformComposer::default();
        let mut target = Counting(0, CumulativeTransform::IDENTITY);
        c.process_frame(&[pan(1.0, 0.0), pan(2.0, 0.0), pinch(1.5)], &mut target);
        assert_eq!(target.0, 1);
        assert!((target.1.scale - 1.5).abs() < 1e-12);
        // Nothing staged, nothing committed.
        assert!(!c.process_frame(&[], &mut target));
        assert_eq!(target.0, 1);
    }

    #[test]
    fn cancel_discards_only_pending_delta() {
        let mut c =
            TransformComposer::new(ComposerConfig::default().with_frame(TranslationFrame::Surface));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(GestureUpdate::began(GestureKind::Pan), &mut t);
        c.process(pan(1.0, 0.0), &mut t);
        c.process(pan(1.0, 0.0), &mut t);
        c.stage(pan(5.0, 0.0));
        c.stage(GestureUpdate::cancelled(GestureKind::Pan));
        c.flush(&mut t);
        assert_eq!(t.translation, Vec2::new(2.0, 0.0));
        assert_eq!(c.transform().translation, Vec2::new(2.0, 0.0));
        assert_eq!(c.state(), ComposerState::Idle);
    }

    #[test]
    fn cancel_all_keeps_transform() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        c.process(pinch(2.0), &mut t);
        c.stage(pinch(2.0));
        c.cancel_all();
        assert_eq!(c.state(), ComposerState::Idle);
        assert!(!c.flush(&mut t));
        assert!((t.scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn reset_commits_identity() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        c.process(pinch(2.0), &mut t);
        c.reset(&mut t);
        assert!(t.is_identity());
        assert!(c.transform().is_identity());
        assert_eq!(c.state(), ComposerState::Idle);
    }

    #[test]
    fn scale_constraint_clamps() {
        let mut c = TransformComposer::default()
            .with_constraints(Constraints::none().with_scale(ScaleRange::new(0.5, 3.0)));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(pinch(5.0), &mut t);
        assert_eq!(t.scale, 3.0);
    }

    #[test]
    fn clamped_pinch_never_ends_above_bound() {
        let constraints = Constraints::none()
            .with_scale(ScaleRange::new(0.5, 3.0))
            .with_rotation(AngleRange::new(-FRAC_PI_4, FRAC_PI_4));
        for i in 1..2000 {
            let start = 0.5 + f64::from(i) * 0.00125;
            let mut c = TransformComposer::default().with_constraints(constraints.clone());
            let mut t = CumulativeTransform::IDENTITY;
            c.process(pinch(start), &mut t);
            c.process(pinch(5.0), &mut t);
            assert_eq!(t.scale, 3.0, "start = {start}");

            let angle = f64::from(i) * (FRAC_PI_4 / 2000.0);
            c.process(rotate(angle), &mut t);
            c.process(rotate(1.0), &mut t);
            assert_eq!(t.rotation, FRAC_PI_4, "angle = {angle}");
        }
    }

    #[test]
    fn cancelled_rubber_band_settles_back() {
        let bounds = TranslationBounds::new(Rect::new(-10.0, -10.0, 10.0, 10.0))
            .with_policy(BoundPolicy::rubber_band(20.0));
        let mut c = TransformComposer::new(
            ComposerConfig::default().with_frame(TranslationFrame::Surface),
        )
        .with_constraints(Constraints::none().with_translation(bounds));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(pan(30.0, 0.0), &mut t);
        assert!(t.translation.x > 10.0);
        assert!(c.process(GestureUpdate::cancelled(GestureKind::Pan), &mut t));
        assert_eq!(t.translation, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn cancel_all_leaves_rubber_band_overshoot_for_next_gesture() {
        let range = ScaleRange::new(0.5, 2.0).with_policy(BoundPolicy::rubber_band(0.5));
        let mut c = TransformComposer::default()
            .with_constraints(Constraints::none().with_scale(range));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(pinch(4.0), &mut t);
        let stretched = t.scale;
        assert!(stretched > 2.0);
        c.cancel_all();
        assert!(!c.flush(&mut t));
        assert_eq!(t.scale, stretched);
        // The next pinch on that axis settles when it ends.
        c.process(GestureUpdate::began(GestureKind::Pinch), &mut t);
        c.process(GestureUpdate::ended(GestureKind::Pinch), &mut t);
        assert_eq!(t.scale, 2.0);
    }

    #[test]
    fn rotation_wraps_when_normalizing() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        for _ in 0..5 {
            c.process(rotate(FRAC_PI_2), &mut t);
        }
        assert!((t.rotation - FRAC_PI_2).abs() < 1e-9, "rotation = {}", t.rotation);

        let mut c = TransformComposer::new(
            ComposerConfig::default().with_normalize_rotation(false),
        );
        let mut t = CumulativeTransform::IDENTITY;
        for _ in 0..5 {
            c.process(rotate(FRAC_PI_2), &mut t);
        }
        assert!((t.rotation - 5.0 * FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn ended_settles_rubber_band() {
        let bounds = TranslationBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_policy(BoundPolicy::rubber_band(20.0));
        let mut c = TransformComposer::new(
            ComposerConfig::default().with_frame(TranslationFrame::Surface),
        )
        .with_constraints(Constraints::none().with_translation(bounds));
        let mut t = CumulativeTransform::IDENTITY;
        c.process(GestureUpdate::began(GestureKind::Pan), &mut t);
        c.process(pan(30.0, 5.0), &mut t);
        assert!(t.translation.x > 10.0);
        assert!(c.process(GestureUpdate::ended(GestureKind::Pan), &mut t));
        assert_eq!(t.translation.x, 10.0);
        assert_eq!(t.translation.y, 5.0);
    }

    #[test]
    fn swapped_constraint_applies_to_next_contribution() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        c.process(rotate(1.0), &mut t);
        c.set_constraints(Constraints::none().with_rotation(AngleRange::new(-0.5, 0.5)));
        // Already outside: never pushed further, never yanked back.
        c.process(rotate(0.2), &mut t);
        assert!((t.rotation - 1.0).abs() < 1e-12);
        c.process(rotate(-0.2), &mut t);
        assert!((t.rotation - 0.8).abs() < 1e-12);
    }

    #[test]
    fn config_change_refused_while_composing() {
        let mut c = TransformComposer::default();
        let mut t = CumulativeTransform::IDENTITY;
        c.process(GestureUpdate::began(GestureKind::Pan), &mut t);
        let surface = ComposerConfig::default().with_frame(TranslationFrame::Surface);
        assert!(!c.set_config(surface));
        assert_eq!(c.config().frame, TranslationFrame::Local);
        c.process(GestureUpdate::ended(GestureKind::Pan), &mut t);
        assert!(c.set_config(surface));
        assert_eq!(c.config().frame, TranslationFrame::Surface);
    }
}
