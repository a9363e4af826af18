// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::fmt;

use handhold_constraint::{RotationConstraint, ScaleConstraint, TranslationConstraint};

/// Per-axis sensitivity factors.
///
/// Rotation and translation deltas are multiplied by their factor; scale
/// ratios are raised to the power of theirs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFactors {
    /// Rotation factor.
    pub rotation: f64,
    /// Scale factor, used as an exponent.
    pub scale: f64,
    /// Translation factor.
    pub translation: f64,
}

impl Default for AxisFactors {
    fn default() -> Self {
        Self {
            rotation: 1.0,
            scale: 1.0,
            translation: 1.0,
        }
    }
}

impl AxisFactors {
    /// Replaces the rotation factor.
    #[must_use]
    pub fn with_rotation(mut self, factor: f64) -> Self {
        self.rotation = factor;
        self.normalized()
    }

    /// Replaces the scale factor.
    #[must_use]
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale = factor;
        self.normalized()
    }

    /// Replaces the translation factor.
    #[must_use]
    pub fn with_translation(mut self, factor: f64) -> Self {
        self.translation = factor;
        self.normalized()
    }

    /// Returns a copy with non-finite factors replaced by `1.0`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let finite = |f: f64| if f.is_finite() { f } else { 1.0 };
        Self {
            rotation: finite(self.rotation),
            scale: finite(self.scale),
            translation: finite(self.translation),
        }
    }
}

/// Coordinate frame pan vectors are interpreted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TranslationFrame {
    /// Pan vectors are in the target's rotated and scaled frame, so they are
    /// mapped through the current rotation and scale before being added.
    #[default]
    Local,
    /// Pan vectors are added to the translation unchanged.
    Surface,
}

/// Composer settings that are fixed for the duration of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposerConfig {
    /// Per-axis sensitivity.
    pub factors: AxisFactors,
    /// Frame for pan vectors.
    pub frame: TranslationFrame,
    /// Keep the cumulative rotation in `(-pi, pi]`.
    pub normalize_rotation: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            factors: AxisFactors::default(),
            frame: TranslationFrame::Local,
            normalize_rotation: true,
        }
    }
}

impl ComposerConfig {
    /// Replaces the factors.
    #[must_use]
    pub fn with_factors(mut self, factors: AxisFactors) -> Self {
        self.factors = factors.normalized();
        self
    }

    /// Replaces the translation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: TranslationFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Enables or disables rotation wrapping.
    #[must_use]
    pub fn with_normalize_rotation(mut self, normalize: bool) -> Self {
        self.normalize_rotation = normalize;
        self
    }

    /// Returns a copy with non-finite factors replaced by `1.0`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            factors: self.factors.normalized(),
            ..self
        }
    }
}

/// Optional constraint per axis.
///
/// Handles are shared and read-only; replacing one affects the next
/// contribution only.
#[derive(Clone, Default)]
pub struct Constraints {
    /// Rotation constraint.
    pub rotation: Option<Rc<dyn RotationConstraint>>,
    /// Scale constraint.
    pub scale: Option<Rc<dyn ScaleConstraint>>,
    /// Translation constraint.
    pub translation: Option<Rc<dyn TranslationConstraint>>,
}

impl fmt::Debug for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraints")
            .field("rotation", &self.rotation.is_some())
            .field("scale", &self.scale.is_some())
            .field("translation", &self.translation.is_some())
            .finish()
    }
}

impl Constraints {
    /// No constraints on any axis.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the rotation constraint.
    #[must_use]
    pub fn with_rotation(mut self, constraint: impl RotationConstraint + 'static) -> Self {
        self.rotation = Some(Rc::new(constraint));
        self
    }

    /// Sets the scale constraint.
    #[must_use]
    pub fn with_scale(mut self, constraint: impl ScaleConstraint + 'static) -> Self {
        self.scale = Some(Rc::new(constraint));
        self
    }

    /// Sets the translation constraint.
    #[must_use]
    pub fn with_translation(mut self, constraint: impl TranslationConstraint + 'static) -> Self {
        self.translation = Some(Rc::new(constraint));
        self
    }

    /// Returns `true` if no axis is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none() && self.scale.is_none() && self.translation.is_none()
    }
}
