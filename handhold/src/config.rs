// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use handhold_compose::{AxisFactors, ComposerConfig, TranslationFrame};
use handhold_gesture::{AdapterConfig, ManipulationType, TouchRequirements};

/// Settings of a [`Manipulator`](crate::Manipulator) that only change
/// between gestures.
///
/// Changes made while a gesture is in progress are queued and take effect
/// once every gesture has ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManipulatorConfig {
    mask: ManipulationType,
    touches: TouchRequirements,
    composer: ComposerConfig,
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self::new(ManipulationType::all())
    }
}

impl ManipulatorConfig {
    /// Config installing the recognizers in `mask`, with default touch
    /// counts, unit factors, local translation frame and rotation wrapping.
    #[must_use]
    pub fn new(mask: ManipulationType) -> Self {
        Self {
            mask,
            touches: TouchRequirements::default(),
            composer: ComposerConfig::default(),
        }
    }

    /// Replaces the manipulation mask.
    #[must_use]
    pub fn with_manipulation_type(mut self, mask: ManipulationType) -> Self {
        self.mask = mask;
        self
    }

    /// Replaces the touch requirements. They are normalized.
    #[must_use]
    pub fn with_touches(mut self, touches: TouchRequirements) -> Self {
        self.touches = touches.normalized();
        self
    }

    /// Replaces the per-axis factors. Non-finite factors become `1.0`.
    #[must_use]
    pub fn with_factors(mut self, factors: AxisFactors) -> Self {
        self.composer = self.composer.with_factors(factors);
        self
    }

    /// Replaces the translation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: TranslationFrame) -> Self {
        self.composer = self.composer.with_frame(frame);
        self
    }

    /// Enables or disables keeping rotation in `(-pi, pi]`.
    #[must_use]
    pub fn with_normalize_rotation(mut self, normalize: bool) -> Self {
        self.composer = self.composer.with_normalize_rotation(normalize);
        self
    }

    /// Installed recognizers.
    #[must_use]
    pub fn manipulation_type(&self) -> ManipulationType {
        self.mask
    }

    /// Touch requirements.
    #[must_use]
    pub fn touches(&self) -> TouchRequirements {
        self.touches
    }

    /// Per-axis factors.
    #[must_use]
    pub fn factors(&self) -> AxisFactors {
        self.composer.factors
    }

    /// Translation frame.
    #[must_use]
    pub fn frame(&self) -> TranslationFrame {
        self.composer.frame
    }

    /// Whether rotation is kept in `(-pi, pi]`.
    #[must_use]
    pub fn normalize_rotation(&self) -> bool {
        self.composer.normalize_rotation
    }

    pub(crate) fn composer(&self) -> ComposerConfig {
        self.composer
    }

    pub(crate) fn adapter(&self, enabled: bool) -> AdapterConfig {
        AdapterConfig {
            enabled,
            mask: self.mask,
            touches: self.touches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_normalizes_inputs() {
        let config = ManipulatorConfig::new(ManipulationType::TRANSLATE)
            .with_touches(TouchRequirements::default().with_pan(3, 1))
            .with_factors(AxisFactors {
                rotation: f64::NAN,
                scale: 0.5,
                translation: 2.0,
            });
        assert_eq!(config.touches().pan_min(), 1);
        assert_eq!(config.touches().pan_max(), 3);
        assert_eq!(config.factors().rotation, 1.0);
        assert_eq!(config.factors().scale, 0.5);
    }

    #[test]
    fn defaults() {
        let config = ManipulatorConfig::default();
        assert_eq!(config.manipulation_type(), ManipulationType::all());
        assert_eq!(config.frame(), TranslationFrame::Local);
        assert!(config.normalize_rotation());
        let adapter = config.adapter(false);
        assert!(!adapter.enabled);
        assert_eq!(adapter.mask, ManipulationType::all());
    }
}
