// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use core::f64::consts::{PI, TAU};

use kurbo::{Affine, Point, Vec2};

/// The composed manipulation state of a target.
///
/// Rotation is in radians, scale is a strictly positive uniform factor and
/// translation is in the target's parent space. The affine form is
/// `T * R * S` about the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CumulativeTransform {
    /// Rotation in radians.
    pub rotation: f64,
    /// Uniform scale factor, strictly positive.
    pub scale: f64,
    /// Translation.
    pub translation: Vec2,
}

impl Default for CumulativeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CumulativeTransform {
    /// No rotation, unit scale, no translation.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    ///
    /// A non-positive or non-finite scale is replaced with `1.0`.
    #[must_use]
    pub fn new(rotation: f64, scale: f64, translation: Vec2) -> Self {
        Self {
            rotation,
            scale: if scale.is_finite() && scale > 0.0 {
                scale
            } else {
                1.0
            },
            translation,
        }
    }

    /// The affine `T * R * S` about the origin.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::rotate(self.rotation) * Affine::scale(self.scale)
    }

    /// The affine that rotates and scales about `pivot` before translating.
    ///
    /// Use this when the target's anchor point is not the origin of its
    /// coordinate space, e.g. the center of a view.
    #[must_use]
    pub fn to_affine_about(&self, pivot: Point) -> Affine {
        let pivot = pivot.to_vec2();
        Affine::translate(self.translation + pivot)
            * Affine::rotate(self.rotation)
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }

    /// Returns `true` if this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Component-wise comparison with an absolute tolerance.
    ///
    /// Scale is compared in log space so the tolerance is relative.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.rotation - other.rotation).abs() <= epsilon
            && (self.scale.ln() - other.scale.ln()).abs() <= epsilon
            && (self.translation - other.translation).hypot() <= epsilon
    }

    /// Maps a vector from the target's local frame into its parent frame.
    pub(crate) fn local_to_parent(&self, v: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y) * self.scale
    }
}

/// Wraps an angle into `(-pi, pi]`.
pub(crate) fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle - TAU * ((angle + PI) / TAU).floor();
    // `wrapped` is in [-pi, pi); move the closed end to +pi.
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Receiver of committed transforms.
///
/// [`TransformComposer`](crate::TransformComposer) calls [`Self::commit`]
/// once per tick with the complete new transform, never a partial one.
pub trait TransformTarget {
    /// Replace the target's transform.
    fn commit(&mut self, transform: &CumulativeTransform);
}

impl TransformTarget for CumulativeTransform {
    fn commit(&mut self, transform: &CumulativeTransform) {
        *self = *transform;
    }
}

impl TransformTarget for Affine {
    /// Stores [`CumulativeTransform::to_affine`].
    fn commit(&mut self, transform: &CumulativeTransform) {
        *self = transform.to_affine();
    }
}

impl<T: TransformTarget + ?Sized> TransformTarget for &mut T {
    fn commit(&mut self, transform: &CumulativeTransform) {
        (**self).commit(transform);
    }
}
