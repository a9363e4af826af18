// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// The kinds of manipulation a manipulator supports.
    ///
    /// Bit positions follow the recognizer order of [`GestureKind::ALL`].
    /// Several flags may be set at once; each set flag installs one recognizer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ManipulationType: u8 {
        /// Single tap, reported to the delegate.
        const TAP        = 1 << 0;
        /// Double tap, reported to the delegate.
        const DOUBLE_TAP = 1 << 1;
        /// Pan gesture moving the target.
        const TRANSLATE  = 1 << 2;
        /// Pinch gesture scaling the target.
        const SCALE      = 1 << 3;
        /// Rotation gesture rotating the target.
        const ROTATE     = 1 << 4;
    }
}

impl ManipulationType {
    /// No manipulation at all.
    pub const NONE: Self = Self::empty();

    /// The three manipulations that change the transform.
    pub const CONTINUOUS: Self = Self::TRANSLATE.union(Self::SCALE).union(Self::ROTATE);

    /// The discrete manipulations reported to the delegate.
    pub const TAPS: Self = Self::TAP.union(Self::DOUBLE_TAP);

    /// Returns `true` if the recognizer for `kind` is part of this set.
    #[must_use]
    pub const fn has(self, kind: GestureKind) -> bool {
        self.contains(kind.manipulation())
    }

    /// Recognizer kinds in this set, in recognizer order.
    pub fn kinds(self) -> impl Iterator<Item = GestureKind> {
        GestureKind::ALL.into_iter().filter(move |k| self.has(*k))
    }
}

impl From<GestureKind> for ManipulationType {
    fn from(kind: GestureKind) -> Self {
        kind.manipulation()
    }
}

/// A recognizer kind.
///
/// Each kind corresponds to exactly one [`ManipulationType`] flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Single tap recognizer.
    Tap,
    /// Double tap recognizer.
    DoubleTap,
    /// Pan (translation) recognizer.
    Pan,
    /// Pinch (scale) recognizer.
    Pinch,
    /// Rotation recognizer.
    Rotate,
}

impl GestureKind {
    /// All kinds in recognizer order.
    pub const ALL: [Self; 5] = [
        Self::Tap,
        Self::DoubleTap,
        Self::Pan,
        Self::Pinch,
        Self::Rotate,
    ];

    /// The manipulation flag enabling this recognizer.
    #[must_use]
    pub const fn manipulation(self) -> ManipulationType {
        match self {
            Self::Tap => ManipulationType::TAP,
            Self::DoubleTap => ManipulationType::DOUBLE_TAP,
            Self::Pan => ManipulationType::TRANSLATE,
            Self::Pinch => ManipulationType::SCALE,
            Self::Rotate => ManipulationType::ROTATE,
        }
    }

    /// Continuous gestures carry transform deltas; taps do not.
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Pan | Self::Pinch | Self::Rotate)
    }

    /// Processing order inside one tick, lowest first.
    ///
    /// Pinch, rotate and pan are applied before taps, which only notify.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Pinch => 0,
            Self::Rotate => 1,
            Self::Pan => 2,
            Self::Tap => 3,
            Self::DoubleTap => 4,
        }
    }
}

/// Lifecycle stage of a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The gesture was recognized and starts producing deltas.
    Began,
    /// The gesture moved; the update carries a delta.
    Changed,
    /// The gesture finished normally. Taps only ever report this phase.
    Ended,
    /// The host cancelled the gesture.
    Cancelled,
}

impl GesturePhase {
    /// `true` for [`Self::Ended`] and [`Self::Cancelled`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}
