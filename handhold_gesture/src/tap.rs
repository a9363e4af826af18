// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single / double tap disambiguation without host require-to-fail wiring.
//!
//! Hosts whose recognizers cannot express "single tap waits for double tap to
//! fail" feed raw taps into a [`TapDisambiguator`]. A tap is held back until
//! either a second tap arrives close enough in time and space (a double tap)
//! or the window expires (a single tap). A single tap is therefore never
//! reported for the first half of a double tap.
//!
//! ```
//! use handhold_gesture::{RecognizerEvent, TapConfig, TapDisambiguator, TouchInfo};
//! use kurbo::Point;
//!
//! let mut taps = TapDisambiguator::new(TapConfig::default());
//! let at = |t| TouchInfo::new(1, Point::new(100.0, 100.0)).with_timestamp(t);
//!
//! assert_eq!(taps.on_tap(at(0)), None);
//! assert_eq!(taps.on_tap(at(120)), Some(RecognizerEvent::tap(2, at(120))));
//!
//! assert_eq!(taps.on_tap(at(1000)), None);
//! assert_eq!(taps.poll(1200), None);
//! assert_eq!(taps.poll(1301), Some(RecognizerEvent::tap(1, at(1000))));
//! ```

use crate::recognizer::{RecognizerEvent, TouchInfo};

/// Timing and distance thresholds for double tap detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Longest gap between the two taps, in milliseconds.
    pub window: u64,
    /// Largest Manhattan distance between the two taps, in surface units.
    pub tolerance: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            window: 300,
            tolerance: 10.0,
        }
    }
}

impl TapConfig {
    /// Replaces the double tap window.
    #[must_use]
    pub fn with_window(mut self, window: u64) -> Self {
        self.window = window;
        self
    }

    /// Replaces the distance tolerance. Negative or NaN values become zero.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance >= 0.0 { tolerance } else { 0.0 };
        self
    }
}

/// Holds a single tap back until it is known not to start a double tap.
#[derive(Clone, Debug, Default)]
pub struct TapDisambiguator {
    config: TapConfig,
    pending: Option<TouchInfo>,
}

impl TapDisambiguator {
    /// Creates a disambiguator with the given thresholds.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config: TapConfig::default()
                .with_window(config.window)
                .with_tolerance(config.tolerance),
            pending: None,
        }
    }

    /// The active thresholds.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Feeds one raw tap.
    ///
    /// Returns a double tap when `touch` pairs with the pending tap. When it
    /// does not pair, the pending tap is released as a single tap and
    /// `touch` becomes the new pending tap.
    pub fn on_tap(&mut self, touch: TouchInfo) -> Option<RecognizerEvent> {
        let Some(first) = self.pending.take() else {
            self.pending = Some(touch);
            return None;
        };
        if self.pairs(&first, &touch) {
            #[cfg(feature = "tracing")]
            tracing::trace!(gap = touch.timestamp.saturating_sub(first.timestamp), "double tap");
            return Some(RecognizerEvent::tap(2, touch));
        }
        self.pending = Some(touch);
        Some(RecognizerEvent::tap(1, first))
    }

    /// Releases the pending tap as a single tap once the window has passed.
    pub fn poll(&mut self, now: u64) -> Option<RecognizerEvent> {
        let deadline = self.deadline()?;
        if now <= deadline {
            return None;
        }
        self.pending.take().map(|first| RecognizerEvent::tap(1, first))
    }

    /// Time after which [`Self::poll`] releases the pending tap.
    ///
    /// Hosts schedule a timer for this instant.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending
            .map(|first| first.timestamp.saturating_add(self.config.window))
    }

    /// Returns `true` while a tap is held back.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forgets the pending tap without reporting it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    fn pairs(&self, first: &TouchInfo, second: &TouchInfo) -> bool {
        if first.count != second.count {
            return false;
        }
        let Some(gap) = second.timestamp.checked_sub(first.timestamp) else {
            return false;
        };
        let d = second.location - first.location;
        gap <= self.config.window && d.x.abs() + d.y.abs() <= self.config.tolerance
    }
}
