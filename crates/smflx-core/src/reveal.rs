//! One-shot viewport reveal trigger.
//!
//! Each revealing section owns one [`RevealTrigger`]. The trigger starts
//! hidden, begins observing when its region is attached, and flips to
//! revealed the first time the visible fraction of the region reaches the
//! [`Threshold`]. After that it ignores every further sample: the transition
//! is monotonic and at most one sample is ever acted upon.

use crate::error::ThresholdError;

/// Fraction of a region that must be visible before it reveals, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Reveal once 10% of the region is visible.
    pub const DEFAULT: Self = Self(0.1);

    pub fn new(fraction: f64) -> Result<Self, ThresholdError> {
        // NaN fails both comparisons
        if fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(ThresholdError::OutOfRange(fraction))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    /// Whether a visible `ratio` reaches this threshold.
    pub fn is_reached(self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::new(fraction)
    }
}

/// What to do when the environment cannot report viewport intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFallback {
    /// Show content immediately.
    #[default]
    Reveal,
    /// Leave content in its pre-reveal state.
    Hide,
}

/// Result of feeding one intersection sample to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Sample processed, threshold not reached yet.
    Pending,
    /// This sample revealed the region; observation should stop.
    Triggered,
    /// Sample dropped: already revealed, detached, or never attached.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Observing,
    Triggered,
    Detached,
}

/// Reveal state for one section instance.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: Threshold,
    phase: Phase,
    processed: u32,
}

impl RevealTrigger {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: Phase::Idle,
            processed: 0,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.phase == Phase::Triggered
    }

    pub fn is_observing(&self) -> bool {
        self.phase == Phase::Observing
    }

    /// Number of samples that were acted upon (not [`RevealOutcome::Ignored`]).
    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Mark the region as attached.
    ///
    /// Returns `true` only on the first attachment, when the caller should
    /// start observing.
    pub fn attach(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Observing;
            true
        } else {
            false
        }
    }

    /// Feed the currently visible fraction of the region.
    pub fn observe(&mut self, ratio: f64) -> RevealOutcome {
        if self.phase != Phase::Observing {
            return RevealOutcome::Ignored;
        }
        self.processed += 1;
        if self.threshold.is_reached(ratio) {
            self.phase = Phase::Triggered;
            RevealOutcome::Triggered
        } else {
            RevealOutcome::Pending
        }
    }

    /// The region went away. A revealed trigger stays revealed.
    pub fn detach(&mut self) {
        if self.phase != Phase::Triggered {
            self.phase = Phase::Detached;
        }
    }

    /// Intersection detection is unavailable; settle according to `fallback`.
    ///
    /// Returns whether the region is now revealed.
    pub fn observation_unavailable(&mut self, fallback: RevealFallback) -> bool {
        match (self.phase, fallback) {
            (Phase::Triggered, _) => true,
            (Phase::Detached, _) => false,
            (_, RevealFallback::Reveal) => {
                self.phase = Phase::Triggered;
                true
            }
            (_, RevealFallback::Hide) => {
                self.phase = Phase::Detached;
                false
            }
        }
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(Threshold::DEFAULT)
    }
}
