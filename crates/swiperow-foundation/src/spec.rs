//! Row configuration.

use std::fmt;
use std::time::Duration;

use swiperow_animation::Easing;

use crate::gesture_constants::{
    DEFAULT_COMMIT_OVERSHOOT, DEFAULT_FLING_VELOCITY_THRESHOLD, DEFAULT_SLOT_WIDTH,
};

/// Default length of settle and dismiss animations.
pub const DEFAULT_SWIPE_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Specification for a swipeable row's geometry and settle behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeRowSpec {
    /// Width of one action slot. A side's maximum offset is
    /// `slot_width * action_count`.
    pub slot_width: f32,
    /// Length of every state-driven animation. Zero snaps instantly.
    pub swipe_animation_duration: Duration,
    /// Release speed above which a drag counts as a flick, in px/s.
    pub fling_velocity_threshold: f32,
    /// Travel beyond the fully open position needed to commit the outermost
    /// action.
    pub commit_overshoot: f32,
    pub easing: Easing,
}

impl Default for SwipeRowSpec {
    fn default() -> Self {
        Self {
            slot_width: DEFAULT_SLOT_WIDTH,
            swipe_animation_duration: DEFAULT_SWIPE_ANIMATION_DURATION,
            fling_velocity_threshold: DEFAULT_FLING_VELOCITY_THRESHOLD,
            commit_overshoot: DEFAULT_COMMIT_OVERSHOOT,
            easing: Easing::default(),
        }
    }
}

impl SwipeRowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_width(mut self, width: f32) -> Self {
        self.slot_width = width;
        self
    }

    pub fn swipe_animation_duration(mut self, duration: Duration) -> Self {
        self.swipe_animation_duration = duration;
        self
    }

    pub fn fling_velocity_threshold(mut self, velocity: f32) -> Self {
        self.fling_velocity_threshold = velocity;
        self
    }

    pub fn commit_overshoot(mut self, overshoot: f32) -> Self {
        self.commit_overshoot = overshoot;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<(), SwipeSpecError> {
        if !self.slot_width.is_finite() || self.slot_width <= 0.0 {
            return Err(SwipeSpecError::SlotWidth(self.slot_width));
        }
        if !self.fling_velocity_threshold.is_finite() || self.fling_velocity_threshold < 0.0 {
            return Err(SwipeSpecError::FlingVelocityThreshold(
                self.fling_velocity_threshold,
            ));
        }
        if !self.commit_overshoot.is_finite() || self.commit_overshoot < 0.0 {
            return Err(SwipeSpecError::CommitOvershoot(self.commit_overshoot));
        }
        Ok(())
    }
}

/// A rejected [`SwipeRowSpec`] value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeSpecError {
    SlotWidth(f32),
    FlingVelocityThreshold(f32),
    CommitOvershoot(f32),
}

impl fmt::Display for SwipeSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeSpecError::SlotWidth(value) => {
                write!(f, "slot width must be finite and positive, got {value}")
            }
            SwipeSpecError::FlingVelocityThreshold(value) => write!(
                f,
                "fling velocity threshold must be finite and non-negative, got {value}"
            ),
            SwipeSpecError::CommitOvershoot(value) => write!(
                f,
                "commit overshoot must be finite and non-negative, got {value}"
            ),
        }
    }
}

impl std::error::Error for SwipeSpecError {}
