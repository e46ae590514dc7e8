//! Time-based animation of a single offset value.

use std::time::Duration;

use crate::easing::Easing;

/// Sampled value of an animation at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub value: f32,
    pub finished: bool,
}

/// Eased tween from one offset to another.
///
/// The first sampled frame becomes the start time, matching how frame-clock
/// driven animations start on the next frame rather than at creation.
#[derive(Clone, Debug)]
pub struct OffsetAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    start_frame_nanos: Option<u64>,
}

impl OffsetAnimation {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            start_frame_nanos: None,
        }
    }

    pub fn from_value(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Zero-length animations complete on their first sample.
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero() || self.from == self.to
    }

    pub fn sample(&mut self, frame_time_nanos: u64) -> AnimationFrame {
        if self.is_instant() {
            return AnimationFrame {
                value: self.to,
                finished: true,
            };
        }

        let start = *self.start_frame_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start);
        let total = u64::try_from(self.duration.as_nanos()).unwrap_or(u64::MAX);
        if elapsed >= total {
            return AnimationFrame {
                value: self.to,
                finished: true,
            };
        }

        let fraction = (elapsed as f64 / total as f64) as f32;
        let eased = self.easing.transform(fraction);
        AnimationFrame {
            value: self.from + (self.to - self.from) * eased,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: u64 = 16_000_000;

    #[test]
    fn first_frame_starts_the_clock() {
        let mut animation =
            OffsetAnimation::new(-80.0, 0.0, Duration::from_millis(160), Easing::Linear);
        let first = animation.sample(5 * FRAME);
        assert_eq!(first.value, -80.0);
        assert!(!first.finished);

        let halfway = animation.sample(10 * FRAME);
        assert!((halfway.value + 40.0).abs() < 0.01);

        let done = animation.sample(15 * FRAME);
        assert_eq!(done.value, 0.0);
        assert!(done.finished);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut animation = OffsetAnimation::new(-80.0, 0.0, Duration::ZERO, Easing::default());
        assert_eq!(
            animation.sample(0),
            AnimationFrame {
                value: 0.0,
                finished: true
            }
        );
    }

    #[test]
    fn time_going_backwards_holds_the_start_value() {
        let mut animation =
            OffsetAnimation::new(0.0, 80.0, Duration::from_millis(100), Easing::Linear);
        animation.sample(10 * FRAME);
        let frame = animation.sample(FRAME);
        assert_eq!(frame.value, 0.0);
        assert!(!frame.finished);
    }
}
