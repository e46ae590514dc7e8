//! Generation-guarded holder for the animation a row is running.

use crate::offset_animation::{AnimationFrame, OffsetAnimation};

/// Identifies one started animation.
///
/// A completion is applied only while its token is still current; starting a
/// new animation or cancelling invalidates every token handed out before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken {
    generation: u64,
}

impl AnimationToken {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Result of advancing the slot by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotFrame {
    pub token: AnimationToken,
    pub frame: AnimationFrame,
}

/// Holds at most one running [`OffsetAnimation`].
#[derive(Debug, Default)]
pub struct AnimationSlot {
    generation: u64,
    running: Option<(AnimationToken, OffsetAnimation)>,
}

impl AnimationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any running animation and returns the new token.
    pub fn start(&mut self, animation: OffsetAnimation) -> AnimationToken {
        self.generation += 1;
        let token = AnimationToken {
            generation: self.generation,
        };
        self.running = Some((token, animation));
        token
    }

    /// Drops the running animation and invalidates outstanding tokens.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.running.take().is_some() {
            log::trace!("animation cancelled, generation now {}", self.generation);
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<AnimationToken> {
        self.running.as_ref().map(|(token, _)| *token)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.current() == Some(token)
    }

    /// Target value of the running animation.
    pub fn target(&self) -> Option<f32> {
        self.running.as_ref().map(|(_, animation)| animation.target())
    }

    /// Samples the running animation. The animation stays in the slot until
    /// [`AnimationSlot::finish`] is called with its token.
    pub fn tick(&mut self, frame_time_nanos: u64) -> Option<SlotFrame> {
        let (token, animation) = self.running.as_mut()?;
        Some(SlotFrame {
            token: *token,
            frame: animation.sample(frame_time_nanos),
        })
    }

    /// Retires the animation owning `token` and returns its target.
    ///
    /// Returns `None` for stale tokens, leaving the slot untouched.
    pub fn finish(&mut self, token: AnimationToken) -> Option<f32> {
        if !self.is_current(token) {
            log::trace!(
                "discarding stale animation completion (token {}, current {})",
                token.generation,
                self.generation
            );
            return None;
        }
        self.running.take().map(|(_, animation)| animation.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::time::Duration;

    fn tween(to: f32) -> OffsetAnimation {
        OffsetAnimation::new(0.0, to, Duration::from_millis(100), Easing::Linear)
    }

    #[test]
    fn restarting_invalidates_previous_token() {
        let mut slot = AnimationSlot::new();
        let first = slot.start(tween(80.0));
        let second = slot.start(tween(-80.0));

        assert!(!slot.is_current(first));
        assert_eq!(slot.finish(first), None);
        assert!(slot.is_running());
        assert_eq!(slot.finish(second), Some(-80.0));
        assert!(!slot.is_running());
    }

    #[test]
    fn cancel_invalidates_token_even_when_idle() {
        let mut slot = AnimationSlot::new();
        let token = slot.start(tween(80.0));
        slot.cancel();
        assert_eq!(slot.finish(token), None);
        let generation = slot.generation();
        slot.cancel();
        assert_eq!(slot.generation(), generation + 1);
    }

    #[test]
    fn tick_without_animation_is_none() {
        let mut slot = AnimationSlot::new();
        assert_eq!(slot.tick(0), None);
    }
}
