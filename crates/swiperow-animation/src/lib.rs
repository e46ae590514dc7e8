//! Animation primitives for swipeable rows.
//!
//! Animations are driven by frame timestamps handed in by the host, never by
//! sleeping. A running animation lives in an [`AnimationSlot`]; every start or
//! cancel bumps the slot generation, so a completion carrying an outdated
//! [`AnimationToken`] is recognised and dropped.

mod clock;
mod easing;
mod offset_animation;
mod slot;

pub use clock::*;
pub use easing::*;
pub use offset_animation::*;
pub use slot::*;
