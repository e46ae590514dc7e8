//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels.

/// Horizontal travel from the press position after which a press becomes a
/// swipe. A press released before crossing it is reported as a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum tracked velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Samples older than this, relative to the newest one, do not contribute to
/// the velocity estimate.
pub const VELOCITY_HORIZON_NANOS: u64 = 100_000_000;

/// Default width of one action slot.
pub const DEFAULT_SLOT_WIDTH: f32 = 80.0;

/// Default minimum release velocity for a flick, in pixels per second.
pub const DEFAULT_FLING_VELOCITY_THRESHOLD: f32 = 500.0;

/// Default travel past the fully open position needed to commit.
pub const DEFAULT_COMMIT_OVERSHOOT: f32 = 40.0;
