//! Swipe interaction for list rows.
//!
//! # Architecture
//!
//! - [`SwipeRowState`] - the per-row controller: drag tracking, panel offset,
//!   settle animations and action dispatch
//! - [`resolve_settle`] - the decision applied when a drag ends
//! - [`SwipeRowDelegate`] - optional capability query consulted before a drag
//! - [`PanGestureDetector`] / [`VelocityTracker`] - raw pointer events to pan phases
//! - [`SwipeRowSpec`] - geometry, thresholds and animation configuration
//!
//! # Example
//!
//! ```rust,ignore
//! let state = SwipeRowState::new();
//! state.set_right_actions([SwipeAction::new("trash", || delete_message())]);
//!
//! state.on_gesture_begin(Point::ZERO);
//! state.on_gesture_change(-90.0, 0.0);
//! state.on_gesture_end(-90.0, 0.0);
//! while state.on_frame(clock.frame_time_nanos()) {}
//! assert_eq!(state.current_offset(), -80.0);
//! ```

mod delegate;
pub mod gesture_constants;
mod pan;
mod settle;
mod spec;
mod swipe_row_state;
mod velocity;

pub use delegate::*;
pub use pan::*;
pub use settle::*;
pub use spec::*;
pub use swipe_row_state::*;
pub use velocity::*;
