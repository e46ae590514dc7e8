//! Host-side plumbing for swipeable list rows.
//!
//! - [`SwipeRow`] - one row: pointer routing into its [`SwipeRowState`] and
//!   action button layout
//! - [`SwipeListHost`] - the visible rows of a list, with recycling and the
//!   one-open-row policy
//! - [`RowRecyclePool`] - recycled rows grouped by content type

mod layout;
mod list_host;
mod recycle_pool;
mod swipe_row;

pub use layout::*;
pub use list_host::*;
pub use recycle_pool::*;
pub use swipe_row::*;

pub use swiperow_core::{ActionIcon, Point, Rect, RestingState, Side, SwipeAction, SwipeState};
pub use swiperow_foundation::{
    PointerEventKind, PointerSample, SwipeRowDelegate, SwipeRowSpec, SwipeRowState,
    SwipeSpecError,
};
