//! Core types shared by the swipeable row crates.
//!
//! - [`SwipeAction`] / [`SwipeActions`] - icon + handler records attached to a row side
//! - [`Side`] / [`SwipeState`] - which actions are exposed and what the row is doing
//! - [`Point`] / [`Rect`] - pointer positions and slot bounds
//! - [`collections::map`] - hash map aliases used across the workspace

pub mod action;
pub mod collections;
pub mod geometry;
pub mod state;

pub use action::*;
pub use geometry::{Point, Rect};
pub use state::*;
