//! The decision applied when a drag ends.

use swiperow_core::Side;

/// Inputs of [`resolve_settle`], captured at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleInput {
    /// Visible panel offset, already clamped to the side's maximum.
    pub offset: f32,
    /// Unclamped drag travel: drag origin plus translation.
    pub travel: f32,
    /// Finger movement of this drag alone. Its sign is the drag direction.
    pub translation: f32,
    /// Horizontal release velocity in px/s.
    pub velocity: f32,
    pub max_offset_left: f32,
    pub max_offset_right: f32,
    pub fling_velocity_threshold: f32,
    pub commit_overshoot: f32,
}

impl SettleInput {
    fn max_offset(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.max_offset_left,
            Side::Right => self.max_offset_right,
        }
    }
}

/// Where a released row comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Close,
    /// Fully open, exposing every action of the side.
    Open(Side),
    /// Fire the outermost action of the side, then close.
    Commit(Side),
}

/// Resolves the resting outcome of a released drag.
///
/// Checks run in order and the first match wins:
/// 1. a flick agreeing with the drag direction: towards the exposed side it
///    opens that side fully, or commits when the travel is already past the
///    commit threshold; back towards the resting position it closes;
/// 2. travel past the commit threshold commits, an offset past half the
///    side's width opens;
/// 3. otherwise the row closes.
///
/// A side without actions never opens or commits.
pub fn resolve_settle(input: &SettleInput) -> SettleOutcome {
    let Some(side) = Side::from_offset(input.travel) else {
        return SettleOutcome::Close;
    };
    let max_offset = input.max_offset(side);
    if max_offset <= 0.0 {
        return SettleOutcome::Close;
    }

    let travel = input.travel.abs();
    let commit_threshold = max_offset + input.commit_overshoot;

    let flick_direction = Side::from_offset(input.velocity)
        .filter(|_| input.velocity.abs() > input.fling_velocity_threshold);
    if flick_direction.is_some() && flick_direction == Side::from_offset(input.translation) {
        return if flick_direction != Some(side) {
            SettleOutcome::Close
        } else if travel > commit_threshold {
            SettleOutcome::Commit(side)
        } else {
            SettleOutcome::Open(side)
        };
    }

    if travel > commit_threshold {
        return SettleOutcome::Commit(side);
    }
    if input.offset.abs() > max_offset * 0.5 {
        return SettleOutcome::Open(side);
    }
    SettleOutcome::Close
}
