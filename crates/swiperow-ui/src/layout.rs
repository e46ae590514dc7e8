//! Placement of the row content and its revealed action buttons.

use smallvec::SmallVec;
use swiperow_core::{ActionIcon, Point, Rect, Side, SwipeAction};

/// Where one action button is drawn, in row-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionSlotPlacement {
    pub side: Side,
    /// Index into the side's action list.
    pub index: usize,
    pub icon: ActionIcon,
    pub bounds: Rect,
}

/// Everything the host needs to draw a row for the current frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeRowLayout {
    /// Horizontal translation applied to the row content.
    pub content_offset_x: f32,
    pub exposed_side: Option<Side>,
    /// Visible action buttons, in display order.
    pub slots: SmallVec<[ActionSlotPlacement; 4]>,
}

impl SwipeRowLayout {
    /// The action slot containing `point`, if any.
    pub fn slot_at(&self, point: Point) -> Option<&ActionSlotPlacement> {
        self.slots.iter().find(|slot| slot.bounds.contains(point))
    }
}

/// Lays out the exposed side's buttons so they travel with the content edge.
///
/// Right actions hang off the content's trailing edge and left actions off its
/// leading edge; when fully open they exactly fill the revealed strip. Slots
/// entirely outside the row are skipped.
pub fn layout_swipe_row(
    row_width: f32,
    row_height: f32,
    offset: f32,
    slot_width: f32,
    left: &[SwipeAction],
    right: &[SwipeAction],
) -> SwipeRowLayout {
    let exposed_side = Side::from_offset(offset);
    let mut slots = SmallVec::new();

    match exposed_side {
        Some(Side::Right) => {
            let trailing_edge = row_width + offset;
            for (index, action) in right.iter().enumerate() {
                let x = trailing_edge + index as f32 * slot_width;
                if x >= row_width {
                    break;
                }
                slots.push(ActionSlotPlacement {
                    side: Side::Right,
                    index,
                    icon: action.icon().clone(),
                    bounds: Rect::new(x, 0.0, slot_width, row_height),
                });
            }
        }
        Some(Side::Left) => {
            let count = left.len() as f32;
            for (index, action) in left.iter().enumerate() {
                let x = offset - (count - index as f32) * slot_width;
                if x + slot_width <= 0.0 {
                    continue;
                }
                slots.push(ActionSlotPlacement {
                    side: Side::Left,
                    index,
                    icon: action.icon().clone(),
                    bounds: Rect::new(x, 0.0, slot_width, row_height),
                });
            }
        }
        None => {}
    }

    SwipeRowLayout {
        content_offset_x: offset,
        exposed_side,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(names: &[&str]) -> Vec<SwipeAction> {
        names.iter().map(|name| SwipeAction::without_handler(*name)).collect()
    }

    #[test]
    fn closed_row_has_no_slots() {
        let layout = layout_swipe_row(320.0, 44.0, 0.0, 80.0, &actions(&["a"]), &actions(&["b"]));
        assert_eq!(layout.exposed_side, None);
        assert!(layout.slots.is_empty());
    }

    #[test]
    fn fully_open_right_fills_trailing_strip() {
        let right = actions(&["more", "trash"]);
        let layout = layout_swipe_row(320.0, 44.0, -160.0, 80.0, &[], &right);
        let xs: Vec<f32> = layout.slots.iter().map(|slot| slot.bounds.x).collect();
        assert_eq!(xs, vec![160.0, 240.0]);
        assert_eq!(layout.slots[1].icon.name(), "trash");
    }

    #[test]
    fn partially_open_right_shows_inner_slot_first() {
        let right = actions(&["more", "trash"]);
        let layout = layout_swipe_row(320.0, 44.0, -60.0, 80.0, &[], &right);
        assert_eq!(layout.slots.len(), 1);
        assert_eq!(layout.slots[0].index, 0);
        assert_eq!(layout.slots[0].bounds.x, 260.0);
    }

    #[test]
    fn left_slots_track_leading_edge() {
        let left = actions(&["archive", "flag"]);
        let full = layout_swipe_row(320.0, 44.0, 160.0, 80.0, &left, &[]);
        let xs: Vec<f32> = full.slots.iter().map(|slot| slot.bounds.x).collect();
        assert_eq!(xs, vec![0.0, 80.0]);

        let partial = layout_swipe_row(320.0, 44.0, 50.0, 80.0, &left, &[]);
        assert_eq!(partial.slots.len(), 1);
        assert_eq!(partial.slots[0].icon.name(), "flag");
        assert_eq!(partial.slots[0].bounds.x, -30.0);
    }

    #[test]
    fn slot_hit_testing() {
        let right = actions(&["trash"]);
        let layout = layout_swipe_row(320.0, 44.0, -80.0, 80.0, &[], &right);
        assert_eq!(layout.slot_at(Point::new(300.0, 10.0)).map(|s| s.index), Some(0));
        assert!(layout.slot_at(Point::new(200.0, 10.0)).is_none());
    }
}
