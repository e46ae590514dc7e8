//! One swipeable row as seen by the list host.

use swiperow_core::{Point, Side, SwipeAction};
use swiperow_foundation::{PanGesture, PanGestureDetector, PointerSample, SwipeRowState};

use crate::layout::{layout_swipe_row, SwipeRowLayout};

/// What a pointer event did to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowInput {
    /// Not handled; the host may use it (selection, scrolling).
    Ignored,
    Consumed,
    /// A drag was accepted by the row's controller.
    SwipeStarted,
    /// A revealed action button was tapped and its action run.
    ActionTapped { side: Side, index: usize },
}

/// Row host: routes pointer events into a [`SwipeRowState`] and lays out the
/// revealed action buttons. Coordinates are row-local.
#[derive(Debug)]
pub struct SwipeRow {
    key: u64,
    content_type: Option<u64>,
    state: SwipeRowState,
    detector: PanGestureDetector,
    width: f32,
    height: f32,
}

impl SwipeRow {
    pub fn new(
        key: u64,
        content_type: Option<u64>,
        state: SwipeRowState,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            key,
            content_type,
            state,
            detector: PanGestureDetector::new(),
            width,
            height,
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn content_type(&self) -> Option<u64> {
        self.content_type
    }

    pub fn state(&self) -> &SwipeRowState {
        &self.state
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Points a recycled row at new list content.
    pub(crate) fn rekey(&mut self, key: u64, content_type: Option<u64>) {
        self.key = key;
        self.content_type = content_type;
        self.detector = PanGestureDetector::new();
    }

    /// Replaces both action lists.
    pub fn bind_actions(
        &self,
        left: impl IntoIterator<Item = SwipeAction>,
        right: impl IntoIterator<Item = SwipeAction>,
    ) {
        self.state.set_left_actions(left);
        self.state.set_right_actions(right);
    }

    pub fn layout(&self) -> SwipeRowLayout {
        let offset = self.state.current_offset();
        let slot_width = self.state.slot_width();
        self.state.with_actions(|actions| {
            layout_swipe_row(
                self.width,
                self.height,
                offset,
                slot_width,
                actions.side(Side::Left),
                actions.side(Side::Right),
            )
        })
    }

    pub fn pointer_input(&mut self, sample: PointerSample) -> RowInput {
        let Some(gesture) = self.detector.on_pointer(sample) else {
            return RowInput::Ignored;
        };
        let consumed = |handled: bool| {
            if handled {
                RowInput::Consumed
            } else {
                RowInput::Ignored
            }
        };

        match gesture {
            PanGesture::Begin { start } => {
                if self.state.on_gesture_begin(start) {
                    RowInput::SwipeStarted
                } else {
                    RowInput::Ignored
                }
            }
            PanGesture::Change {
                translation,
                velocity,
            } => consumed(self.state.on_gesture_change(translation, velocity)),
            PanGesture::End {
                translation,
                velocity,
            } => consumed(self.state.on_gesture_end(translation, velocity)),
            PanGesture::Cancel => consumed(self.state.on_gesture_cancel()),
            PanGesture::Tap { position } => self.on_tap(position),
        }
    }

    /// Taps on an open row run the tapped action, or close the row when they
    /// land on the content.
    fn on_tap(&self, position: Point) -> RowInput {
        if self.state.open_side().is_none() {
            return RowInput::Ignored;
        }
        let tapped = self
            .layout()
            .slot_at(position)
            .map(|slot| (slot.side, slot.index));
        match tapped {
            Some((side, index)) => {
                self.state.perform_action(side, index);
                RowInput::ActionTapped { side, index }
            }
            None => {
                self.state.dismiss_actions_animated(true);
                RowInput::Consumed
            }
        }
    }
}
