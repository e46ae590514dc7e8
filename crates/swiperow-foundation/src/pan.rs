//! Turns raw pointer events into horizontal pan phases.

use swiperow_core::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::velocity::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event delivered by the host, stamped with its frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_nanos: u64,
}

impl PointerSample {
    pub fn new(kind: PointerEventKind, position: Point, time_nanos: u64) -> Self {
        Self {
            kind,
            position,
            time_nanos,
        }
    }
}

/// Horizontal pan phases. Translations are measured from the press position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanGesture {
    Begin { start: Point },
    Change { translation: f32, velocity: f32 },
    End { translation: f32, velocity: f32 },
    Cancel,
    /// Press released without crossing the drag threshold.
    Tap { position: Point },
}

/// Single-pointer horizontal pan recognizer with touch slop.
#[derive(Clone, Debug)]
pub struct PanGestureDetector {
    touch_slop: f32,
    press: Option<Point>,
    dragging: bool,
    tracker: VelocityTracker,
}

impl Default for PanGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureDetector {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            press: None,
            dragging: false,
            tracker: VelocityTracker::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_pointer(&mut self, sample: PointerSample) -> Option<PanGesture> {
        match sample.kind {
            PointerEventKind::Down => {
                self.press = Some(sample.position);
                self.dragging = false;
                self.tracker.reset();
                self.tracker.add_position(sample.time_nanos, sample.position.x);
                None
            }
            PointerEventKind::Move => {
                let press = self.press?;
                self.tracker.add_position(sample.time_nanos, sample.position.x);
                let translation = sample.position.x - press.x;
                if self.dragging {
                    return Some(PanGesture::Change {
                        translation,
                        velocity: self.tracker.velocity(),
                    });
                }
                if translation.abs() > self.touch_slop {
                    self.dragging = true;
                    return Some(PanGesture::Begin { start: press });
                }
                None
            }
            PointerEventKind::Up => {
                let press = self.press.take()?;
                self.tracker.add_position(sample.time_nanos, sample.position.x);
                let was_dragging = std::mem::replace(&mut self.dragging, false);
                if was_dragging {
                    Some(PanGesture::End {
                        translation: sample.position.x - press.x,
                        velocity: self.tracker.velocity(),
                    })
                } else {
                    Some(PanGesture::Tap {
                        position: sample.position,
                    })
                }
            }
            PointerEventKind::Cancel => {
                self.press = None;
                let was_dragging = std::mem::replace(&mut self.dragging, false);
                was_dragging.then_some(PanGesture::Cancel)
            }
        }
    }
}
