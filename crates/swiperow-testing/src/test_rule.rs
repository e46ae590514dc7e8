use std::time::Duration;

use swiperow_animation::{FrameClock, ManualFrameClock};
use swiperow_core::{Point, SwipeAction, SwipeState};
use swiperow_foundation::{PointerEventKind, PointerSample, SwipeRowSpec, SwipeRowState};
use swiperow_ui::{RowInput, SwipeListHost, SwipeRowLayout};

/// Time between scripted pointer events and pumped frames (~60fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// Pause before release that lets the velocity estimate fall to zero.
pub const SETTLE_PAUSE: Duration = Duration::from_millis(120);

const DEFAULT_ROW_WIDTH: f32 = 320.0;
const DEFAULT_ROW_HEIGHT: f32 = 44.0;
const MAX_IDLE_FRAMES: usize = 100;

pub struct TestRow<'a> {
    rule: &'a mut SwipeTestRule,
    key: u64,
}

impl<'a> TestRow<'a> {
    /// Taps the row at a row-local point.
    pub fn perform_click(&mut self, x: f32, y: f32) -> RowInput {
        self.rule.perform_touch_input(self.key, x, y, PointerEventKind::Down);
        self.rule.perform_touch_input(self.key, x, y, PointerEventKind::Up)
    }

    /// Taps the center of the action slot currently drawn at `index` in the
    /// row layout.
    pub fn perform_click_on_slot(&mut self, index: usize) -> RowInput {
        let layout = self.layout();
        let slot = layout
            .slots
            .get(index)
            .unwrap_or_else(|| panic!("Row #{} has no visible slot {index}", self.key));
        let center_x = slot.bounds.x + slot.bounds.width / 2.0;
        let center_y = slot.bounds.y + slot.bounds.height / 2.0;
        self.perform_click(center_x, center_y)
    }

    pub fn perform_touch_input(&mut self, block: impl FnOnce(&mut TouchInjectionScope)) {
        let (width, height) = self.rule.row_size();
        let mut scope = TouchInjectionScope {
            rule: self.rule,
            key: self.key,
            current_x: width - 20.0,
            current_y: height / 2.0,
            last_input: RowInput::Ignored,
        };
        block(&mut scope);
    }

    pub fn state(&self) -> SwipeRowState {
        self.rule.row_state(self.key)
    }

    pub fn layout(&self) -> SwipeRowLayout {
        self.rule
            .host
            .row(self.key)
            .unwrap_or_else(|| panic!("Row #{} is not bound", self.key))
            .layout()
    }

    pub fn assert_state(&self, expected: SwipeState) {
        let actual = self.state().state();
        assert_eq!(actual, expected, "Row #{} is {actual:?}", self.key);
    }

    pub fn assert_offset(&self, expected: f32) {
        let actual = self.state().current_offset();
        assert!(
            (actual - expected).abs() < 0.001,
            "Row #{} offset is {actual}, expected {expected}",
            self.key
        );
    }
}

pub struct TouchInjectionScope<'a> {
    rule: &'a mut SwipeTestRule,
    key: u64,
    current_x: f32,
    current_y: f32,
    last_input: RowInput,
}

impl<'a> TouchInjectionScope<'a> {
    pub fn last_input(&self) -> RowInput {
        self.last_input
    }

    pub fn down(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(x) = x {
            self.current_x = x;
        }
        if let Some(y) = y {
            self.current_y = y;
        }
        self.dispatch(PointerEventKind::Down);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.current_x = x;
        self.current_y = y;
        self.dispatch(PointerEventKind::Move);
    }

    pub fn move_by(&mut self, dx: f32) {
        self.move_to(self.current_x + dx, self.current_y);
    }

    /// Keeps the pointer still for `duration`, pumping frames meanwhile.
    pub fn hold(&mut self, duration: Duration) {
        self.rule.advance_time(duration);
        self.dispatch(PointerEventKind::Move);
    }

    pub fn up(&mut self) {
        self.dispatch(PointerEventKind::Up);
    }

    pub fn cancel(&mut self) {
        self.dispatch(PointerEventKind::Cancel);
    }

    /// Slow horizontal drag by `distance` (negative moves left), pausing
    /// before release so it ends with no velocity.
    pub fn swipe_horizontally(&mut self, distance: f32) {
        self.down(None, None);
        let steps = 10;
        let start_x = self.current_x;
        for i in 1..=steps {
            let progress = i as f32 / steps as f32;
            self.move_to(start_x + distance * progress, self.current_y);
        }
        self.hold(SETTLE_PAUSE);
        self.up();
    }

    pub fn swipe_left(&mut self, distance: f32) {
        self.swipe_horizontally(-distance);
    }

    pub fn swipe_right(&mut self, distance: f32) {
        self.swipe_horizontally(distance);
    }

    /// Quick horizontal flick released while still moving.
    pub fn fling_horizontally(&mut self, distance: f32) {
        self.down(None, None);
        let steps = 4;
        let start_x = self.current_x;
        for i in 1..=steps {
            let progress = i as f32 / steps as f32;
            self.move_to(start_x + distance * progress, self.current_y);
        }
        self.up();
    }

    fn dispatch(&mut self, kind: PointerEventKind) {
        self.last_input =
            self.rule
                .perform_touch_input(self.key, self.current_x, self.current_y, kind);
    }
}

/// Drives a [`SwipeListHost`] with scripted pointer input and a manual
/// frame clock.
pub struct SwipeTestRule {
    host: SwipeListHost,
    clock: ManualFrameClock,
    row_width: f32,
    row_height: f32,
}

impl SwipeTestRule {
    pub fn new() -> Self {
        Self::with_spec(SwipeRowSpec::default())
    }

    pub fn with_spec(spec: SwipeRowSpec) -> Self {
        let host = SwipeListHost::with_spec(spec, DEFAULT_ROW_WIDTH, DEFAULT_ROW_HEIGHT)
            .unwrap_or_else(|err| panic!("Invalid spec for test rule: {err}"));
        Self {
            host,
            clock: ManualFrameClock::new(),
            row_width: DEFAULT_ROW_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }

    pub fn host(&self) -> &SwipeListHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SwipeListHost {
        &mut self.host
    }

    pub fn row_size(&self) -> (f32, f32) {
        (self.row_width, self.row_height)
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.frame_time_nanos()
    }

    pub fn bind_row(
        &mut self,
        key: u64,
        left: impl IntoIterator<Item = SwipeAction>,
        right: impl IntoIterator<Item = SwipeAction>,
    ) -> SwipeRowState {
        self.host.bind_row(key, None, left, right).state().clone()
    }

    pub fn row_state(&self, key: u64) -> SwipeRowState {
        self.host
            .row(key)
            .unwrap_or_else(|| panic!("Row #{key} is not bound"))
            .state()
            .clone()
    }

    pub fn on_row(&mut self, key: u64) -> TestRow<'_> {
        assert!(self.host.row(key).is_some(), "Row #{key} is not bound");
        TestRow { rule: self, key }
    }

    /// Advances the clock one frame and runs it. Returns whether any row
    /// wants another frame.
    pub fn advance_frame(&mut self) -> bool {
        let now = self.clock.advance(FRAME);
        self.host.on_frame(now)
    }

    /// Advances time in frame steps, pumping each frame.
    pub fn advance_time(&mut self, duration: Duration) {
        let mut remaining = duration;
        while remaining >= FRAME {
            self.advance_frame();
            remaining -= FRAME;
        }
        if !remaining.is_zero() {
            let now = self.clock.advance(remaining);
            self.host.on_frame(now);
        }
    }

    pub fn await_idle(&mut self) {
        let mut i = 0;
        while self.advance_frame() {
            i += 1;
            if i > MAX_IDLE_FRAMES {
                panic!("Swipe animation failed to settle after {MAX_IDLE_FRAMES} frames");
            }
        }
    }

    /// Delivers one pointer event to a row after a frame has passed.
    pub fn perform_touch_input(
        &mut self,
        key: u64,
        x: f32,
        y: f32,
        kind: PointerEventKind,
    ) -> RowInput {
        let now = self.clock.advance(FRAME);
        self.host.on_frame(now);
        let sample = PointerSample::new(kind, Point::new(x, y), now);
        let input = self.host.pointer_input(key, sample);
        log::trace!("row #{key} {kind:?} at ({x}, {y}) -> {input:?}");
        input
    }
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}
