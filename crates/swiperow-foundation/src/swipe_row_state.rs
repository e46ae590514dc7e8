//! Per-row swipe interaction controller.
//!
//! [`SwipeRowState`] turns pan phases into a panel offset, settles released
//! drags with [`resolve_settle`], drives the settle animation from host frames
//! and dispatches committed actions. It is a cheap clonable handle, so action
//! handlers and delegates may capture it and call back in; no internal borrow
//! is held while foreign code runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use smallvec::SmallVec;
use swiperow_animation::{AnimationSlot, AnimationToken, OffsetAnimation};
use swiperow_core::{Point, RestingState, Side, SwipeAction, SwipeActions, SwipeState};

use crate::delegate::SwipeRowDelegate;
use crate::settle::{resolve_settle, SettleInput, SettleOutcome};
use crate::spec::{SwipeRowSpec, SwipeSpecError};

/// State holder for one swipeable row.
///
/// # Example
///
/// ```rust,ignore
/// let state = SwipeRowState::new();
/// state.set_right_actions([SwipeAction::new("trash", || println!("deleted"))]);
///
/// // Forwarded by the host from its pan recognizer.
/// state.on_gesture_begin(Point::ZERO);
/// state.on_gesture_change(-130.0, 0.0);
/// state.on_gesture_end(-130.0, 0.0); // prints "deleted", starts closing
/// ```
#[derive(Clone)]
pub struct SwipeRowState {
    inner: Rc<RefCell<SwipeRowInner>>,
}

struct SwipeRowInner {
    spec: SwipeRowSpec,
    actions: SwipeActions,
    state: SwipeState,

    /// Visible displacement of the row content.
    offset: f32,

    /// Offset the current drag started from.
    drag_origin: f32,

    /// Unclamped `drag_origin + translation` of the current drag.
    drag_travel: f32,

    animation: AnimationSlot,

    delegate: Option<Weak<dyn SwipeRowDelegate>>,

    /// Re-render requests to the host.
    invalidate_callbacks: Vec<(u64, Rc<dyn Fn()>)>,
    next_callback_id: u64,
}

impl SwipeRowInner {
    fn max_offset(&self, side: Side) -> f32 {
        self.spec.slot_width * self.actions.len(side) as f32
    }

    fn clamp_offset(&self, travel: f32) -> f32 {
        travel.clamp(-self.max_offset(Side::Right), self.max_offset(Side::Left))
    }

    fn open_target(&self, side: Side) -> RestingState {
        RestingState::Open {
            side,
            revealed: self.actions.len(side),
        }
    }

    fn resting_offset(&self, target: RestingState) -> f32 {
        match target {
            RestingState::Closed => 0.0,
            RestingState::Open { side, .. } => side.offset_for(self.max_offset(side)),
        }
    }

    fn settle_input(&self, velocity: f32) -> SettleInput {
        SettleInput {
            offset: self.offset,
            travel: self.drag_travel,
            translation: self.drag_travel - self.drag_origin,
            velocity,
            max_offset_left: self.max_offset(Side::Left),
            max_offset_right: self.max_offset(Side::Right),
            fling_velocity_threshold: self.spec.fling_velocity_threshold,
            commit_overshoot: self.spec.commit_overshoot,
        }
    }

    /// Starts the animation towards `target`, or snaps when it has no length.
    fn settle_to(&mut self, target: RestingState) {
        let to = self.resting_offset(target);
        let animation = OffsetAnimation::new(
            self.offset,
            to,
            self.spec.swipe_animation_duration,
            self.spec.easing,
        );
        if animation.is_instant() {
            self.animation.cancel();
            self.offset = to;
            self.state = target.into();
            log::debug!("swipe row snapped to {:?}", self.state);
            return;
        }

        let token = self.animation.start(animation);
        log::debug!(
            "swipe row settling {} -> {} towards {:?} (generation {})",
            self.offset,
            to,
            target,
            token.generation()
        );
        self.state = SwipeState::Animating(target);
    }

    fn reset(&mut self) {
        self.animation.cancel();
        self.state = SwipeState::Closed;
        self.offset = 0.0;
        self.drag_origin = 0.0;
        self.drag_travel = 0.0;
    }
}

impl SwipeRowState {
    /// Creates a closed row with the default [`SwipeRowSpec`] and no actions.
    pub fn new() -> Self {
        Self::from_spec(SwipeRowSpec::default())
    }

    pub fn with_spec(spec: SwipeRowSpec) -> Result<Self, SwipeSpecError> {
        if let Err(err) = spec.validate() {
            log::warn!("rejecting swipe row spec: {err}");
            return Err(err);
        }
        Ok(Self::from_spec(spec))
    }

    fn from_spec(spec: SwipeRowSpec) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SwipeRowInner {
                spec,
                actions: SwipeActions::default(),
                state: SwipeState::Closed,
                offset: 0.0,
                drag_origin: 0.0,
                drag_travel: 0.0,
                animation: AnimationSlot::new(),
                delegate: None,
                invalidate_callbacks: Vec::new(),
                next_callback_id: 1,
            })),
        }
    }

    /// Returns a pointer to the shared state for identity comparisons.
    pub fn inner_ptr(&self) -> *const () {
        Rc::as_ptr(&self.inner) as *const ()
    }

    pub fn state(&self) -> SwipeState {
        self.inner.borrow().state
    }

    /// Current panel offset. Positive exposes left actions, negative right.
    pub fn current_offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    /// The side whose actions are at least partly visible.
    pub fn exposed_side(&self) -> Option<Side> {
        Side::from_offset(self.current_offset())
    }

    /// The side the row rests open on, if any.
    pub fn open_side(&self) -> Option<Side> {
        self.state().open_side()
    }

    /// Number of action slots at least partly visible at the current offset.
    pub fn revealed_action_count(&self) -> usize {
        let inner = self.inner.borrow();
        let Some(side) = Side::from_offset(inner.offset) else {
            return 0;
        };
        let slots = (inner.offset.abs() / inner.spec.slot_width).ceil() as usize;
        slots.min(inner.actions.len(side))
    }

    /// Total width needed to show every action of `side`.
    pub fn max_offset(&self, side: Side) -> f32 {
        self.inner.borrow().max_offset(side)
    }

    pub fn slot_width(&self) -> f32 {
        self.inner.borrow().spec.slot_width
    }

    pub fn spec(&self) -> SwipeRowSpec {
        self.inner.borrow().spec.clone()
    }

    pub fn swipe_animation_duration(&self) -> Duration {
        self.inner.borrow().spec.swipe_animation_duration
    }

    /// Applies to animations started after the call.
    pub fn set_swipe_animation_duration(&self, duration: Duration) {
        self.inner.borrow_mut().spec.swipe_animation_duration = duration;
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animation.is_running()
    }

    /// Read access to the bound action lists.
    pub fn with_actions<R>(&self, f: impl FnOnce(&SwipeActions) -> R) -> R {
        f(&self.inner.borrow().actions)
    }

    pub fn action_count(&self, side: Side) -> usize {
        self.inner.borrow().actions.len(side)
    }

    pub fn set_left_actions(&self, actions: impl IntoIterator<Item = SwipeAction>) {
        self.set_actions(Side::Left, actions);
    }

    pub fn set_right_actions(&self, actions: impl IntoIterator<Item = SwipeAction>) {
        self.set_actions(Side::Right, actions);
    }

    /// Replaces the actions of one side. A row that is not closed is reset.
    pub fn set_actions(&self, side: Side, actions: impl IntoIterator<Item = SwipeAction>) {
        let mut inner = self.inner.borrow_mut();
        inner.actions.replace(side, actions.into_iter().collect());
        if !inner.state.is_closed() {
            log::debug!("{side:?} actions replaced while {:?}; closing", inner.state);
            inner.reset();
        }
        drop(inner);
        self.invalidate();
    }

    /// Resets the row for new content: cancels any drag or animation and
    /// snaps closed. Completions of the cancelled animation are discarded.
    pub fn rebind(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.is_closed() {
            log::debug!("rebinding swipe row while {:?}", inner.state);
        }
        inner.reset();
        drop(inner);
        self.invalidate();
    }

    /// Sets the delegate consulted by [`SwipeRowState::can_begin_swipe`].
    ///
    /// Only a weak reference is kept; the owner clears or drops it.
    pub fn set_delegate(&self, delegate: Weak<dyn SwipeRowDelegate>) {
        self.inner.borrow_mut().delegate = Some(delegate);
    }

    pub fn clear_delegate(&self) {
        self.inner.borrow_mut().delegate = None;
    }

    /// Asks the delegate whether a swipe may start. No delegate means yes.
    pub fn can_begin_swipe(&self) -> bool {
        let delegate = self
            .inner
            .borrow()
            .delegate
            .as_ref()
            .and_then(Weak::upgrade);
        match delegate {
            Some(delegate) => delegate.can_swipe(self),
            None => true,
        }
    }

    /// Starts tracking a drag from the closed or open resting position.
    ///
    /// Returns whether the gesture was accepted.
    pub fn on_gesture_begin(&self, start: Point) -> bool {
        if !self.state().accepts_drag() {
            log::trace!("ignoring gesture begin while {:?}", self.state());
            return false;
        }
        if !self.can_begin_swipe() {
            log::trace!("delegate denied swipe at {start:?}");
            return false;
        }

        let mut inner = self.inner.borrow_mut();
        // The delegate may have touched the row.
        if !inner.state.accepts_drag() {
            return false;
        }
        inner.drag_origin = inner.offset;
        inner.drag_travel = inner.offset;
        log::debug!("drag began at {start:?} from offset {}", inner.offset);
        inner.state = SwipeState::Dragging;
        drop(inner);
        self.invalidate();
        true
    }

    /// Tracks the finger 1:1, clamped to the available action width.
    pub fn on_gesture_change(&self, translation: f32, _velocity: f32) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != SwipeState::Dragging {
            log::trace!("ignoring gesture change while {:?}", inner.state);
            return false;
        }
        if !translation.is_finite() {
            log::trace!("ignoring non-finite translation {translation}");
            return false;
        }
        let travel = inner.drag_origin + translation;
        inner.drag_travel = travel;
        inner.offset = inner.clamp_offset(travel);
        drop(inner);
        self.invalidate();
        true
    }

    /// Ends the drag and settles the row per [`resolve_settle`].
    ///
    /// A commit runs the outermost action's handler once, then closes.
    pub fn on_gesture_end(&self, translation: f32, velocity: f32) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != SwipeState::Dragging {
            log::trace!("ignoring gesture end while {:?}", inner.state);
            return false;
        }
        if translation.is_finite() {
            let travel = inner.drag_origin + translation;
            inner.drag_travel = travel;
            inner.offset = inner.clamp_offset(travel);
        }
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };

        let outcome = resolve_settle(&inner.settle_input(velocity));
        log::debug!(
            "drag released at travel {} offset {} velocity {velocity}: {outcome:?}",
            inner.drag_travel,
            inner.offset
        );
        match outcome {
            SettleOutcome::Close => inner.settle_to(RestingState::Closed),
            SettleOutcome::Open(side) => {
                let target = inner.open_target(side);
                inner.settle_to(target);
            }
            SettleOutcome::Commit(side) => {
                let handler = inner.actions.outermost(side).and_then(SwipeAction::handler);
                let generation = inner.animation.generation();
                drop(inner);
                self.invalidate();
                self.commit_then_close(handler, generation, SwipeState::Dragging);
                return true;
            }
        }
        drop(inner);
        self.invalidate();
        true
    }

    /// Animates back to the resting state the drag started from.
    pub fn on_gesture_cancel(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != SwipeState::Dragging {
            log::trace!("ignoring gesture cancel while {:?}", inner.state);
            return false;
        }
        let target = match Side::from_offset(inner.drag_origin) {
            Some(side) => inner.open_target(side),
            None => RestingState::Closed,
        };
        log::debug!("drag cancelled at offset {}; returning to {target:?}", inner.offset);
        inner.drag_travel = inner.drag_origin;
        inner.settle_to(target);
        drop(inner);
        self.invalidate();
        true
    }

    /// Closes the row, animated or snapped. No-op when already closed.
    pub fn dismiss_actions_animated(&self, animated: bool) {
        let mut inner = self.inner.borrow_mut();
        match inner.state {
            SwipeState::Closed => return,
            SwipeState::Animating(RestingState::Closed) if animated => return,
            _ if animated => inner.settle_to(RestingState::Closed),
            _ => inner.reset(),
        }
        drop(inner);
        self.invalidate();
    }

    /// Runs a revealed action, as when the host's action button is tapped.
    ///
    /// Only valid while resting open on `side`.
    pub fn perform_action(&self, side: Side, index: usize) -> bool {
        let inner = self.inner.borrow();
        if inner.state.open_side() != Some(side) {
            log::trace!("ignoring action tap on {side:?} while {:?}", inner.state);
            return false;
        }
        let Some(action) = inner.actions.get(side, index) else {
            return false;
        };
        let handler = action.handler();
        let generation = inner.animation.generation();
        let expected = inner.state;
        drop(inner);
        self.commit_then_close(handler, generation, expected);
        true
    }

    /// Runs a committed handler, then starts closing unless the handler
    /// already moved the row somewhere else.
    fn commit_then_close(
        &self,
        handler: Option<Rc<dyn Fn()>>,
        generation: u64,
        expected: SwipeState,
    ) {
        match handler {
            Some(handler) => handler(),
            None => log::debug!("committed action has no handler"),
        }

        let mut inner = self.inner.borrow_mut();
        if inner.animation.generation() != generation || inner.state != expected {
            log::trace!("row changed during action handler; now {:?}", inner.state);
            return;
        }
        inner.settle_to(RestingState::Closed);
        drop(inner);
        self.invalidate();
    }

    /// Advances the running animation to `frame_time_nanos`.
    ///
    /// Returns whether another frame is needed.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        let slot_frame = {
            let mut inner = self.inner.borrow_mut();
            let Some(slot_frame) = inner.animation.tick(frame_time_nanos) else {
                return false;
            };
            inner.offset = slot_frame.frame.value;
            slot_frame
        };
        self.invalidate();

        if slot_frame.frame.finished {
            self.on_animation_finished(slot_frame.token);
            return false;
        }
        true
    }

    /// Token of the running animation, for hosts that animate on their own.
    pub fn pending_animation(&self) -> Option<AnimationToken> {
        self.inner.borrow().animation.current()
    }

    /// Target offset of the running animation.
    pub fn animation_target_offset(&self) -> Option<f32> {
        self.inner.borrow().animation.target()
    }

    /// Applies an animation completion. Stale tokens are ignored.
    ///
    /// Returns whether the completion was applied.
    pub fn on_animation_finished(&self, token: AnimationToken) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(target_offset) = inner.animation.finish(token) else {
            return false;
        };
        inner.offset = target_offset;
        if let SwipeState::Animating(target) = inner.state {
            inner.state = target.into();
        }
        log::debug!("swipe row settled: {:?} at {}", inner.state, inner.offset);
        drop(inner);
        self.invalidate();
        true
    }

    /// Registers a re-render request callback, returning its id.
    pub fn add_invalidate_callback(&self, callback: impl Fn() + 'static) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.invalidate_callbacks.push((id, Rc::new(callback)));
        id
    }

    pub fn remove_invalidate_callback(&self, id: u64) {
        let mut inner = self.inner.borrow_mut();
        inner.invalidate_callbacks.retain(|(cb_id, _)| *cb_id != id);
    }

    fn invalidate(&self) {
        let callbacks: SmallVec<[Rc<dyn Fn()>; 2]> = self
            .inner
            .borrow()
            .invalidate_callbacks
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for SwipeRowState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SwipeRowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SwipeRowState")
            .field("state", &inner.state)
            .field("offset", &inner.offset)
            .field("actions", &inner.actions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const FRAME_NANOS: u64 = 16_000_000;

    struct Frames(Cell<u64>);

    impl Frames {
        fn new() -> Self {
            Self(Cell::new(0))
        }

        fn settle(&self, state: &SwipeRowState) {
            for _ in 0..100 {
                self.0.set(self.0.get() + FRAME_NANOS);
                if !state.on_frame(self.0.get()) {
                    return;
                }
            }
            panic!("animation did not settle");
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let handle = hits.clone();
        (hits, move || handle.set(handle.get() + 1))
    }

    fn trash_row() -> (SwipeRowState, Rc<Cell<u32>>) {
        let (hits, handler) = counter();
        let state = SwipeRowState::new();
        state.set_right_actions([SwipeAction::new("trash", handler)]);
        (state, hits)
    }

    fn drag(state: &SwipeRowState, translation: f32, velocity: f32) {
        assert!(state.on_gesture_begin(Point::ZERO));
        state.on_gesture_change(translation, velocity);
        state.on_gesture_end(translation, velocity);
    }

    #[test]
    fn opens_then_commits_trash() {
        let frames = Frames::new();
        let (state, hits) = trash_row();
        assert_eq!(state.max_offset(Side::Right), 80.0);

        drag(&state, -60.0, 0.0);
        assert_eq!(
            state.state(),
            SwipeState::Animating(RestingState::Open {
                side: Side::Right,
                revealed: 1
            })
        );
        frames.settle(&state);
        assert_eq!(
            state.state(),
            SwipeState::Open {
                side: Side::Right,
                revealed: 1
            }
        );
        assert_eq!(state.current_offset(), -80.0);

        // From the open position, 50 more pixels reach travel -130.
        drag(&state, -50.0, 0.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(state.state(), SwipeState::Animating(RestingState::Closed));
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn short_drag_snaps_back() {
        let frames = Frames::new();
        let (state, hits) = trash_row();
        drag(&state, -30.0, 0.0);
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn offset_is_clamped_while_dragging() {
        let (state, _) = trash_row();
        state.on_gesture_begin(Point::ZERO);
        state.on_gesture_change(-500.0, 0.0);
        assert_eq!(state.current_offset(), -80.0);
        // No left actions: dragging right cannot move the content.
        state.on_gesture_change(300.0, 0.0);
        assert_eq!(state.current_offset(), 0.0);
    }

    #[test]
    fn commit_fires_outermost_action_only() {
        let (outer_hits, outer) = counter();
        let (inner_hits, inner) = counter();
        let state = SwipeRowState::new();
        state.set_right_actions([SwipeAction::new("more", inner), SwipeAction::new("trash", outer)]);

        drag(&state, -400.0, 0.0);
        assert_eq!(outer_hits.get(), 1);
        assert_eq!(inner_hits.get(), 0);
    }

    #[test]
    fn left_commit_uses_first_left_action() {
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        let state = SwipeRowState::new();
        state.set_left_actions([SwipeAction::new("archive", first), SwipeAction::new("flag", second)]);

        drag(&state, 400.0, 0.0);
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 0);
    }

    #[test]
    fn flick_opens_from_short_drag() {
        let frames = Frames::new();
        let (state, _) = trash_row();
        drag(&state, -15.0, -1200.0);
        frames.settle(&state);
        assert_eq!(state.open_side(), Some(Side::Right));
        assert_eq!(state.current_offset(), -80.0);
    }

    #[test]
    fn flick_closes_an_open_row() {
        let frames = Frames::new();
        let (state, hits) = trash_row();
        drag(&state, -60.0, 0.0);
        frames.settle(&state);
        assert_eq!(state.open_side(), Some(Side::Right));

        // A short, fast drag back towards closed.
        drag(&state, 30.0, 2000.0);
        assert_eq!(state.state(), SwipeState::Animating(RestingState::Closed));
        assert_eq!(state.animation_target_offset(), Some(0.0));
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn commit_without_handler_still_closes() {
        let frames = Frames::new();
        let state = SwipeRowState::new();
        state.set_right_actions([SwipeAction::without_handler("trash")]);
        drag(&state, -200.0, 0.0);
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let (state, hits) = trash_row();
        assert!(!state.on_gesture_change(-50.0, 0.0));
        assert!(!state.on_gesture_end(-200.0, 0.0));
        assert!(!state.on_gesture_cancel());
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn gestures_are_ignored_while_animating() {
        let (state, _) = trash_row();
        drag(&state, -60.0, 0.0);
        assert!(state.state().is_animating());
        assert!(!state.on_gesture_begin(Point::ZERO));
        assert!(!state.on_gesture_change(40.0, 0.0));
        assert!(state.state().is_animating());
    }

    #[test]
    fn cancel_returns_to_drag_origin() {
        let frames = Frames::new();
        let (state, _) = trash_row();
        drag(&state, -60.0, 0.0);
        assert!(state.is_animating());
        assert_eq!(state.animation_target_offset(), Some(-80.0));
        frames.settle(&state);
        assert!(!state.is_animating());

        state.on_gesture_begin(Point::ZERO);
        state.on_gesture_change(60.0, 0.0);
        assert_eq!(state.current_offset(), -20.0);
        state.on_gesture_cancel();
        frames.settle(&state);
        assert_eq!(state.open_side(), Some(Side::Right));
        assert_eq!(state.current_offset(), -80.0);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let frames = Frames::new();
        let (state, _) = trash_row();
        drag(&state, -90.0, 0.0);
        frames.settle(&state);

        state.dismiss_actions_animated(true);
        state.dismiss_actions_animated(true);
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);

        state.dismiss_actions_animated(false);
        assert_eq!(state.state(), SwipeState::Closed);
    }

    #[test]
    fn dismiss_without_animation_snaps_mid_drag() {
        let (state, _) = trash_row();
        state.on_gesture_begin(Point::ZERO);
        state.on_gesture_change(-60.0, 0.0);
        state.dismiss_actions_animated(false);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert!(!state.on_gesture_change(-70.0, 0.0));
    }

    #[test]
    fn dismiss_retargets_an_opening_animation() {
        let frames = Frames::new();
        let (state, _) = trash_row();
        drag(&state, -60.0, 0.0);
        state.dismiss_actions_animated(true);
        assert_eq!(state.state(), SwipeState::Animating(RestingState::Closed));
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
    }

    #[test]
    fn rebind_discards_stale_completion() {
        let (state, _) = trash_row();
        drag(&state, -60.0, 0.0);
        let stale = state.pending_animation().expect("settle animation");

        state.rebind();
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);

        assert!(!state.on_animation_finished(stale));
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert!(!state.on_frame(FRAME_NANOS));
    }

    #[test]
    fn host_driven_completion_applies_target() {
        let (state, _) = trash_row();
        drag(&state, -60.0, 0.0);
        let token = state.pending_animation().expect("settle animation");
        assert_eq!(state.animation_target_offset(), Some(-80.0));
        assert!(state.on_animation_finished(token));
        assert_eq!(state.open_side(), Some(Side::Right));
        assert_eq!(state.current_offset(), -80.0);
    }

    #[test]
    fn replacing_actions_closes_open_row() {
        let frames = Frames::new();
        let (state, _) = trash_row();
        drag(&state, -90.0, 0.0);
        frames.settle(&state);
        state.set_right_actions([SwipeAction::without_handler("a"), SwipeAction::without_handler("b")]);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(state.max_offset(Side::Right), 160.0);
    }

    #[test]
    fn zero_duration_snaps_and_fires_before_close() {
        let state = SwipeRowState::with_spec(
            SwipeRowSpec::new().swipe_animation_duration(Duration::ZERO),
        )
        .expect("valid spec");
        let observed = Rc::new(Cell::new(None));
        let probe = state.clone();
        let seen = observed.clone();
        state.set_right_actions([SwipeAction::new("trash", move || seen.set(Some(probe.state())))]);

        drag(&state, -200.0, 0.0);
        assert_eq!(observed.get(), Some(SwipeState::Dragging));
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn handler_may_dismiss_the_row_itself() {
        let state = SwipeRowState::new();
        let handle = state.clone();
        state.set_right_actions([SwipeAction::new("trash", move || {
            handle.dismiss_actions_animated(false)
        })]);
        drag(&state, -200.0, 0.0);
        assert_eq!(state.state(), SwipeState::Closed);
        assert!(!state.is_animating());
    }

    #[test]
    fn perform_action_requires_open_side() {
        let frames = Frames::new();
        let (state, hits) = trash_row();
        assert!(!state.perform_action(Side::Right, 0));

        drag(&state, -90.0, 0.0);
        frames.settle(&state);
        assert!(!state.perform_action(Side::Left, 0));
        assert!(!state.perform_action(Side::Right, 3));
        assert!(state.perform_action(Side::Right, 0));
        assert_eq!(hits.get(), 1);
        frames.settle(&state);
        assert_eq!(state.state(), SwipeState::Closed);
    }

    struct Deny;

    impl SwipeRowDelegate for Deny {
        fn can_swipe(&self, _row: &SwipeRowState) -> bool {
            false
        }
    }

    struct NoOpinion;

    impl SwipeRowDelegate for NoOpinion {}

    #[test]
    fn denying_delegate_suppresses_everything() {
        let (state, hits) = trash_row();
        let delegate: Rc<dyn SwipeRowDelegate> = Rc::new(Deny);
        state.set_delegate(Rc::downgrade(&delegate));

        assert!(!state.on_gesture_begin(Point::ZERO));
        state.on_gesture_change(-200.0, 0.0);
        state.on_gesture_end(-200.0, -3000.0);
        assert_eq!(state.state(), SwipeState::Closed);
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn missing_or_dropped_delegate_allows_swipe() {
        let (state, _) = trash_row();
        assert!(state.can_begin_swipe());

        let delegate: Rc<dyn SwipeRowDelegate> = Rc::new(NoOpinion);
        state.set_delegate(Rc::downgrade(&delegate));
        assert!(state.can_begin_swipe());

        let denying: Rc<dyn SwipeRowDelegate> = Rc::new(Deny);
        state.set_delegate(Rc::downgrade(&denying));
        assert!(!state.can_begin_swipe());
        drop(denying);
        assert!(state.can_begin_swipe());
    }

    #[test]
    fn invalidate_callbacks_fire_on_offset_changes() {
        let (state, _) = trash_row();
        let (renders, on_render) = counter();
        let id = state.add_invalidate_callback(on_render);

        state.on_gesture_begin(Point::ZERO);
        state.on_gesture_change(-10.0, 0.0);
        assert_eq!(renders.get(), 2);

        state.remove_invalidate_callback(id);
        state.on_gesture_change(-20.0, 0.0);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn revealed_count_follows_offset() {
        let state = SwipeRowState::new();
        state.set_right_actions([
            SwipeAction::without_handler("a"),
            SwipeAction::without_handler("b"),
            SwipeAction::without_handler("c"),
        ]);
        assert_eq!(state.revealed_action_count(), 0);
        state.on_gesture_begin(Point::ZERO);
        state.on_gesture_change(-90.0, 0.0);
        assert_eq!(state.revealed_action_count(), 2);
        state.on_gesture_change(-1000.0, 0.0);
        assert_eq!(state.revealed_action_count(), 3);
        assert_eq!(state.exposed_side(), Some(Side::Right));
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let err = SwipeRowState::with_spec(SwipeRowSpec::new().slot_width(-1.0)).unwrap_err();
        assert_eq!(err, SwipeSpecError::SlotWidth(-1.0));
    }
}
