//! The visible rows of a swipeable list.

use std::rc::Weak;

use indexmap::IndexMap;
use swiperow_core::SwipeAction;
use swiperow_foundation::{
    PointerSample, SwipeRowDelegate, SwipeRowSpec, SwipeRowState, SwipeSpecError,
};

use crate::recycle_pool::{RowRecyclePolicy, RowRecyclePool};
use crate::swipe_row::{RowInput, SwipeRow};

/// Row lifecycle counters, for tests and debugging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeListStats {
    pub rows_bound: usize,
    pub rows_in_pool: usize,
    pub rows_created: usize,
    pub reuse_count: usize,
}

/// Owns the bound rows of a list, in display order.
///
/// Only one row is open at a time: when a row accepts a swipe, every other
/// row is dismissed.
#[derive(Debug)]
pub struct SwipeListHost {
    rows: IndexMap<u64, SwipeRow>,
    pool: RowRecyclePool,
    spec: SwipeRowSpec,
    delegate: Option<Weak<dyn SwipeRowDelegate>>,
    row_width: f32,
    row_height: f32,
    rows_created: usize,
}

impl SwipeListHost {
    pub fn new(row_width: f32, row_height: f32) -> Self {
        Self::from_parts(SwipeRowSpec::default(), row_width, row_height)
    }

    pub fn with_spec(
        spec: SwipeRowSpec,
        row_width: f32,
        row_height: f32,
    ) -> Result<Self, SwipeSpecError> {
        spec.validate()?;
        Ok(Self::from_parts(spec, row_width, row_height))
    }

    fn from_parts(spec: SwipeRowSpec, row_width: f32, row_height: f32) -> Self {
        Self {
            rows: IndexMap::new(),
            pool: RowRecyclePool::new(),
            spec,
            delegate: None,
            row_width,
            row_height,
            rows_created: 0,
        }
    }

    pub fn with_recycle_policy(mut self, policy: RowRecyclePolicy) -> Self {
        self.pool = RowRecyclePool::with_policy(policy);
        self
    }

    /// Delegate handed to every row bound from now on, and to bound rows.
    pub fn set_delegate(&mut self, delegate: Weak<dyn SwipeRowDelegate>) {
        for row in self.rows.values() {
            row.state().set_delegate(delegate.clone());
        }
        self.delegate = Some(delegate);
    }

    /// Binds list content to a row, reusing a recycled row when one of the
    /// same content type is available. Rebinding an already bound key just
    /// replaces its actions.
    pub fn bind_row(
        &mut self,
        key: u64,
        content_type: Option<u64>,
        left: impl IntoIterator<Item = SwipeAction>,
        right: impl IntoIterator<Item = SwipeAction>,
    ) -> &SwipeRow {
        if !self.rows.contains_key(&key) {
            let row = match self.pool.take(content_type) {
                Some(mut row) => {
                    log::trace!("reusing row {} for key {key}", row.key());
                    row.rekey(key, content_type);
                    row.set_size(self.row_width, self.row_height);
                    row
                }
                None => self.create_row(key, content_type),
            };
            self.rows.insert(key, row);
        }

        let row = &self.rows[&key];
        row.bind_actions(left, right);
        row
    }

    fn create_row(&mut self, key: u64, content_type: Option<u64>) -> SwipeRow {
        self.rows_created += 1;
        // The host spec was validated on construction.
        let state = match SwipeRowState::with_spec(self.spec.clone()) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("row {key} falls back to the default spec: {err}");
                SwipeRowState::new()
            }
        };
        if let Some(delegate) = &self.delegate {
            state.set_delegate(delegate.clone());
        }
        SwipeRow::new(key, content_type, state, self.row_width, self.row_height)
    }

    /// Moves a row out of the list into the recycle pool.
    pub fn recycle_row(&mut self, key: u64) -> bool {
        match self.rows.shift_remove(&key) {
            Some(row) => {
                self.pool.recycle(row);
                true
            }
            None => false,
        }
    }

    /// Recycles every bound row whose key is not in `visible_keys`.
    pub fn release_non_visible(&mut self, visible_keys: &[u64]) {
        let to_release: Vec<u64> = self
            .rows
            .keys()
            .filter(|key| !visible_keys.contains(*key))
            .copied()
            .collect();
        for key in to_release {
            self.recycle_row(key);
        }
    }

    pub fn row(&self, key: u64) -> Option<&SwipeRow> {
        self.rows.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.keys().copied()
    }

    /// The first row that is not closed.
    pub fn open_row(&self) -> Option<u64> {
        self.rows
            .values()
            .find(|row| !row.state().state().is_closed())
            .map(SwipeRow::key)
    }

    /// Routes a row-local pointer event to the row bound to `key`.
    pub fn pointer_input(&mut self, key: u64, sample: PointerSample) -> RowInput {
        let Some(row) = self.rows.get_mut(&key) else {
            return RowInput::Ignored;
        };
        let input = row.pointer_input(sample);
        if input == RowInput::SwipeStarted {
            self.dismiss_others(key);
        }
        input
    }

    fn dismiss_others(&self, key: u64) {
        for row in self.rows.values().filter(|row| row.key() != key) {
            row.state().dismiss_actions_animated(true);
        }
    }

    pub fn dismiss_all(&self, animated: bool) {
        for row in self.rows.values() {
            row.state().dismiss_actions_animated(animated);
        }
    }

    /// Advances every row's animation. Returns whether any row needs
    /// another frame.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        let mut needs_frame = false;
        for row in self.rows.values() {
            needs_frame |= row.state().on_frame(frame_time_nanos);
        }
        needs_frame
    }

    pub fn stats(&self) -> SwipeListStats {
        SwipeListStats {
            rows_bound: self.rows.len(),
            rows_in_pool: self.pool.available_count(),
            rows_created: self.rows_created,
            reuse_count: self.pool.reuse_count(),
        }
    }
}
