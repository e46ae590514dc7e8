//! Recycling of row instances between list items.
//!
//! A recycled [`SwipeRow`] keeps its controller (and the host's invalidate
//! callbacks on it) but is rebound before reuse, so no swipe state survives
//! from the previous item.

use swiperow_core::collections::map::HashMap;

use crate::swipe_row::SwipeRow;

/// Default number of rows kept per content type.
/// Matches RecyclerView's default cache size.
pub const DEFAULT_RECYCLE_CAPACITY: usize = 7;

/// Policy for keeping rows around after they scroll out of view.
#[derive(Clone, Debug)]
pub struct RowRecyclePolicy {
    /// Maximum number of rows to keep for each content type.
    pub max_rows_per_type: usize,

    /// Whether recycling is enabled.
    pub enabled: bool,
}

impl Default for RowRecyclePolicy {
    fn default() -> Self {
        Self {
            max_rows_per_type: DEFAULT_RECYCLE_CAPACITY,
            enabled: true,
        }
    }
}

impl RowRecyclePolicy {
    pub fn new(max_rows_per_type: usize) -> Self {
        Self {
            max_rows_per_type,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            max_rows_per_type: 0,
            enabled: false,
        }
    }
}

/// Recycled rows grouped by content type (`None` shares bucket 0).
#[derive(Debug, Default)]
pub struct RowRecyclePool {
    available: HashMap<u64, Vec<SwipeRow>>,
    policy: RowRecyclePolicy,
    reuse_count: usize,
}

impl RowRecyclePool {
    pub fn new() -> Self {
        Self::with_policy(RowRecyclePolicy::default())
    }

    pub fn with_policy(policy: RowRecyclePolicy) -> Self {
        Self {
            available: HashMap::default(),
            policy,
            reuse_count: 0,
        }
    }

    /// Takes a recycled row of the given content type, already rebound.
    pub fn take(&mut self, content_type: Option<u64>) -> Option<SwipeRow> {
        if !self.policy.enabled {
            return None;
        }
        let row = self.available.get_mut(&content_type.unwrap_or(0))?.pop()?;
        row.state().rebind();
        self.reuse_count += 1;
        Some(row)
    }

    /// Hands a row back. Rows over the per-type limit are dropped.
    pub fn recycle(&mut self, row: SwipeRow) {
        if !self.policy.enabled {
            return;
        }
        row.state().rebind();
        let rows = self.available.entry(row.content_type().unwrap_or(0)).or_default();
        if rows.len() < self.policy.max_rows_per_type {
            rows.push(row);
        } else {
            log::trace!("recycle pool full for content type {:?}", row.content_type());
        }
    }

    pub fn available_count(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    /// Number of rows handed out again by [`RowRecyclePool::take`].
    pub fn reuse_count(&self) -> usize {
        self.reuse_count
    }

    pub fn clear(&mut self) {
        self.available.clear();
    }
}
