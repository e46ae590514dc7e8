//! Swipe action records.
//!
//! A [`SwipeAction`] is an icon plus an optional zero-argument handler. Actions
//! are grouped per row side in display order (left to right) and are never
//! mutated once attached; a row replaces a whole list at a time.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::state::Side;

/// Handle to the image drawn inside an action slot.
///
/// The host resolves the name against its own asset store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionIcon(Rc<str>);

impl ActionIcon {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Rc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionIcon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An icon button revealed by swiping a row.
#[derive(Clone)]
pub struct SwipeAction {
    icon: ActionIcon,
    on_trigger: Option<Rc<dyn Fn()>>,
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("icon", &self.icon)
            .field("has_handler", &self.on_trigger.is_some())
            .finish()
    }
}

impl SwipeAction {
    pub fn new(icon: impl Into<ActionIcon>, on_trigger: impl Fn() + 'static) -> Self {
        Self {
            icon: icon.into(),
            on_trigger: Some(Rc::new(on_trigger)),
        }
    }

    /// An action with no handler. Committing it only closes the row.
    pub fn without_handler(icon: impl Into<ActionIcon>) -> Self {
        Self {
            icon: icon.into(),
            on_trigger: None,
        }
    }

    pub fn icon(&self) -> &ActionIcon {
        &self.icon
    }

    pub fn has_handler(&self) -> bool {
        self.on_trigger.is_some()
    }

    /// Returns a shared handle to the handler so it can be run after the
    /// caller has released any state borrows.
    pub fn handler(&self) -> Option<Rc<dyn Fn()>> {
        self.on_trigger.clone()
    }

    pub fn trigger(&self) {
        if let Some(handler) = &self.on_trigger {
            handler();
        }
    }
}

/// Ordered actions of one side, in left-to-right display order.
pub type ActionList = SmallVec<[SwipeAction; 4]>;

/// The two action lists bound to a row.
#[derive(Clone, Debug, Default)]
pub struct SwipeActions {
    left: ActionList,
    right: ActionList,
}

impl SwipeActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, actions: impl IntoIterator<Item = SwipeAction>) -> Self {
        self.left = actions.into_iter().collect();
        self
    }

    pub fn with_right(mut self, actions: impl IntoIterator<Item = SwipeAction>) -> Self {
        self.right = actions.into_iter().collect();
        self
    }

    pub fn side(&self, side: Side) -> &[SwipeAction] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn replace(&mut self, side: Side, actions: ActionList) {
        match side {
            Side::Left => self.left = actions,
            Side::Right => self.right = actions,
        }
    }

    pub fn len(&self, side: Side) -> usize {
        self.side(side).len()
    }

    pub fn is_empty(&self, side: Side) -> bool {
        self.side(side).is_empty()
    }

    /// Index of the action nearest the row edge on `side`.
    ///
    /// That is the first left action and the last right action.
    pub fn outermost_index(&self, side: Side) -> Option<usize> {
        let len = self.len(side);
        if len == 0 {
            return None;
        }
        Some(match side {
            Side::Left => 0,
            Side::Right => len - 1,
        })
    }

    pub fn outermost(&self, side: Side) -> Option<&SwipeAction> {
        self.outermost_index(side)
            .and_then(|index| self.side(side).get(index))
    }

    pub fn get(&self, side: Side, index: usize) -> Option<&SwipeAction> {
        self.side(side).get(index)
    }
}
