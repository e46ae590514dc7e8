//! Capability query consulted before a swipe starts.

use crate::swipe_row_state::SwipeRowState;

/// Optional collaborator deciding whether a row may be swiped.
///
/// The row keeps only a [`std::rc::Weak`] reference to its delegate; an unset
/// or dropped delegate allows swiping. Implementors that have no opinion can
/// rely on the default method.
pub trait SwipeRowDelegate {
    fn can_swipe(&self, _row: &SwipeRowState) -> bool {
        true
    }
}
