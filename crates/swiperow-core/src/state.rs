//! Swipe side and swipe state.

/// The side of a row whose actions are exposed.
///
/// Offsets follow a fixed sign convention: a positive panel offset slides the
/// content right and exposes the [`Side::Left`] actions, a negative offset
/// exposes the [`Side::Right`] actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the side exposed by an offset or drag travel, `None` at zero.
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(Side::Left)
        } else if offset < 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Sign of offsets that expose this side.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Signed offset for a magnitude on this side.
    pub fn offset_for(self, magnitude: f32) -> f32 {
        self.sign() * magnitude
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A resting state the row can animate towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestingState {
    Closed,
    /// Fully open on `side`, with `revealed` actions exposed.
    Open { side: Side, revealed: usize },
}

impl RestingState {
    pub fn side(self) -> Option<Side> {
        match self {
            RestingState::Closed => None,
            RestingState::Open { side, .. } => Some(side),
        }
    }
}

/// State of one row's swipe interaction.
///
/// Exactly one state is active per row. Transitions come from gesture events,
/// animation completion, rebinding, and host dismiss requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeState {
    #[default]
    Closed,
    /// The content follows the finger 1:1.
    Dragging,
    Open { side: Side, revealed: usize },
    /// Running an eased animation towards the target resting state.
    Animating(RestingState),
}

impl SwipeState {
    /// Whether a new drag may start from this state.
    pub fn accepts_drag(self) -> bool {
        matches!(self, SwipeState::Closed | SwipeState::Open { .. })
    }

    pub fn is_closed(self) -> bool {
        matches!(self, SwipeState::Closed)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, SwipeState::Animating(_))
    }

    /// The open side, if the row is resting open.
    pub fn open_side(self) -> Option<Side> {
        match self {
            SwipeState::Open { side, .. } => Some(side),
            _ => None,
        }
    }
}

impl From<RestingState> for SwipeState {
    fn from(state: RestingState) -> Self {
        match state {
            RestingState::Closed => SwipeState::Closed,
            RestingState::Open { side, revealed } => SwipeState::Open { side, revealed },
        }
    }
}
