use crate::math::Point;

/// Represents an event or edge of path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Emitted for `Verb::Close`. `last` is the current position and `first` the
    /// position the sub-path started at.
    Close {
        last: Point,
        first: Point,
    },
}

impl PathEvent {
    /// Returns true for events that describe an edge, including a closing edge that
    /// has a non-zero length.
    pub fn is_edge(&self) -> bool {
        match self {
            PathEvent::Line { .. } | PathEvent::Quadratic { .. } | PathEvent::Cubic { .. } => true,
            PathEvent::Close { last, first } => last != first,
            PathEvent::Begin { .. } => false,
        }
    }

    pub fn from(&self) -> Point {
        match *self {
            PathEvent::Line { from, .. }
            | PathEvent::Quadratic { from, .. }
            | PathEvent::Cubic { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::Close { last: from, .. } => from,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            PathEvent::Line { to, .. }
            | PathEvent::Quadratic { to, .. }
            | PathEvent::Cubic { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::Close { first: to, .. } => to,
        }
    }
}
