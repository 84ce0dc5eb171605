use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Best-first search guided by the rotation + spanning tree estimate.
    AStar,
    /// Same driver with a zero estimate (uniform-cost search).
    Uninformed,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "a-star"),
            Method::Uninformed => write!(f, "uninformed"),
        }
    }
}

/// Bounds on how much work a single search may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Give up after expanding this many unique states.
    pub max_expanded: Option<u64>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn max_expanded(max: u64) -> Self {
        SearchLimits {
            max_expanded: Some(max),
        }
    }
}
