use std::fmt::{self, Display, Formatter};

/// Number of directions a pointer can face.
pub const DIRECTION_COUNT: u8 = 4;

/// Grids are indexed by `u8`.
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Taxicab distance.
    pub fn dist(self, other: Pos) -> u16 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u16
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Minimum number of single turns to get from direction `from` to `to`.
pub fn rotation_dist(from: u8, to: u8) -> u8 {
    let diff = if from > to { from - to } else { to - from };
    diff.min(DIRECTION_COUNT - diff)
}
