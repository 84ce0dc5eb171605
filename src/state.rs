use crate::data::{Pos, DIRECTION_COUNT};

/// Agent position and the pointer in every cell of the grid.
///
/// Pointers are stored row-major, one direction in `0..4` per cell
/// (0 up, 1 right, 2 down, 3 left). The grid dimensions live in the puzzle,
/// the state only knows the pointer values.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub agent_pos: Pos,
    pub pointers: Vec<u8>,
}

impl State {
    pub fn new(agent_pos: Pos, pointers: Vec<u8>) -> State {
        State { agent_pos, pointers }
    }

    pub(crate) fn with_agent_at(&self, agent_pos: Pos) -> State {
        State {
            agent_pos,
            pointers: self.pointers.clone(),
        }
    }

    /// New state where the pointer at `index` is turned by `turns` quarter turns clockwise.
    pub(crate) fn with_pointer_turned(&self, index: usize, turns: u8) -> State {
        let mut pointers = self.pointers.clone();
        pointers[index] = (pointers[index] + turns) % DIRECTION_COUNT;
        State {
            agent_pos: self.agent_pos,
            pointers,
        }
    }

    pub fn all_aligned(&self) -> bool {
        self.pointers.windows(2).all(|w| w[0] == w[1])
    }
}
