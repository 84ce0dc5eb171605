use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use rand::Rng;

use crate::actions::Action;
use crate::data::{Pos, DIRECTION_COUNT, MAX_SIZE};
use crate::formatter::StateFormatter;
use crate::problem::{Cost, Problem};
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    EmptyGrid,
    TooLarge,
    PointerCount { expected: usize, got: usize },
    Direction(u8),
    AgentOutside(Pos),
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::EmptyGrid => write!(f, "Grid needs at least one row and one column"),
            PuzzleErr::TooLarge => write!(f, "Grid larger than 255 rows/columns"),
            PuzzleErr::PointerCount { expected, got } => {
                write!(f, "Expected {} pointers, got {}", expected, got)
            }
            PuzzleErr::Direction(d) => write!(f, "Invalid direction {} - must be 0 to 3", d),
            PuzzleErr::AgentOutside(pos) => write!(f, "Agent at {} is outside the grid", pos),
        }
    }
}

impl Error for PuzzleErr {}

/// The pointer puzzle: an agent walks a grid of pointers and turns the one it stands on.
/// Solved once all pointers face the same direction.
#[derive(Clone, PartialEq, Eq)]
pub struct PointerPuzzle {
    rows: u8,
    cols: u8,
    initial: State,
}

impl PointerPuzzle {
    pub fn new(rows: u8, cols: u8, initial: State) -> Result<Self, PuzzleErr> {
        check_size(usize::from(rows), usize::from(cols))?;
        let expected = usize::from(rows) * usize::from(cols);
        if initial.pointers.len() != expected {
            return Err(PuzzleErr::PointerCount {
                expected,
                got: initial.pointers.len(),
            });
        }
        if let Some(&d) = initial.pointers.iter().find(|&&d| d >= DIRECTION_COUNT) {
            return Err(PuzzleErr::Direction(d));
        }
        if initial.agent_pos.r >= rows || initial.agent_pos.c >= cols {
            return Err(PuzzleErr::AgentOutside(initial.agent_pos));
        }
        Ok(PointerPuzzle { rows, cols, initial })
    }

    /// Agent on a uniformly random cell, every pointer uniformly random.
    ///
    /// All randomness comes from `rng` so seeding it makes the puzzle reproducible.
    pub fn random<R: Rng>(rows: u8, cols: u8, rng: &mut R) -> Result<Self, PuzzleErr> {
        check_size(usize::from(rows), usize::from(cols))?;
        let agent_pos = Pos::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let pointers = (0..usize::from(rows) * usize::from(cols))
            .map(|_| rng.gen_range(0..DIRECTION_COUNT))
            .collect();
        Self::new(rows, cols, State::new(agent_pos, pointers))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    /// Row-major index of `pos` into `State::pointers`.
    pub fn index(&self, pos: Pos) -> usize {
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }

    pub fn pos(&self, index: usize) -> Pos {
        let cols = usize::from(self.cols);
        Pos::new((index / cols) as u8, (index % cols) as u8)
    }

    /// Cell coordinates in the same order as `State::pointers`.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Pos::new(r, c)))
    }

    /// Where a movement action takes the agent, `None` if it would leave the grid.
    fn destination(&self, pos: Pos, action: Action) -> Option<Pos> {
        match action {
            Action::Up if pos.r > 0 => Some(Pos::new(pos.r - 1, pos.c)),
            Action::Down if pos.r + 1 < self.rows => Some(Pos::new(pos.r + 1, pos.c)),
            Action::Left if pos.c > 0 => Some(Pos::new(pos.r, pos.c - 1)),
            Action::Right if pos.c + 1 < self.cols => Some(Pos::new(pos.r, pos.c + 1)),
            _ => None,
        }
    }

    pub fn format<'a>(&self, state: &'a State) -> StateFormatter<'a> {
        StateFormatter::new(self.rows, self.cols, state)
    }
}

fn check_size(rows: usize, cols: usize) -> Result<(), PuzzleErr> {
    if rows == 0 || cols == 0 {
        Err(PuzzleErr::EmptyGrid)
    } else if rows > MAX_SIZE || cols > MAX_SIZE {
        Err(PuzzleErr::TooLarge)
    } else {
        Ok(())
    }
}

impl Problem for PointerPuzzle {
    type State = State;
    type Action = Action;

    fn initial_state(&self) -> State {
        self.initial.clone()
    }

    fn actions(&self, state: &State) -> Vec<Action> {
        let mut actions = Vec::with_capacity(6);
        for &action in &Action::MOVES {
            if self.destination(state.agent_pos, action).is_some() {
                actions.push(action);
            }
        }
        actions.push(Action::RotateCw);
        actions.push(Action::RotateCcw);
        actions
    }

    /// A move that would leave the grid is not offered by `actions`.
    /// If it's applied anyway the state is returned unchanged -
    /// it's a safety net, not a valid step.
    fn transition(&self, state: &State, action: Action) -> State {
        let index = self.index(state.agent_pos);
        match action {
            Action::RotateCw => state.with_pointer_turned(index, 1),
            Action::RotateCcw => state.with_pointer_turned(index, DIRECTION_COUNT - 1),
            _ => match self.destination(state.agent_pos, action) {
                Some(pos) => state.with_agent_at(pos),
                None => state.clone(),
            },
        }
    }

    fn is_goal(&self, state: &State) -> bool {
        state.all_aligned()
    }

    fn step_cost(&self, cost: Cost, _state: &State, _action: Action, _next: &State) -> Cost {
        cost + 1
    }
}

impl Display for PointerPuzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&self.initial))
    }
}

impl Debug for PointerPuzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} grid", self.rows, self.cols)?;
        write!(f, "{}", self)
    }
}
