use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::puzzle::{PointerPuzzle, PuzzleErr};
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Number(usize, String),
    FieldCount { expected: usize, got: usize },
    Puzzle(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Number(i, ref s) => write!(f, "Field {} is not a number: '{}'", i, s),
            ParserErr::FieldCount { expected, got } => write!(
                f,
                "Expected {} fields (agent row, agent col and a pointer per cell), got {}",
                expected, got
            ),
            ParserErr::Puzzle(err) => write!(f, "Invalid puzzle: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Puzzle(err)
    }
}

/// Parses the 2x2 tuple form `agent_row,agent_col,p00,p01,p10,p11`.
impl FromStr for PointerPuzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, 2, 2)
    }
}

impl PointerPuzzle {
    /// Same as `str::parse` but for any grid size - pointers are listed row by row.
    pub fn parse_grid(s: &str, rows: u8, cols: u8) -> Result<Self, ParserErr> {
        parse(s, rows, cols)
    }
}

fn parse(s: &str, rows: u8, cols: u8) -> Result<PointerPuzzle, ParserErr> {
    // allow surrounding parentheses so tuples can be pasted as they are printed
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');

    let mut numbers = Vec::new();
    for (i, field) in s.split(',').enumerate() {
        let field = field.trim();
        let n = field
            .parse::<u8>()
            .map_err(|_| ParserErr::Number(i, field.to_string()))?;
        numbers.push(n);
    }

    let expected = 2 + usize::from(rows) * usize::from(cols);
    if numbers.len() != expected {
        return Err(ParserErr::FieldCount {
            expected,
            got: numbers.len(),
        });
    }

    let agent_pos = Pos::new(numbers[0], numbers[1]);
    let pointers = numbers.split_off(2);
    Ok(PointerPuzzle::new(rows, cols, State::new(agent_pos, pointers))?)
}
