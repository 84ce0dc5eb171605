use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{Cell, Row, Table};

use crate::data::Pos;
use crate::state::State;

const ARROWS: [char; 4] = ['^', '>', 'v', '<'];

/// Draws the grid with an arrow for every pointer, the agent's cell is prefixed with `@`.
pub struct StateFormatter<'a> {
    rows: u8,
    cols: u8,
    state: &'a State,
}

impl<'a> StateFormatter<'a> {
    pub(crate) fn new(rows: u8, cols: u8, state: &'a State) -> Self {
        Self { rows, cols, state }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        for r in 0..self.rows {
            let mut cells = Vec::with_capacity(usize::from(self.cols));
            for c in 0..self.cols {
                let pos = Pos::new(r, c);
                let index = usize::from(r) * usize::from(self.cols) + usize::from(c);
                let arrow = self
                    .state
                    .pointers
                    .get(index)
                    .and_then(|&p| ARROWS.get(usize::from(p)))
                    .cloned()
                    .unwrap_or('?');
                let text = if pos == self.state.agent_pos {
                    format!("@{}", arrow)
                } else {
                    format!(" {}", arrow)
                };
                cells.push(Cell::new(&text));
            }
            table.add_row(Row::new(cells));
        }
        table
    }
}

impl Display for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}

impl Debug for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "agent: {}, pointers: {:?}", self.state.agent_pos, self.state.pointers)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_state() {
        let state = State::new(Pos::new(0, 1), vec![0, 1, 2, 3]);
        let text = StateFormatter::new(2, 2, &state).to_string();
        let lines: Vec<_> = text.lines().filter(|l| l.contains('|')).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" ^ "));
        assert!(lines[0].contains("@>"));
        assert!(lines[1].contains(" v "));
        assert!(lines[1].contains(" < "));
        assert!(!lines[1].contains('@'));
    }

    #[test]
    fn formatting_grid_table() {
        let state = State::new(Pos::new(1, 1), vec![0, 0, 0, 1]);
        let expected = "\
+----+----+
|  ^ |  ^ |
+----+----+
|  ^ | @> |
+----+----+
";
        assert_eq!(StateFormatter::new(2, 2, &state).to_string(), expected);

        for r in 0..3 {
            for c in 0..3 {
                let state = State::new(Pos::new(r, c), vec![1; 9]);
                let text = StateFormatter::new(3, 3, &state).to_string();
                assert_eq!(text.matches('@').count(), 1);
                assert_eq!(text.matches('>').count(), 9);
            }
        }
    }
}
