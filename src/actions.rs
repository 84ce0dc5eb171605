use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    RotateCw,
    RotateCcw,
}

impl Action {
    pub const MOVES: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn is_rotation(self) -> bool {
        match self {
            Action::RotateCw | Action::RotateCcw => true,
            _ => false,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
            Action::RotateCw => write!(f, "rotate_cw"),
            Action::RotateCcw => write!(f, "rotate_ccw"),
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A plan - the actions leading from the initial state to a goal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Actions(Vec<Action>);

impl Actions {
    pub fn new(actions: Vec<Action>) -> Self {
        Actions(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn move_cnt(&self) -> usize {
        self.0.iter().filter(|a| !a.is_rotation()).count()
    }

    pub fn rotation_cnt(&self) -> usize {
        self.0.iter().filter(|a| a.is_rotation()).count()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }
}

impl From<Vec<Action>> for Actions {
    fn from(actions: Vec<Action>) -> Self {
        Actions(actions)
    }
}

impl IntoIterator for Actions {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, action) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", action)?;
        }
        write!(f, "]")
    }
}

impl Debug for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
