// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod actions;
pub mod config;
pub mod data;
pub mod formatter;
pub mod parser;
pub mod problem;
pub mod puzzle;
pub mod solver;
pub mod state;

use crate::actions::Action;
use crate::config::{Method, SearchLimits};
use crate::solver::SearchOutcome;

pub use crate::problem::{replay, Cost, Problem};
pub use crate::puzzle::PointerPuzzle;

pub trait Solve {
    fn solve(&self, method: Method, limits: SearchLimits, print_status: bool)
        -> SearchOutcome<Action>;
}
