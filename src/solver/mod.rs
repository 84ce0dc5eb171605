pub mod a_star;
pub mod heuristic;
pub mod mst;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, trace};
use typed_arena::Arena;

use crate::actions::{Action, Actions};
use crate::config::{Method, SearchLimits};
use crate::problem::{Cost, Problem};
use crate::puzzle::PointerPuzzle;
use crate::Solve;

use self::a_star::{FrontierEntry, SearchNode, Stats};
use self::heuristic::{heuristic, zero_heuristic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErr {
    /// The whole reachable state space was expanded without finding a goal.
    NoSolution,
    /// The abort check fired before a goal was found.
    BudgetExceeded { expanded: u64 },
}

impl Display for SearchErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SearchErr::NoSolution => write!(f, "No solution - all reachable states expanded"),
            SearchErr::BudgetExceeded { expanded } => {
                write!(f, "Search budget exceeded after expanding {} states", expanded)
            }
        }
    }
}

impl Error for SearchErr {}

pub struct SearchOutcome<A> {
    pub result: Result<Vec<A>, SearchErr>,
    pub stats: Stats,
}

impl<A> SearchOutcome<A> {
    fn new(result: Result<Vec<A>, SearchErr>, stats: Stats) -> Self {
        Self { result, stats }
    }

    pub fn actions(&self) -> Option<&[A]> {
        self.result.as_ref().ok().map(|actions| actions.as_slice())
    }

    pub fn is_solved(&self) -> bool {
        self.result.is_ok()
    }
}

impl SearchOutcome<Action> {
    pub fn plan(&self) -> Option<Actions> {
        self.actions().map(|actions| Actions::new(actions.to_vec()))
    }
}

impl<A: Debug> Debug for SearchOutcome<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(ref actions) => writeln!(f, "Solution: {} steps {:?}", actions.len(), actions)?,
            Err(err) => writeln!(f, "{}", err)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for PointerPuzzle {
    fn solve(
        &self,
        method: Method,
        limits: SearchLimits,
        print_status: bool,
    ) -> SearchOutcome<Action> {
        debug!("Solving {}x{} puzzle using {}", self.rows(), self.cols(), method);
        match method {
            Method::AStar => search(self, heuristic, limits, print_status),
            Method::Uninformed => search(self, zero_heuristic, limits, print_status),
        }
    }
}

/// Best-first search from the problem's initial state, stopping when `limits` are hit.
pub fn search<P, H>(
    problem: &P,
    heuristic: H,
    limits: SearchLimits,
    print_status: bool,
) -> SearchOutcome<P::Action>
where
    P: Problem,
    H: Fn(&P, &P::State) -> Cost,
{
    search_with_abort(problem, heuristic, print_status, |stats| match limits.max_expanded {
        Some(max) => stats.total_expanded() >= max,
        None => false,
    })
}

/// Best-first search (A* with a consistent heuristic) that consults `abort`
/// before every expansion and gives up with `BudgetExceeded` once it returns true.
///
/// The frontier pops the lowest `cost + h` first, ties go to the node pushed first.
/// States are only expanded the first time they're popped, later copies
/// are counted as reached duplicates and dropped.
pub fn search_with_abort<P, H, F>(
    problem: &P,
    heuristic: H,
    print_status: bool,
    mut abort: F,
) -> SearchOutcome<P::Action>
where
    P: Problem,
    H: Fn(&P, &P::State) -> Cost,
    F: FnMut(&Stats) -> bool,
{
    debug!("Search called");

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut frontier = BinaryHeap::new();
    let mut explored = FnvHashSet::default();
    let mut seq = 0;

    let initial = problem.initial_state();
    let h = heuristic(problem, &initial);
    debug!("Initial estimate: {}", h);
    let root: &SearchNode<'_, P::State, P::Action> = arena.alloc(SearchNode::root(initial, h));
    stats.add_created(root.cost);
    frontier.push(Reverse(FrontierEntry { node: root, seq }));

    while let Some(Reverse(FrontierEntry { node: cur_node, .. })) = frontier.pop() {
        if problem.is_goal(&cur_node.state) {
            debug!("Solved at cost {}, backtracking path", cur_node.cost);
            return SearchOutcome::new(Ok(cur_node.path()), stats);
        }

        if explored.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node.cost);
            continue;
        }

        if abort(&stats) {
            debug!("Aborted after expanding {} states", stats.total_expanded());
            let expanded = stats.total_expanded();
            return SearchOutcome::new(Err(SearchErr::BudgetExceeded { expanded }), stats);
        }

        if stats.add_expanded(cur_node.cost) && print_status {
            println!("Expanded new depth: {}", cur_node.cost);
            println!("{:?}", stats);
        }
        trace!("Expanding node at cost {} with estimate {}", cur_node.cost, cur_node.h);

        explored.insert(&cur_node.state);

        for action in problem.actions(&cur_node.state) {
            let next_state = problem.transition(&cur_node.state, action);
            // a copy might still be in the frontier but an expanded state is final
            if explored.contains(&next_state) {
                continue;
            }

            let cost = problem.step_cost(cur_node.cost, &cur_node.state, action, &next_state);
            let h = heuristic(problem, &next_state);
            let next_node: &SearchNode<'_, P::State, P::Action> =
                arena.alloc(SearchNode::child(next_state, cur_node, action, cost, h));
            stats.add_created(cost);
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                node: next_node,
                seq,
            }));
        }
    }

    debug!("Frontier exhausted");
    SearchOutcome::new(Err(SearchErr::NoSolution), stats)
}
