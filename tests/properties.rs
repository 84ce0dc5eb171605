use std::collections::{HashMap, VecDeque};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use pointer_solver::config::{Method, SearchLimits};
use pointer_solver::data::Pos;
use pointer_solver::solver::heuristic::heuristic;
use pointer_solver::solver::mst::mst_cost;
use pointer_solver::solver::SearchErr;
use pointer_solver::state::State;
use pointer_solver::{replay, Cost, PointerPuzzle, Problem, Solve};

fn all_states(rows: u8, cols: u8) -> Vec<State> {
    let cells = usize::from(rows) * usize::from(cols);
    let mut states = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            for mut code in 0..4usize.pow(cells as u32) {
                let mut pointers = Vec::with_capacity(cells);
                for _ in 0..cells {
                    pointers.push((code % 4) as u8);
                    code /= 4;
                }
                states.push(State::new(Pos::new(r, c), pointers));
            }
        }
    }
    states
}

fn puzzle_at(rows: u8, cols: u8, state: &State) -> PointerPuzzle {
    PointerPuzzle::new(rows, cols, state.clone()).unwrap()
}

/// Exact number of actions to the closest goal for every state.
///
/// Every action can be undone by another single action so searching outward
/// from all goals at once gives the distance to the goal.
fn goal_distances(rows: u8, cols: u8) -> HashMap<State, Cost> {
    let states = all_states(rows, cols);
    let puzzle = puzzle_at(rows, cols, &states[0]);

    let mut dists = HashMap::new();
    let mut queue = VecDeque::new();
    for state in states {
        if puzzle.is_goal(&state) {
            dists.insert(state.clone(), 0);
            queue.push_back(state);
        }
    }
    while let Some(state) = queue.pop_front() {
        let dist = dists[&state];
        for action in puzzle.actions(&state) {
            let next = puzzle.transition(&state, action);
            if !dists.contains_key(&next) {
                dists.insert(next.clone(), dist + 1);
                queue.push_back(next);
            }
        }
    }
    dists
}

#[test]
fn state_space_is_connected() {
    let dists = goal_distances(2, 2);
    assert_eq!(dists.len(), 4 * 256);
    assert_eq!(dists.values().max(), Some(&6));
}

#[test]
fn heuristic_is_admissible() {
    for &(rows, cols) in &[(2, 2), (1, 3), (2, 3)] {
        let dists = goal_distances(rows, cols);
        let puzzle = puzzle_at(rows, cols, dists.keys().next().unwrap());
        for (state, &dist) in &dists {
            let h = heuristic(&puzzle, state);
            assert!(h <= dist, "{}x{} {:?}: h {} > {}", rows, cols, state, h, dist);
            assert_eq!(h == 0, dist == 0, "{:?}", state);
        }
    }
}

#[test]
fn heuristic_is_consistent() {
    for &(rows, cols) in &[(2, 2), (2, 3)] {
        let states = all_states(rows, cols);
        let puzzle = puzzle_at(rows, cols, &states[0]);
        for state in &states {
            let h = heuristic(&puzzle, state);
            for action in puzzle.actions(state) {
                let next = puzzle.transition(state, action);
                let step = puzzle.step_cost(0, state, action, &next);
                assert!(
                    h <= step + heuristic(&puzzle, &next),
                    "{:?} -{}-> {:?}",
                    state,
                    action,
                    next
                );
            }
        }
    }
}

#[test]
fn search_is_optimal() {
    let dists = goal_distances(2, 2);
    for (state, &dist) in &dists {
        let puzzle = puzzle_at(2, 2, state);
        for &method in &[Method::AStar, Method::Uninformed] {
            let outcome = puzzle.solve(method, SearchLimits::unlimited(), false);
            let actions = outcome.actions().unwrap();
            assert_eq!(actions.len() as Cost, dist, "{} {:?}", method, state);

            let states = replay(&puzzle, actions);
            assert!(puzzle.is_goal(states.last().unwrap()), "{:?}", state);
        }
    }
}

#[test]
fn heuristic_saves_work() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let puzzle = PointerPuzzle::random(2, 2, &mut rng).unwrap();
        let informed = puzzle.solve(Method::AStar, SearchLimits::unlimited(), false);
        let uninformed = puzzle.solve(Method::Uninformed, SearchLimits::unlimited(), false);
        assert!(informed.stats.total_expanded() <= uninformed.stats.total_expanded());
    }
}

#[test]
fn random_larger_grids_are_solved() {
    let mut rng = SmallRng::seed_from_u64(514514);
    for _ in 0..5 {
        let puzzle = PointerPuzzle::random(2, 3, &mut rng).unwrap();
        let outcome = puzzle.solve(Method::AStar, SearchLimits::unlimited(), false);
        let actions = outcome.actions().unwrap();
        let states = replay(&puzzle, actions);
        assert!(puzzle.is_goal(states.last().unwrap()));
        assert!(heuristic(&puzzle, puzzle.initial()) as usize <= actions.len());
    }
}

#[test]
fn budget_gives_up_deterministically() {
    let puzzle: PointerPuzzle = "0,0,0,1,2,3".parse().unwrap();
    let first = puzzle.solve(Method::AStar, SearchLimits::max_expanded(3), false);
    let second = puzzle.solve(Method::AStar, SearchLimits::max_expanded(3), false);
    assert_eq!(first.result, Err(SearchErr::BudgetExceeded { expanded: 3 }));
    assert!(first.stats == second.stats);
    assert!(first.actions().is_none());
}

#[test]
fn corners_spanning_tree() {
    let corners = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)];
    assert_eq!(mst_cost(&corners), 3);
}

#[test]
fn single_odd_pointer_under_agent() {
    let puzzle: PointerPuzzle = "1,1,0,0,0,1".parse().unwrap();
    assert_eq!(heuristic(&puzzle, puzzle.initial()), 1);
    let outcome = puzzle.solve(Method::AStar, SearchLimits::unlimited(), false);
    assert_eq!(outcome.actions().unwrap().len(), 1);
}

#[test]
fn single_odd_pointer_across_grid() {
    // the agent has to walk two steps before the single turn
    let puzzle: PointerPuzzle = "0,0,0,0,0,1".parse().unwrap();
    assert_eq!(heuristic(&puzzle, puzzle.initial()), 3);
    let outcome = puzzle.solve(Method::AStar, SearchLimits::unlimited(), false);
    assert_eq!(outcome.actions().unwrap().len(), 3);
}
