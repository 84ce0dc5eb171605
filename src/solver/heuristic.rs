use crate::data::{rotation_dist, DIRECTION_COUNT};
use crate::problem::Cost;
use crate::puzzle::PointerPuzzle;
use crate::state::State;

use super::mst::mst_cost;

/// Lower bound on the number of actions needed to align all pointers.
///
/// For every possible final direction: the turns needed in each cell
/// plus the walking needed to reach the misaligned cells - the distance to the closest one
/// and a spanning tree over all of them. Turns and steps are separate actions
/// so the two bounds add up. The true final direction is one of the candidates,
/// taking the minimum keeps the estimate admissible.
pub fn heuristic(puzzle: &PointerPuzzle, state: &State) -> Cost {
    let mut best = Cost::max_value();
    let mut to_fix = Vec::with_capacity(state.pointers.len());

    for target in 0..DIRECTION_COUNT {
        to_fix.clear();
        let mut rotations: Cost = 0;
        for (index, &pointer) in state.pointers.iter().enumerate() {
            let cost = rotation_dist(pointer, target);
            if cost > 0 {
                to_fix.push(puzzle.pos(index));
                rotations += Cost::from(cost);
            }
        }

        let movement = match to_fix.iter().map(|&pos| state.agent_pos.dist(pos)).min() {
            None => 0,
            Some(closest) => Cost::from(closest) + Cost::from(mst_cost(&to_fix)),
        };

        best = best.min(rotations + movement);
    }

    best
}

/// Turns best-first search into uniform-cost search.
pub fn zero_heuristic<P, S>(_problem: &P, _state: &S) -> Cost {
    0
}
