use std::hash::Hash;

/// Path cost type used by the solver.
pub type Cost = u32;

/// A deterministic, fully observable state space.
///
/// The solver only ever talks to a puzzle through this trait so any finite
/// state space can be searched, not just the pointer grid.
pub trait Problem {
    type State: Clone + Eq + Hash;
    type Action: Copy;

    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`. The order must be deterministic,
    /// it decides the order in which children are generated.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn transition(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of the path to `next` given the cost of the path to `state`.
    fn step_cost(
        &self,
        cost: Cost,
        state: &Self::State,
        action: Self::Action,
        next: &Self::State,
    ) -> Cost;
}

/// All states visited when applying `actions` from the initial state, including it.
pub fn replay<P: Problem>(problem: &P, actions: &[P::Action]) -> Vec<P::State> {
    let mut states = Vec::with_capacity(actions.len() + 1);
    let mut state = problem.initial_state();
    for &action in actions {
        let next = problem.transition(&state, action);
        states.push(state);
        state = next;
    }
    states.push(state);
    states
}
