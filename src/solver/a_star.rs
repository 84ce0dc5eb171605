use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::problem::Cost;

/// Counts of search events keyed by path cost, only costs that occur get an entry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: BTreeMap<Cost, u64>,
    expanded_states: BTreeMap<Cost, u64>,
    duplicate_states: BTreeMap<Cost, u64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.values().sum::<u64>()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.values().sum::<u64>()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.values().sum::<u64>()
    }

    pub(crate) fn add_created(&mut self, cost: Cost) -> bool {
        Self::add(&mut self.created_states, cost)
    }

    pub(crate) fn add_expanded(&mut self, cost: Cost) -> bool {
        Self::add(&mut self.expanded_states, cost)
    }

    pub(crate) fn add_reached_duplicate(&mut self, cost: Cost) -> bool {
        Self::add(&mut self.duplicate_states, cost)
    }

    /// Returns true if this is the first state at that depth.
    fn add(counts: &mut BTreeMap<Cost, u64>, cost: Cost) -> bool {
        let count = counts.entry(cost).or_insert(0);
        *count += 1;
        *count == 1
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let expanded = self.total_expanded();
        // can't underflow - every expanded or duplicate node was created first
        let left = created - expanded - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states expanded total: {}", expanded.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates", "Unknown (not reached)"
        )?;
        // every expanded or duplicate node was created at the same cost
        for (&depth, &depth_created) in &self.created_states {
            let expanded = self.expanded_states.get(&depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(&depth).cloned().unwrap_or(0);
            let left = depth_created - expanded - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                depth_created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

/// A state together with how it was reached.
///
/// Nodes are allocated in an arena owned by a single search
/// so the parent link is a plain reference.
pub struct SearchNode<'a, S, A> {
    pub state: S,
    pub parent: Option<&'a SearchNode<'a, S, A>>,
    pub action: Option<A>,
    pub cost: Cost,
    pub h: Cost,
}

impl<'a, S, A: Copy> SearchNode<'a, S, A> {
    pub fn root(state: S, h: Cost) -> Self {
        SearchNode {
            state,
            parent: None,
            action: None,
            cost: 0,
            h,
        }
    }

    pub fn child(
        state: S,
        parent: &'a SearchNode<'a, S, A>,
        action: A,
        cost: Cost,
        h: Cost,
    ) -> Self {
        SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
            h,
        }
    }

    pub fn priority(&self) -> Cost {
        self.cost + self.h
    }

    /// Actions from the root to this node.
    pub fn path(&self) -> Vec<A> {
        let mut actions = Vec::new();
        let mut node = self;
        while let (Some(action), Some(parent)) = (node.action, node.parent) {
            actions.push(action);
            node = parent;
        }
        actions.reverse();
        actions
    }
}

impl<S: Debug, A: Debug> Debug for SearchNode<'_, S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("cost", &self.cost)
            .field("h", &self.h)
            .finish()
    }
}

/// Frontier entry - ordered by priority, then by the order in which nodes were pushed.
///
/// Used with `Reverse` in a max-heap so the lowest priority pops first
/// and among equal priorities the oldest node wins (FIFO).
pub(crate) struct FrontierEntry<'a, S, A> {
    pub(crate) node: &'a SearchNode<'a, S, A>,
    pub(crate) seq: u64,
}

impl<S, A: Copy> FrontierEntry<'_, S, A> {
    fn key(&self) -> (Cost, u64) {
        (self.node.priority(), self.seq)
    }
}

impl<S, A: Copy> PartialEq for FrontierEntry<'_, S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S, A: Copy> Eq for FrontierEntry<'_, S, A> {}

impl<S, A: Copy> PartialOrd for FrontierEntry<'_, S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A: Copy> Ord for FrontierEntry<'_, S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use typed_arena::Arena;

    use super::*;

    #[test]
    fn path_from_parent_links() {
        let arena = Arena::new();
        let root: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::root(0, 3));
        let a: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::child(1, root, 'a', 1, 2));
        let b: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::child(2, a, 'b', 2, 1));
        let c: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::child(3, b, 'c', 3, 0));

        assert_eq!(root.path(), Vec::<char>::new());
        assert_eq!(c.path(), vec!['a', 'b', 'c']);
        assert_eq!(c.priority(), 3);
    }

    #[test]
    fn frontier_order() {
        let arena = Arena::new();
        let n1: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::root(1, 5));
        let n2: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::root(2, 3));
        let n3: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::root(3, 3));
        let n4: &SearchNode<'_, u8, char> = arena.alloc(SearchNode::root(4, 4));

        let mut heap = BinaryHeap::new();
        for (seq, &node) in [n1, n2, n3, n4].iter().enumerate() {
            heap.push(Reverse(FrontierEntry { node, seq: seq as u64 }));
        }
        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop())
            .map(|Reverse(entry)| entry.node.state)
            .collect();
        // equal priority pops in insertion order
        assert_eq!(order, vec![2, 3, 4, 1]);
    }

    #[test]
    fn stats_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_expanded(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_created(3));
        assert!(stats.add_reached_duplicate(1));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);

        let text = stats.to_string();
        assert!(text.starts_with("States created total: 4\n"));
        assert!(text.contains("Created but not reached total: 2\n"));
        assert!(text.contains("3:             1              0              0              1\n"));
        // depths nobody reached are left out
        assert!(!text.contains("\n2:"));
    }
}
