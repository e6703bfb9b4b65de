use std::ops::{Index, IndexMut};

use crate::data::Dir;
use crate::state::State;

/// Handle into the [`Arena`]. Parent links are stored as these indices
/// instead of references, so nodes never borrow each other and everything is
/// freed together when the arena drops at the end of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// One node of the search tree.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) parent: Option<NodeId>,
    /// Direction that produced this state from its parent. Ignored for the
    /// root.
    pub(crate) dir: Dir,
    /// Path length from the root (g).
    pub(crate) cost: u32,
    /// Evaluator output (h). Zero iff every box sits on a goal.
    pub(crate) heuristic: u32,
    /// Set once the node has been popped and expanded. Used to skip stale
    /// frontier entries under `RelaxPolicy::Reinsert`.
    pub(crate) expanded: bool,
}

impl SearchNode {
    pub(crate) fn new(
        state: State,
        parent: Option<NodeId>,
        dir: Dir,
        cost: u32,
        heuristic: u32,
    ) -> Self {
        SearchNode {
            state,
            parent,
            dir,
            cost,
            heuristic,
            expanded: false,
        }
    }

    /// Priority: f = g + h, lower pops first.
    pub(crate) fn f(&self) -> u32 {
        self.cost + self.heuristic
    }
}

/// Owns every node created during one solve. Nodes are never removed
/// individually - a node stays valid as long as anything (frontier entry,
/// duplicate index, a child's parent link) still names its id.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<SearchNode>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Index<NodeId> for Arena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
