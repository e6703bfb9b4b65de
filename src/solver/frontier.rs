use std::collections::VecDeque;

use crate::solver::arena::{Arena, NodeId};

/// Not-yet-expanded nodes, kept in ascending f order.
///
/// A new entry goes immediately before the first existing entry whose f is
/// greater than or equal to its own, so among equal-f entries the most
/// recently inserted pops first. Solution paths depend on this exact tie
/// order - do not replace it with a binary heap, heaps break ties
/// differently.
///
/// Entries hold node ids only; comparisons read the node's *current* f from
/// the arena, so a node relaxed while sitting in the frontier keeps its stale
/// position but influences later insertions with its new priority.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    entries: VecDeque<NodeId>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Frontier {
            entries: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, id: NodeId, arena: &Arena) {
        let f = arena[id].f();
        let at = self
            .entries
            .iter()
            .position(|&entry| arena[entry].f() >= f)
            .unwrap_or_else(|| self.entries.len());
        self.entries.insert(at, id);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front()
    }

    #[allow(unused)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
