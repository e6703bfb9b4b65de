use fnv::FnvHashMap;

use crate::data::Pos;
use crate::solver::arena::NodeId;

/// Canonical configuration key: agent position plus the box positions in
/// sorted order, so two states with the same boxes in a different array
/// order map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConfigKey {
    agent: Pos,
    boxes: Vec<Pos>,
}

impl ConfigKey {
    fn new(agent: Pos, boxes: &[Pos]) -> Self {
        let mut boxes = boxes.to_vec();
        boxes.sort_unstable();
        ConfigKey { agent, boxes }
    }
}

/// Membership test over every configuration the search has created, whether
/// it currently sits in the frontier or the explored set.
///
/// Nodes register here at creation and are never removed, which covers both
/// sets at once: the only node in neither set is the one being expanded, and
/// it can never collide with its own children because the agent always
/// moves.
#[derive(Debug, Default)]
pub(crate) struct DuplicateIndex {
    seen: FnvHashMap<ConfigKey, NodeId>,
}

impl DuplicateIndex {
    pub(crate) fn new() -> Self {
        DuplicateIndex {
            seen: FnvHashMap::default(),
        }
    }

    pub(crate) fn find(&self, agent: Pos, boxes: &[Pos]) -> Option<NodeId> {
        self.seen.get(&ConfigKey::new(agent, boxes)).copied()
    }

    pub(crate) fn insert(&mut self, agent: Pos, boxes: &[Pos], id: NodeId) {
        self.seen.insert(ConfigKey::new(agent, boxes), id);
    }
}
