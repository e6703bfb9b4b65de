use crate::data::Pos;

/// Dynamic part of a configuration: where the agent and the boxes are.
///
/// Box order is fixed when the level is parsed and never changes during a
/// search - index `i` is always the same physical box. Configurations that
/// differ only in box order are the same configuration; the solver's
/// duplicate index compares box *sets*, not this vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub agent: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(agent: Pos, boxes: Vec<Pos>) -> State {
        State { agent, boxes }
    }
}
