use std::fmt::{self, Debug, Display, Formatter};

use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state::State;

/// A parsed level: the static map plus the initial configuration.
#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    /// Replays a move sequence from the initial configuration and returns
    /// the resulting state. A box standing where the agent steps gets pushed
    /// one cell further.
    pub fn replay(&self, moves: &Moves) -> State {
        let mut state = self.state.clone();
        for &dir in moves {
            let agent = state.agent + dir;
            for b in state.boxes.iter_mut() {
                if *b == agent {
                    *b = *b + dir;
                }
            }
            state.agent = agent;
        }
        state
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.map.format_with_state(&self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
