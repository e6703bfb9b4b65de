use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// A solution: agent moves in root-to-goal order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub(crate) fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    /// Space-separated `up`/`down`/`left`/`right` tokens, no trailing space.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
