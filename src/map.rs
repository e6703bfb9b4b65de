use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Static map: the wall/floor/goal grid plus the goal list.
/// Built once by the parser, never mutated afterwards.
#[derive(Clone)]
pub struct GoalMap {
    pub grid: Vec2d<MapCell>,
    pub goals: Vec<Pos>,
}

impl GoalMap {
    pub fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        GoalMap { grid, goals }
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }

    fn write_with_state(&self, state: &State, f: &mut Formatter<'_>) -> fmt::Result {
        let mut contents = self.grid.scratchpad(Contents::Empty);
        for &b in &state.boxes {
            contents[b] = Contents::Box;
        }
        contents[state.agent] = Contents::Agent;

        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                let symbol = match (self.grid[pos], contents[pos]) {
                    (MapCell::Wall, _) => '#',
                    (MapCell::Floor, Contents::Empty) => ' ',
                    (MapCell::Floor, Contents::Box) => '$',
                    (MapCell::Floor, Contents::Agent) => '@',
                    (MapCell::Goal, Contents::Empty) => '.',
                    (MapCell::Goal, Contents::Box) => '*',
                    (MapCell::Goal, Contents::Agent) => '+',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let symbol = match self.grid[Pos::new(r, c)] {
                    MapCell::Wall => '#',
                    MapCell::Floor => ' ',
                    MapCell::Goal => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Renders a map with a state overlaid using the input symbol set.
pub struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub fn new(map: &'a GoalMap, state: &'a State) -> Self {
        Self { map, state }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.write_with_state(self.state, f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
