use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Levels have to fit `u8` coordinates.
const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    BadHeight,
    TooManyLines,
    TooLarge,
    Symbol(usize, usize, char),
    MultipleAgents,
    NoAgent,
    Empty,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::BadHeight => write!(f, "First line must be the puzzle height"),
            ParserErr::TooManyLines => write!(f, "Found too many lines while reading puzzle"),
            ParserErr::TooLarge => write!(f, "Map larger than 255 rows/columns"),
            ParserErr::Symbol(r, c, ch) => {
                write!(f, "Unknown character '{}' at pos: [{}, {}]", ch, r, c)
            }
            ParserErr::MultipleAgents => write!(f, "More than one agent"),
            ParserErr::NoAgent => write!(f, "No agent"),
            ParserErr::Empty => write!(f, "Empty puzzle"),
        }
    }
}

impl std::error::Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the height-prefixed format: the first line is the number of board
/// lines, followed by the board itself.
///
/// Symbols: `#` wall, ` ` floor, `.` goal, `$` box, `*` box on goal,
/// `@` agent, `+` agent on goal. Anything else is an error.
pub fn parse(input: &str) -> Result<Level, ParserErr> {
    let mut lines = input.lines();

    let height: usize = lines
        .next()
        .and_then(|line| line.trim().parse().ok())
        .ok_or(ParserErr::BadHeight)?;
    if height > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }

    let mut grid = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut agent = None;

    for (r, line) in lines.enumerate() {
        if r >= height {
            return Err(ParserErr::TooManyLines);
        }

        let mut row = Vec::new();
        for (c, symbol) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r as u8, c as u8);

            let cell = match symbol {
                '#' => MapCell::Wall,
                ' ' => MapCell::Floor,
                '.' => {
                    goals.push(pos);
                    MapCell::Goal
                }
                '$' => {
                    boxes.push(pos);
                    MapCell::Floor
                }
                '*' => {
                    boxes.push(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '@' => {
                    if agent.is_some() {
                        return Err(ParserErr::MultipleAgents);
                    }
                    agent = Some(pos);
                    MapCell::Floor
                }
                '+' => {
                    if agent.is_some() {
                        return Err(ParserErr::MultipleAgents);
                    }
                    agent = Some(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                _ => return Err(ParserErr::Symbol(r, c, symbol)),
            };
            row.push(cell);
        }
        grid.push(row);
    }

    if grid.is_empty() {
        return Err(ParserErr::Empty);
    }
    let agent = agent.ok_or(ParserErr::NoAgent)?;

    Ok(Level::new(
        GoalMap::new(Vec2d::new(&grid), goals),
        State::new(agent, boxes),
    ))
}
