use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{MapCell, Pos};

/// Rectangular grid backed by a single flat buffer.
///
/// Indexing is bounds-checked on both axes separately - a column past the end
/// of a row must not silently alias into the next row.
#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if pos.r >= self.rows || pos.c >= self.cols {
            None
        } else {
            Some(&self.data[usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)])
        }
    }

    /// A same-sized grid filled with `default`, for per-call overlays
    /// like box occupancy or visited flags.
    pub fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Vec2d<MapCell> {
    /// Builds a grid from parsed rows, padding short rows (blank ones
    /// included) with `Floor` so every row has the same length.
    pub fn new(grid: &[Vec<MapCell>]) -> Self {
        let max_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        assert!(max_cols > 0);

        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid.iter() {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(MapCell::Floor);
            }
        }
        Vec2d {
            data,
            rows: grid.len() as u8,
            cols: max_cols as u8,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "position {} out of range ({} rows, {} cols)",
                pos, self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        assert!(
            pos.r < self.rows && pos.c < self.cols,
            "position {} out of range ({} rows, {} cols)",
            pos,
            self.rows,
            self.cols
        );
        &mut self.data[usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)]
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.into()) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
