use crate::data::{Dir, MapCell, Pos};
use crate::map::GoalMap;

/// Conservative unsolvability test over a box configuration.
///
/// Only walls are taken into consideration - a box counts as free space, so
/// deadlocks caused by boxes jammed against each other go undetected. That
/// makes this a sufficient condition only: `true` means provably stuck,
/// `false` means nothing.
pub(crate) fn is_deadlocked(map: &GoalMap, boxes: &[Pos]) -> bool {
    // a single stuck box condemns the whole configuration
    boxes.iter().any(|&pos| box_is_stuck(map, pos))
}

fn box_is_stuck(map: &GoalMap, pos: Pos) -> bool {
    let grid = &map.grid;
    if grid[pos] == MapCell::Goal {
        return false;
    }

    let wall = |p: Pos| grid[p] == MapCell::Wall;

    // wall on either side along the row axis and either side along the
    // column axis pins the box in a corner
    let row_lock = wall(pos + Dir::Up) || wall(pos + Dir::Down);
    let col_lock = wall(pos + Dir::Left) || wall(pos + Dir::Right);
    if row_lock && col_lock {
        return true;
    }

    // otherwise the box must have a way out along its row or its column:
    // somewhere in the wall-to-wall corridor there has to be a cell that is
    // a goal or that can be pushed through sideways
    if !row_escape(map, pos) {
        return true;
    }
    if !col_escape(map, pos) {
        return true;
    }

    false
}

/// Scans the box's row wall-to-wall looking for an escape cell: a goal, or a
/// cell open both above and below (the box could be pushed out of the row
/// there).
fn row_escape(map: &GoalMap, pos: Pos) -> bool {
    let grid = &map.grid;

    let mut p = pos;
    while grid[p] != MapCell::Wall {
        p = p + Dir::Left;
    }
    p = p + Dir::Right;

    while grid[p] != MapCell::Wall {
        if grid[p] == MapCell::Goal
            || (grid[p + Dir::Up] != MapCell::Wall && grid[p + Dir::Down] != MapCell::Wall)
        {
            return true;
        }
        p = p + Dir::Right;
    }
    false
}

/// Same as [`row_escape`] for the box's column.
fn col_escape(map: &GoalMap, pos: Pos) -> bool {
    let grid = &map.grid;

    let mut p = pos;
    while grid[p] != MapCell::Wall {
        p = p + Dir::Up;
    }
    p = p + Dir::Down;

    while grid[p] != MapCell::Wall {
        if grid[p] == MapCell::Goal
            || (grid[p + Dir::Left] != MapCell::Wall && grid[p + Dir::Right] != MapCell::Wall)
        {
            return true;
        }
        p = p + Dir::Down;
    }
    false
}
