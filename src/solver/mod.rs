mod arena;
mod deadlock;
mod dedup;
mod frontier;
mod heuristic;
mod stats;

use std::fmt::{self, Debug, Display, Formatter};

use log::debug;

use crate::config::{Heuristic, RelaxPolicy};
use crate::data::{Dir, MapCell, Pos, DIRECTIONS};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::arena::{Arena, NodeId, SearchNode};
use self::dedup::DuplicateIndex;
use self::frontier::Frontier;
pub use self::stats::Stats;

/// 255 marks an empty cell in the box overlay grid, so at most 254 boxes.
const MAX_BOXES: usize = 254;
const NO_BOX: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    IncompleteBorder,
    UnreachableBoxes,
    UnreachableGoals,
    BoxesGoals,
    TooMany,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::IncompleteBorder => write!(f, "Incomplete border"),
            SolverErr::UnreachableBoxes => write!(
                f,
                "Unreachable boxes - some boxes are not on goal but can't be reached"
            ),
            SolverErr::UnreachableGoals => write!(
                f,
                "Unreachable goals - some goals don't have a box but can't be reached"
            ),
            SolverErr::BoxesGoals => write!(f, "Different number of reachable boxes and goals"),
            SolverErr::TooMany => write!(f, "More than 254 reachable boxes or goals"),
        }
    }
}

impl std::error::Error for SolverErr {}

/// A finished search. `moves` is `None` when the frontier was exhausted
/// without reaching a solved configuration - a normal outcome, not an error.
pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{} moves", moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(
        &self,
        heuristic: Heuristic,
        relax: RelaxPolicy,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr> {
        solve(self, heuristic, relax, print_status)
    }
}

fn solve(
    level: &Level,
    heuristic: Heuristic,
    relax: RelaxPolicy,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    debug!("preprocessing level");
    let (map, start) = preprocess(level)?;
    debug!(
        "preprocessed: {} boxes, {} goals, heuristic {}",
        start.boxes.len(),
        map.goals.len(),
        heuristic
    );

    let mut search = Search {
        map: &map,
        heuristic,
        relax,
        print_status,
        arena: Arena::new(),
        frontier: Frontier::new(),
        index: DuplicateIndex::new(),
        stats: Stats::new(),
    };

    let solution = search.run(&start);
    let moves = solution.map(|id| backtrack(&search.arena, id));
    Ok(SolverOk::new(moves, search.stats))
}

/// Validates the level and normalizes it for the search:
///
/// - the area reachable from the agent must be fully enclosed by walls,
///   which is what lets the search step and scan without bounds checks,
/// - boxes and goals outside that area are allowed only as matched pairs
///   (scenery) and are dropped,
/// - everything unreachable is turned into wall so the deadlock corridor
///   scans always terminate,
/// - reachable box and goal counts must match.
fn preprocess(level: &Level) -> Result<(GoalMap, State), SolverErr> {
    let grid = &level.map.grid;

    let mut visited = grid.scratchpad(false);
    visited[level.state.agent] = true;
    let mut to_visit = vec![level.state.agent];

    while let Some(cur) = to_visit.pop() {
        let (r, c) = (i32::from(cur.r), i32::from(cur.c));
        let neighbors = [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)];
        for &(nr, nc) in &neighbors {
            // the only place that needs signed bounds checks - everything
            // the search visits later is surrounded by walls
            if nr < 0 || nc < 0 || nr >= i32::from(grid.rows()) || nc >= i32::from(grid.cols()) {
                return Err(SolverErr::IncompleteBorder);
            }
            let pos = Pos::new(nr as u8, nc as u8);
            if !visited[pos] && grid[pos] != MapCell::Wall {
                visited[pos] = true;
                to_visit.push(pos);
            }
        }
    }

    let mut reachable_boxes = Vec::new();
    for &pos in &level.state.boxes {
        if visited[pos] {
            reachable_boxes.push(pos);
        } else if !level.map.goals.contains(&pos) {
            return Err(SolverErr::UnreachableBoxes);
        }
    }
    let mut reachable_goals = Vec::new();
    for &pos in &level.map.goals {
        if visited[pos] {
            reachable_goals.push(pos);
        } else if !level.state.boxes.contains(&pos) {
            return Err(SolverErr::UnreachableGoals);
        }
    }

    if reachable_boxes.len() != reachable_goals.len() {
        return Err(SolverErr::BoxesGoals);
    }
    if reachable_boxes.len() > MAX_BOXES {
        return Err(SolverErr::TooMany);
    }

    let mut clean_grid = level.map.grid.clone();
    for r in 0..clean_grid.rows() {
        for c in 0..clean_grid.cols() {
            let pos = Pos::new(r, c);
            if !visited[pos] {
                clean_grid[pos] = MapCell::Wall;
            }
        }
    }

    Ok((
        GoalMap::new(clean_grid, reachable_goals),
        State::new(level.state.agent, reachable_boxes),
    ))
}

struct Search<'a> {
    map: &'a GoalMap,
    heuristic: Heuristic,
    relax: RelaxPolicy,
    print_status: bool,
    arena: Arena,
    frontier: Frontier,
    index: DuplicateIndex,
    stats: Stats,
}

impl Search<'_> {
    /// Best-first loop: pop the lowest f, a zero heuristic is the solution,
    /// anything else gets expanded exactly once. Runs until solved or the
    /// frontier is exhausted.
    fn run(&mut self, start: &State) -> Option<NodeId> {
        let h = self
            .heuristic
            .score(&start.boxes, &self.map.goals, start.agent);
        let root = self
            .arena
            .alloc(SearchNode::new(start.clone(), None, Dir::Up, 0, h));
        self.index.insert(start.agent, &start.boxes, root);
        self.frontier.push(root, &self.arena);
        self.stats.add_created(0);

        while let Some(id) = self.frontier.pop() {
            if self.arena[id].expanded {
                // stale entry left behind by a Reinsert relaxation
                continue;
            }
            if self.arena[id].heuristic == 0 {
                debug!(
                    "solved at cost {}, {} frontier entries left unexpanded",
                    self.arena[id].cost,
                    self.frontier.len()
                );
                return Some(id);
            }

            let cost = self.arena[id].cost;
            if self.stats.add_expanded(cost) && self.print_status {
                println!("Visited new depth: {}", cost);
            }
            if self.print_status {
                println!(
                    "Expanding state (cost {}, heuristic {}):\n{}",
                    cost,
                    self.arena[id].heuristic,
                    self.map.format_with_state(&self.arena[id].state)
                );
            }

            self.expand(id);
            self.arena[id].expanded = true;
        }

        debug!("frontier exhausted, no solution");
        None
    }

    /// Generates the up-to-four successors of a popped node.
    fn expand(&mut self, cur_id: NodeId) {
        let cur = self.arena[cur_id].state.clone();
        let cur_cost = self.arena[cur_id].cost;

        // box occupancy overlay, owned by this one expansion call
        let mut box_grid = self.map.grid.scratchpad(NO_BOX);
        for (i, &b) in cur.boxes.iter().enumerate() {
            box_grid[b] = i as u8;
        }

        for &dir in &DIRECTIONS {
            let dest = cur.agent + dir;
            if self.map.grid[dest] == MapCell::Wall {
                continue;
            }

            let mut new_boxes = cur.boxes.clone();
            let box_id = box_grid[dest];
            if box_id != NO_BOX {
                let landing = dest + dir;
                // no push into a wall, no double-push
                if self.map.grid[landing] == MapCell::Wall || box_grid[landing] != NO_BOX {
                    continue;
                }
                new_boxes[box_id as usize] = landing;
                if deadlock::is_deadlocked(self.map, &new_boxes) {
                    self.stats.add_deadlock();
                    continue;
                }
            }

            if let Some(dup) = self.index.find(dest, &new_boxes) {
                if self.arena[dup].cost > cur_cost + 1 {
                    // cheaper path to a known configuration - rewire it in
                    // place. Under InPlace the frontier keeps the node's old
                    // position and an already expanded node stays expanded,
                    // so the improvement does not propagate to descendants.
                    let node = &mut self.arena[dup];
                    node.parent = Some(cur_id);
                    node.dir = dir;
                    node.cost = cur_cost + 1;
                    self.stats.add_relaxation();
                    debug!("relaxed a duplicate to cost {}", cur_cost + 1);

                    if self.relax == RelaxPolicy::Reinsert {
                        self.arena[dup].expanded = false;
                        self.frontier.push(dup, &self.arena);
                    }
                }
                self.stats.add_duplicate(cur_cost + 1);
                continue;
            }

            let h = self.heuristic.score(&new_boxes, &self.map.goals, dest);
            let child = self.arena.alloc(SearchNode::new(
                State::new(dest, new_boxes),
                Some(cur_id),
                dir,
                cur_cost + 1,
                h,
            ));
            self.index
                .insert(dest, &self.arena[child].state.boxes, child);
            self.frontier.push(child, &self.arena);
            self.stats.add_created(cur_cost + 1);
        }
    }
}

/// Walks parent links from the winning node back to the root, iteratively,
/// and returns the moves in root-to-goal order.
fn backtrack(arena: &Arena, goal_id: NodeId) -> Moves {
    let mut dirs = Vec::new();
    let mut id = goal_id;
    while let Some(parent) = arena[id].parent {
        dirs.push(arena[id].dir);
        id = parent;
    }
    dirs.reverse();
    Moves::new(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_str(input: &str, heuristic: Heuristic) -> SolverOk {
        let level: Level = input.parse().unwrap();
        level.solve(heuristic, RelaxPolicy::InPlace, false).unwrap()
    }

    const ALL: [Heuristic; 4] = [
        Heuristic::CountBoxes,
        Heuristic::FixedPenalty,
        Heuristic::CoarseMatch,
        Heuristic::MatchClosest,
    ];

    #[test]
    fn simplest_corridor_single_push() {
        for &h in &ALL {
            let ok = solve_str("3\n#####\n#@$.#\n#####\n", h);
            assert_eq!(ok.moves.unwrap().to_string(), "right");
        }
    }

    #[test]
    fn already_solved_level_needs_no_moves() {
        let ok = solve_str("3\n####\n#@*#\n####\n", Heuristic::FixedPenalty);
        let moves = ok.moves.unwrap();
        assert_eq!(moves.move_cnt(), 0);
        assert_eq!(ok.stats.total_expanded(), 0);
    }

    #[test]
    fn zero_boxes_zero_goals_succeeds_immediately() {
        let ok = solve_str("3\n####\n#@ #\n####\n", Heuristic::FixedPenalty);
        assert_eq!(ok.moves.unwrap().move_cnt(), 0);
    }

    #[test]
    fn pinned_box_terminates_with_no_solution() {
        // the box hugs the right wall below a wall corner; it can never be
        // pushed, so the search must exhaust the frontier and stop
        let ok = solve_str("4\n#####\n#@ $#\n# . #\n#####\n", Heuristic::FixedPenalty);
        assert!(ok.moves.is_none());
    }

    #[test]
    fn corner_push_is_pruned_before_entering_frontier() {
        // the only possible push drives the box into a goal-less corner;
        // the deadlock detector rejects it during expansion
        let ok = solve_str("4\n#####\n#@$ #\n#  .#\n#####\n", Heuristic::FixedPenalty);
        assert!(ok.moves.is_none());
        assert!(ok.stats.deadlocks() > 0);
    }

    #[test]
    fn open_room_two_moves() {
        let ok = solve_str("4\n#####\n#@  #\n# $.#\n#####\n", Heuristic::FixedPenalty);
        assert_eq!(ok.moves.unwrap().to_string(), "down right");
    }

    #[test]
    fn solver_is_deterministic() {
        let input = "5\n#######\n#@  # #\n# $   #\n#  #.##\n#######\n";
        let first = solve_str(input, Heuristic::MatchClosest);
        let second = solve_str(input, Heuristic::MatchClosest);
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn duplicates_are_reached_not_recreated() {
        // an open room makes the agent revisit configurations
        let ok = solve_str(
            "5\n######\n#@   #\n#  $ #\n#   .#\n######\n",
            Heuristic::MatchClosest,
        );
        assert!(ok.moves.is_some());
        assert!(ok.stats.total_duplicates() > 0);
    }

    #[test]
    fn unreachable_box_is_an_error() {
        let level: Level = "3\n########\n#@$.#$.#\n########\n".parse().unwrap();
        assert_eq!(
            level
                .solve(Heuristic::FixedPenalty, RelaxPolicy::InPlace, false)
                .unwrap_err(),
            SolverErr::UnreachableBoxes
        );
    }

    #[test]
    fn unreachable_matched_pair_is_scenery() {
        // the sealed right chamber holds a box already on a goal
        let level: Level = "3\n########\n#@$.#*##\n########\n".parse().unwrap();
        let ok = level
            .solve(Heuristic::FixedPenalty, RelaxPolicy::InPlace, false)
            .unwrap();
        assert_eq!(ok.moves.unwrap().to_string(), "right");
    }

    #[test]
    fn missing_border_is_an_error() {
        let level: Level = "3\n####\n#@  \n####\n".parse().unwrap();
        assert_eq!(
            level
                .solve(Heuristic::FixedPenalty, RelaxPolicy::InPlace, false)
                .unwrap_err(),
            SolverErr::IncompleteBorder
        );
    }

    #[test]
    fn blank_board_line_fails_the_border_check() {
        // the blank first line parses into an all-floor row, which the
        // border validation then rejects instead of panicking anywhere
        let level: Level = "2\n\n#@#\n".parse().unwrap();
        assert_eq!(
            level
                .solve(Heuristic::FixedPenalty, RelaxPolicy::InPlace, false)
                .unwrap_err(),
            SolverErr::IncompleteBorder
        );
    }

    #[test]
    fn box_goal_count_mismatch_is_an_error() {
        let level: Level = "3\n#####\n#@$ #\n#####\n".parse().unwrap();
        assert_eq!(
            level
                .solve(Heuristic::FixedPenalty, RelaxPolicy::InPlace, false)
                .unwrap_err(),
            SolverErr::BoxesGoals
        );
    }

    #[test]
    fn backtrack_walks_parent_links() {
        let mut arena = Arena::new();
        let state = State::new(Pos::new(1, 1), vec![]);
        let root = arena.alloc(SearchNode::new(state.clone(), None, Dir::Up, 0, 3));
        let a = arena.alloc(SearchNode::new(state.clone(), Some(root), Dir::Down, 1, 2));
        let b = arena.alloc(SearchNode::new(state, Some(a), Dir::Left, 2, 1));
        assert_eq!(backtrack(&arena, b).to_string(), "down left");
        assert_eq!(backtrack(&arena, root).move_cnt(), 0);
    }

    fn relaxation_fixture(relax: RelaxPolicy) -> (Search<'static>, NodeId, NodeId) {
        // static so the Search can borrow it in a test fixture
        use std::sync::OnceLock;
        static MAP: OnceLock<(GoalMap, State)> = OnceLock::new();
        let (map, start) = MAP.get_or_init(|| {
            let level: Level = "3\n######\n#@$ .#\n######\n".parse().unwrap();
            preprocess(&level).unwrap()
        });

        let mut search = Search {
            map,
            heuristic: Heuristic::MatchClosest,
            relax,
            print_status: false,
            arena: Arena::new(),
            frontier: Frontier::new(),
            index: DuplicateIndex::new(),
            stats: Stats::new(),
        };

        let root = search.arena.alloc(SearchNode::new(
            start.clone(),
            None,
            Dir::Up,
            0,
            search
                .heuristic
                .score(&start.boxes, &map.goals, start.agent),
        ));
        search.index.insert(start.agent, &start.boxes, root);

        // a node for the configuration "agent stepped right, box pushed to
        // (1,3)" that pretends to have been reached expensively
        let stale_state = State::new(Pos::new(1, 2), vec![Pos::new(1, 3)]);
        let stale = search.arena.alloc(SearchNode::new(
            stale_state.clone(),
            None,
            Dir::Up,
            9,
            search
                .heuristic
                .score(&stale_state.boxes, &map.goals, stale_state.agent),
        ));
        search
            .index
            .insert(stale_state.agent, &stale_state.boxes, stale);

        (search, root, stale)
    }

    #[test]
    fn cheaper_path_relaxes_duplicate_in_place() {
        let (mut search, root, stale) = relaxation_fixture(RelaxPolicy::InPlace);
        search.expand(root);

        assert_eq!(search.arena[stale].cost, 1);
        assert_eq!(search.arena[stale].parent, Some(root));
        assert_eq!(search.arena[stale].dir, Dir::Right);
        assert_eq!(search.stats.relaxations(), 1);
        // the duplicate blocked the insertion of a fresh node, and InPlace
        // does not requeue the relaxed one
        assert!(!search
            .frontier
            .pop()
            .map(|id| id == stale)
            .unwrap_or(false));
    }

    #[test]
    fn reinsert_policy_requeues_relaxed_node() {
        let (mut search, root, stale) = relaxation_fixture(RelaxPolicy::Reinsert);
        search.expand(root);

        assert_eq!(search.arena[stale].cost, 1);
        assert_eq!(search.stats.relaxations(), 1);
        // the relaxed node is back in the frontier at its corrected priority
        let mut requeued = false;
        while let Some(id) = search.frontier.pop() {
            if id == stale {
                requeued = true;
            }
        }
        assert!(requeued);
    }
}
