use crate::config::Heuristic;
use crate::data::Pos;

/// Flat per-box charge in `fixed_penalty` for every mismatched box beyond
/// the closest one. 1 keeps the bound admissible (every misplaced box needs
/// at least one push); raising it trades optimality for speed.
const PENALTY: u32 = 1;

impl Heuristic {
    /// Scores a configuration; less is better.
    ///
    /// Hard contract for every variant: the result is zero iff the box
    /// positions cover the goal set, regardless of box order. Callers
    /// guarantee `boxes.len() == goals.len()`.
    ///
    /// Every variant also charges the agent's distance to the mismatched box
    /// it considers most relevant - the agent has to walk to a box before it
    /// can push anything.
    pub fn score(self, boxes: &[Pos], goals: &[Pos], agent: Pos) -> u32 {
        match self {
            Heuristic::CountBoxes => count_boxes(boxes, goals, agent),
            Heuristic::FixedPenalty => fixed_penalty(boxes, goals, agent),
            Heuristic::CoarseMatch => coarse_match(boxes, goals, agent),
            Heuristic::MatchClosest => match_closest(boxes, goals, agent),
        }
    }
}

/// Number of boxes not sitting on any goal, plus the agent's distance to the
/// nearest such box.
fn count_boxes(boxes: &[Pos], goals: &[Pos], agent: Pos) -> u32 {
    let mut mismatched = 0;
    let mut agent_closest = u32::max_value();

    for &b in boxes {
        if !goals.contains(&b) {
            mismatched += 1;
            agent_closest = agent_closest.min(agent.dist(b));
        }
    }

    if mismatched == 0 {
        0
    } else {
        mismatched + agent_closest
    }
}

/// Nearest-goal distance of the single closest mismatched box, a flat
/// [`PENALTY`] per mismatched box, and the agent's distance to that closest
/// box. Deliberately not a tight bound - the penalty assumes one push per
/// remaining box.
fn fixed_penalty(boxes: &[Pos], goals: &[Pos], agent: Pos) -> u32 {
    let mut mismatched: u32 = 0;
    let mut global_min = u32::max_value();
    let mut agent_closest = 0;

    for &b in boxes {
        let mut nearest = u32::max_value();
        for &g in goals {
            nearest = nearest.min(b.dist(g));
            if nearest == 0 {
                break;
            }
        }
        if nearest == 0 {
            continue;
        }
        mismatched += 1;
        if nearest < global_min {
            global_min = nearest;
            agent_closest = agent.dist(b);
        }
    }

    if mismatched == 0 {
        0
    } else {
        mismatched * PENALTY + global_min + agent_closest
    }
}

/// Greedy first-come-first-served matching: each box claims its nearest
/// still-unclaimed goal in array order. Not a minimum-cost matching, so this
/// can overestimate - NOT admissible. Adds the agent's distance to the
/// nearest mismatched box.
fn coarse_match(boxes: &[Pos], goals: &[Pos], agent: Pos) -> u32 {
    let mut claimed = vec![false; goals.len()];
    let mut total = 0;
    let mut agent_closest = u32::max_value();

    for &b in boxes {
        let mut local_min = u32::max_value();
        let mut min_goal = 0;
        for (i, &g) in goals.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            let dist = b.dist(g);
            if dist < local_min {
                local_min = dist;
                min_goal = i;
            }
        }
        if local_min != 0 {
            agent_closest = agent_closest.min(agent.dist(b));
        }
        claimed[min_goal] = true;
        total += local_min;
    }

    if total == 0 {
        0
    } else {
        total + agent_closest
    }
}

/// Sum of each box's distance to its nearest goal, goals shared freely
/// between boxes. A lower bound on the remaining pushes, so admissible up to
/// the single agent-distance term.
fn match_closest(boxes: &[Pos], goals: &[Pos], agent: Pos) -> u32 {
    let mut total = 0;
    let mut agent_closest = u32::max_value();

    for &b in boxes {
        let mut nearest = u32::max_value();
        for &g in goals {
            nearest = nearest.min(b.dist(g));
        }
        if nearest != 0 {
            agent_closest = agent_closest.min(agent.dist(b));
        }
        total += nearest;
    }

    if total == 0 {
        0
    } else {
        total + agent_closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Heuristic; 4] = [
        Heuristic::CountBoxes,
        Heuristic::FixedPenalty,
        Heuristic::CoarseMatch,
        Heuristic::MatchClosest,
    ];

    #[test]
    fn zero_iff_all_boxes_on_goals() {
        let goals = [Pos::new(1, 1), Pos::new(2, 5), Pos::new(7, 3)];
        let matched = [Pos::new(1, 1), Pos::new(2, 5), Pos::new(7, 3)];
        // same set, different order
        let permuted = [Pos::new(7, 3), Pos::new(1, 1), Pos::new(2, 5)];
        let off_by_one = [Pos::new(1, 1), Pos::new(2, 5), Pos::new(7, 4)];
        let agent = Pos::new(4, 4);

        for &h in &ALL {
            assert_eq!(h.score(&matched, &goals, agent), 0, "{}", h);
            assert_eq!(h.score(&permuted, &goals, agent), 0, "{}", h);
            assert_ne!(h.score(&off_by_one, &goals, agent), 0, "{}", h);
        }
    }

    #[test]
    fn zero_boxes_scores_zero() {
        for &h in &ALL {
            assert_eq!(h.score(&[], &[], Pos::new(1, 1)), 0);
        }
    }

    #[test]
    fn count_boxes_counts_and_walks() {
        let goals = [Pos::new(0, 0), Pos::new(0, 5)];
        let boxes = [Pos::new(0, 0), Pos::new(3, 5)];
        let agent = Pos::new(3, 3);
        // one mismatched box, agent is 2 away from it
        assert_eq!(Heuristic::CountBoxes.score(&boxes, &goals, agent), 1 + 2);
    }

    #[test]
    fn fixed_penalty_charges_closest_plus_flat_rate() {
        let goals = [Pos::new(0, 0), Pos::new(0, 10)];
        // nearest-goal distances 2 and 4; closest mismatched box is boxes[0],
        // agent is 3 away from it
        let boxes = [Pos::new(0, 2), Pos::new(0, 6)];
        let agent = Pos::new(3, 2);
        // 2 mismatched * PENALTY + global min 2 + agent walk 3
        assert_eq!(Heuristic::FixedPenalty.score(&boxes, &goals, agent), 2 + 2 + 3);
    }

    #[test]
    fn coarse_match_claims_goals_in_array_order() {
        let goals = [Pos::new(0, 4), Pos::new(0, 0)];
        // first box claims goal (0,4) at distance 1, forcing the second box
        // to the far goal at distance 5; a minimum-cost matching would be
        // 3 + 3. agent sits on the first box's cell
        let boxes = [Pos::new(0, 3), Pos::new(0, 5)];
        let agent = Pos::new(0, 3);
        assert_eq!(Heuristic::CoarseMatch.score(&boxes, &goals, agent), (1 + 5) + 0);
    }

    #[test]
    fn match_closest_shares_goals() {
        let goals = [Pos::new(0, 0), Pos::new(0, 10)];
        // both boxes are nearest to the same goal; it is counted twice
        let boxes = [Pos::new(0, 1), Pos::new(0, 2)];
        let agent = Pos::new(0, 1);
        // distances 1 + 2, agent distance 0 to the first box... agent is ON
        // the first box's cell so the walk term is 0
        assert_eq!(Heuristic::MatchClosest.score(&boxes, &goals, agent), 3);
    }

    #[test]
    fn agent_term_uses_nearest_mismatched_box() {
        let goals = [Pos::new(0, 0), Pos::new(5, 5)];
        let boxes = [Pos::new(0, 0), Pos::new(5, 6)]; // first box matched
        let agent = Pos::new(0, 1);
        // match_closest: box dist 1, agent must reach the mismatched box
        // at (5,6): distance 10
        assert_eq!(Heuristic::MatchClosest.score(&boxes, &goals, agent), 1 + 10);
        // count_boxes: 1 mismatched + the same walk
        assert_eq!(Heuristic::CountBoxes.score(&boxes, &goals, agent), 1 + 10);
    }
}
