use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which scoring strategy the search uses. Selectable by name on the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of boxes not on a goal. Cheap, coarse, admissible.
    CountBoxes,
    /// Nearest-goal distance of the single closest mismatched box plus a
    /// flat penalty per remaining mismatched box. The default.
    FixedPenalty,
    /// Greedy first-come-first-served box-to-goal matching. Can
    /// overestimate, so not admissible.
    CoarseMatch,
    /// Sum of per-box nearest-goal distances (goals may be claimed by
    /// several boxes). Admissible.
    MatchClosest,
}

impl Heuristic {
    pub const NAMES: [&'static str; 4] = [
        "count_boxes",
        "fixed_penalty",
        "coarse_match",
        "match_closest",
    ];
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::FixedPenalty
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::CountBoxes => write!(f, "count_boxes"),
            Heuristic::FixedPenalty => write!(f, "fixed_penalty"),
            Heuristic::CoarseMatch => write!(f, "coarse_match"),
            Heuristic::MatchClosest => write!(f, "match_closest"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl Display for UnknownHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognised Algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count_boxes" => Ok(Heuristic::CountBoxes),
            "fixed_penalty" => Ok(Heuristic::FixedPenalty),
            "coarse_match" => Ok(Heuristic::CoarseMatch),
            "match_closest" => Ok(Heuristic::MatchClosest),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

/// What happens when a cheaper path to an already-known configuration is
/// found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelaxPolicy {
    /// Overwrite the duplicate's parent/move/cost in place. The frontier is
    /// not re-sorted and already-expanded nodes are not re-expanded, so the
    /// improved cost does not propagate to descendants. This mirrors the
    /// original solver and is the default.
    InPlace,
    /// Additionally re-insert the relaxed node into the frontier so it gets
    /// (re-)expanded at its corrected priority.
    Reinsert,
}

impl Default for RelaxPolicy {
    fn default() -> Self {
        RelaxPolicy::InPlace
    }
}
