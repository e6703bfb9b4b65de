// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;
pub mod vec2d;

use crate::config::{Heuristic, RelaxPolicy};
use crate::solver::{SolverErr, SolverOk};

pub trait Solve {
    fn solve(
        &self,
        heuristic: Heuristic,
        relax: RelaxPolicy,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr>;
}
