//! Analysis engine: stiffness solver, safety evaluation, load combinations

mod combo;
pub mod safety;
mod solver;

pub use combo::{envelope, solve_with_combinations};
pub use solver::{solve, Solver};
