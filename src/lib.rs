pub mod address;
pub mod candidates;
pub mod cli;
pub mod codec;
mod dispatcher;
mod error;
mod grid;
mod solver;

pub use dispatcher::{Dispatcher, PuzzleResult};
pub use error::{BatchError, FileError, FormatError};
pub use grid::{Grid, SolveState, SolveStats};
pub use solver::{solve_puzzle, Solution};
