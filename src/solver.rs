use crate::{
    error::FormatError,
    grid::{Grid, SolveState, SolveStats},
};

/// A puzzle after propagation reached its fixed point.
#[derive(Debug, Clone)]
pub struct Solution {
    pub grid: Grid,
    pub stats: SolveStats,
}

impl Solution {
    pub fn state(&self) -> SolveState {
        self.grid.state()
    }
}

/// Parses one puzzle line and solves it as far as propagation allows.
pub fn solve_puzzle(text: &str) -> Result<Solution, FormatError> {
    let mut grid: Grid = text.parse()?;
    let stats = grid.solve();
    Ok(Solution { grid, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_puzzle_works() {
        let text =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let solution = solve_puzzle(text).unwrap();
        println!("{}", solution.grid.to_pretty_string());
        assert_eq!(solution.state(), SolveState::Solved);
        assert!(solution.grid.is_valid_solution());
        assert!(solution.stats.passes > 1);
    }

    #[test]
    fn solve_puzzle_fails_on_invalid_input() {
        let text = "53007000x600195000098000060800060003400803001700020006060000280000419005000080079";
        let err = solve_puzzle(text).unwrap_err();
        println!("{err}");
        assert_eq!(
            err,
            FormatError::Symbol {
                position: 8,
                symbol: 'x'
            }
        );
    }
}
