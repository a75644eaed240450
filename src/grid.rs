use std::ops::Index;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    address::{Cell, House, CELLS},
    candidates::Candidates,
};

/// Candidate sets for the 81 cells, stored row-major.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [Candidates; CELLS],
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SolveState {
    /// Every cell holds exactly one value.
    Solved,
    /// Consistent so far, but some cell still has several candidates.
    Stalled,
    /// Some cell ran out of candidates or a house repeats a value.
    Contradiction,
}

/// Work done by [`Grid::solve`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SolveStats {
    /// Full sweeps over the unknown cells.
    pub passes: usize,
    /// Calls to [`Grid::update`].
    pub calls: usize,
    /// Calls that narrowed a candidate set.
    pub updates: usize,
}

impl Default for Grid {
    /// A blank grid: every candidate open everywhere.
    fn default() -> Self {
        Self {
            cells: [Candidates::FULL; CELLS],
        }
    }
}

impl Grid {
    pub(crate) fn from_cells(cells: [Candidates; CELLS]) -> Self {
        Self { cells }
    }

    pub fn candidates(&self, cell: Cell) -> Candidates {
        self.cells[cell.index()]
    }

    pub fn is_known(&self, cell: Cell) -> bool {
        self[cell].is_single()
    }

    /// The cell's value, or `None` while more (or fewer) than one candidate remains.
    pub fn value(&self, cell: Cell) -> Option<u8> {
        self[cell].single_value()
    }

    pub fn unknown_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| !self.is_known(cell)).collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_single()).count()
    }

    pub fn is_solved(&self) -> bool {
        self.unknown_count() == 0
    }

    /// Narrows the candidates of `cell` using its peers.
    ///
    /// Values of known peers are removed first. If the cell is still open, each
    /// house (row, column, box) is checked for a candidate no other member can
    /// take; the first house yielding exactly one such candidate fixes the cell.
    ///
    /// Returns whether the candidate set changed.
    pub fn update(&mut self, cell: Cell) -> bool {
        let before = self[cell];
        let mut candidates = before;
        for value in cell.peers().filter_map(|peer| self.value(peer)) {
            candidates.remove(value);
        }
        self.cells[cell.index()] = candidates;
        let mut updated = candidates != before;

        if !candidates.is_single() {
            for house in cell.houses() {
                let elsewhere = house
                    .cells()
                    .filter(|&other| other != cell)
                    .fold(Candidates::EMPTY, |acc, other| acc | self[other]);
                let hidden = candidates - elsewhere;
                if let Some(value) = hidden.single_value() {
                    trace!("{cell:?} must be {value} in {house:?}");
                    self.cells[cell.index()] = hidden;
                    updated = true;
                    break;
                }
            }
        }
        updated
    }

    /// Runs [`Grid::update`] over all unknown cells until a full pass changes
    /// nothing or nothing is left to solve.
    ///
    /// Candidates only ever shrink, so this always terminates. The result may
    /// still be [`SolveState::Stalled`]; no guessing is done.
    pub fn solve(&mut self) -> SolveStats {
        let mut stats = SolveStats::default();
        loop {
            let unknown = self.unknown_cells();
            if unknown.is_empty() {
                break;
            }
            stats.passes += 1;
            let mut changed = false;
            for cell in unknown {
                stats.calls += 1;
                if self.update(cell) {
                    stats.updates += 1;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        debug!(
            "Fixed point after {} passes ({} updates), {} unknown cells left",
            stats.passes,
            stats.updates,
            self.unknown_count()
        );
        stats
    }

    pub fn state(&self) -> SolveState {
        if self.cells.iter().any(|c| c.is_empty()) || self.has_repeated_value() {
            SolveState::Contradiction
        } else if self.is_solved() {
            SolveState::Solved
        } else {
            SolveState::Stalled
        }
    }

    fn has_repeated_value(&self) -> bool {
        House::all().any(|house| {
            house
                .cells()
                .filter_map(|cell| self.value(cell))
                .counts()
                .into_values()
                .any(|n| n > 1)
        })
    }

    /// Whether every row, column and box holds each of 1..=9 exactly once.
    pub fn is_valid_solution(&self) -> bool {
        House::all().all(|house| {
            house
                .cells()
                .map(|cell| self.value(cell))
                .collect::<Option<Candidates>>()
                .map_or(false, |values| values == Candidates::FULL)
        })
    }
}

impl Index<Cell> for Grid {
    type Output = Candidates;

    fn index(&self, cell: Cell) -> &Candidates {
        &self.cells[cell.index()]
    }
}
