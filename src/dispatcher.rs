use std::{
    panic,
    sync::atomic::{AtomicUsize, Ordering},
};

use itertools::Itertools;
use log::{debug, info};

use crate::{
    error::{BatchError, FormatError},
    grid::SolveState,
    solver::solve_puzzle,
};

pub type PuzzleResult = Result<String, FormatError>;

/// Solves batches of puzzles on a fixed pool of worker threads.
///
/// Workers claim puzzles one at a time through a shared counter, so each
/// input position is handled by exactly one worker. Results come back in
/// input order regardless of which worker finished first.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Dispatcher {
    workers: usize,
}

impl Default for Dispatcher {
    /// One worker per logical CPU.
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl Dispatcher {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Solves every puzzle, keeping a malformed one from affecting the rest.
    ///
    /// `output[i]` is the solved line for `puzzles[i]`, or the reason it
    /// could not be parsed.
    pub fn solve_each<S>(&self, puzzles: &[S]) -> Vec<PuzzleResult>
    where
        S: AsRef<str> + Sync,
    {
        if puzzles.is_empty() {
            return Vec::new();
        }
        let workers = self.workers.min(puzzles.len());
        let next = AtomicUsize::new(0);

        let batches = crossbeam::thread::scope(|s| {
            let handles = (0..workers)
                .map(|i| {
                    let next = &next;
                    s.spawn(move |_| work(i, puzzles, next))
                })
                .collect_vec();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
                .collect_vec()
        })
        .unwrap_or_else(|err| panic::resume_unwind(err));

        let mut slots = Slots::new(puzzles.len());
        for (index, result) in batches.into_iter().flatten() {
            slots.fill(index, result);
        }
        let results = slots.into_vec();
        info!(
            "Solved {} puzzles with {workers} workers ({} malformed)",
            results.len(),
            results.iter().filter(|r| r.is_err()).count()
        );
        results
    }

    /// Solves every puzzle, or reports the first malformed one by position.
    pub fn crunch<S>(&self, puzzles: &[S]) -> Result<Vec<String>, BatchError>
    where
        S: AsRef<str> + Sync,
    {
        self.solve_each(puzzles)
            .into_iter()
            .enumerate()
            .map(|(index, result)| result.map_err(|source| BatchError { index, source }))
            .collect()
    }
}

/// Claims puzzles until the counter runs past the batch.
fn work<S: AsRef<str>>(
    id: usize,
    puzzles: &[S],
    next: &AtomicUsize,
) -> Vec<(usize, PuzzleResult)> {
    let mut done = Vec::new();
    loop {
        let index = next.fetch_add(1, Ordering::SeqCst);
        let Some(puzzle) = puzzles.get(index) else {
            break;
        };
        debug!("[Worker {id}] Solving puzzle {index}");
        let result = solve_puzzle(puzzle.as_ref()).map(|solution| {
            match solution.state() {
                SolveState::Solved => {}
                state => debug!(
                    "[Worker {id}] Puzzle {index} ended {state:?} with {} unknown cells",
                    solution.grid.unknown_count()
                ),
            }
            solution.grid.to_string()
        });
        if let Err(err) = &result {
            debug!("[Worker {id}] Puzzle {index} is malformed: {err}");
        }
        done.push((index, result));
    }
    debug!("[Worker {id}] No puzzles left after {} solved", done.len());
    done
}

/// Output positions that each take exactly one value.
struct Slots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Slots<T> {
    fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
        }
    }

    fn fill(&mut self, index: usize, value: T) {
        let slot = &mut self.slots[index];
        assert!(slot.is_none(), "Slot {index} filled twice");
        *slot = Some(value);
    }

    fn into_vec(self) -> Vec<T> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.unwrap_or_else(|| panic!("Slot {index} never filled")))
            .collect()
    }
}
