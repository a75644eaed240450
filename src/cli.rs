//! Command-line surface of the `sudoku-cruncher` binary.
//!
//! Exit codes:
//!
//! | code | meaning                             |
//! |------|-------------------------------------|
//! | 0    | all puzzles processed               |
//! | 1    | help was requested                  |
//! | 2    | no input file given                 |
//! | 3    | more than one input file given      |
//! | 4    | input file missing or unreadable    |
//! | 5    | input file holds a malformed puzzle |
//! | 6    | any other usage error               |

use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, Parser};
use log::info;
use thiserror::Error;

use crate::{
    codec::read_puzzle_file,
    dispatcher::Dispatcher,
    error::{BatchError, FileError},
    grid::Grid,
};

#[derive(Debug, Parser)]
#[command(name = "sudoku-cruncher", about = "Solves the sudokus in a file by constraint propagation.")]
struct Args {
    /// The input file, containing sudokus to solve, one per line.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Pretty print the solved sudokus.
    #[arg(short, long)]
    pretty: bool,

    /// Number of worker threads [default: one per CPU].
    #[arg(short = 'j', long, value_name = "N")]
    workers: Option<usize>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub pretty: bool,
    pub workers: Option<usize>,
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Rendered usage text, shown on `--help`.
    #[error("{0}")]
    Help(String),
    #[error("no input file given")]
    MissingInput,
    #[error("expected one input file, got {0}")]
    MultipleInputs(usize),
    #[error("input file {} not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Format(#[from] BatchError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Help(_) => 1,
            CliError::MissingInput => 2,
            CliError::MultipleInputs(_) => 3,
            CliError::InputNotFound(_) | CliError::File(_) => 4,
            CliError::Format(_) => 5,
            CliError::Usage(_) => 6,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp => CliError::Help(err.render().to_string()),
            _ => CliError::Usage(err.render().to_string()),
        })?;
        let mut inputs = args.inputs;
        let input = match inputs.len() {
            0 => return Err(CliError::MissingInput),
            1 => inputs.remove(0),
            n => return Err(CliError::MultipleInputs(n)),
        };
        if !input.exists() {
            return Err(CliError::InputNotFound(input));
        }
        Ok(Self {
            input,
            pretty: args.pretty,
            workers: args.workers,
        })
    }

    fn dispatcher(&self) -> Dispatcher {
        self.workers.map_or_else(Dispatcher::default, Dispatcher::new)
    }
}

/// Reads, solves and renders every puzzle of the configured input, in input order.
pub fn run(config: &Config) -> Result<Vec<String>, CliError> {
    let puzzles = read_puzzle_file(&config.input)?;
    let dispatcher = config.dispatcher();
    info!(
        "Read {} puzzles from {}, solving with {} workers",
        puzzles.len(),
        config.input.display(),
        dispatcher.workers()
    );
    let solved = dispatcher.crunch(&puzzles)?;

    let incomplete = solved.iter().filter(|line| line.contains('0')).count();
    if incomplete > 0 {
        info!("{incomplete} of {} puzzles could not be completed", solved.len());
    }

    if !config.pretty {
        return Ok(solved);
    }
    solved
        .iter()
        .enumerate()
        .map(|(index, line)| -> Result<String, CliError> {
            let grid: Grid = line
                .parse()
                .map_err(|source| BatchError { index, source })?;
            Ok(grid.to_pretty_string())
        })
        .collect()
}
