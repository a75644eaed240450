//! Puzzle text format.
//!
//! A puzzle is one line of 81 symbols from `0-9`, row-major, `0` marking an
//! open cell. Puzzle files hold one puzzle per line; blank lines and lines
//! starting with `#` are skipped.

use std::{fmt, fs, path::Path, str::FromStr};

use itertools::Itertools;

use crate::{
    address::{Cell, CELLS, N},
    candidates::Candidates,
    error::{FileError, FormatError},
    grid::Grid,
};

const ROW_SEPARATOR_THIN: &str = "\n---+---+---++---+---+---++---+---+---\n";
const ROW_SEPARATOR_THICK: &str = "\n===+===+===++===+===+===++===+===+===\n";
const COL_SEPARATOR_THIN: &str = "|";
const COL_SEPARATOR_THICK: &str = "||";

impl FromStr for Grid {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, FormatError> {
        let len = text.chars().count();
        if len != CELLS {
            return Err(FormatError::Length { len });
        }
        let mut cells = [Candidates::FULL; CELLS];
        for (position, symbol) in text.chars().enumerate() {
            cells[position] = match symbol.to_digit(10) {
                Some(0) => Candidates::FULL,
                Some(d) => Candidates::single(d as u8),
                None => return Err(FormatError::Symbol { position, symbol }),
            };
        }
        Ok(Grid::from_cells(cells))
    }
}

fn symbol(grid: &Grid, cell: Cell) -> char {
    grid.value(cell).map_or('0', |d| char::from(b'0' + d))
}

/// The flat 81-symbol line, `0` for every cell without a single value.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Cell::all().try_for_each(|cell| write!(f, "{}", symbol(self, cell)))
    }
}

impl Grid {
    /// Human-readable board, boxes marked by doubled separators. Not meant to be parsed back.
    pub fn to_pretty_string(&self) -> String {
        let mut text = String::new();
        for i in 0..N {
            if i > 0 {
                text.push_str(if i % 3 == 0 {
                    ROW_SEPARATOR_THICK
                } else {
                    ROW_SEPARATOR_THIN
                });
            }
            for j in 0..N {
                if j > 0 {
                    text.push_str(if j % 3 == 0 {
                        COL_SEPARATOR_THICK
                    } else {
                        COL_SEPARATOR_THIN
                    });
                }
                text.push(' ');
                text.push(symbol(self, Cell::new(i, j)));
                text.push(' ');
            }
        }
        text.push('\n');
        text
    }
}

/// Puzzle lines of a file's contents with their 1-based line numbers.
pub fn puzzle_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .map(str::trim)
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub fn read_puzzle_file(path: &Path) -> Result<Vec<String>, FileError> {
    let text = fs::read_to_string(path).map_err(|source| FileError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(puzzle_lines(&text)
        .map(|(_, line)| line.to_string())
        .collect_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn parse_works() {
        let board: Grid = PUZZLE.parse().unwrap();
        assert_eq!(board.value(Cell::new(0, 0)), Some(5));
        assert_eq!(board.value(Cell::new(0, 1)), Some(3));
        assert_eq!(board.value(Cell::new(8, 8)), Some(9));
        assert_eq!(board.candidates(Cell::new(0, 2)), Candidates::FULL);
        assert!(!board.is_known(Cell::new(0, 2)));
        assert_eq!(board.to_string(), PUZZLE);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        for len in [0, 80, 82] {
            let text = "0".repeat(len);
            assert_eq!(text.parse::<Grid>(), Err(FormatError::Length { len }));
        }
        let truncated = &PUZZLE[..78];
        assert_eq!(
            truncated.parse::<Grid>(),
            Err(FormatError::Length { len: 78 })
        );
    }

    #[test]
    fn parse_rejects_invalid_symbols() {
        for bad in ['a', '.', ' ', '-'] {
            let mut text = PUZZLE.to_string();
            text.replace_range(40..41, &bad.to_string());
            assert_eq!(
                text.parse::<Grid>(),
                Err(FormatError::Symbol {
                    position: 40,
                    symbol: bad
                })
            );
        }
    }

    #[test]
    fn parse_counts_chars_not_bytes() {
        let text = format!("é{}", "0".repeat(80));
        assert_eq!(
            text.parse::<Grid>(),
            Err(FormatError::Symbol {
                position: 0,
                symbol: 'é'
            })
        );
    }

    #[test]
    fn pretty_print_blank_works() {
        let board: Grid = "0".repeat(81).parse().unwrap();
        let row = " 0 | 0 | 0 || 0 | 0 | 0 || 0 | 0 | 0 ";
        let thin = "---+---+---++---+---+---++---+---+---";
        let thick = "===+===+===++===+===+===++===+===+===";
        let expected = [
            row, thin, row, thin, row, thick, row, thin, row, thin, row, thick, row, thin, row,
            thin, row,
        ]
        .join("\n")
            + "\n";
        assert_eq!(board.to_pretty_string(), expected);
    }

    #[test]
    fn pretty_print_shows_values() {
        let board: Grid = PUZZLE.parse().unwrap();
        let pretty = board.to_pretty_string();
        let first = pretty.lines().next().unwrap();
        assert_eq!(first, " 5 | 3 | 0 || 0 | 7 | 0 || 0 | 0 | 0 ");
        assert_eq!(pretty.lines().count(), 17);
        assert!(pretty.ends_with(" 7 | 9 \n"));
    }

    #[test]
    fn puzzle_lines_skip_comments_and_blanks() {
        let text = format!("# header\n\n{PUZZLE}\n   \n#{PUZZLE}\n  {PUZZLE}  \n");
        let lines = puzzle_lines(&text).collect_vec();
        assert_eq!(lines, vec![(3, PUZZLE), (6, PUZZLE)]);
    }

    #[test]
    fn read_puzzle_file_reports_missing_file() {
        let path = Path::new("this/file/does/not/exist.sudoku");
        let err = read_puzzle_file(path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn read_puzzle_file_works() {
        let path = std::env::temp_dir().join(format!("puzzles-{}.sudoku", std::process::id()));
        fs::write(&path, format!("# two puzzles\n{PUZZLE}\n\n{}\n", "0".repeat(81))).unwrap();
        let puzzles = read_puzzle_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(puzzles, vec![PUZZLE.to_string(), "0".repeat(81)]);
    }
}
