use itertools::Itertools;

pub const N: usize = 9;
pub const CELLS: usize = N * N;

/// Position of a cell on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

/// A group of nine cells that must hold each value exactly once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum House {
    Row(usize),
    Column(usize),
    /// Boxes are numbered row-major, 0 top-left to 8 bottom-right.
    Box(usize),
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < N && col < N, "Invalid cell: ({row}, {col})");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn from_index(index: usize) -> Self {
        assert!(index < CELLS, "Invalid cell index: {index}");
        Self::new(index / N, index % N)
    }

    /// Row-major position, used to address the flat grid storage.
    pub fn index(self) -> usize {
        self.row() * N + self.col()
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn box_index(self) -> usize {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// All 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).cartesian_product(0..N).map(|(i, j)| Self::new(i, j))
    }

    /// Row, column and box containing this cell, in that order.
    pub fn houses(self) -> [House; 3] {
        [
            House::Row(self.row()),
            House::Column(self.col()),
            House::Box(self.box_index()),
        ]
    }

    /// The 20 cells sharing a house with this one, excluding itself.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        self.houses()
            .into_iter()
            .flat_map(House::cells)
            .filter(move |&cell| cell != self)
            .sorted()
            .dedup()
    }
}

impl House {
    /// The nine member cells in ascending (row, col) order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = match self {
            House::Row(i) => (i..i + 1, 0..N),
            House::Column(j) => (0..N, j..j + 1),
            House::Box(b) => {
                let i0 = (b / 3) * 3;
                let j0 = (b % 3) * 3;
                (i0..i0 + 3, j0..j0 + 3)
            }
        };
        rows.cartesian_product(cols).map(|(i, j)| Cell::new(i, j))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..N)
            .map(House::Row)
            .chain((0..N).map(House::Column))
            .chain((0..N).map(House::Box))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, cell) in Cell::all().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), cell);
        }
        assert_eq!(Cell::new(4, 7).index(), 43);
    }

    #[test]
    fn row_and_col_cells_work() {
        let row = House::Row(2).cells().collect_vec();
        assert_eq!(row, (0..N).map(|j| Cell::new(2, j)).collect_vec());
        let col = House::Column(5).cells().collect_vec();
        assert_eq!(col, (0..N).map(|i| Cell::new(i, 5)).collect_vec());
    }

    #[test]
    fn box_cells_work() {
        let cell = Cell::new(4, 7);
        assert_eq!(cell.box_index(), 5);
        let cells = House::Box(cell.box_index())
            .cells()
            .map(|c| (c.row(), c.col()))
            .collect_vec();
        let expected = vec![
            (3, 6),
            (3, 7),
            (3, 8),
            (4, 6),
            (4, 7),
            (4, 8),
            (5, 6),
            (5, 7),
            (5, 8),
        ];
        assert_eq!(cells, expected);
    }

    #[test]
    fn peers_work() {
        for cell in Cell::all() {
            let peers = cell.peers().collect_vec();
            assert_eq!(peers.len(), 20);
            assert!(!peers.contains(&cell));
            assert!(peers.windows(2).all(|w| w[0] < w[1]));
            assert!(peers.iter().all(|p| p.row() == cell.row()
                || p.col() == cell.col()
                || p.box_index() == cell.box_index()));
        }
    }

    #[test]
    fn houses_are_ordered() {
        let houses = Cell::new(8, 0).houses();
        assert_eq!(houses, [House::Row(8), House::Column(0), House::Box(6)]);
        assert_eq!(House::all().count(), 27);
    }

    #[test]
    #[should_panic(expected = "Invalid cell")]
    fn rejects_out_of_range() {
        Cell::new(9, 0);
    }
}
