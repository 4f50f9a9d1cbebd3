//! Board structure with sentinel margins and row rotation

use serde::{Deserialize, Serialize};

use super::{Cell, Direction, Move, Player, Pos};

/// Game board: `size` rows of `3 * size - 2` cells.
///
/// Every row holds `size` playable cells framed by `size - 1` sentinels on
/// each side at game start. Shifting a row rotates it, so the number of
/// sentinels per row never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Board as read from disk, before its shape is checked
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw
            .size
            .checked_mul(3)
            .and_then(|cols| cols.checked_sub(2))
            .and_then(|cols| cols.checked_mul(raw.size));
        match expected {
            Some(len) if raw.size > 0 && len == raw.cells.len() => Ok(Self {
                size: raw.size,
                cells: raw.cells,
            }),
            _ => Err(format!(
                "board of size {} cannot hold {} cells",
                raw.size,
                raw.cells.len()
            )),
        }
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        let cols = Self::cols_for(size);
        let mut cells = Vec::with_capacity(size * cols);
        for _ in 0..size {
            for col in 0..cols {
                let playable = col + 1 >= size && col < 2 * size - 1;
                cells.push(if playable { Cell::Empty } else { Cell::Sentinel });
            }
        }
        Self { size, cells }
    }

    /// Build a board from text rows: `#` sentinel, `.` empty, `1`/`2` owned.
    ///
    /// Returns `None` if the rows do not form a valid `size x (3*size-2)` grid.
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 {
            return None;
        }
        let cols = Self::cols_for(size);
        let mut cells = Vec::with_capacity(size * cols);
        for row in rows {
            let before = cells.len();
            for c in row.chars().filter(|c| !c.is_whitespace()) {
                cells.push(Cell::from_char(c)?);
            }
            if cells.len() - before != cols {
                return None;
            }
        }
        Some(Self { size, cells })
    }

    #[inline]
    fn cols_for(size: usize) -> usize {
        (3 * size).saturating_sub(2)
    }

    /// Number of rows (and of playable cells per row)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cols(&self) -> usize {
        Self::cols_for(self.size)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows() && col < self.cols());
        row * self.cols() + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cell(pos.row as usize, pos.col as usize)
    }

    /// Cells of one row, left to right
    #[inline]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols()]
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.rows() && (pos.col as usize) < self.cols()
    }

    /// Mark a cell for `player`. No legality checking beyond the sentinel guard.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos.row as usize, pos.col as usize);
        debug_assert!(!self.cells[idx].is_sentinel(), "placing on a sentinel at {pos:?}");
        self.cells[idx] = Cell::Owned(player);
    }

    /// Overwrite a cell (used to restore a placement during search)
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos.row as usize, pos.col as usize);
        self.cells[idx] = cell;
    }

    /// Rotate a row by one position
    pub fn shift_row(&mut self, row: usize, direction: Direction) {
        let start = self.index(row, 0);
        let line = &mut self.cells[start..start + Self::cols_for(self.size)];
        match direction {
            Direction::Left => line.rotate_left(1),
            Direction::Right => line.rotate_right(1),
        }
    }

    /// Apply a move in place and return the board
    pub fn apply(&mut self, mv: Move, player: Player) -> &mut Self {
        match mv {
            Move::Place(pos) => self.place(pos, player),
            Move::Shift { row, direction } => self.shift_row(row as usize, direction),
        }
        self
    }

    /// Board that `mv` would produce, leaving `self` untouched
    pub fn with_move(&self, mv: Move, player: Player) -> Board {
        let mut next = self.clone();
        next.apply(mv, player);
        next
    }

    /// The cell a shift would wrap around to the other edge
    #[inline]
    pub fn vacated_edge(&self, row: usize, direction: Direction) -> Cell {
        match direction {
            Direction::Left => self.cell(row, 0),
            Direction::Right => self.cell(row, self.cols() - 1),
        }
    }

    /// Total cells owned by `player`
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Owned(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            let line: String = self.row(row).iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
