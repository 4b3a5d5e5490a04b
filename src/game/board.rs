pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still accept a piece, in ascending index order.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Clear a single cell back to empty. Used by undo and by `probe`; the
    /// caller must only clear the top piece of a column so the gravity
    /// invariant holds.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Apply a hypothetical move, run `f` on the resulting position, then
    /// remove the piece again before returning. The piece comes off on every
    /// exit path, so search code cannot leak a mutation by returning early.
    /// Returns `None` if the column cannot accept a piece.
    pub fn probe<T>(
        &mut self,
        col: usize,
        cell: Cell,
        f: impl FnOnce(&mut Board, usize) -> T,
    ) -> Option<T> {
        let row = match self.drop_piece(col, cell) {
            Ok(row) => row,
            Err(_) => return None,
        };
        let result = f(self, row);
        self.clear(row, col);
        Some(result)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win. Counts
    /// consecutive same-color cells outward in both directions along each of
    /// the four axes; the placed cell itself counts as 1.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (dr, dc) in DIRECTIONS {
            let count = 1
                + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell);
            if count >= 4 {
                return true;
            }
        }

        false
    }

    /// Number of consecutive `cell`-colored cells strictly beyond (row, col)
    /// in direction (dr, dc), capped at 3.
    fn run_length(&self, row: usize, col: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        for i in 1..4 {
            let r = row as i32 + dr * i;
            let c = col as i32 + dc * i;
            if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
