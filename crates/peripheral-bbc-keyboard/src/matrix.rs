//! Key matrix state.
//!
//! The 16×16 grid of switch intersections. A cell is closed while at least
//! one host key wired to it is held: several host keys share a cell (both
//! Shifts, Backspace and Delete), so each cell keeps a hold count and only
//! opens when the last holder lets go.

use crate::coord::{MATRIX_DIM, MatrixCoordinate};

const DIM: usize = MATRIX_DIM as usize;

pub struct MatrixState {
    /// Hold count per cell, indexed `[column][row]`.
    holds: [[u8; DIM]; DIM],
}

impl MatrixState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            holds: [[0; DIM]; DIM],
        }
    }

    /// Close a cell. Returns true if the cell was open before.
    pub fn press(&mut self, coord: MatrixCoordinate) -> bool {
        let hold = &mut self.holds[coord.column() as usize][coord.row() as usize];
        *hold = hold.saturating_add(1);
        *hold == 1
    }

    /// Drop one hold on a cell. Returns true if the cell opened.
    pub fn release(&mut self, coord: MatrixCoordinate) -> bool {
        let hold = &mut self.holds[coord.column() as usize][coord.row() as usize];
        let was_closed = *hold > 0;
        *hold = hold.saturating_sub(1);
        was_closed && *hold == 0
    }

    /// Force a cell closed or open, whatever its hold count. Closing keeps
    /// existing holds; opening drops them all. Returns true if its state
    /// changed.
    pub fn set(&mut self, coord: MatrixCoordinate, pressed: bool) -> bool {
        let hold = &mut self.holds[coord.column() as usize][coord.row() as usize];
        let was_closed = *hold > 0;
        *hold = if pressed { (*hold).max(1) } else { 0 };
        was_closed != pressed
    }

    #[must_use]
    pub fn is_pressed(&self, coord: MatrixCoordinate) -> bool {
        self.cell(coord.column(), coord.row())
    }

    /// Cell state by raw column/row. Anything past 15 reads open.
    #[must_use]
    pub fn cell(&self, column: u8, row: u8) -> bool {
        self.holds
            .get(column as usize)
            .and_then(|col| col.get(row as usize))
            .is_some_and(|&hold| hold > 0)
    }

    /// True if any key in rows 1-15 of `column` is held.
    #[must_use]
    pub fn column_has_key(&self, column: u8) -> bool {
        self.holds
            .get(column as usize)
            .is_some_and(|col| col[1..].iter().any(|&hold| hold > 0))
    }

    /// True if any key in rows 1-15 of columns `0..columns` is held.
    #[must_use]
    pub fn any_in_columns(&self, columns: u8) -> bool {
        (0..columns.min(MATRIX_DIM)).any(|col| self.column_has_key(col))
    }

    /// True if any key outside row 0 is held anywhere on the matrix.
    #[must_use]
    pub fn any_key(&self) -> bool {
        self.any_in_columns(MATRIX_DIM)
    }

    /// Open every cell.
    pub fn clear_all(&mut self) {
        self.holds = [[0; DIM]; DIM];
    }

    /// Closed cells in row-major order.
    pub fn pressed(&self) -> impl Iterator<Item = MatrixCoordinate> + '_ {
        (0..MATRIX_DIM)
            .flat_map(|row| (0..MATRIX_DIM).map(move |col| MatrixCoordinate::new(col, row)))
            .filter(|&coord| self.is_pressed(coord))
    }
}

impl Default for MatrixState {
    fn default() -> Self {
        Self::new()
    }
}
