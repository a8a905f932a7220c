//! Matrix coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of columns and rows addressable on the matrix.
pub const MATRIX_DIM: u8 = 16;

/// A (column, row) position in the 16×16 key matrix.
///
/// Packed as one byte the way the OS ROM and the hardware see it: the low
/// nibble is the column, the high nibble is the row. "No key" is expressed
/// as `Option<MatrixCoordinate>::None`, never as a magic byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixCoordinate(u8);

impl MatrixCoordinate {
    /// Build a coordinate from its column and row. Both are masked to 4 bits.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Self {
        Self(((row & 0x0F) << 4) | (column & 0x0F))
    }

    /// Build a coordinate from the packed `0xRC` byte.
    #[must_use]
    pub const fn from_packed(packed: u8) -> Self {
        Self(packed)
    }

    #[must_use]
    pub const fn packed(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 & 0x0F
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 >> 4
    }

    /// Row 0 holds Shift, Ctrl and the DIP switches. It never raises the
    /// keyboard interrupt.
    #[must_use]
    pub const fn is_modifier_row(self) -> bool {
        self.row() == 0
    }
}

impl fmt::Display for MatrixCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_column_low_row_high() {
        let coord = MatrixCoordinate::new(0x9, 0x4);
        assert_eq!(coord.packed(), 0x49);
        assert_eq!(coord.column(), 9);
        assert_eq!(coord.row(), 4);
    }

    #[test]
    fn from_packed_splits_nibbles() {
        let coord = MatrixCoordinate::from_packed(0x7C);
        assert_eq!(coord.column(), 0xC);
        assert_eq!(coord.row(), 7);
    }

    #[test]
    fn new_masks_out_of_range_parts() {
        assert_eq!(MatrixCoordinate::new(0x1F, 0x12), MatrixCoordinate::new(0xF, 0x2));
    }

    #[test]
    fn display_uses_hex_byte() {
        assert_eq!(MatrixCoordinate::new(1, 4).to_string(), "$41");
    }
}
