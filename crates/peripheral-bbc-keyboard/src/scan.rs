//! Keyboard scan logic and the interrupt line.
//!
//! The System VIA drives the keyboard through the IC32 addressable latch and
//! port A. IC32 bit 3 (keyboard enable) picks the scan mode:
//!
//! - **Autoscan** (bit 3 set): a 74LS163 counter walks the columns on its
//!   own and the row lines feed an 8-input NAND, so CA2 goes high while any
//!   key in rows 1-7 of any fitted column is held.
//! - **Specific column** (bit 3 clear): the CPU writes the column to
//!   PA0-PA3 and the row to PA4-PA6. CA2 reflects the rows of that one
//!   column and PA7 reads back the addressed switch.
//!
//! Row 0 (Shift, Ctrl and the DIP switches) is not wired to the NAND gate.

use serde::{Deserialize, Serialize};

use crate::coord::MATRIX_DIM;
use crate::matrix::MatrixState;

/// IC32 bit that enables the autoscan counter.
pub const IC32_KEYBOARD_ENABLE: u8 = 0x08;

/// DIP switch bits are 10 wide; only the low eight are readable.
pub const DIP_SWITCH_MASK: u16 = 0x03FF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanMode {
    #[default]
    Autoscan,
    SpecificColumn,
}

/// Matrix width fitted to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatrixSize {
    /// Model B: columns 0-9.
    #[default]
    ModelB,
    /// Master 128: columns 0-12, the extra three carry the numeric keypad.
    Master,
}

impl MatrixSize {
    #[must_use]
    pub const fn columns(self) -> u8 {
        match self {
            Self::ModelB => 10,
            Self::Master => 13,
        }
    }
}

/// Receiver for the keyboard interrupt (System VIA CA2).
///
/// This is a level: it is told the current state every time it may have
/// changed, so repeated calls with the same value must be harmless.
pub trait InterruptLine {
    fn set_level(&mut self, active: bool);
}

impl<F: FnMut(bool)> InterruptLine for F {
    fn set_level(&mut self, active: bool) {
        self(active);
    }
}

/// An interrupt line nobody listens to. The level is still queryable on the
/// keyboard itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconnected;

impl InterruptLine for Unconnected {
    fn set_level(&mut self, _active: bool) {}
}

/// Records the level and how many times it was driven. Handy for front ends
/// that poll, and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelLatch {
    pub level: bool,
    pub updates: u32,
}

impl InterruptLine for LevelLatch {
    fn set_level(&mut self, active: bool) {
        self.level = active;
        self.updates = self.updates.wrapping_add(1);
    }
}

/// Scan address and mode as set by the System VIA, plus the board options
/// that shape what a scan sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanController {
    column: u8,
    row: u8,
    mode: ScanMode,
    size: MatrixSize,
    dip_switches: u16,
}

impl ScanController {
    #[must_use]
    pub fn new(size: MatrixSize, dip_switches: u16) -> Self {
        Self {
            column: 0,
            row: 0,
            mode: ScanMode::Autoscan,
            size,
            dip_switches: dip_switches & DIP_SWITCH_MASK,
        }
    }

    #[must_use]
    pub fn column(&self) -> u8 {
        self.column
    }

    #[must_use]
    pub fn row(&self) -> u8 {
        self.row
    }

    #[must_use]
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    #[must_use]
    pub fn size(&self) -> MatrixSize {
        self.size
    }

    #[must_use]
    pub fn dip_switches(&self) -> u16 {
        self.dip_switches
    }

    /// Address a column. Values past 15 are ignored.
    pub fn select_column(&mut self, column: u8) {
        if column < MATRIX_DIM {
            self.column = column;
        }
    }

    /// Address a row. Values past 15 are ignored.
    pub fn select_row(&mut self, row: u8) {
        if row < MATRIX_DIM {
            self.row = row;
        }
    }

    /// Set the scan mode directly, bypassing IC32.
    pub fn set_mode(&mut self, mode: ScanMode) {
        self.mode = mode;
    }

    /// Take the scan mode from an IC32 latch value.
    pub fn write_ic32(&mut self, ic32: u8) {
        self.mode = if ic32 & IC32_KEYBOARD_ENABLE != 0 {
            ScanMode::Autoscan
        } else {
            ScanMode::SpecificColumn
        };
    }

    /// Change the fitted matrix width.
    pub fn set_size(&mut self, size: MatrixSize) {
        self.size = size;
    }

    /// Replace the DIP switch bits, masked to 10.
    pub fn set_dip_switches(&mut self, bits: u16) {
        self.dip_switches = bits & DIP_SWITCH_MASK;
    }

    /// Level the keyboard interrupt should be at for this matrix.
    #[must_use]
    pub fn interrupt_level(&self, matrix: &MatrixState) -> bool {
        let columns = self.size.columns();
        match self.mode {
            ScanMode::Autoscan => matrix.any_in_columns(columns),
            ScanMode::SpecificColumn => self.column < columns && matrix.column_has_key(self.column),
        }
    }

    /// State of the addressed switch. Row 0, columns 2-9 are the DIP
    /// switches multiplexed onto the matrix, not keys.
    #[must_use]
    pub fn point_query(&self, matrix: &MatrixState) -> bool {
        if self.row == 0 && (2..=9).contains(&self.column) {
            self.dip_switches & (1 << (9 - self.column)) != 0
        } else {
            matrix.cell(self.column, self.row)
        }
    }
}

impl Default for ScanController {
    fn default() -> Self {
        Self::new(MatrixSize::ModelB, 0)
    }
}
