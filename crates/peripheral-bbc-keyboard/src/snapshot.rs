//! Point-in-time view of the keyboard for debuggers and front ends.

use serde::Serialize;

use crate::coord::MatrixCoordinate;
use crate::remap::ModeFlags;
use crate::scan::{MatrixSize, ScanMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardSnapshot {
    pub column: u8,
    pub row: u8,
    pub mode: ScanMode,
    pub size: MatrixSize,
    pub dip_switches: u16,
    pub interrupt: bool,
    pub mode_flags: ModeFlags,
    /// Closed cells in row-major order, including row 0.
    pub pressed: Vec<MatrixCoordinate>,
}
