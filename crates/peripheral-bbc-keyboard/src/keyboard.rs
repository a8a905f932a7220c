//! The keyboard as one emulated component.
//!
//! Host events run through remap → redefinition → translation into the
//! matrix; the System VIA side addresses the matrix and reads back switches.
//! Every call that can change what the scan logic sees ends by recomputing
//! the interrupt level and driving it onto the [`InterruptLine`].

use log::{debug, trace};

use crate::config::KeyboardConfig;
use crate::coord::MatrixCoordinate;
use crate::host::HostKeyCode;
use crate::keymap::translate;
use crate::matrix::MatrixState;
use crate::redefine::{KeyRedefinitions, KeymapError};
use crate::remap::{Indicators, ModeFlags};
use crate::scan::{InterruptLine, MatrixSize, ScanController, ScanMode, Unconnected};
use crate::snapshot::KeyboardSnapshot;

/// One key transition from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: HostKeyCode,
    pub pressed: bool,
    pub indicators: Indicators,
}

impl KeyEvent {
    #[must_use]
    pub fn down(code: HostKeyCode) -> Self {
        Self {
            code,
            pressed: true,
            indicators: Indicators::default(),
        }
    }

    #[must_use]
    pub fn up(code: HostKeyCode) -> Self {
        Self {
            code,
            pressed: false,
            indicators: Indicators::default(),
        }
    }

    #[must_use]
    pub fn with_indicators(self, indicators: Indicators) -> Self {
        Self { indicators, ..self }
    }
}

pub struct Keyboard<L: InterruptLine = Unconnected> {
    matrix: MatrixState,
    scan: ScanController,
    flags: ModeFlags,
    redefinitions: KeyRedefinitions,
    /// Cell closed by each held host key, indexed by the code as delivered.
    /// The release opens this cell even if Num Lock changed meanwhile.
    held: [Option<MatrixCoordinate>; HostKeyCode::COUNT],
    /// Last level driven onto the line.
    interrupt: bool,
    line: L,
}

impl Keyboard<Unconnected> {
    /// A Model B keyboard with all switches off and nothing listening.
    #[must_use]
    pub fn new() -> Self {
        Self::with_line(Unconnected)
    }
}

impl Default for Keyboard<Unconnected> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: InterruptLine> Keyboard<L> {
    /// A Model B keyboard driving `line`.
    pub fn with_line(line: L) -> Self {
        Self {
            matrix: MatrixState::new(),
            scan: ScanController::default(),
            flags: ModeFlags::default(),
            redefinitions: KeyRedefinitions::identity(),
            held: [None; HostKeyCode::COUNT],
            interrupt: false,
            line,
        }
    }

    /// Build from a host configuration. Fails only on a redefinition that
    /// names a code outside the host range.
    pub fn from_config(config: &KeyboardConfig, line: L) -> Result<Self, KeymapError> {
        let mut keyboard = Self::with_line(line);
        keyboard.redefinitions = KeyRedefinitions::from_redefinitions(&config.redefinitions)?;
        keyboard.flags = config.mode_flags;
        keyboard.scan = ScanController::new(config.size, config.dip_switches);
        Ok(keyboard)
    }

    // --- Host side ---

    /// Resolve a host key to the cell it closes under the current flags.
    #[must_use]
    pub fn map_key(&self, code: HostKeyCode, indicators: Indicators) -> Option<MatrixCoordinate> {
        let remapped = self.flags.remap(code, indicators);
        let redefined = self.redefinitions.lookup(remapped);
        let coord = translate(redefined);
        debug!(
            "keyboard: mapping {} -> {} -> {}, matrix {}",
            code.0,
            remapped.0,
            redefined.0,
            coord.map_or_else(|| "none".to_string(), |c| c.to_string())
        );
        coord
    }

    /// Host key pressed. Repeats while held are ignored.
    pub fn key_down(&mut self, code: HostKeyCode, indicators: Indicators) {
        let Some(index) = code.index() else { return };
        if self.held[index].is_some() {
            // Host auto-repeat.
            return;
        }
        if let Some(coord) = self.map_key(code, indicators) {
            self.held[index] = Some(coord);
            self.matrix.press(coord);
            self.update();
        }
    }

    /// Host key released. Opens the cell its key-down closed, if any.
    pub fn key_up(&mut self, code: HostKeyCode) {
        let Some(index) = code.index() else { return };
        if let Some(coord) = self.held[index].take() {
            self.matrix.release(coord);
            self.update();
        }
    }

    /// Dispatch a [`KeyEvent`] to [`key_down`](Self::key_down) or
    /// [`key_up`](Self::key_up).
    pub fn key_event(&mut self, event: KeyEvent) {
        if event.pressed {
            self.key_down(event.code, event.indicators);
        } else {
            self.key_up(event.code);
        }
    }

    /// Close or open a matrix cell directly, bypassing host translation.
    /// Last write wins: opening a cell also forgets any host key holding it,
    /// so a later key-up has nothing to release and a key-down closes it
    /// again.
    pub fn set_matrix_key(&mut self, coord: MatrixCoordinate, pressed: bool) {
        self.matrix.set(coord, pressed);
        if !pressed {
            for slot in &mut self.held {
                if *slot == Some(coord) {
                    *slot = None;
                }
            }
        }
        self.update();
    }

    /// Release every key and drop the interrupt line. Scan address, mode
    /// and flags are kept.
    pub fn reset(&mut self) {
        self.matrix.clear_all();
        self.held = [None; HostKeyCode::COUNT];
        self.interrupt = false;
        self.line.set_level(false);
    }

    #[must_use]
    pub fn mode_flags(&self) -> ModeFlags {
        self.flags
    }

    /// Takes effect from the next key event. Held keys keep their cells.
    pub fn set_mode_flags(&mut self, flags: ModeFlags) {
        self.flags = flags;
    }

    #[must_use]
    pub fn redefinitions(&self) -> &KeyRedefinitions {
        &self.redefinitions
    }

    pub fn redefinitions_mut(&mut self) -> &mut KeyRedefinitions {
        &mut self.redefinitions
    }

    // --- System VIA side ---

    /// Address a column. Recomputes the interrupt in specific-column mode.
    pub fn select_column(&mut self, column: u8) {
        self.scan.select_column(column);
        self.update();
    }

    /// Rows only matter to [`point_query`](Self::point_query); the interrupt
    /// is left alone.
    pub fn select_row(&mut self, row: u8) {
        self.scan.select_row(row);
    }

    /// Address one switch.
    pub fn key_scan(&mut self, row: u8, column: u8) {
        self.scan.select_row(row);
        self.scan.select_column(column);
        self.update();
    }

    /// Switch between autoscan and specific-column scanning.
    pub fn set_scan_mode(&mut self, mode: ScanMode) {
        self.scan.set_mode(mode);
        self.update();
    }

    /// IC32 addressable latch write. Bit 3 enables autoscan.
    pub fn write_ic32(&mut self, ic32: u8) {
        self.scan.write_ic32(ic32);
        self.update();
    }

    /// Fit the Model B or Master matrix width.
    pub fn set_matrix_size(&mut self, size: MatrixSize) {
        self.scan.set_size(size);
        self.update();
    }

    /// Board DIP switch bits, read back on row 0. Never moves the interrupt.
    pub fn set_dip_switches(&mut self, bits: u16) {
        self.scan.set_dip_switches(bits);
    }

    /// System VIA port A output: PA0-PA3 column, PA4-PA6 row.
    pub fn write_port_a(&mut self, value: u8) {
        self.key_scan((value >> 4) & 0x07, value & 0x0F);
    }

    /// Port A as read back by the CPU: PA7 is the addressed switch, the
    /// other bits are whatever the VIA is driving.
    #[must_use]
    pub fn read_port_a(&self, driven: u8) -> u8 {
        if self.point_query() {
            driven | 0x80
        } else {
            driven & 0x7F
        }
    }

    /// State of the currently addressed switch.
    #[must_use]
    pub fn point_query(&self) -> bool {
        self.scan.point_query(&self.matrix)
    }

    /// Current keyboard interrupt level.
    #[must_use]
    pub fn interrupt(&self) -> bool {
        self.interrupt
    }

    // --- Diagnostics ---

    /// True if any key outside row 0 is held, whatever is addressed.
    #[must_use]
    pub fn any_key_down(&self) -> bool {
        self.matrix.any_key()
    }

    /// True if the cell natively wired to `code` is closed. Ignores the
    /// remap flags and redefinitions.
    #[must_use]
    pub fn is_key_code_down(&self, code: HostKeyCode) -> bool {
        translate(code).is_some_and(|coord| self.matrix.is_pressed(coord))
    }

    #[must_use]
    pub fn matrix(&self) -> &MatrixState {
        &self.matrix
    }

    #[must_use]
    pub fn scan(&self) -> &ScanController {
        &self.scan
    }

    #[must_use]
    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            column: self.scan.column(),
            row: self.scan.row(),
            mode: self.scan.mode(),
            size: self.scan.size(),
            dip_switches: self.scan.dip_switches(),
            interrupt: self.interrupt,
            mode_flags: self.flags,
            pressed: self.matrix.pressed().collect(),
        }
    }

    #[must_use]
    pub fn line(&self) -> &L {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    pub fn into_line(self) -> L {
        self.line
    }

    fn update(&mut self) {
        let level = self.scan.interrupt_level(&self.matrix);
        if level != self.interrupt {
            trace!(
                "keyboard: interrupt {} ({:?}, column {})",
                if level { "asserted" } else { "released" },
                self.scan.mode(),
                self.scan.column()
            );
        }
        self.interrupt = level;
        self.line.set_level(level);
    }
}
