//! BBC Micro and Master 128 keyboard.
//!
//! The keyboard is a plain switch matrix. On the Model B a 74LS163 counter
//! and a 4-to-10 decoder drive ten column lines; the row lines are pulled up
//! and feed both an 8-input NAND gate (the keyboard interrupt, System VIA
//! CA2) and a 74LS251 multiplexer the CPU reads through PA7. The Master adds
//! three columns for its numeric keypad. Row 0 carries Shift, Ctrl and the
//! eight start-up option links.
//!
//! Data flow for host input:
//!
//! ```text
//! HostKeyCode → ModeFlags::remap → KeyRedefinitions → keymap::translate
//!             → MatrixState → ScanController → InterruptLine
//! ```
//!
//! The System VIA side calls [`Keyboard::write_ic32`],
//! [`Keyboard::write_port_a`] / [`Keyboard::key_scan`] and reads
//! [`Keyboard::point_query`] or [`Keyboard::read_port_a`].

mod config;
mod coord;
mod host;
mod keyboard;
#[cfg(feature = "native")]
pub mod keyboard_map;
mod keymap;
mod matrix;
mod redefine;
mod remap;
mod scan;
mod shared;
mod snapshot;

pub use config::KeyboardConfig;
pub use coord::{MATRIX_DIM, MatrixCoordinate};
pub use host::HostKeyCode;
pub use keyboard::{KeyEvent, Keyboard};
pub use keymap::{translate, wired_keys};
pub use matrix::MatrixState;
pub use redefine::{KeyRedefinitions, KeymapError, Redefinition};
pub use remap::{Indicators, ModeFlags, remap};
pub use scan::{
    DIP_SWITCH_MASK, IC32_KEYBOARD_ENABLE, InterruptLine, LevelLatch, MatrixSize, ScanController,
    ScanMode, Unconnected,
};
pub use shared::SharedKeyboard;
pub use snapshot::KeyboardSnapshot;
