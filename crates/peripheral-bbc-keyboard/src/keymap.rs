//! Host key → BBC matrix translation table.
//!
//! Software that reads the matrix directly (games, the OS `INKEY` negative
//! numbers) depends on exact coordinates, so this table reproduces the
//! column/row wiring of the real keyboard rather than any character layout.
//!
//! | Row | 0        | 1    | 2   | 3  | 4  | 5  | 6  | 7  | 8  | 9      | A    | B    | C         |
//! |-----|----------|------|-----|----|----|----|----|----|----|--------|------|------|-----------|
//! | 0   | Shift    | Ctrl | DIP | DIP| DIP| DIP| DIP| DIP| DIP| DIP    |      |      |           |
//! | 1   | Q        | 3    | 4   | 5  | f4 | 8  | f7 | -= | ^~ | Left   | KP 6 | KP 7 |           |
//! | 2   | f0       | W    | E   | T  | 7  | I  | 9  | 0  | £  | Down   | KP 8 | KP 9 |           |
//! | 3   | 1        | 2    | D   | R  | 6  | U  | O  | P  | [{ | Up     | KP + | KP - | KP Return |
//! | 4   | CapsLock | A    | X   | F  | Y  | J  | K  | @  | :* | Return | KP / | KP Del | KP .    |
//! | 5   | ShiftLock| S    | C   | G  | H  | N  | L  | ;+ | ]} | Delete | KP # | KP * | KP ,      |
//! | 6   | Tab      | Z    | SPC | V  | B  | M  | ,< | .> | /? | Copy   | KP 0 | KP 1 | KP 3      |
//! | 7   | Escape   | f1   | f2  | f3 | f5 | f6 | f8 | f9 | \\ | Right  | KP 4 | KP 5 | KP 2      |
//!
//! Columns 0-9 exist on every model; A-C are the Master's numeric keypad.

use crate::coord::MatrixCoordinate;
use crate::host::HostKeyCode;

/// Wired host keys, as `(host code, packed 0xRC coordinate)`.
///
/// Several host keys share a cell (both Shifts, Backspace and Delete, ...).
/// Keys absent from this list have no BBC equivalent: F12 (reserved for
/// Break by the front end), Insert, Page Up, Alt, the Windows keys, Menu,
/// Scroll Lock and the Japanese IME keys.
const WIRING: &[(HostKeyCode, u8)] = &[
    // Letters
    (HostKeyCode::A, 0x41),
    (HostKeyCode::B, 0x64),
    (HostKeyCode::C, 0x52),
    (HostKeyCode::D, 0x32),
    (HostKeyCode::E, 0x22),
    (HostKeyCode::F, 0x43),
    (HostKeyCode::G, 0x53),
    (HostKeyCode::H, 0x54),
    (HostKeyCode::I, 0x25),
    (HostKeyCode::J, 0x45),
    (HostKeyCode::K, 0x46),
    (HostKeyCode::L, 0x56),
    (HostKeyCode::M, 0x65),
    (HostKeyCode::N, 0x55),
    (HostKeyCode::O, 0x36),
    (HostKeyCode::P, 0x37),
    (HostKeyCode::Q, 0x10),
    (HostKeyCode::R, 0x33),
    (HostKeyCode::S, 0x51),
    (HostKeyCode::T, 0x23),
    (HostKeyCode::U, 0x35),
    (HostKeyCode::V, 0x63),
    (HostKeyCode::W, 0x21),
    (HostKeyCode::X, 0x42),
    (HostKeyCode::Y, 0x44),
    (HostKeyCode::Z, 0x61),
    // Digits
    (HostKeyCode::DIGIT_0, 0x27),
    (HostKeyCode::DIGIT_1, 0x30),
    (HostKeyCode::DIGIT_2, 0x31),
    (HostKeyCode::DIGIT_3, 0x11),
    (HostKeyCode::DIGIT_4, 0x12),
    (HostKeyCode::DIGIT_5, 0x13),
    (HostKeyCode::DIGIT_6, 0x34),
    (HostKeyCode::DIGIT_7, 0x24),
    (HostKeyCode::DIGIT_8, 0x15),
    (HostKeyCode::DIGIT_9, 0x26),
    // Numeric keypad (Master only)
    (HostKeyCode::PAD_0, 0x6A),
    (HostKeyCode::PAD_1, 0x6B),
    (HostKeyCode::PAD_2, 0x7C),
    (HostKeyCode::PAD_3, 0x6C),
    (HostKeyCode::PAD_4, 0x7A),
    (HostKeyCode::PAD_5, 0x7B),
    (HostKeyCode::PAD_6, 0x1A),
    (HostKeyCode::PAD_7, 0x1B),
    (HostKeyCode::PAD_8, 0x2A),
    (HostKeyCode::PAD_9, 0x2B),
    // Function keys: host F1 is f0, F11 doubles as the £ key
    (HostKeyCode::F1, 0x20),
    (HostKeyCode::F2, 0x71),
    (HostKeyCode::F3, 0x72),
    (HostKeyCode::F4, 0x73),
    (HostKeyCode::F5, 0x14),
    (HostKeyCode::F6, 0x74),
    (HostKeyCode::F7, 0x75),
    (HostKeyCode::F8, 0x16),
    (HostKeyCode::F9, 0x76),
    (HostKeyCode::F10, 0x77),
    (HostKeyCode::F11, 0x28),
    // Main block
    (HostKeyCode::ESCAPE, 0x70),
    (HostKeyCode::TILDE, 0x28),
    (HostKeyCode::MINUS, 0x17),
    (HostKeyCode::EQUALS, 0x18),
    (HostKeyCode::BACKSPACE, 0x59),
    (HostKeyCode::TAB, 0x60),
    (HostKeyCode::OPEN_BRACE, 0x47),
    (HostKeyCode::CLOSE_BRACE, 0x38),
    (HostKeyCode::ENTER, 0x49),
    (HostKeyCode::SEMICOLON, 0x57),
    (HostKeyCode::QUOTE, 0x48),
    (HostKeyCode::BACKSLASH, 0x58),
    (HostKeyCode::BACKSLASH2, 0x78),
    (HostKeyCode::COMMA, 0x66),
    (HostKeyCode::FULLSTOP, 0x67),
    (HostKeyCode::SLASH, 0x68),
    (HostKeyCode::SPACE, 0x62),
    // Editing and cursor keys; End is Copy
    (HostKeyCode::DELETE, 0x59),
    (HostKeyCode::HOME, 0x5C),
    (HostKeyCode::END, 0x69),
    (HostKeyCode::PAGE_DOWN, 0x4C),
    (HostKeyCode::LEFT, 0x19),
    (HostKeyCode::RIGHT, 0x79),
    (HostKeyCode::UP, 0x39),
    (HostKeyCode::DOWN, 0x29),
    // Keypad operators
    (HostKeyCode::PAD_SLASH, 0x4A),
    (HostKeyCode::PAD_ASTERISK, 0x5B),
    (HostKeyCode::PAD_MINUS, 0x3B),
    (HostKeyCode::PAD_PLUS, 0x3A),
    (HostKeyCode::PAD_DELETE, 0x59),
    (HostKeyCode::PAD_ENTER, 0x3C),
    (HostKeyCode::PRINT_SCREEN, 0x4C),
    (HostKeyCode::ABNT_C1, 0x4C),
    // International layouts
    (HostKeyCode::AT, 0x00),
    (HostKeyCode::CIRCUMFLEX, 0x00),
    (HostKeyCode::COLON2, 0x01),
    (HostKeyCode::PAD_EQUALS, 0x50),
    (HostKeyCode::SEMICOLON2, 0x57),
    (HostKeyCode::BACK, 0x50),
    // Modifiers and locks
    (HostKeyCode::LSHIFT, 0x00),
    (HostKeyCode::RSHIFT, 0x00),
    (HostKeyCode::LCTRL, 0x01),
    (HostKeyCode::RCTRL, 0x01),
    (HostKeyCode::NUM_LOCK, 0x71),
    (HostKeyCode::CAPS_LOCK, 0x40),
];

static KEY_TABLE: [Option<MatrixCoordinate>; HostKeyCode::COUNT] = build_table(WIRING);

const fn build_table(wiring: &[(HostKeyCode, u8)]) -> [Option<MatrixCoordinate>; HostKeyCode::COUNT] {
    let mut table = [None; HostKeyCode::COUNT];
    let mut i = 0;
    while i < wiring.len() {
        let (code, packed) = wiring[i];
        table[code.0 as usize] = Some(MatrixCoordinate::from_packed(packed));
        i += 1;
    }
    table
}

/// Translate a host key to its matrix coordinate.
///
/// Returns `None` for keys the BBC keyboard does not have and for codes
/// outside the host range.
#[must_use]
pub fn translate(code: HostKeyCode) -> Option<MatrixCoordinate> {
    code.index().and_then(|index| KEY_TABLE[index])
}

/// Every host key that is wired to some matrix cell, with its coordinate.
pub fn wired_keys() -> impl Iterator<Item = (HostKeyCode, MatrixCoordinate)> {
    HostKeyCode::all().filter_map(|code| translate(code).map(|coord| (code, coord)))
}
