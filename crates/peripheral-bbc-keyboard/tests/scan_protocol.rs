//! System VIA scan protocol against a full keyboard.
//!
//! These drive the keyboard the way the MOS keyboard routine does: disable
//! autoscan through IC32, walk the columns on port A watching CA2, then
//! read individual rows through PA7.

use peripheral_bbc_keyboard::{
    HostKeyCode, IC32_KEYBOARD_ENABLE, Indicators, Keyboard, KeyboardConfig, LevelLatch,
    MatrixSize, ModeFlags, ScanMode,
};

const NO_LOCKS: Indicators = Indicators { num_lock: false };

fn model_b() -> Keyboard<LevelLatch> {
    Keyboard::with_line(LevelLatch::default())
}

fn master() -> Keyboard<LevelLatch> {
    Keyboard::from_config(&KeyboardConfig::master(), LevelLatch::default()).unwrap()
}

/// Columns whose CA2 goes high when addressed, as the MOS column scan sees them.
fn active_columns(kb: &mut Keyboard<LevelLatch>) -> Vec<u8> {
    kb.write_ic32(0x00);
    (0..16u8)
        .filter(|&col| {
            kb.write_port_a(col);
            kb.line().level
        })
        .collect()
}

/// Packed codes of every closed switch, found by reading PA7 like the MOS
/// does after a column scan.
fn read_switches(kb: &mut Keyboard<LevelLatch>) -> Vec<u8> {
    kb.write_ic32(0x00);
    let mut found = Vec::new();
    for row in 0..8u8 {
        for col in 0..16u8 {
            let addr = (row << 4) | col;
            kb.write_port_a(addr);
            if kb.read_port_a(addr) & 0x80 != 0 {
                found.push(addr);
            }
        }
    }
    found
}

#[test]
fn column_scan_finds_the_pressed_key() {
    let mut kb = model_b();
    kb.key_down(HostKeyCode::K, NO_LOCKS);
    assert_eq!(active_columns(&mut kb), vec![6]);
    assert_eq!(read_switches(&mut kb), vec![0x46]);
}

#[test]
fn autoscan_interrupt_follows_any_key() {
    let mut kb = model_b();
    kb.write_ic32(IC32_KEYBOARD_ENABLE);
    assert!(!kb.line().level);

    kb.key_down(HostKeyCode::DIGIT_1, NO_LOCKS);
    kb.key_down(HostKeyCode::RIGHT, NO_LOCKS);
    assert!(kb.line().level);

    kb.key_up(HostKeyCode::DIGIT_1);
    assert!(kb.line().level);
    kb.key_up(HostKeyCode::RIGHT);
    assert!(!kb.line().level);
}

#[test]
fn specific_column_ignores_other_columns() {
    let mut kb = model_b();
    kb.set_scan_mode(ScanMode::SpecificColumn);
    kb.select_column(2);

    kb.key_down(HostKeyCode::Q, NO_LOCKS); // column 0
    kb.key_down(HostKeyCode::P, NO_LOCKS); // column 7
    assert!(!kb.interrupt());

    kb.key_down(HostKeyCode::D, NO_LOCKS); // column 2
    assert!(kb.interrupt());
    kb.key_up(HostKeyCode::Q);
    kb.key_up(HostKeyCode::P);
    assert!(kb.interrupt());
    kb.key_up(HostKeyCode::D);
    assert!(!kb.interrupt());
}

#[test]
fn shift_and_ctrl_never_interrupt_but_can_be_read() {
    let mut kb = model_b();
    kb.key_down(HostKeyCode::LSHIFT, NO_LOCKS);
    kb.key_down(HostKeyCode::RCTRL, NO_LOCKS);
    assert!(active_columns(&mut kb).is_empty());
    assert_eq!(read_switches(&mut kb), vec![0x00, 0x01]);
}

#[test]
fn dip_switches_appear_on_row_zero() {
    let config = KeyboardConfig {
        dip_switches: 0b1000_0011,
        ..KeyboardConfig::model_b()
    };
    let mut kb = Keyboard::from_config(&config, LevelLatch::default()).unwrap();
    // Bit 7 → column 2, bits 1 and 0 → columns 8 and 9.
    assert_eq!(read_switches(&mut kb), vec![0x02, 0x08, 0x09]);
    assert!(!kb.any_key_down());
    assert!(!kb.interrupt());
}

#[test]
fn master_keypad_columns() {
    let mut kb = master();
    kb.key_down(HostKeyCode::PAD_2, NO_LOCKS);
    assert_eq!(active_columns(&mut kb), vec![0x0C]);

    let mut model_b = model_b();
    model_b.key_down(HostKeyCode::PAD_2, NO_LOCKS);
    assert!(active_columns(&mut model_b).is_empty());
    assert!(model_b.any_key_down());

    model_b.write_ic32(IC32_KEYBOARD_ENABLE);
    assert!(!model_b.interrupt());
    model_b.set_matrix_size(MatrixSize::Master);
    assert!(model_b.interrupt());
}

#[test]
fn keypad_as_cursor_depends_on_num_lock() {
    let config = KeyboardConfig {
        mode_flags: ModeFlags {
            caps_lock_on_a: false,
            keypad_as_cursor: true,
        },
        ..KeyboardConfig::master()
    };
    let mut kb = Keyboard::from_config(&config, LevelLatch::default()).unwrap();

    kb.key_down(HostKeyCode::PAD_8, NO_LOCKS);
    assert!(kb.is_key_code_down(HostKeyCode::UP));
    assert!(!kb.is_key_code_down(HostKeyCode::PAD_8));
    kb.key_up(HostKeyCode::PAD_8);

    kb.key_down(HostKeyCode::PAD_8, Indicators { num_lock: true });
    assert!(kb.is_key_code_down(HostKeyCode::PAD_8));
    assert!(!kb.is_key_code_down(HostKeyCode::UP));
}

#[test]
fn reset_drops_the_line_in_one_step() {
    let mut kb = model_b();
    kb.key_down(HostKeyCode::SPACE, NO_LOCKS);
    kb.key_down(HostKeyCode::LSHIFT, NO_LOCKS);
    kb.write_port_a(0x62);
    let updates = kb.line().updates;

    kb.reset();
    assert_eq!(kb.line().updates, updates + 1);
    assert!(!kb.line().level);
    assert!(!kb.any_key_down());
    assert!(!kb.is_key_code_down(HostKeyCode::LSHIFT));
    assert_eq!((kb.scan().column(), kb.scan().row()), (2, 6));
}

#[test]
fn separate_sessions_do_not_interfere() {
    let mut first = model_b();
    let second = model_b();
    first.key_down(HostKeyCode::Z, NO_LOCKS);
    assert!(first.any_key_down());
    assert!(!second.any_key_down());
}
