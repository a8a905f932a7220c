//! Host keyboard → host key code mapping for the windowed front end.
//!
//! Maps winit physical `KeyCode` values onto [`HostKeyCode`], so the
//! translation table sees the same key wherever the host layout puts its
//! legends.

use winit::keyboard::KeyCode;

use crate::host::HostKeyCode;

/// Map a winit physical key to a host key code.
///
/// Returns `None` for keys with no host code.
#[must_use]
pub fn map_keycode(key: KeyCode) -> Option<HostKeyCode> {
    let code = match key {
        // Letters
        KeyCode::KeyA => HostKeyCode::A,
        KeyCode::KeyB => HostKeyCode::B,
        KeyCode::KeyC => HostKeyCode::C,
        KeyCode::KeyD => HostKeyCode::D,
        KeyCode::KeyE => HostKeyCode::E,
        KeyCode::KeyF => HostKeyCode::F,
        KeyCode::KeyG => HostKeyCode::G,
        KeyCode::KeyH => HostKeyCode::H,
        KeyCode::KeyI => HostKeyCode::I,
        KeyCode::KeyJ => HostKeyCode::J,
        KeyCode::KeyK => HostKeyCode::K,
        KeyCode::KeyL => HostKeyCode::L,
        KeyCode::KeyM => HostKeyCode::M,
        KeyCode::KeyN => HostKeyCode::N,
        KeyCode::KeyO => HostKeyCode::O,
        KeyCode::KeyP => HostKeyCode::P,
        KeyCode::KeyQ => HostKeyCode::Q,
        KeyCode::KeyR => HostKeyCode::R,
        KeyCode::KeyS => HostKeyCode::S,
        KeyCode::KeyT => HostKeyCode::T,
        KeyCode::KeyU => HostKeyCode::U,
        KeyCode::KeyV => HostKeyCode::V,
        KeyCode::KeyW => HostKeyCode::W,
        KeyCode::KeyX => HostKeyCode::X,
        KeyCode::KeyY => HostKeyCode::Y,
        KeyCode::KeyZ => HostKeyCode::Z,

        // Digits
        KeyCode::Digit0 => HostKeyCode::DIGIT_0,
        KeyCode::Digit1 => HostKeyCode::DIGIT_1,
        KeyCode::Digit2 => HostKeyCode::DIGIT_2,
        KeyCode::Digit3 => HostKeyCode::DIGIT_3,
        KeyCode::Digit4 => HostKeyCode::DIGIT_4,
        KeyCode::Digit5 => HostKeyCode::DIGIT_5,
        KeyCode::Digit6 => HostKeyCode::DIGIT_6,
        KeyCode::Digit7 => HostKeyCode::DIGIT_7,
        KeyCode::Digit8 => HostKeyCode::DIGIT_8,
        KeyCode::Digit9 => HostKeyCode::DIGIT_9,

        // Numeric keypad
        KeyCode::Numpad0 => HostKeyCode::PAD_0,
        KeyCode::Numpad1 => HostKeyCode::PAD_1,
        KeyCode::Numpad2 => HostKeyCode::PAD_2,
        KeyCode::Numpad3 => HostKeyCode::PAD_3,
        KeyCode::Numpad4 => HostKeyCode::PAD_4,
        KeyCode::Numpad5 => HostKeyCode::PAD_5,
        KeyCode::Numpad6 => HostKeyCode::PAD_6,
        KeyCode::Numpad7 => HostKeyCode::PAD_7,
        KeyCode::Numpad8 => HostKeyCode::PAD_8,
        KeyCode::Numpad9 => HostKeyCode::PAD_9,
        KeyCode::NumpadDivide => HostKeyCode::PAD_SLASH,
        KeyCode::NumpadMultiply => HostKeyCode::PAD_ASTERISK,
        KeyCode::NumpadSubtract => HostKeyCode::PAD_MINUS,
        KeyCode::NumpadAdd => HostKeyCode::PAD_PLUS,
        KeyCode::NumpadDecimal => HostKeyCode::PAD_DELETE,
        KeyCode::NumpadEnter => HostKeyCode::PAD_ENTER,
        KeyCode::NumpadEqual => HostKeyCode::PAD_EQUALS,

        // Function keys
        KeyCode::F1 => HostKeyCode::F1,
        KeyCode::F2 => HostKeyCode::F2,
        KeyCode::F3 => HostKeyCode::F3,
        KeyCode::F4 => HostKeyCode::F4,
        KeyCode::F5 => HostKeyCode::F5,
        KeyCode::F6 => HostKeyCode::F6,
        KeyCode::F7 => HostKeyCode::F7,
        KeyCode::F8 => HostKeyCode::F8,
        KeyCode::F9 => HostKeyCode::F9,
        KeyCode::F10 => HostKeyCode::F10,
        KeyCode::F11 => HostKeyCode::F11,
        KeyCode::F12 => HostKeyCode::F12,

        // Main block
        KeyCode::Escape => HostKeyCode::ESCAPE,
        KeyCode::Backquote => HostKeyCode::TILDE,
        KeyCode::Minus => HostKeyCode::MINUS,
        KeyCode::Equal => HostKeyCode::EQUALS,
        KeyCode::Backspace => HostKeyCode::BACKSPACE,
        KeyCode::Tab => HostKeyCode::TAB,
        KeyCode::BracketLeft => HostKeyCode::OPEN_BRACE,
        KeyCode::BracketRight => HostKeyCode::CLOSE_BRACE,
        KeyCode::Enter => HostKeyCode::ENTER,
        KeyCode::Semicolon => HostKeyCode::SEMICOLON,
        KeyCode::Quote => HostKeyCode::QUOTE,
        KeyCode::Backslash => HostKeyCode::BACKSLASH,
        KeyCode::IntlBackslash => HostKeyCode::BACKSLASH2,
        KeyCode::Comma => HostKeyCode::COMMA,
        KeyCode::Period => HostKeyCode::FULLSTOP,
        KeyCode::Slash => HostKeyCode::SLASH,
        KeyCode::Space => HostKeyCode::SPACE,

        // Editing and cursor keys
        KeyCode::Insert => HostKeyCode::INSERT,
        KeyCode::Delete => HostKeyCode::DELETE,
        KeyCode::Home => HostKeyCode::HOME,
        KeyCode::End => HostKeyCode::END,
        KeyCode::PageUp => HostKeyCode::PAGE_UP,
        KeyCode::PageDown => HostKeyCode::PAGE_DOWN,
        KeyCode::ArrowLeft => HostKeyCode::LEFT,
        KeyCode::ArrowRight => HostKeyCode::RIGHT,
        KeyCode::ArrowUp => HostKeyCode::UP,
        KeyCode::ArrowDown => HostKeyCode::DOWN,
        KeyCode::PrintScreen => HostKeyCode::PRINT_SCREEN,
        KeyCode::Pause => HostKeyCode::PAUSE,

        // International
        KeyCode::IntlRo => HostKeyCode::ABNT_C1,
        KeyCode::IntlYen => HostKeyCode::YEN,
        KeyCode::KanaMode => HostKeyCode::KANA,
        KeyCode::Convert => HostKeyCode::CONVERT,
        KeyCode::NonConvert => HostKeyCode::NO_CONVERT,

        // Modifiers and locks
        KeyCode::ShiftLeft => HostKeyCode::LSHIFT,
        KeyCode::ShiftRight => HostKeyCode::RSHIFT,
        KeyCode::ControlLeft => HostKeyCode::LCTRL,
        KeyCode::ControlRight => HostKeyCode::RCTRL,
        KeyCode::AltLeft => HostKeyCode::ALT,
        KeyCode::AltRight => HostKeyCode::ALTGR,
        KeyCode::SuperLeft => HostKeyCode::LWIN,
        KeyCode::SuperRight => HostKeyCode::RWIN,
        KeyCode::ContextMenu => HostKeyCode::MENU,
        KeyCode::ScrollLock => HostKeyCode::SCROLL_LOCK,
        KeyCode::NumLock => HostKeyCode::NUM_LOCK,
        KeyCode::CapsLock => HostKeyCode::CAPS_LOCK,

        _ => return None,
    };
    Some(code)
}
