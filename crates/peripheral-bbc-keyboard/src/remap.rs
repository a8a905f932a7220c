//! Context-sensitive host key substitution, applied before translation.

use serde::{Deserialize, Serialize};

use crate::host::HostKeyCode;

/// User-selectable keyboard behaviours. Owned by the host configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    /// Treat host A as Caps Lock, for layouts with Caps Lock where A sits
    /// on the BBC.
    pub caps_lock_on_a: bool,
    /// Make keypad digits act as cursor/editing keys while Num Lock is off.
    pub keypad_as_cursor: bool,
}

/// Host lock-indicator snapshot delivered with each key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    pub num_lock: bool,
}

/// Keypad digit → cursor/editing key, indexed by digit.
const KEYPAD_AS_CURSOR: [HostKeyCode; 10] = [
    HostKeyCode::INSERT,
    HostKeyCode::END,
    HostKeyCode::DOWN,
    HostKeyCode::PAGE_DOWN,
    HostKeyCode::LEFT,
    HostKeyCode::PAD_5,
    HostKeyCode::RIGHT,
    HostKeyCode::HOME,
    HostKeyCode::UP,
    HostKeyCode::PAGE_UP,
];

impl ModeFlags {
    /// Apply the substitutions to one host code.
    ///
    /// At most one rule fires and its output is not fed back in.
    #[must_use]
    pub fn remap(self, code: HostKeyCode, indicators: Indicators) -> HostKeyCode {
        if code == HostKeyCode::A {
            if self.caps_lock_on_a {
                return HostKeyCode::CAPS_LOCK;
            }
        } else if code.is_keypad_digit() && self.keypad_as_cursor && !indicators.num_lock {
            return KEYPAD_AS_CURSOR[(code.0 - HostKeyCode::PAD_0.0) as usize];
        }
        code
    }
}

/// Free-function form of [`ModeFlags::remap`].
#[must_use]
pub fn remap(code: HostKeyCode, flags: ModeFlags, indicators: Indicators) -> HostKeyCode {
    flags.remap(code, indicators)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUM_OFF: Indicators = Indicators { num_lock: false };
    const NUM_ON: Indicators = Indicators { num_lock: true };

    #[test]
    fn no_flags_is_identity() {
        let flags = ModeFlags::default();
        for code in HostKeyCode::all() {
            assert_eq!(flags.remap(code, NUM_OFF), code);
        }
    }

    #[test]
    fn a_becomes_caps_lock() {
        let flags = ModeFlags {
            caps_lock_on_a: true,
            ..ModeFlags::default()
        };
        assert_eq!(flags.remap(HostKeyCode::A, NUM_OFF), HostKeyCode::CAPS_LOCK);
        assert_eq!(flags.remap(HostKeyCode::B, NUM_OFF), HostKeyCode::B);
        // Caps Lock itself is left alone.
        assert_eq!(flags.remap(HostKeyCode::CAPS_LOCK, NUM_OFF), HostKeyCode::CAPS_LOCK);
    }

    #[test]
    fn keypad_redirects_when_num_lock_off() {
        let flags = ModeFlags {
            keypad_as_cursor: true,
            ..ModeFlags::default()
        };
        let expected = [
            (HostKeyCode::PAD_0, HostKeyCode::INSERT),
            (HostKeyCode::PAD_1, HostKeyCode::END),
            (HostKeyCode::PAD_2, HostKeyCode::DOWN),
            (HostKeyCode::PAD_3, HostKeyCode::PAGE_DOWN),
            (HostKeyCode::PAD_4, HostKeyCode::LEFT),
            (HostKeyCode::PAD_5, HostKeyCode::PAD_5),
            (HostKeyCode::PAD_6, HostKeyCode::RIGHT),
            (HostKeyCode::PAD_7, HostKeyCode::HOME),
            (HostKeyCode::PAD_8, HostKeyCode::UP),
            (HostKeyCode::PAD_9, HostKeyCode::PAGE_UP),
        ];
        for (from, to) in expected {
            assert_eq!(flags.remap(from, NUM_OFF), to, "{from:?}");
            assert_eq!(flags.remap(from, NUM_ON), from, "{from:?}");
        }
    }

    #[test]
    fn keypad_untouched_without_flag() {
        let flags = ModeFlags {
            caps_lock_on_a: true,
            keypad_as_cursor: false,
        };
        assert_eq!(flags.remap(HostKeyCode::PAD_2, NUM_OFF), HostKeyCode::PAD_2);
    }

    #[test]
    fn both_flags_apply_independently() {
        let flags = ModeFlags {
            caps_lock_on_a: true,
            keypad_as_cursor: true,
        };
        assert_eq!(remap(HostKeyCode::A, flags, NUM_OFF), HostKeyCode::CAPS_LOCK);
        assert_eq!(remap(HostKeyCode::PAD_8, flags, NUM_OFF), HostKeyCode::UP);
        assert_eq!(remap(HostKeyCode::PAD_8, flags, NUM_ON), HostKeyCode::PAD_8);
    }
}
