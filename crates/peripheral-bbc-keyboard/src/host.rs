//! Host key identifiers.
//!
//! Host keys are numbered densely from 1 to 226 so the translation table can
//! be indexed directly. The numbering follows the Allegro 5 key codes, which
//! is what most host front ends already hand us; anything else (winit, SDL)
//! converts into this space first.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a key on the host keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostKeyCode(pub u16);

impl HostKeyCode {
    /// Number of host key codes. Codes at or above this never map.
    pub const COUNT: usize = 227;

    pub const A: Self = Self(1);
    pub const B: Self = Self(2);
    pub const C: Self = Self(3);
    pub const D: Self = Self(4);
    pub const E: Self = Self(5);
    pub const F: Self = Self(6);
    pub const G: Self = Self(7);
    pub const H: Self = Self(8);
    pub const I: Self = Self(9);
    pub const J: Self = Self(10);
    pub const K: Self = Self(11);
    pub const L: Self = Self(12);
    pub const M: Self = Self(13);
    pub const N: Self = Self(14);
    pub const O: Self = Self(15);
    pub const P: Self = Self(16);
    pub const Q: Self = Self(17);
    pub const R: Self = Self(18);
    pub const S: Self = Self(19);
    pub const T: Self = Self(20);
    pub const U: Self = Self(21);
    pub const V: Self = Self(22);
    pub const W: Self = Self(23);
    pub const X: Self = Self(24);
    pub const Y: Self = Self(25);
    pub const Z: Self = Self(26);

    pub const DIGIT_0: Self = Self(27);
    pub const DIGIT_1: Self = Self(28);
    pub const DIGIT_2: Self = Self(29);
    pub const DIGIT_3: Self = Self(30);
    pub const DIGIT_4: Self = Self(31);
    pub const DIGIT_5: Self = Self(32);
    pub const DIGIT_6: Self = Self(33);
    pub const DIGIT_7: Self = Self(34);
    pub const DIGIT_8: Self = Self(35);
    pub const DIGIT_9: Self = Self(36);

    pub const PAD_0: Self = Self(37);
    pub const PAD_1: Self = Self(38);
    pub const PAD_2: Self = Self(39);
    pub const PAD_3: Self = Self(40);
    pub const PAD_4: Self = Self(41);
    pub const PAD_5: Self = Self(42);
    pub const PAD_6: Self = Self(43);
    pub const PAD_7: Self = Self(44);
    pub const PAD_8: Self = Self(45);
    pub const PAD_9: Self = Self(46);

    pub const F1: Self = Self(47);
    pub const F2: Self = Self(48);
    pub const F3: Self = Self(49);
    pub const F4: Self = Self(50);
    pub const F5: Self = Self(51);
    pub const F6: Self = Self(52);
    pub const F7: Self = Self(53);
    pub const F8: Self = Self(54);
    pub const F9: Self = Self(55);
    pub const F10: Self = Self(56);
    pub const F11: Self = Self(57);
    pub const F12: Self = Self(58);

    pub const ESCAPE: Self = Self(59);
    pub const TILDE: Self = Self(60);
    pub const MINUS: Self = Self(61);
    pub const EQUALS: Self = Self(62);
    pub const BACKSPACE: Self = Self(63);
    pub const TAB: Self = Self(64);
    pub const OPEN_BRACE: Self = Self(65);
    pub const CLOSE_BRACE: Self = Self(66);
    pub const ENTER: Self = Self(67);
    pub const SEMICOLON: Self = Self(68);
    pub const QUOTE: Self = Self(69);
    pub const BACKSLASH: Self = Self(70);
    /// The extra key left of Z on ISO keyboards.
    pub const BACKSLASH2: Self = Self(71);
    pub const COMMA: Self = Self(72);
    pub const FULLSTOP: Self = Self(73);
    pub const SLASH: Self = Self(74);
    pub const SPACE: Self = Self(75);

    pub const INSERT: Self = Self(76);
    pub const DELETE: Self = Self(77);
    pub const HOME: Self = Self(78);
    pub const END: Self = Self(79);
    pub const PAGE_UP: Self = Self(80);
    pub const PAGE_DOWN: Self = Self(81);
    pub const LEFT: Self = Self(82);
    pub const RIGHT: Self = Self(83);
    pub const UP: Self = Self(84);
    pub const DOWN: Self = Self(85);

    pub const PAD_SLASH: Self = Self(86);
    pub const PAD_ASTERISK: Self = Self(87);
    pub const PAD_MINUS: Self = Self(88);
    pub const PAD_PLUS: Self = Self(89);
    pub const PAD_DELETE: Self = Self(90);
    pub const PAD_ENTER: Self = Self(91);

    pub const PRINT_SCREEN: Self = Self(92);
    pub const PAUSE: Self = Self(93);
    /// Brazilian ABNT2 `/?` key.
    pub const ABNT_C1: Self = Self(94);
    pub const YEN: Self = Self(95);
    pub const KANA: Self = Self(96);
    pub const CONVERT: Self = Self(97);
    pub const NO_CONVERT: Self = Self(98);
    pub const AT: Self = Self(99);
    pub const CIRCUMFLEX: Self = Self(100);
    pub const COLON2: Self = Self(101);
    pub const KANJI: Self = Self(102);
    pub const PAD_EQUALS: Self = Self(103);
    pub const BACKQUOTE: Self = Self(104);
    pub const SEMICOLON2: Self = Self(105);
    pub const COMMAND: Self = Self(106);
    pub const BACK: Self = Self(107);

    pub const LSHIFT: Self = Self(215);
    pub const RSHIFT: Self = Self(216);
    pub const LCTRL: Self = Self(217);
    pub const RCTRL: Self = Self(218);
    pub const ALT: Self = Self(219);
    pub const ALTGR: Self = Self(220);
    pub const LWIN: Self = Self(221);
    pub const RWIN: Self = Self(222);
    pub const MENU: Self = Self(223);
    pub const SCROLL_LOCK: Self = Self(224);
    pub const NUM_LOCK: Self = Self(225);
    pub const CAPS_LOCK: Self = Self(226);

    /// Table index for this code, or `None` if it lies outside the host range.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        let index = self.0 as usize;
        if index < Self::COUNT {
            Some(index)
        } else {
            None
        }
    }

    /// Iterate over every code in the host range.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u16).map(Self)
    }

    /// True for the ten numeric-keypad digit keys.
    #[must_use]
    pub const fn is_keypad_digit(self) -> bool {
        self.0 >= Self::PAD_0.0 && self.0 <= Self::PAD_9.0
    }
}

impl From<u16> for HostKeyCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}
