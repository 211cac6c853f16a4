//! Raw key codes.

use ::std::fmt::{self, Display};

/// An opaque raw key identifier, as delivered by the event source.
///
/// The value space follows SDL keycodes: printable keys use their character
/// value, and other keys are offset by `1 << 30`. Named constants are provided
/// for the keys referenced by the default key groups and a handful of common
/// extras. Any other value is equally valid and is tracked the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u32);

const SCANCODE_MASK: u32 = 1 << 30;

impl KeyCode {
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0D);
    pub const ESCAPE: Self = Self(0x1B);
    pub const SPACE: Self = Self(0x20);
    pub const DOT: Self = Self(0x2E);
    pub const PERIOD: Self = Self::DOT;
    pub const PIPE: Self = Self(0x7C);
    pub const TILDA: Self = Self(0x7E);

    pub const RIGHT: Self = Self(SCANCODE_MASK | 0x4F);
    pub const LEFT: Self = Self(SCANCODE_MASK | 0x50);
    pub const DOWN: Self = Self(SCANCODE_MASK | 0x51);
    pub const UP: Self = Self(SCANCODE_MASK | 0x52);

    pub const KP_ENTER: Self = Self(SCANCODE_MASK | 0x58);
    pub const KP_RETURN: Self = Self::KP_ENTER;
    pub const KP_PERIOD: Self = Self(SCANCODE_MASK | 0x63);
    pub const KP_DOT: Self = Self::KP_PERIOD;

    pub const MENU: Self = Self(SCANCODE_MASK | 0x65);
    pub const VOLUME_UP: Self = Self(SCANCODE_MASK | 0x80);
    pub const VOLUME_DOWN: Self = Self(SCANCODE_MASK | 0x81);

    pub const LCTRL: Self = Self(SCANCODE_MASK | 0xE0);
    pub const LSHIFT: Self = Self(SCANCODE_MASK | 0xE1);
    pub const LALT: Self = Self(SCANCODE_MASK | 0xE2);
    pub const RCTRL: Self = Self(SCANCODE_MASK | 0xE4);
    pub const RSHIFT: Self = Self(SCANCODE_MASK | 0xE5);
    pub const RALT: Self = Self(SCANCODE_MASK | 0xE6);

    pub const STOP: Self = Self(SCANCODE_MASK | 0x104);
    pub const PLAY: Self = Self(SCANCODE_MASK | 0x105);
    pub const EMAIL: Self = Self(SCANCODE_MASK | 0x109);
    pub const HOMEPAGE: Self = Self(SCANCODE_MASK | 0x10D);
    pub const MOVE_LEFT: Self = Self(SCANCODE_MASK | 0x10E);
    pub const MOVE_RIGHT: Self = Self(SCANCODE_MASK | 0x10F);

    /// The key code for a printable ASCII character, e.g. `b'a'`.
    pub const fn from_ascii(c: u8) -> Self {
        Self(c as u32)
    }

    /// The raw numeric value of this key code.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for KeyCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<KeyCode> for u32 {
    fn from(key_code: KeyCode) -> Self {
        key_code.0
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
