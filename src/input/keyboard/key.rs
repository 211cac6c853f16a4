//! Key identifiers accepted by the input tracker queries.

use ::std::fmt::{self, Display};

use super::KeyCode;

/// Name of the default group covering both control keys.
pub const GK_CTRL: &str = "CTRL";
/// Name of the default group covering both alt keys.
pub const GK_ALT: &str = "ALT";
/// Name of the default group covering both shift keys.
pub const GK_SHIFT: &str = "SHIFT";
/// Name of the default group covering the main and keypad enter keys.
pub const GK_ENTER: &str = "ENTER";

/// Either a single raw key, or the name of a registered key group.
///
/// Raw keys and group names never mix: every tracker operation resolves the
/// variant explicitly. Conversions exist from [`KeyCode`], `u32` and strings
/// so call sites can pass either form directly:
///
/// ```
/// use ::framekeys::input::keyboard::{Key, KeyCode, GK_CTRL};
///
/// assert_eq!(Key::from(KeyCode::SPACE), Key::Raw(KeyCode::SPACE));
/// assert_eq!(Key::from(GK_CTRL), Key::Group("CTRL".to_owned()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single physical or logical key.
    Raw(KeyCode),
    /// A named group of raw keys, queried as a unit.
    Group(String),
}

impl Key {
    /// Returns the raw key code, if this is not a group.
    pub fn key_code(&self) -> Option<KeyCode> {
        match self {
            Self::Raw(key_code) => Some(*key_code),
            Self::Group(_) => None,
        }
    }

    /// Returns the group name, if this is a group.
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Group(name) => Some(name),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(key_code: KeyCode) -> Self {
        Self::Raw(key_code)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Raw(KeyCode(value))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Group(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Group(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(key_code) => write!(f, "{key_code}"),
            Self::Group(name) => write!(f, "{name}"),
        }
    }
}
