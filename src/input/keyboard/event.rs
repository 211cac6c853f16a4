//! Discrete key press and release events fed into the input tracker.

use super::KeyCode;

/// Whether a [`KeyEvent`] is a press or a release.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, ::strum::Display, ::strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single hardware key transition, as delivered by the event source.
///
/// Events are expected once per transition, in arrival order. OS-level key
/// repeat should be filtered out by the host; repeat behavior is modelled by
/// [`InputTracker::is_applying`] instead.
///
/// [`InputTracker::is_applying`]: crate::input::keyboard::InputTracker::is_applying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key_code: KeyCode,
}

impl KeyEvent {
    /// Constructs a new event.
    pub const fn new(kind: KeyEventKind, key_code: KeyCode) -> Self {
        Self { kind, key_code }
    }

    /// A key press event for `key_code`.
    pub const fn press(key_code: KeyCode) -> Self {
        Self::new(KeyEventKind::Press, key_code)
    }

    /// A key release event for `key_code`.
    pub const fn release(key_code: KeyCode) -> Self {
        Self::new(KeyEventKind::Release, key_code)
    }

    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press)
    }

    pub const fn is_release(&self) -> bool {
        matches!(self.kind, KeyEventKind::Release)
    }
}
