//! Host events dispatched through a [`Window`].
//!
//! [`Window`]: crate::window::Window

use crate::{input::keyboard::KeyEvent, types::Size2D};

/// An event delivered by the host's event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    /// A key press or release, forwarded to the input tracker.
    Key(KeyEvent),
    /// The drawable area was resized by the platform.
    Resized(Size2D),
    /// The user asked to close the window.
    Quit,
}

impl From<KeyEvent> for WindowEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}
