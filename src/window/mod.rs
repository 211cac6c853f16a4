//! A minimal window facade which drives input tracking once per frame.
//!
//! The [`Window`] does not own a drawable surface. It holds the logical window
//! properties, routes host events into the [`InputTracker`], and keeps an FPS
//! count as frames are flipped.
//!
//! [`InputTracker`]: crate::input::keyboard::InputTracker

mod builder;
mod event;
mod fps;
mod wnd;

pub use builder::*;
pub use event::*;
pub use fps::*;
pub use wnd::*;
