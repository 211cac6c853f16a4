//! Frame-based keyboard state tracking for game loops.
//!
//! The core of the crate is the [`InputTracker`], which classifies keys as not
//! pressed, down, held or up from discrete press/release events, supports named
//! key groups, and models typing-style auto-repeat. A lightweight [`Window`]
//! facade composes the tracker with per-frame event dispatch and FPS counting.
//!
//! [`InputTracker`]: crate::input::keyboard::InputTracker
//! [`Window`]: crate::window::Window

pub mod errors;
pub mod input;
pub mod time;
pub mod types;
pub mod window;
