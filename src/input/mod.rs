//! Input state tracking.

mod active;
pub mod keyboard;

pub use active::*;
