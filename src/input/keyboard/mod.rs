//! Input and state handling for keyboard events.

mod codes;
mod event;
mod groups;
mod key;
mod keyboard;
mod status;

pub use codes::*;
pub use event::*;
pub use groups::*;
pub use key::*;
pub use keyboard::*;
pub use status::*;
