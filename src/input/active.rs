//! Optional process-wide access to the "active" input tracker.
//!
//! Hosts should normally pass their [`InputTracker`] around explicitly. This
//! registry exists for environments where ambient access is unavoidable: the
//! most recently activated tracker is retrievable from anywhere in the process
//! for as long as some owner keeps it alive.

use ::lazy_static::lazy_static;
use ::parking_lot::{Mutex, RwLock};
use ::std::sync::{Arc, Weak};
use ::tracing::debug;

use crate::input::keyboard::InputTracker;

/// A tracker shared between its owner and the active-input registry.
pub type SharedInput = Arc<RwLock<InputTracker>>;

lazy_static! {
    static ref ACTIVE_INPUT: Mutex<Weak<RwLock<InputTracker>>> = Default::default();
}

/// Wraps `input` for sharing and makes it the active tracker, replacing any
/// previously active one.
pub fn activate(input: InputTracker) -> SharedInput {
    let shared = Arc::new(RwLock::new(input));
    set_active(&shared);
    shared
}

/// Makes an already shared tracker the active one.
pub fn set_active(input: &SharedInput) {
    debug!("Activating input tracker");
    *ACTIVE_INPUT.lock() = Arc::downgrade(input);
}

/// The active tracker, or `None` if none was activated or the last activated
/// tracker has since been dropped by its owners.
pub fn active() -> Option<SharedInput> {
    ACTIVE_INPUT.lock().upgrade()
}
