//! Per-key status and bookkeeping records.

use crate::time::NEVER;

/// Classification of a key within its press/release cycle.
///
/// Variants are ordered by progress through the cycle:
/// `NotPressed < Down < Hold < Up`. Group queries rely on this ordering and
/// report the most advanced status among their members.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ::strum::Display,
    ::strum::EnumIter,
    ::strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyStatus {
    /// The key is released and was not released during the current frame.
    #[default]
    NotPressed,
    /// The key was pressed during the current frame.
    Down,
    /// The key has been pressed for at least one frame boundary.
    Hold,
    /// The key was released during the current frame.
    Up,
}

/// Tracking state for a single raw key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyRecord {
    /// Current classification of the key.
    pub status: KeyStatus,
    /// Timestamp of the last status-relevant update, or [`NEVER`].
    pub last_transition_time: f64,
    /// `true` until the first auto-repeat fires for the current press. Selects
    /// between the initial and the subsequent repeat delay.
    pub is_first_hold_window: bool,
}

impl Default for KeyRecord {
    fn default() -> Self {
        Self {
            status: KeyStatus::NotPressed,
            last_transition_time: NEVER,
            is_first_hold_window: true,
        }
    }
}
