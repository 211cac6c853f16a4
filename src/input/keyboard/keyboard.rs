//! Frame-based keyboard state tracking with key groups and auto-repeat.

use ::std::{collections::HashMap, slice, sync::Arc, time::Duration};
use ::tracing::{debug, trace};

use super::{GroupRegistry, Key, KeyCode, KeyEvent, KeyEventKind, KeyRecord, KeyStatus};
use crate::{
    errors::Result,
    time::{Clock, MonotonicClock, NEVER},
};

/// Delay between the first frame a key is held and its first auto-repeat.
pub const FIRST_HOLD_DURATION: Duration = Duration::from_millis(500);

/// Delay between subsequent auto-repeats of a held key.
pub const HOLD_DURATION: Duration = Duration::from_millis(100);

/// Auto-repeat delays used by [`InputTracker::is_applying`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Delay before the first repeat of a press.
    pub first_hold: Duration,
    /// Cadence of every following repeat.
    pub hold: Duration,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            first_hold: FIRST_HOLD_DURATION,
            hold: HOLD_DURATION,
        }
    }
}

impl RepeatTiming {
    fn threshold(&self, is_first_hold_window: bool) -> f64 {
        if is_first_hold_window {
            self.first_hold.as_secs_f64()
        } else {
            self.hold.as_secs_f64()
        }
    }
}

/// The central object which tracks per-key press state across frames.
///
/// # Key Status Tracking
///
/// Event sources report key transitions as discrete press and release events
/// which arrive at arbitrary points in time. A typical game loop instead wants
/// to look at key state at a well-defined point of its update cycle, and wants
/// to know whether a key was pressed *this frame* or has been held for a
/// while. The [`InputTracker`] bridges the two by classifying every tracked key
/// as one of the [`KeyStatus`] values:
///
/// * [`KeyStatus::Down`] after a press event, until the next [`flip`].
/// * [`KeyStatus::Hold`] from the [`flip`] following a press, until released.
/// * [`KeyStatus::Up`] after a release event, until the next [`flip`].
/// * [`KeyStatus::NotPressed`] otherwise.
///
/// The host feeds every pending event into [`process_event`] and then calls
/// [`flip`] exactly once per frame. Queries may be made at any point in
/// between.
///
/// Keys are tracked lazily. A key only gets a record once it is queried or
/// explicitly observed via [`try_start_observing`]; events for keys which were
/// never observed are ignored.
///
/// # Key Groups
///
/// Several raw keys can be queried as one under a group name (see
/// [`generalize_keys`]). A group reports the most advanced status of its
/// members in the order `NotPressed < Down < Hold < Up`. The groups
/// [`GK_CTRL`], [`GK_ALT`], [`GK_SHIFT`] and [`GK_ENTER`] are registered by
/// default.
///
/// # Auto-Repeat
///
/// [`is_applying`] models typing-style key repeat: it fires for a short tap
/// when the key is released, and while a key is held it fires after
/// [`FIRST_HOLD_DURATION`] and then every [`HOLD_DURATION`].
///
/// # Example
///
/// ```
/// use ::framekeys::input::keyboard::{InputTracker, KeyCode, KeyEvent, KeyStatus, GK_CTRL};
///
/// let mut input = InputTracker::new();
/// input.try_start_observing(GK_CTRL).unwrap();
///
/// input.process_event(KeyEvent::press(KeyCode::LCTRL));
/// assert!(input.is_down(GK_CTRL).unwrap());
///
/// input.flip();
/// assert_eq!(input.get_status(KeyCode::LCTRL).unwrap(), KeyStatus::Hold);
/// assert!(input.is_not_pressed(KeyCode::RCTRL).unwrap());
/// ```
///
/// [`flip`]: Self::flip
/// [`process_event`]: Self::process_event
/// [`try_start_observing`]: Self::try_start_observing
/// [`generalize_keys`]: Self::generalize_keys
/// [`is_applying`]: Self::is_applying
/// [`GK_CTRL`]: super::GK_CTRL
/// [`GK_ALT`]: super::GK_ALT
/// [`GK_SHIFT`]: super::GK_SHIFT
/// [`GK_ENTER`]: super::GK_ENTER
pub struct InputTracker {
    /// Time source for transition timestamps.
    clock: Arc<dyn Clock>,
    /// Auto-repeat delays.
    timing: RepeatTiming,
    /// One record per observed raw key.
    records: HashMap<KeyCode, KeyRecord>,
    /// Named key groups, already flattened to raw keys.
    groups: GroupRegistry,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ::std::fmt::Debug for InputTracker {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct("InputTracker")
            .field("timing", &self.timing)
            .field("records", &self.records)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

impl InputTracker {
    /// Constructs a new tracker with a monotonic clock, the default repeat
    /// timing and the default key groups.
    pub fn new() -> Self {
        Builder::new().build()
    }

    /// Returns a [`Builder`] to configure a new tracker.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The auto-repeat delays in use.
    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// The current time according to the tracker's clock.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Registers the group `name` as the flattened union of `members`.
    ///
    /// Members are raw keys or names of already registered groups. A member
    /// group contributes its members as they are *now*; later changes to it
    /// are not reflected here. Registering an existing name replaces it.
    ///
    /// Fails with [`Error::UnknownGroupReference`] if a member group is not
    /// registered. Previously stored groups are left untouched.
    ///
    /// ```
    /// use ::framekeys::input::keyboard::{InputTracker, Key, KeyCode};
    ///
    /// let mut input = InputTracker::new();
    /// input.generalize_keys("A", [KeyCode::LEFT]).unwrap();
    /// input.generalize_keys("B", [Key::from("A"), Key::from(KeyCode::RIGHT)]).unwrap();
    ///
    /// assert_eq!(input.group_members("B").unwrap(), &[KeyCode::LEFT, KeyCode::RIGHT]);
    /// ```
    ///
    /// [`Error::UnknownGroupReference`]: crate::errors::Error::UnknownGroupReference
    pub fn generalize_keys<I, K>(&mut self, name: &str, members: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.groups.define(name, members).map(|_| ())
    }

    /// The flattened members of the group `name`.
    pub fn group_members(&self, name: &str) -> Result<&[KeyCode]> {
        self.groups.members(name)
    }

    /// The registry of all key groups known to this tracker.
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// Resets the record of `key_code` to a fresh, not pressed state. If the
    /// key was not tracked yet, tracking begins.
    pub fn reset_data(&mut self, key_code: KeyCode) {
        self.records.insert(key_code, KeyRecord::default());
    }

    /// Begins tracking `key` if it isn't tracked already. For a group, every
    /// member key is tracked.
    pub fn try_start_observing(&mut self, key: impl Into<Key>) -> Result<()> {
        let key = key.into();
        for &key_code in resolve(&self.groups, &key)? {
            observe(&mut self.records, key_code);
        }
        Ok(())
    }

    /// Returns `true` if `key_code` has a record.
    pub fn is_tracked(&self, key_code: KeyCode) -> bool {
        self.records.contains_key(&key_code)
    }

    /// The current record of `key_code`, if it is tracked.
    pub fn record(&self, key_code: KeyCode) -> Option<&KeyRecord> {
        self.records.get(&key_code)
    }

    /// The current status of `key`, which begins tracking it if needed.
    ///
    /// A group reports the greatest status among its members.
    pub fn get_status(&mut self, key: impl Into<Key>) -> Result<KeyStatus> {
        let key = key.into();
        let key_codes = resolve(&self.groups, &key)?;
        Ok(aggregate(&mut self.records, key_codes).status)
    }

    /// Returns `true` if `key` is not pressed.
    pub fn is_not_pressed(&mut self, key: impl Into<Key>) -> Result<bool> {
        Ok(self.get_status(key)? == KeyStatus::NotPressed)
    }

    /// Returns `true` if `key` was pressed during the current frame.
    pub fn is_down(&mut self, key: impl Into<Key>) -> Result<bool> {
        Ok(self.get_status(key)? == KeyStatus::Down)
    }

    /// Returns `true` if `key` has been held across at least one frame.
    pub fn is_hold(&mut self, key: impl Into<Key>) -> Result<bool> {
        Ok(self.get_status(key)? == KeyStatus::Hold)
    }

    /// Returns `true` if `key` was released during the current frame.
    pub fn is_up(&mut self, key: impl Into<Key>) -> Result<bool> {
        Ok(self.get_status(key)? == KeyStatus::Up)
    }

    pub fn any_is_not_pressed<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.any_has_status(keys, KeyStatus::NotPressed)
    }

    pub fn any_is_down<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.any_has_status(keys, KeyStatus::Down)
    }

    pub fn any_is_hold<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.any_has_status(keys, KeyStatus::Hold)
    }

    pub fn any_is_up<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.any_has_status(keys, KeyStatus::Up)
    }

    /// Checks whether `key` should trigger an auto-repeat action right now.
    ///
    /// Returns `true` when:
    ///
    /// * the key was released this frame after a tap shorter than the first
    ///   repeat delay, or
    /// * the key is held and the current repeat delay has elapsed. If
    ///   `reset_timer` is set, the delay restarts and switches to the shorter
    ///   cadence.
    ///
    /// A group uses the latest timestamp among its members and is in its first
    /// hold window if any member is. A repeat firing for a group restarts the
    /// timers of all its members.
    pub fn is_applying(&mut self, key: impl Into<Key>, reset_timer: bool) -> Result<bool> {
        let key = key.into();
        let now = self.clock.now();
        let key_codes = resolve(&self.groups, &key)?;
        let state = aggregate(&mut self.records, key_codes);

        let dt = now - state.last_transition_time;
        let threshold = self.timing.threshold(state.is_first_hold_window);

        match state.status {
            KeyStatus::Up if state.is_first_hold_window && dt < threshold => {
                trace!(%key, dt, "Tap released");
                Ok(true)
            }
            KeyStatus::Hold if dt >= threshold => {
                trace!(%key, dt, first = state.is_first_hold_window, "Key repeat");
                if reset_timer {
                    for key_code in key_codes {
                        let record = observe(&mut self.records, *key_code);
                        record.last_transition_time = now;
                        record.is_first_hold_window = false;
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Returns `true` if any of `keys` is applying (see [`is_applying`]).
    ///
    /// Keys are evaluated in order and evaluation stops at the first key which
    /// triggers, so only that key's timer is reset.
    ///
    /// [`is_applying`]: Self::is_applying
    pub fn any_is_applying<I, K>(&mut self, keys: I, reset_timer: bool) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        for key in keys {
            if self.is_applying(key, reset_timer)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Processes a press or release event and updates the state of the key.
    ///
    /// Only keys which are already tracked are affected. Presses of keys that
    /// are already down or held, and releases of keys that are already up, are
    /// no-ops. A press arriving while the key is still [`KeyStatus::Up`] starts
    /// a new press cycle. A release of a key which is not pressed, e.g. one that
    /// was already held when tracking began, still reports [`KeyStatus::Up`]
    /// for the frame.
    pub fn process_event(&mut self, event: KeyEvent) {
        let KeyEvent { kind, key_code } = event;
        let Some(record) = self.records.get_mut(&key_code) else {
            trace!(%key_code, %kind, "Ignoring event for untracked key");
            return;
        };

        let previous = record.status;
        match (kind, previous) {
            (KeyEventKind::Press, KeyStatus::NotPressed) => {
                record.status = KeyStatus::Down;
            }
            (KeyEventKind::Press, KeyStatus::Up) => {
                *record = KeyRecord {
                    status: KeyStatus::Down,
                    ..KeyRecord::default()
                };
            }
            (
                KeyEventKind::Release,
                KeyStatus::NotPressed | KeyStatus::Down | KeyStatus::Hold,
            ) => {
                record.status = KeyStatus::Up;
            }
            _ => return,
        }
        trace!(%key_code, %kind, from = %previous, to = %record.status, "Key transition");
    }

    /// Advances key state across a frame boundary.
    ///
    /// Every key which is [`KeyStatus::Down`] becomes [`KeyStatus::Hold`] with
    /// its timestamp set to now, and every key which is [`KeyStatus::Up`] is
    /// reset to a fresh [`KeyStatus::NotPressed`] record. Call exactly once
    /// per frame, after all events for the frame were processed.
    pub fn flip(&mut self) {
        let now = self.clock.now();
        for (key_code, record) in self.records.iter_mut() {
            match record.status {
                KeyStatus::Down => {
                    record.status = KeyStatus::Hold;
                    record.last_transition_time = now;
                    trace!(%key_code, "Key held");
                }
                KeyStatus::Up => {
                    *record = KeyRecord::default();
                    trace!(%key_code, "Key released");
                }
                KeyStatus::NotPressed | KeyStatus::Hold => (),
            }
        }
    }

    fn any_has_status<I, K>(&mut self, keys: I, status: KeyStatus) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        for key in keys {
            if self.get_status(key)? == status {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Resolves `key` into the raw keys it stands for.
fn resolve<'a>(groups: &'a GroupRegistry, key: &'a Key) -> Result<&'a [KeyCode]> {
    match key {
        Key::Raw(key_code) => Ok(slice::from_ref(key_code)),
        Key::Group(name) => groups.members(name),
    }
}

/// Returns the record for `key_code`, creating a fresh one on first use.
fn observe(records: &mut HashMap<KeyCode, KeyRecord>, key_code: KeyCode) -> &mut KeyRecord {
    records.entry(key_code).or_insert_with(|| {
        trace!(%key_code, "Observing key");
        KeyRecord::default()
    })
}

/// Combines the records of `key_codes` into one: the greatest status, the
/// latest timestamp, and a first hold window if any member is in one.
fn aggregate(records: &mut HashMap<KeyCode, KeyRecord>, key_codes: &[KeyCode]) -> KeyRecord {
    let mut state = KeyRecord {
        status: KeyStatus::NotPressed,
        last_transition_time: NEVER,
        is_first_hold_window: false,
    };
    for &key_code in key_codes {
        let record = observe(records, key_code);
        state.status = state.status.max(record.status);
        state.last_transition_time = state.last_transition_time.max(record.last_transition_time);
        state.is_first_hold_window |= record.is_first_hold_window;
    }
    state
}

/// A builder pattern object which configures an [`InputTracker`].
///
/// ```
/// use ::framekeys::input::keyboard::{InputTracker, RepeatTiming};
/// use ::framekeys::time::ManualClock;
/// use ::std::time::Duration;
///
/// let clock = ManualClock::new();
/// let input = InputTracker::builder()
///     .with_clock(clock.clone())
///     .with_repeat_timing(RepeatTiming {
///         first_hold: Duration::from_millis(300),
///         hold: Duration::from_millis(50),
///     })
///     .build();
///
/// assert_eq!(input.timing().hold, Duration::from_millis(50));
/// ```
#[derive(Clone)]
pub struct Builder {
    clock: Option<Arc<dyn Clock>>,
    timing: RepeatTiming,
    default_groups: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Construct a new builder. Default values will be used for all properties
    /// until explicitly set.
    pub fn new() -> Self {
        Self {
            clock: None,
            timing: RepeatTiming::default(),
            default_groups: true,
        }
    }

    /// Sets the time source.
    ///
    /// Defaults to a [`MonotonicClock`] started when the tracker is built.
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Some(Arc::new(clock)),
            ..self
        }
    }

    /// Sets the auto-repeat delays.
    ///
    /// Defaults to [`FIRST_HOLD_DURATION`] and [`HOLD_DURATION`].
    pub fn with_repeat_timing(self, timing: RepeatTiming) -> Self {
        Self { timing, ..self }
    }

    /// Whether the default modifier and enter groups are registered.
    ///
    /// Defaults to `true`.
    pub fn with_default_groups(self, default_groups: bool) -> Self {
        Self {
            default_groups,
            ..self
        }
    }

    /// Build a new [`InputTracker`] with the properties of the builder.
    pub fn build(&self) -> InputTracker {
        debug!(timing = ?self.timing, default_groups = self.default_groups, "Creating input tracker");
        let clock: Arc<dyn Clock> = match &self.clock {
            Some(clock) => clock.clone(),
            None => Arc::new(MonotonicClock::new()),
        };
        InputTracker {
            clock,
            timing: self.timing,
            records: HashMap::new(),
            groups: if self.default_groups {
                GroupRegistry::with_defaults()
            } else {
                GroupRegistry::new()
            },
        }
    }
}
