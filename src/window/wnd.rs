//! Top-level Window object which composes input tracking and frame counting.

use ::parking_lot::RwLock;
use ::std::{ops::DerefMut, sync::Arc};
use ::tracing::{debug, trace};

use crate::{
    input::{
        keyboard::{InputTracker, RepeatTiming},
        SharedInput,
    },
    time::Clock,
    types::Size2D,
    window::{FpsCounter, WindowEvent},
};

/// A frame driver for a host application window.
///
/// The host pumps its own event loop: every event is handed to
/// [`process_event`] and [`flip`] is called once per rendered frame, after all
/// of the frame's events were processed.
///
/// # Example
///
/// ```
/// use ::framekeys::{
///     input::keyboard::{KeyCode, KeyEvent},
///     window::{Builder, WindowEvent},
/// };
///
/// let mut window = Builder::new().with_title("Hello, frames!").build();
/// window.input().try_start_observing(KeyCode::SPACE).unwrap();
///
/// for event in [KeyEvent::press(KeyCode::SPACE).into(), WindowEvent::Quit] {
///     window.process_event(event);
/// }
/// assert!(window.input().is_down(KeyCode::SPACE).unwrap());
///
/// if window.is_requesting_close() {
///     window.clear_close_request();
///     // Drop window, or terminate the frame loop.
/// }
/// window.flip();
/// ```
///
/// [`process_event`]: Self::process_event
/// [`flip`]: Self::flip
pub struct Window {
    /// The window's title.
    title: String,
    /// Logical size of the drawable area.
    size: Size2D,
    /// Whether quit events raise a close request.
    default_quit: bool,
    /// Stores an outstanding close request. This must either be actioned by
    /// ending the frame loop, or cleared if it is to be ignored.
    close_request: bool,
    /// Keyboard state, shared so it can also be registered as the active input.
    input: SharedInput,
    /// Time source, shared with the input tracker.
    clock: Arc<dyn Clock>,
    /// Frames-per-second counter advanced by each flip.
    fps: FpsCounter,
}

impl Window {
    /// Construct a new window. See [`Builder`] for the defaults.
    ///
    /// [`Builder`]: crate::window::Builder
    pub fn new(
        title: &str,
        size: Size2D,
        default_quit: bool,
        timing: RepeatTiming,
        clock: Arc<dyn Clock>,
    ) -> Self {
        debug!(wnd_title = %title, ?size, "Creating window");
        let input = InputTracker::builder()
            .with_clock(clock.clone())
            .with_repeat_timing(timing)
            .build();

        Self {
            title: title.to_owned(),
            size,
            default_quit,
            close_request: false,
            input: Arc::new(RwLock::new(input)),
            fps: FpsCounter::new(clock.now()),
            clock,
        }
    }

    /// The window's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the window title.
    pub fn set_title(&mut self, title: impl AsRef<str>) {
        self.title = title.as_ref().to_owned();
    }

    /// The logical size of the window's drawable area.
    pub fn size(&self) -> Size2D {
        self.size
    }

    /// Sets the logical size of the window's drawable area.
    pub fn set_size(&mut self, size: Size2D) {
        debug!(wnd_title = %self.title, ?size, "Resizing window");
        self.size = size;
    }

    /// The most recently measured frames per second.
    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Reads the keyboard state. A write lock is held during this process, so
    /// the reference must be dropped before further events can be handled.
    pub fn input(&self) -> impl DerefMut<Target = InputTracker> + '_ {
        self.input.write()
    }

    /// A shared handle to the window's input tracker, e.g. for registration
    /// via [`set_active`].
    ///
    /// [`set_active`]: crate::input::set_active
    pub fn shared_input(&self) -> SharedInput {
        self.input.clone()
    }

    /// Returns whether the window is requesting to close.
    pub fn is_requesting_close(&self) -> bool {
        self.close_request
    }

    /// Clears a pending close request.
    pub fn clear_close_request(&mut self) {
        self.close_request = false;
    }

    /// Dispatches a single host event.
    pub fn process_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(event) => self.input.write().process_event(event),
            WindowEvent::Resized(size) => self.set_size(size),
            WindowEvent::Quit if self.default_quit => {
                debug!(wnd_title = %self.title, "Close requested");
                self.close_request = true;
            }
            WindowEvent::Quit => trace!(wnd_title = %self.title, "Ignoring quit event"),
        }
    }

    /// Ends the current frame: advances the input state and counts the frame.
    pub fn flip(&mut self) {
        self.input.write().flip();
        self.fps.tick(self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        input::keyboard::{KeyCode, KeyEvent, KeyStatus},
        time::ManualClock,
        window::{Builder, INITIAL_FPS},
    };

    use ::pretty_assertions::assert_eq;

    fn window() -> (Window, ManualClock) {
        let clock = ManualClock::new();
        let window = Builder::new().with_clock(clock.clone()).build();
        (window, clock)
    }

    #[test]
    fn test_defaults() {
        let builder = Builder::new();
        assert_eq!(builder.title(), None);
        assert_eq!(builder.size(), Size2D::new(800, 600));

        let window = builder.build();
        assert_eq!(window.title(), "framekeys window");
        assert_eq!(window.size(), Size2D::new(800, 600));
        assert_eq!(window.fps(), INITIAL_FPS);
        assert!(!window.is_requesting_close());
    }

    #[test]
    fn test_key_events_reach_input() {
        let (mut window, _) = window();
        window.input().try_start_observing(KeyCode::ESCAPE).unwrap();

        window.process_event(KeyEvent::press(KeyCode::ESCAPE).into());
        assert_eq!(
            window.input().get_status(KeyCode::ESCAPE).unwrap(),
            KeyStatus::Down
        );

        window.flip();
        assert!(window.input().is_hold(KeyCode::ESCAPE).unwrap());

        window.process_event(WindowEvent::Key(KeyEvent::release(KeyCode::ESCAPE)));
        window.flip();
        assert!(window.input().is_not_pressed(KeyCode::ESCAPE).unwrap());
    }

    #[test]
    fn test_input_shares_window_clock() {
        let (mut window, clock) = window();
        window.input().try_start_observing(KeyCode::DOWN).unwrap();
        window.process_event(KeyEvent::press(KeyCode::DOWN).into());
        window.flip();

        clock.advance(0.5);
        assert!(window.input().is_applying(KeyCode::DOWN, true).unwrap());
    }

    #[test]
    fn test_quit_requests_close() {
        let (mut window, _) = window();
        window.process_event(WindowEvent::Quit);
        assert!(window.is_requesting_close());
        window.clear_close_request();
        assert!(!window.is_requesting_close());

        let mut window = Builder::new().with_default_quit(false).build();
        window.process_event(WindowEvent::Quit);
        assert!(!window.is_requesting_close());
    }

    #[test]
    fn test_resize_and_title() {
        let (mut window, _) = window();
        window.process_event(WindowEvent::Resized((640, 480).into()));
        assert_eq!(window.size(), Size2D::new(640, 480));

        window.set_title("Renamed");
        assert_eq!(window.title(), "Renamed");
    }

    #[test]
    fn test_flip_counts_frames() {
        let (mut window, clock) = window();
        for _ in 0..4 {
            clock.advance(0.25);
            window.flip();
        }
        assert_eq!(window.fps(), 4);
    }

    #[test]
    fn test_shared_input_is_same_tracker() {
        let (window, _) = window();
        let shared = window.shared_input();
        shared.write().try_start_observing(KeyCode::TAB).unwrap();
        assert!(window.input().is_tracked(KeyCode::TAB));
    }
}
