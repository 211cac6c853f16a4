//! Builder object which constructs [`Window`]s
//!
//! [`Window`]: crate::window::Window

use ::std::sync::Arc;

use crate::{
    input::keyboard::RepeatTiming,
    time::{Clock, MonotonicClock},
    types::Size2D,
    window::Window,
};

/// A builder pattern object which simplifies the process of creating a
/// [`Window`].
///
/// The same builder can be re-used to create multiple windows with the same
/// configuration, as a type of prototype.
///
/// ```
/// use ::framekeys::{types::Size2D, window::Builder};
///
/// let window = Builder::new()
///     .with_title("Hello, frames!")
///     .with_size(Size2D::new(1280, 720))
///     .build();
///
/// assert_eq!(window.title(), "Hello, frames!");
/// ```
///
/// [`Window`]: crate::window::Window
#[derive(Clone)]
pub struct Builder {
    title: Option<String>,
    size: Size2D,
    default_quit: bool,
    timing: RepeatTiming,
    clock: Option<Arc<dyn Clock>>,
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
            title: None,
            size: Size2D {
                width: 800,
                height: 600,
            },
            default_quit: true,
            timing: RepeatTiming::default(),
            clock: None,
        }
    }

    /// Set the window title.
    ///
    /// Defaults to `"framekeys window"` if not set.
    pub fn with_title(self, title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().to_owned().into(),
            ..self
        }
    }

    /// Set a size for the window.
    ///
    /// Defaults to 800 x 600 if not set.
    pub fn with_size(self, size: Size2D) -> Self {
        Self { size, ..self }
    }

    /// Whether a [`WindowEvent::Quit`] raises a close request.
    ///
    /// Defaults to `true`.
    ///
    /// [`WindowEvent::Quit`]: crate::window::WindowEvent::Quit
    pub fn with_default_quit(self, default_quit: bool) -> Self {
        Self {
            default_quit,
            ..self
        }
    }

    /// Sets the auto-repeat delays of the window's input tracker.
    pub fn with_repeat_timing(self, timing: RepeatTiming) -> Self {
        Self { timing, ..self }
    }

    /// Sets the time source shared by the input tracker and the FPS counter.
    ///
    /// Defaults to a [`MonotonicClock`] started when the window is built.
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Some(Arc::new(clock)),
            ..self
        }
    }

    /// Gets the currently set window title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Gets the currently set window size
    pub fn size(&self) -> Size2D {
        self.size
    }

    /// Build a new [`Window`] with the properties of the builder.
    ///
    /// [`Window`]: crate::window::Window
    pub fn build(&self) -> Window {
        let clock: Arc<dyn Clock> = match &self.clock {
            Some(clock) => clock.clone(),
            None => Arc::new(MonotonicClock::new()),
        };
        Window::new(
            self.title.as_deref().unwrap_or("framekeys window"),
            self.size,
            self.default_quit,
            self.timing,
            clock,
        )
    }
}
