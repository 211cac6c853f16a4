//! Drives a window through a scripted sequence of frames and logs which keys
//! fire. Run with `RUST_LOG=trace` to see every key transition.

use ::framekeys::{
    input::{
        self,
        keyboard::{KeyCode, KeyEvent, GK_CTRL},
    },
    time::ManualClock,
    window::{Builder, WindowEvent},
};
use ::tracing::info;
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Seconds per simulated frame.
const FRAME_TIME: f64 = 1.0 / 60.0;

pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let clock = ManualClock::new();
    let mut window = Builder::new()
        .with_title("Hello, frames!")
        .with_clock(clock.clone())
        .build();
    input::set_active(&window.shared_input());

    // Tap space, then hold ctrl for a second, then quit.
    let script = |frame: u32| -> Vec<WindowEvent> {
        match frame {
            1 => vec![KeyEvent::press(KeyCode::SPACE).into()],
            5 => vec![KeyEvent::release(KeyCode::SPACE).into()],
            10 => vec![KeyEvent::press(KeyCode::LCTRL).into()],
            70 => vec![KeyEvent::release(KeyCode::LCTRL).into()],
            80 => vec![WindowEvent::Quit],
            _ => vec![],
        }
    };

    window
        .input()
        .try_start_observing(KeyCode::SPACE)
        .expect("raw keys are always observable");

    let mut frame = 0;
    while !window.is_requesting_close() {
        for event in script(frame) {
            window.process_event(event);
        }

        {
            let mut input = window.input();
            if input.is_applying(KeyCode::SPACE, true).expect("raw key") {
                info!(frame, "Space applied");
            }
            if input.is_applying(GK_CTRL, true).expect("default group") {
                info!(frame, "Ctrl applied");
            }
        }

        clock.advance(FRAME_TIME);
        window.flip();
        frame += 1;
    }

    if let Some(active) = input::active() {
        let released = active
            .write()
            .is_not_pressed(GK_CTRL)
            .expect("default group");
        info!(frames = frame, fps = window.fps(), released, "Window closed");
    }
}
