//! Desktop windowing and input for the recede effect
//!
//! Wraps winit behind a small handler-closure API: the event loop
//! delivers [`Event`]s to a `FnMut(Event, &DesktopWindow) -> ControlFlow`
//! and paces redraws at a fixed frame rate. The window and event loop
//! are explicit objects created and torn down at the process boundary;
//! there is no ambient display state.

pub mod clock;
pub mod error;
pub mod event_loop;
pub mod window;

pub use clock::FrameClock;
pub use error::{PlatformError, Result};
pub use event_loop::DesktopEventLoop;
pub use window::DesktopWindow;

/// Events delivered to the application handler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Window(WindowEvent),
    Mouse(MouseEvent),
    /// A paced frame tick; draw and present now
    Frame,
}

/// Window lifecycle events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    CloseRequested,
    Resized { width: u32, height: u32 },
}

/// Mouse input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
}

/// Mouse buttons, collapsed to what the effect distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// What the handler wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Window creation parameters
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "recede".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}
