//! Desktop event loop implementation using winit
//!
//! Runs the handler at a fixed frame cadence: `about_to_wait` parks
//! the loop until the next [`FrameClock`] deadline, `new_events`
//! requests a redraw when it fires, and `RedrawRequested` becomes an
//! [`Event::Frame`] for the handler.

use winit::application::ApplicationHandler;
use winit::event::{MouseButton as WinitMouseButton, StartCause, WindowEvent as WinitWindowEvent};
use winit::event_loop::{
    ActiveEventLoop, ControlFlow as WinitControlFlow, EventLoop as WinitEventLoop,
};
use winit::window::WindowId;

use crate::clock::FrameClock;
use crate::window::DesktopWindow;
use crate::{ControlFlow, Event, MouseButton, MouseEvent, PlatformError, WindowConfig, WindowEvent};

/// Desktop event loop wrapping winit's event loop
pub struct DesktopEventLoop {
    event_loop: WinitEventLoop<()>,
    window_config: WindowConfig,
    target_fps: u32,
}

impl DesktopEventLoop {
    /// Create a new desktop event loop pacing frames at `target_fps`
    pub fn new(config: WindowConfig, target_fps: u32) -> Result<Self, PlatformError> {
        let event_loop = WinitEventLoop::builder()
            .build()
            .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

        Ok(Self {
            event_loop,
            window_config: config,
            target_fps,
        })
    }

    /// Run the loop until the handler returns [`ControlFlow::Exit`] or
    /// the window is torn down. Blocks for the remainder of the
    /// program's interactive lifetime.
    pub fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event, &DesktopWindow) -> ControlFlow + 'static,
    {
        let mut app = EffectApp::new(self.window_config, self.target_fps, handler);
        self.event_loop
            .run_app(&mut app)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))
    }
}

/// Internal winit application handler
struct EffectApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    window_config: WindowConfig,
    window: Option<DesktopWindow>,
    handler: F,
    clock: FrameClock,
    mouse_position: (f32, f32),
    should_exit: bool,
}

impl<F> EffectApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    fn new(window_config: WindowConfig, target_fps: u32, handler: F) -> Self {
        Self {
            window_config,
            window: None,
            handler,
            clock: FrameClock::new(target_fps),
            mouse_position: (0.0, 0.0),
            should_exit: false,
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(ref window) = self.window {
            let flow = (self.handler)(event, window);
            if flow == ControlFlow::Exit {
                self.should_exit = true;
            }
        }
    }
}

impl<F> ApplicationHandler for EffectApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match DesktopWindow::new(event_loop, &self.window_config) {
                Ok(window) => {
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    tracing::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        // Frame deadline reached: schedule the next redraw
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            self.clock.frame_complete(std::time::Instant::now());
            if let Some(ref window) = self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => {
                self.handle_event(Event::Window(WindowEvent::CloseRequested));
            }

            WinitWindowEvent::Resized(size) => {
                self.handle_event(Event::Window(WindowEvent::Resized {
                    width: size.width,
                    height: size.height,
                }));
            }

            WinitWindowEvent::RedrawRequested => {
                self.handle_event(Event::Frame);
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x as f32, position.y as f32);
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                if state == winit::event::ElementState::Pressed {
                    let (x, y) = self.mouse_position;
                    self.handle_event(Event::Mouse(MouseEvent::ButtonPressed {
                        button: convert_mouse_button(button),
                        x,
                        y,
                    }));
                }
            }

            _ => {}
        }

        if self.should_exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(WinitControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Primary,
        WinitMouseButton::Right => MouseButton::Secondary,
        WinitMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}
