//! Vanishing-point text scroll effect
//!
//! Wraps a block of text to the window width, waits for a click behind
//! a static prompt, then scrolls the lines upward while shrinking them
//! toward the top edge until everything has left the screen.

pub mod config;
pub mod stages;

pub use config::EffectConfig;
pub use stages::EffectRunner;

use recede_effect::{LineId, ScrollLine, ScrollParams};
use recede_gpu::{FrameBuffer, Presenter};
use recede_platform::{
    DesktopEventLoop, Event, MouseButton, MouseEvent, WindowConfig, WindowEvent,
};
use recede_text::{wrap_lines, FontData, FontMeasurer, LineRasterizer};
use thiserror::Error;

const TARGET_FPS: u32 = 60;
const PROMPT_TEXT: &str = "Click to Start Scrolling";
const PROMPT_FONT_SIZE: f32 = 30.0;

/// Top-level effect errors
#[derive(Error, Debug)]
pub enum EffectError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Text(#[from] recede_text::TextError),

    #[error(transparent)]
    Platform(#[from] recede_platform::PlatformError),

    #[error(transparent)]
    Present(#[from] recede_gpu::PresentError),
}

/// Run the effect to completion. Blocks on the platform event loop
/// until the content has scrolled off or the window is closed.
pub fn run(config: EffectConfig) -> Result<(), EffectError> {
    if config.window_width == 0 || config.window_height == 0 {
        return Err(EffectError::Config(
            "window dimensions must be non-zero".to_string(),
        ));
    }
    if config.start_font_size == 0 {
        return Err(EffectError::Config(
            "start font size must be non-zero".to_string(),
        ));
    }

    let font = FontData::load(&config.font)?;
    let scroll_font = font.at_size(config.start_font_size as f32);
    let prompt_font = font.at_size(PROMPT_FONT_SIZE);

    let measurer = FontMeasurer::new(&scroll_font);
    let wrapped = wrap_lines(&config.text, &measurer, config.window_width as f32)?;
    tracing::info!("wrapped text into {} lines", wrapped.len());

    let mut rasterizer = LineRasterizer::new();
    let mut lines = Vec::with_capacity(wrapped.len());
    let mut art = Vec::with_capacity(wrapped.len());
    for (index, text) in wrapped.into_iter().enumerate() {
        let bitmap = rasterizer.rasterize_line(&scroll_font, &text)?;
        lines.push(ScrollLine {
            id: LineId(index),
            text,
            base_width: bitmap.width as f32,
            base_height: bitmap.height as f32,
        });
        art.push(bitmap);
    }
    let prompt = rasterizer.rasterize_line(&prompt_font, PROMPT_TEXT)?;

    let params = ScrollParams {
        surface_width: config.window_width as f32,
        surface_height: config.window_height as f32,
        start_font_size: config.start_font_size as f32,
        line_spacing: config.line_spacing,
        speed: config.speed,
    };
    let mut runner = EffectRunner::new(params, lines, art, prompt, config.font_color);
    let mut frame = FrameBuffer::new(config.window_width, config.window_height);
    let mut presenter: Option<Presenter> = None;

    let event_loop = DesktopEventLoop::new(
        WindowConfig {
            title: config.window_title.clone(),
            width: config.window_width,
            height: config.window_height,
            resizable: true,
        },
        TARGET_FPS,
    )?;

    event_loop.run(move |event, window| match event {
        Event::Window(WindowEvent::CloseRequested) => runner.on_close(),

        Event::Window(WindowEvent::Resized { width, height }) => {
            if let Some(presenter) = presenter.as_mut() {
                presenter.resize(width, height);
            }
            recede_platform::ControlFlow::Continue
        }

        Event::Mouse(MouseEvent::ButtonPressed { button, .. }) => {
            if button == MouseButton::Primary {
                runner.on_primary_click();
            }
            recede_platform::ControlFlow::Continue
        }

        Event::Frame => {
            // Surface creation needs a live window, so the presenter is
            // built on the first frame rather than up front.
            if presenter.is_none() {
                let (width, height) = window.size();
                match Presenter::new_blocking(window.winit_window_arc(), width, height) {
                    Ok(p) => presenter = Some(p),
                    Err(e) => {
                        tracing::error!("failed to initialize GPU presenter: {}", e);
                        return recede_platform::ControlFlow::Exit;
                    }
                }
            }

            let flow = runner.render(&mut frame);

            if let Some(presenter) = presenter.as_mut() {
                if let Err(e) = presenter.present(&frame) {
                    tracing::error!("failed to present frame: {}", e);
                    return recede_platform::ControlFlow::Exit;
                }
            }
            flow
        }
    })?;

    Ok(())
}
