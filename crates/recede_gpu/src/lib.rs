//! Frame composition and presentation
//!
//! The effect composites each frame on the CPU into a [`FrameBuffer`]
//! (fill, tinted alpha-mask blits, geometric scaling through the
//! `image` crate) and a [`Presenter`] uploads the finished frame to a
//! wgpu texture and draws it to the window surface with a
//! fullscreen-triangle pass.

pub mod frame;
pub mod presenter;
pub mod shaders;

pub use frame::FrameBuffer;
pub use presenter::Presenter;

use thiserror::Error;

/// Presentation errors
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("No compatible GPU adapter found")]
    AdapterNotFound,

    #[error("Failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("Failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Failed to acquire frame: {0}")]
    Acquire(#[from] wgpu::SurfaceError),
}

pub type Result<T> = std::result::Result<T, PresentError>;
