//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to create event loop
    #[error("Failed to create event loop: {0}")]
    EventLoop(String),

    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
