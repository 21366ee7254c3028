//! Unified error type for gradface.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Surface
    /// The host refused access to the raw framebuffer.
    SurfaceUnavailable,

    /// The framebuffer could not be handed back after drawing.
    SurfaceRelease,

    /// The captured framebuffer has a pixel format the renderer cannot write.
    FormatMismatch,

    // Display
    /// I²C transaction to the display failed.
    Display,

    // Lifecycle
    /// `load` called on a window that is already loaded.
    AlreadyLoaded,

    /// Window used before `load` or after `unload`.
    NotLoaded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::SurfaceUnavailable => "framebuffer unavailable",
            Error::SurfaceRelease => "framebuffer release failed",
            Error::FormatMismatch => "unsupported pixel format",
            Error::Display => "display write failed",
            Error::AlreadyLoaded => "window already loaded",
            Error::NotLoaded => "window not loaded",
        };
        f.write_str(msg)
    }
}
