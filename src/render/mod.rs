//! Gradient renderers.
//!
//! Both renderers walk the frame from the bottom row to the top and write one
//! byte value across each row, chosen from the row's distance to the
//! boundary. Which one runs is decided by the display's colour capability.

pub mod colour;
pub mod mono;

use crate::error::Error;
use crate::profile::{DisplayKind, Profile};
use crate::surface::{Frame, PixelFormat};

pub use colour::ColourRenderer;
pub use mono::MonoRenderer;

pub trait GradientRenderer {
    /// Pixel format this renderer writes.
    fn format(&self) -> PixelFormat;

    /// Byte written across `row` for the given boundary.
    fn row_value(&self, row: i32, boundary: i32) -> u8;

    /// Paint every row of `frame`.
    fn paint(&self, frame: &mut Frame<'_>, boundary: i32) -> Result<(), Error> {
        if frame.format() != self.format() {
            return Err(Error::FormatMismatch);
        }
        for row in (0..frame.height()).rev() {
            let value = self.row_value(row as i32, boundary);
            frame.fill_row(row, value);
        }
        Ok(())
    }
}

/// The renderer chosen for a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    Mono(MonoRenderer),
    Colour(ColourRenderer),
}

impl Renderer {
    pub fn for_profile(profile: &Profile) -> Self {
        match profile.display {
            DisplayKind::Monochrome => Renderer::Mono(MonoRenderer::new(profile.fill)),
            DisplayKind::Colour => Renderer::Colour(ColourRenderer::new()),
        }
    }
}

impl GradientRenderer for Renderer {
    fn format(&self) -> PixelFormat {
        match self {
            Renderer::Mono(r) => r.format(),
            Renderer::Colour(r) => r.format(),
        }
    }

    fn row_value(&self, row: i32, boundary: i32) -> u8 {
        match self {
            Renderer::Mono(r) => r.row_value(row, boundary),
            Renderer::Colour(r) => r.row_value(row, boundary),
        }
    }
}
