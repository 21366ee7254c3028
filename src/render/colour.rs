//! ARGB2222 renderer: hue bands below the boundary.
//!
//! Rows at or above the boundary get `HUE_BASE`. Below it the colour is
//! rotated one step every `HUE_BAND_ROWS` rows. Rotation counts through the
//! low 6 bits (RGB) and wraps; the 2 alpha bits never change.

use super::GradientRenderer;
use crate::config::{HUE_BAND_ROWS, HUE_BASE};
use crate::surface::PixelFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColourRenderer {
    base: u8,
}

impl ColourRenderer {
    pub const fn new() -> Self {
        Self { base: HUE_BASE }
    }
}

impl Default for ColourRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance `colour` by `steps` in the 6-bit RGB space, keeping alpha.
pub fn rotate_hue(colour: u8, steps: u32) -> u8 {
    let rgb = (u32::from(colour & 0x3F) + steps) & 0x3F;
    (colour & 0xC0) | rgb as u8
}

impl GradientRenderer for ColourRenderer {
    fn format(&self) -> PixelFormat {
        PixelFormat::Argb2222
    }

    fn row_value(&self, row: i32, boundary: i32) -> u8 {
        let past = row.saturating_sub(boundary).max(0);
        rotate_hue(self.base, (past / HUE_BAND_ROWS) as u32)
    }
}
