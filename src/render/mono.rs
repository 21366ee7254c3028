//! 1-bit renderer.
//!
//! Rows are written as whole bytes, so every pixel in a row shares the same
//! 8-pixel pattern:
//! ```text
//! Threshold:  r >  boundary -> 0x00
//!             r <= boundary -> 0xFF
//! Dither:     DITHER_RAMP[clamp(r - boundary, 0, 6)]
//! ```

use super::GradientRenderer;
use crate::config::DITHER_RAMP;
use crate::profile::FillStyle;
use crate::surface::PixelFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonoRenderer {
    fill: FillStyle,
}

impl MonoRenderer {
    pub const fn new(fill: FillStyle) -> Self {
        Self { fill }
    }
}

impl GradientRenderer for MonoRenderer {
    fn format(&self) -> PixelFormat {
        PixelFormat::Mono1Bit
    }

    fn row_value(&self, row: i32, boundary: i32) -> u8 {
        match self.fill {
            FillStyle::Threshold => {
                if row > boundary {
                    0x00
                } else {
                    0xFF
                }
            }
            FillStyle::Dither => {
                let last = DITHER_RAMP.len() as i32 - 1;
                let index = row.saturating_sub(boundary).clamp(0, last);
                DITHER_RAMP[index as usize]
            }
        }
    }
}
