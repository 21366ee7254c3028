//! Drawable surfaces - raw row-major framebuffers the renderer writes into.
//!
//! Layouts:
//! ```text
//! Mono1Bit:  1 bit per pixel, LSB = leftmost pixel, 1 = lit.
//!            stride = ceil(width / 8) bytes.
//! Argb2222:  1 byte per pixel, bits 7-6 alpha, 5-4 red, 3-2 green, 1-0 blue.
//!            stride = width bytes.
//! ```

use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::*;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Mono1Bit,
    Argb2222,
}

impl PixelFormat {
    /// Bytes needed for one row of `width` pixels.
    pub const fn stride_for(self, width: usize) -> usize {
        match self {
            PixelFormat::Mono1Bit => (width + 7) / 8,
            PixelFormat::Argb2222 => width,
        }
    }
}

/// A captured framebuffer, valid until the surface is released.
pub struct Frame<'a> {
    data: &'a mut [u8],
    stride: usize,
    height: usize,
    format: PixelFormat,
}

impl<'a> Frame<'a> {
    /// Wrap raw pixel memory. Fails if `data` is shorter than `stride * height`.
    pub fn new(
        data: &'a mut [u8],
        stride: usize,
        height: usize,
        format: PixelFormat,
    ) -> Result<Self, Error> {
        match stride.checked_mul(height) {
            Some(len) if len <= data.len() => Ok(Self {
                data,
                stride,
                height,
                format,
            }),
            _ => Err(Error::SurfaceUnavailable),
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Write `value` into every byte of `row`.
    pub fn fill_row(&mut self, row: usize, value: u8) {
        let start = row * self.stride;
        self.data[start..start + self.stride].fill(value);
    }
}

/// Anything the face can paint into.
///
/// `capture` hands out the raw framebuffer; `release` must be called once
/// the frame is dropped, before the host can present it.
pub trait Surface {
    fn capture(&mut self) -> Result<Frame<'_>, Error>;
    fn release(&mut self) -> Result<(), Error>;
}

/// In-memory framebuffer backed by a fixed `N`-byte array.
///
/// Capturing twice without a release in between is refused, as is
/// releasing a buffer that was never captured.
#[derive(Clone)]
pub struct FrameBuffer<const N: usize> {
    data: [u8; N],
    size: Size,
    stride: usize,
    format: PixelFormat,
    captured: bool,
}

/// 1-bit framebuffer matching the SSD1306 128x64 panel.
pub type OledFrameBuffer = FrameBuffer<{ 128 / 8 * 64 }>;

impl<const N: usize> FrameBuffer<N> {
    pub fn new(size: Size, format: PixelFormat) -> Result<Self, Error> {
        let stride = format.stride_for(size.width as usize);
        match stride.checked_mul(size.height as usize) {
            Some(len) if len <= N => {}
            _ => return Err(Error::SurfaceUnavailable),
        }
        Ok(Self {
            data: [0; N],
            size,
            stride,
            format,
            captured: false,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.stride * self.size.height as usize]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Raw byte at (`x`, `y`): the packed byte for mono, the pixel for colour.
    fn byte_for(&self, x: u32, y: u32) -> u8 {
        let offset = y as usize * self.stride;
        match self.format {
            PixelFormat::Mono1Bit => self.data[offset + x as usize / 8],
            PixelFormat::Argb2222 => self.data[offset + x as usize],
        }
    }

    /// Whether the pixel at (`x`, `y`) is lit. Colour pixels count as lit
    /// when any RGB bit is set.
    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        let byte = self.byte_for(x, y);
        match self.format {
            PixelFormat::Mono1Bit => byte & (1 << (x % 8)) != 0,
            PixelFormat::Argb2222 => byte & 0x3F != 0,
        }
    }

    /// Every pixel as a 1-bit colour, row by row.
    pub fn binary_pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        self.points().map(move |p| {
            let lit = self.is_lit(p.x as u32, p.y as u32);
            Pixel(p, BinaryColor::from(lit))
        })
    }

    /// Every pixel as 24-bit colour. Mono pixels map to black/white.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = Pixel<Rgb888>> + '_ {
        self.points().map(move |p| {
            let (x, y) = (p.x as u32, p.y as u32);
            let colour = match self.format {
                PixelFormat::Mono1Bit if self.is_lit(x, y) => Rgb888::WHITE,
                PixelFormat::Mono1Bit => Rgb888::BLACK,
                PixelFormat::Argb2222 => argb2222_to_rgb888(self.byte_for(x, y)),
            };
            Pixel(p, colour)
        })
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let Size { width, height } = self.size;
        (0..height as i32).flat_map(move |y| (0..width as i32).map(move |x| Point::new(x, y)))
    }
}

impl<const N: usize> Surface for FrameBuffer<N> {
    fn capture(&mut self) -> Result<Frame<'_>, Error> {
        if self.captured {
            return Err(Error::SurfaceUnavailable);
        }
        self.captured = true;
        let len = self.stride * self.size.height as usize;
        Frame::new(
            &mut self.data[..len],
            self.stride,
            self.size.height as usize,
            self.format,
        )
    }

    fn release(&mut self) -> Result<(), Error> {
        if !self.captured {
            return Err(Error::SurfaceRelease);
        }
        self.captured = false;
        Ok(())
    }
}

/// Expand a 2-bit-per-channel colour to 8 bits per channel. Alpha is dropped.
pub fn argb2222_to_rgb888(byte: u8) -> Rgb888 {
    let expand = |bits: u8| (bits & 0b11) * 85;
    Rgb888::new(expand(byte >> 4), expand(byte >> 2), expand(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_stride_rounds_up() {
        assert_eq!(PixelFormat::Mono1Bit.stride_for(128), 16);
        assert_eq!(PixelFormat::Mono1Bit.stride_for(144), 18);
        assert_eq!(PixelFormat::Mono1Bit.stride_for(9), 2);
        assert_eq!(PixelFormat::Argb2222.stride_for(144), 144);
    }

    #[test]
    fn framebuffer_rejects_undersized_backing_array() {
        let fb = FrameBuffer::<16>::new(Size::new(16, 16), PixelFormat::Mono1Bit);
        assert_eq!(fb.err(), Some(Error::SurfaceUnavailable));
    }

    #[test]
    fn framebuffer_rejects_sizes_that_overflow() {
        let fb = FrameBuffer::<16>::new(Size::new(u32::MAX, u32::MAX), PixelFormat::Argb2222);
        assert_eq!(fb.err(), Some(Error::SurfaceUnavailable));
    }

    #[test]
    fn capture_is_exclusive_until_release() {
        let mut fb = OledFrameBuffer::new(Size::new(128, 64), PixelFormat::Mono1Bit).unwrap();
        assert!(fb.capture().is_ok());
        assert!(fb.is_captured());
        assert_eq!(fb.capture().err(), Some(Error::SurfaceUnavailable));
        assert_eq!(fb.release(), Ok(()));
        assert_eq!(fb.release(), Err(Error::SurfaceRelease));
    }

    #[test]
    fn fill_row_touches_only_that_row() {
        let mut fb = OledFrameBuffer::new(Size::new(128, 64), PixelFormat::Mono1Bit).unwrap();
        {
            let mut frame = fb.capture().unwrap();
            frame.fill_row(3, 0xFF);
        }
        fb.release().unwrap();
        assert!(fb.row(3).iter().all(|&b| b == 0xFF));
        assert!(fb.row(2).iter().all(|&b| b == 0));
        assert!(fb.row(4).iter().all(|&b| b == 0));
        assert!(fb.is_lit(0, 3) && fb.is_lit(127, 3));
    }

    #[test]
    fn mono_bits_are_lsb_first() {
        let mut fb = FrameBuffer::<2>::new(Size::new(8, 2), PixelFormat::Mono1Bit).unwrap();
        {
            let mut frame = fb.capture().unwrap();
            frame.fill_row(0, 0b0000_0001);
        }
        assert!(fb.is_lit(0, 0));
        assert!(!fb.is_lit(1, 0));
        let lit: usize = fb.binary_pixels().filter(|p| p.1 == BinaryColor::On).count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn argb2222_expands_channels() {
        assert_eq!(argb2222_to_rgb888(0b1100_0011), Rgb888::new(0, 0, 255));
        assert_eq!(argb2222_to_rgb888(0b1111_1111), Rgb888::new(255, 255, 255));
        assert_eq!(argb2222_to_rgb888(0b0001_1000), Rgb888::new(85, 170, 0));
    }
}
