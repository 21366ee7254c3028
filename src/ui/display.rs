//! SSD1306 OLED display wrapper.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use gradface::surface::OledFrameBuffer;
use gradface::ui::{draw_label, Label};
use gradface::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Copy the painted framebuffer to the panel, draw the label over it and
/// push the result out over I²C.
pub fn present<I2C>(
    display: &mut Display<I2C>,
    frame: &OledFrameBuffer,
    label: &Label,
    label_frame: embedded_graphics::primitives::Rectangle,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display
        .draw_iter(frame.binary_pixels())
        .map_err(|_| Error::Display)?;
    draw_label(display, label, label_frame, BinaryColor::On, BinaryColor::Off)
        .map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}
