//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and drawing
//! constants live here so they can be tuned in one place.

// Gradient

/// Boundary row the face starts at after load.
pub const INITIAL_BOUNDARY: i32 = 50;

/// Delay between animation ticks (ms). ~30 frames per second.
pub const TICK_INTERVAL_MS: u32 = 33;

/// Rows per hue step in the colour renderer.
pub const HUE_BAND_ROWS: i32 = 5;

/// Opaque blue in ARGB2222, the first band of the colour gradient.
pub const HUE_BASE: u8 = 0b1100_0011;

/// 1-bit patterns from empty to solid, indexed by distance past the boundary.
pub const DITHER_RAMP: [u8; 7] = [
    0b0000_0000,
    0b0001_0001,
    0b0010_0100,
    0b0101_0101,
    0b1101_1011,
    0b1110_1110,
    0b1111_1111,
];

// Label

/// Height of the label frame (px).
pub const LABEL_HEIGHT: u32 = 20;

/// Text shown before any button is pressed.
pub const LABEL_INITIAL: &str = "Press a button";

/// Text shown when the framebuffer could not be captured or released.
pub const LABEL_FAIL: &str = "FAIL";

// Display (SSD1306 128x64 OLED)

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Depth of the button-edge channel between button tasks and the UI task.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Simulator

/// Pixel scale of the desktop preview window.
pub const SIMULATOR_SCALE: u32 = 4;
