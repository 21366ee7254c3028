//! gradface - a button-driven fill-level gradient watchface.
//!
//! This crate holds the pure logic that can be tested on the host (no
//! embedded hardware required) and is shared by the firmware and the
//! desktop simulator:
//!
//! - `ui`        - buttons, events, the held-button mask and the label
//! - `face`      - the state machine that turns events into boundary moves
//! - `render`    - monochrome and colour gradient renderers
//! - `surface`   - raw framebuffers and the capture/release contract
//! - `animation` - the perpetual timer handle
//! - `window`    - load/unload lifecycle
//!
//! Usage: `cargo test` on the host.
//!
//! Note: The embedded binary (`src/main.rs`, feature `embedded`) is
//! `#![no_std]` + `#![no_main]` and links against this library.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod animation;
pub mod config;
pub mod error;
pub mod face;
pub mod profile;
pub mod render;
pub mod surface;
pub mod ui;
pub mod window;

pub use error::Error;
pub use face::{Effects, Face};
pub use profile::Profile;
pub use window::Window;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - input logic and label
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::ui::input_logic::{step_boundary, ButtonMask};
    use super::ui::{Button, Label};

    // ════════════════════════════════════════════════════════════════════════
    // Button Mask Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn button_bits_are_distinct() {
        assert_eq!(Button::Up.bit(), 0b100);
        assert_eq!(Button::Select.bit(), 0b010);
        assert_eq!(Button::Down.bit(), 0b001);
        let all = Button::ALL.iter().fold(0, |acc, b| acc | b.bit());
        assert_eq!(all, 0b111);
    }

    #[test]
    fn mask_press_and_release_touch_one_bit() {
        let mut mask = ButtonMask::EMPTY;
        mask.press(Button::Select);
        assert_eq!(mask.bits(), 0b010);
        mask.press(Button::Up);
        assert_eq!(mask.bits(), 0b110);
        mask.release(Button::Select);
        assert_eq!(mask.bits(), 0b100);
        mask.release(Button::Up);
        assert!(mask.is_empty());
    }

    #[test]
    fn mask_repeated_press_is_idempotent() {
        let mut mask = ButtonMask::EMPTY;
        mask.press(Button::Down);
        mask.press(Button::Down);
        assert_eq!(mask.bits(), 0b001);
    }

    #[test]
    fn mask_delta_for_every_combination() {
        let expected = [
            (0b000, 0),
            (0b001, -1),
            (0b010, 0),
            (0b011, -1),
            (0b100, 1),
            (0b101, 0),
            (0b110, 1),
            (0b111, 0),
        ];
        for (bits, delta) in expected {
            let mut mask = ButtonMask::EMPTY;
            for button in Button::ALL {
                if bits & button.bit() != 0 {
                    mask.press(button);
                }
            }
            assert_eq!(mask.delta(), delta, "mask {bits:03b}");
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Boundary Clamp Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn step_boundary_clamps_to_rows() {
        assert_eq!(step_boundary(50, 1, 100), 51);
        assert_eq!(step_boundary(99, 1, 100), 99);
        assert_eq!(step_boundary(0, -1, 100), 0);
        assert_eq!(step_boundary(i32::MAX, 1, 100), 99);
        assert_eq!(step_boundary(50, 0, 0), 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Label Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn label_starts_with_prompt() {
        assert_eq!(Label::new().as_str(), "Press a button");
    }

    #[test]
    fn label_truncates_long_text() {
        let mut label = Label::new();
        label.set("a very long status message");
        assert_eq!(label.as_str().len(), 16);
        assert_eq!(label.as_str(), "a very long stat");
    }

    #[test]
    fn label_fail_marker() {
        let mut label = Label::new();
        assert!(!label.is_fail());
        label.set_fail();
        assert_eq!(label.as_str(), "FAIL");
        assert!(label.is_fail());
    }
}
