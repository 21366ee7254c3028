//! User interface vocabulary shared by the firmware, the simulator and tests.
//!
//! ## Components
//!
//! - **Buttons**: 3 tactile switches (UP, SELECT, DOWN), each reported on
//!   both edges so the face can track which ones are held.
//! - **Events**: everything the host loop delivers to the face.
//! - **Label**: the short status text drawn over the gradient.

pub mod input_logic;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::config::{LABEL_FAIL, LABEL_INITIAL};

/// Physical buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Select,
    Down,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Up, Button::Select, Button::Down];

    /// Bit this button occupies in the held-button mask.
    pub const fn bit(self) -> u8 {
        match self {
            Button::Up => 0b100,
            Button::Select => 0b010,
            Button::Down => 0b001,
        }
    }

    /// Text shown in the label when the button goes down.
    pub const fn name(self) -> &'static str {
        match self {
            Button::Up => "Up",
            Button::Select => "Select",
            Button::Down => "Down",
        }
    }
}

/// Everything the host loop can hand to the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced press.
    ButtonDown(Button),
    /// Debounced release.
    ButtonUp(Button),
    /// Animation timer fired.
    Tick,
    /// The host wants the face drawn now.
    Paint,
}

/// Label capacity in bytes; every text the face shows fits.
pub const LABEL_CAPACITY: usize = 16;

/// Status text drawn over the gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    text: String<LABEL_CAPACITY>,
}

impl Label {
    pub fn new() -> Self {
        let mut label = Self { text: String::new() };
        label.set(LABEL_INITIAL);
        label
    }

    /// Replace the text, truncating at a character boundary if too long.
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        for c in text.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
    }

    pub fn set_fail(&mut self) {
        self.set(LABEL_FAIL);
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_fail(&self) -> bool {
        self.text.as_str() == LABEL_FAIL
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw `label` centred in `frame`, on a solid background.
pub fn draw_label<D, C>(
    target: &mut D,
    label: &Label,
    frame: Rectangle,
    text_color: C,
    background: C,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    frame
        .into_styled(PrimitiveStyle::with_fill(background))
        .draw(target)?;

    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(
        label.as_str(),
        frame.center(),
        MonoTextStyle::new(&FONT_6X10, text_color),
        style,
    )
    .draw(target)?;
    Ok(())
}
