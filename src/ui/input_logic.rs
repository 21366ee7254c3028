use super::Button;

/// Which of the three buttons are currently held.
///
/// Bit layout: `0b100` = Up, `0b010` = Select, `0b001` = Down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const EMPTY: ButtonMask = ButtonMask(0);

    pub fn press(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn release(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn is_held(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Per-tick boundary step: Up contributes +1, Down -1, Select nothing.
    pub fn delta(self) -> i32 {
        i32::from(self.0 >> 2) - i32::from(self.0 & 0b001)
    }
}

/// Move the boundary by `delta` and keep it inside `0..height`.
pub fn step_boundary(boundary: i32, delta: i32, height: u32) -> i32 {
    let last_row = i32::try_from(height).unwrap_or(i32::MAX).saturating_sub(1).max(0);
    boundary.saturating_add(delta).clamp(0, last_row)
}
