//! The watchface state machine.
//!
//! `Face` owns everything that used to be ambient UI state: the boundary
//! row, the held-button mask, the label and the animation handle. The host
//! loop feeds it `Event`s and carries out the `Effects` it returns.


use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::animation::{Animation, AnimationCommand};
use crate::config::{INITIAL_BOUNDARY, LABEL_HEIGHT, TICK_INTERVAL_MS};
use crate::error::Error;
use crate::profile::{Profile, Scheduling, Teardown};
use crate::render::{GradientRenderer, Renderer};
use crate::surface::Surface;
use crate::ui::input_logic::{step_boundary, ButtonMask};
use crate::ui::{Button, Event, Label};

/// What the host loop should do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// Deliver `Event::Paint` soon.
    pub redraw: bool,
    /// Change to the animation timer, if any.
    pub animation: Option<AnimationCommand>,
}

impl Effects {
    pub const NONE: Effects = Effects {
        redraw: false,
        animation: None,
    };

    pub const fn redraw() -> Self {
        Effects {
            redraw: true,
            animation: None,
        }
    }

    pub fn with_animation(mut self, command: Option<AnimationCommand>) -> Self {
        if command.is_some() {
            self.animation = command;
        }
        self
    }

    /// Combine two effects; the later animation command wins.
    pub fn and(self, later: Effects) -> Self {
        Effects {
            redraw: self.redraw || later.redraw,
            animation: later.animation.or(self.animation),
        }
    }
}

pub struct Face {
    profile: Profile,
    bounds: Size,
    /// Row count of the last surface painted; the boundary stays below it.
    rows: u32,
    boundary: i32,
    buttons: ButtonMask,
    label: Label,
    animation: Animation,
    renderer: Renderer,
}

impl Face {
    /// Build a face for a drawable area of `bounds`.
    ///
    /// The continuous profile creates its animation here; on-demand
    /// creates it on the first held button.
    pub fn new(profile: Profile, bounds: Size) -> Self {
        let mut animation = Animation::new(TICK_INTERVAL_MS);
        if profile.scheduling == Scheduling::Continuous {
            animation.create();
        }
        Self {
            profile,
            bounds,
            rows: bounds.height,
            boundary: step_boundary(INITIAL_BOUNDARY, 0, bounds.height),
            buttons: ButtonMask::EMPTY,
            label: Label::new(),
            animation,
            renderer: Renderer::for_profile(&profile),
        }
    }

    /// First effects after load: an initial paint, plus the perpetual
    /// timer for the continuous profile.
    pub fn start(&mut self) -> Effects {
        let command = match self.profile.scheduling {
            Scheduling::Continuous => self.animation.schedule(),
            Scheduling::OnDemand => None,
        };
        Effects::redraw().with_animation(command)
    }

    /// Release the animation according to the profile's teardown rule.
    pub fn stop(&mut self) -> Effects {
        let command = match self.profile.teardown {
            Teardown::Destroy => self.animation.destroy(),
            Teardown::UnscheduleOnly => self.animation.unschedule(),
        };
        Effects::NONE.with_animation(command)
    }

    /// Process one event. Paint failures are absorbed here: the label
    /// shows "FAIL" and the frame is skipped.
    pub fn handle<S: Surface + ?Sized>(&mut self, event: Event, surface: &mut S) -> Effects {
        match event {
            Event::ButtonDown(button) => self.button_down(button),
            Event::ButtonUp(button) => self.button_up(button),
            Event::Tick => self.tick(),
            Event::Paint => {
                if let Err(e) = self.paint(surface) {
                    warn!("face: paint failed: {}", e);
                }
                Effects::NONE
            }
        }
    }

    pub fn button_down(&mut self, button: Button) -> Effects {
        self.buttons.press(button);
        self.label.set(button.name());
        debug!("face: {} down, mask={=u8:b}", button, self.buttons.bits());

        match self.profile.scheduling {
            Scheduling::OnDemand => Effects::redraw().with_animation(self.animation.schedule()),
            Scheduling::Continuous => Effects::NONE,
        }
    }

    pub fn button_up(&mut self, button: Button) -> Effects {
        self.buttons.release(button);
        debug!("face: {} up, mask={=u8:b}", button, self.buttons.bits());

        match self.profile.scheduling {
            Scheduling::OnDemand => {
                let command = if self.buttons.is_empty() {
                    self.animation.unschedule()
                } else {
                    None
                };
                Effects::redraw().with_animation(command)
            }
            Scheduling::Continuous => Effects::NONE,
        }
    }

    /// Advance the boundary by the held buttons' delta.
    pub fn tick(&mut self) -> Effects {
        if self.profile.scheduling == Scheduling::OnDemand && self.buttons.is_empty() {
            return Effects::NONE.with_animation(self.animation.unschedule());
        }

        self.boundary = step_boundary(self.boundary, self.buttons.delta(), self.rows);
        Effects::redraw()
    }

    /// Draw the gradient for the current boundary.
    ///
    /// The boundary is first pulled back inside the captured frame's rows.
    /// If the surface cannot be captured nothing is written. Any surface
    /// failure sets the label to "FAIL" and is returned.
    pub fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), Error> {
        let painted = match surface.capture() {
            Ok(mut frame) => {
                self.rows = u32::try_from(frame.height()).unwrap_or(u32::MAX);
                self.boundary = step_boundary(self.boundary, 0, self.rows);
                self.renderer.paint(&mut frame, self.boundary)
            }
            Err(e) => {
                self.label.set_fail();
                return Err(e);
            }
        };

        let released = surface.release();
        if painted.is_err() || released.is_err() {
            self.label.set_fail();
        }
        painted.and(released)
    }

    pub fn boundary(&self) -> i32 {
        self.boundary
    }

    pub fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Full-width strip, `LABEL_HEIGHT` tall, centred vertically.
    pub fn label_frame(&self) -> Rectangle {
        let y = self.bounds.height.saturating_sub(LABEL_HEIGHT) / 2;
        Rectangle::new(
            Point::new(0, y as i32),
            Size::new(self.bounds.width, LABEL_HEIGHT.min(self.bounds.height)),
        )
    }
}
