//! Perpetual animation handle - a repeating timer the host runs for us.
//!
//! The face never sleeps or spawns anything itself. It only flips this
//! handle between states and returns an `AnimationCommand` for the host
//! loop whenever the schedule actually changes.

/// Instruction for the host's timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationCommand {
    /// Start delivering `Event::Tick` every `interval_ms`.
    Schedule { interval_ms: u32 },
    /// Stop delivering ticks.
    Unschedule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    interval_ms: u32,
    created: bool,
    scheduled: bool,
}

impl Animation {
    /// A handle that has not been created yet.
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            created: false,
            scheduled: false,
        }
    }

    /// Create the handle. Returns `false` if it already existed.
    pub fn create(&mut self) -> bool {
        if self.created {
            return false;
        }
        debug!("animation: created ({} ms)", self.interval_ms);
        self.created = true;
        true
    }

    /// Schedule the timer, creating the handle on first use.
    pub fn schedule(&mut self) -> Option<AnimationCommand> {
        self.create();
        if self.scheduled {
            return None;
        }
        self.scheduled = true;
        Some(AnimationCommand::Schedule {
            interval_ms: self.interval_ms,
        })
    }

    pub fn unschedule(&mut self) -> Option<AnimationCommand> {
        if !self.scheduled {
            return None;
        }
        self.scheduled = false;
        Some(AnimationCommand::Unschedule)
    }

    /// Unschedule and drop the handle. A later `schedule` recreates it.
    pub fn destroy(&mut self) -> Option<AnimationCommand> {
        let command = self.unschedule();
        if self.created {
            debug!("animation: destroyed");
            self.created = false;
        }
        command
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
